use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::catalog::{CardCatalog, RefreshCompendiumRequest};
use crate::character::card::Domain;
use crate::character::loadout::compute_limits;
use crate::character::CharacterData;
use crate::constants::{LOADOUT_SOFT_LIMIT, STARTING_LOADOUT_LIMIT};
use crate::sheet::AddCardRequest;
use crate::theme;

/// Filter state for the compendium browser
#[derive(Resource, Default)]
pub struct CardBrowserState {
    /// None shows every domain
    pub domain_filter: Option<Domain>,
    pub search: String,
}

/// Side panel listing compendium cards that can join the loadout
pub fn card_browser_ui(
    mut contexts: EguiContexts,
    catalog: Res<CardCatalog>,
    character: Res<CharacterData>,
    mut browser: ResMut<CardBrowserState>,
    mut add_events: MessageWriter<AddCardRequest>,
    mut refresh_events: MessageWriter<RefreshCompendiumRequest>,
) -> Result {
    egui::SidePanel::left("card_browser")
        .resizable(true)
        .default_width(280.0)
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .fill(theme::ui::BROWSER_BACKGROUND)
                .inner_margin(egui::Margin::same(10)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("Compendium").strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .small_button("⟳")
                        .on_hover_text("Re-read the user compendium file")
                        .clicked()
                    {
                        refresh_events.write(RefreshCompendiumRequest);
                    }
                });
            });
            ui.add_space(4.0);

            // Domain filter
            let selected_text = browser
                .domain_filter
                .map(|d| d.display_name())
                .unwrap_or("All domains");
            egui::ComboBox::from_id_salt("domain_filter")
                .selected_text(selected_text)
                .width(140.0)
                .show_ui(ui, |ui| {
                    if ui
                        .selectable_label(browser.domain_filter.is_none(), "All domains")
                        .clicked()
                    {
                        browser.domain_filter = None;
                    }
                    for domain in Domain::all() {
                        let is_selected = browser.domain_filter == Some(*domain);
                        if ui
                            .selectable_label(is_selected, domain.display_name())
                            .clicked()
                        {
                            browser.domain_filter = Some(*domain);
                        }
                    }
                });

            ui.add(
                egui::TextEdit::singleline(&mut browser.search)
                    .hint_text("Search cards")
                    .desired_width(f32::INFINITY),
            );

            let limits = compute_limits(
                character.creation_complete,
                character.loadout.active.len(),
                STARTING_LOADOUT_LIMIT,
                LOADOUT_SOFT_LIMIT,
            );
            if limits.disable_add {
                ui.colored_label(
                    theme::ui::HINT_TEXT,
                    format!(
                        "Starting loadout is full ({} cards). Finish creation to add more.",
                        limits.max_allowed
                    ),
                );
            }

            ui.add_space(6.0);
            egui::ScrollArea::vertical().show(ui, |ui| {
                let search = browser.search.to_lowercase();
                for card in catalog.cards.iter() {
                    if let Some(filter) = browser.domain_filter
                        && card.domain != filter
                    {
                        continue;
                    }
                    if !search.is_empty() && !card.name.to_lowercase().contains(&search) {
                        continue;
                    }

                    let already_held = character.loadout.zone_of(&card.name).is_some();

                    ui.horizontal(|ui| {
                        let domain_color = theme::domain::color_for(card.domain.display_name());
                        ui.colored_label(domain_color, "●")
                            .on_hover_text(card.domain.display_name());
                        ui.label(&card.name).on_hover_text(format!(
                            "Level {} {} · Recall {}",
                            card.level,
                            card.card_type.display_name(),
                            card.recall_cost
                        ));

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if already_held {
                                    ui.label(
                                        egui::RichText::new("held")
                                            .color(theme::ui::HINT_TEXT)
                                            .small(),
                                    );
                                } else if ui
                                    .add_enabled(
                                        !limits.disable_add,
                                        egui::Button::new("Add").small(),
                                    )
                                    .clicked()
                                {
                                    add_events.write(AddCardRequest {
                                        name: card.name.clone(),
                                    });
                                }
                            },
                        );
                    });
                }
            });
        });
    Ok(())
}
