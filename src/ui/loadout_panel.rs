use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::character::card::DomainCard;
use crate::character::loadout::{compute_limits, CardZone};
use crate::character::CharacterData;
use crate::constants::{LOADOUT_SOFT_LIMIT, MAX_VAULT_CARDS, STARTING_LOADOUT_LIMIT};
use crate::sheet::{
    CancelSwapRequest, MoveCardRequest, RemoveCardRequest, SwapState, SwapTargetRequest,
};
use crate::theme;

/// One row in a card list. Shows the card and either its move/remove
/// controls or, while a swap from the other zone is pending, a swap target
/// button.
#[allow(clippy::too_many_arguments)]
fn card_row(
    ui: &mut egui::Ui,
    card: &DomainCard,
    zone: CardZone,
    swap_state: &SwapState,
    move_events: &mut MessageWriter<MoveCardRequest>,
    swap_events: &mut MessageWriter<SwapTargetRequest>,
    remove_events: &mut MessageWriter<RemoveCardRequest>,
) {
    ui.horizontal(|ui| {
        let domain_color = theme::domain::color_for(card.domain.display_name());
        ui.colored_label(domain_color, "●")
            .on_hover_text(card.domain.display_name());

        let is_pending_card = swap_state
            .pending
            .as_ref()
            .is_some_and(|p| p.card_name == card.name && p.source == zone);
        let name_text = if is_pending_card {
            egui::RichText::new(&card.name)
                .color(theme::ui::SWAP_PENDING)
                .strong()
        } else {
            egui::RichText::new(&card.name)
        };
        ui.label(name_text).on_hover_text(format!(
            "{} · Level {} · {} · Recall {}",
            card.domain.display_name(),
            card.level,
            card.card_type.display_name(),
            card.recall_cost
        ));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // This zone is a swap destination while a card from the other
            // zone is pending
            let is_swap_destination = swap_state
                .pending
                .as_ref()
                .is_some_and(|p| p.source == zone.other());

            if is_swap_destination {
                if ui
                    .button("Swap")
                    .on_hover_text("Exchange places with the selected card")
                    .clicked()
                {
                    swap_events.write(SwapTargetRequest {
                        target_name: card.name.clone(),
                    });
                }
                return;
            }

            if ui
                .small_button("✕")
                .on_hover_text("Return to the compendium")
                .clicked()
            {
                remove_events.write(RemoveCardRequest {
                    name: card.name.clone(),
                    zone,
                });
            }

            let move_label = match zone {
                CardZone::Active => "→ Vault",
                CardZone::Vault => "→ Loadout",
            };
            if ui.small_button(move_label).clicked() {
                move_events.write(MoveCardRequest {
                    name: card.name.clone(),
                    from: zone,
                });
            }
        });
    });
}

/// Side panel showing the active loadout and the vault
#[allow(clippy::too_many_arguments)]
pub fn loadout_panel_ui(
    mut contexts: EguiContexts,
    character: Res<CharacterData>,
    swap_state: Res<SwapState>,
    mut move_events: MessageWriter<MoveCardRequest>,
    mut swap_events: MessageWriter<SwapTargetRequest>,
    mut cancel_events: MessageWriter<CancelSwapRequest>,
    mut remove_events: MessageWriter<RemoveCardRequest>,
) -> Result {
    egui::SidePanel::right("loadout_panel")
        .resizable(true)
        .default_width(300.0)
        .frame(
            egui::Frame::side_top_panel(&contexts.ctx_mut()?.style())
                .fill(theme::ui::PANEL_BACKGROUND)
                .inner_margin(egui::Margin::same(10)),
        )
        .show(contexts.ctx_mut()?, |ui| {
            let limits = compute_limits(
                character.creation_complete,
                character.loadout.active.len(),
                STARTING_LOADOUT_LIMIT,
                LOADOUT_SOFT_LIMIT,
            );

            ui.label(
                egui::RichText::new(format!(
                    "Loadout {}/{}",
                    character.loadout.active.len(),
                    limits.max_allowed
                ))
                .strong(),
            );

            if limits.over_hard_limit {
                ui.colored_label(
                    theme::ui::WARNING_TEXT,
                    "Over the creation limit. Vault some cards before finishing creation.",
                );
            }

            if let Some(ref pending) = swap_state.pending {
                ui.add_space(4.0);
                ui.group(|ui| {
                    ui.colored_label(
                        theme::ui::SWAP_PENDING,
                        format!(
                            "{} is full. Pick a card to swap with {}.",
                            pending.source.other().display_name(),
                            pending.card_name
                        ),
                    );
                    if ui.button("Cancel swap").clicked() {
                        cancel_events.write(CancelSwapRequest);
                    }
                });
            }

            ui.add_space(6.0);
            egui::ScrollArea::vertical().show(ui, |ui| {
                if character.loadout.active.is_empty() {
                    ui.label(
                        egui::RichText::new("No cards in the loadout")
                            .color(theme::ui::HINT_TEXT)
                            .italics(),
                    );
                }
                for card in &character.loadout.active {
                    card_row(
                        ui,
                        card,
                        CardZone::Active,
                        &swap_state,
                        &mut move_events,
                        &mut swap_events,
                        &mut remove_events,
                    );
                }

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(4.0);

                ui.label(
                    egui::RichText::new(format!(
                        "Vault {}/{}",
                        character.loadout.vault.len(),
                        MAX_VAULT_CARDS
                    ))
                    .strong(),
                );
                if character.loadout.vault.is_empty() {
                    ui.label(
                        egui::RichText::new("No cards in the vault")
                            .color(theme::ui::HINT_TEXT)
                            .italics(),
                    );
                }
                for card in &character.loadout.vault {
                    card_row(
                        ui,
                        card,
                        CardZone::Vault,
                        &swap_state,
                        &mut move_events,
                        &mut swap_events,
                        &mut remove_events,
                    );
                }

                ui.add_space(8.0);
                ui.label(
                    egui::RichText::new(format!(
                        "Recall cost of loadout: {} Hope",
                        character.loadout.recall_cost_total()
                    ))
                    .color(theme::ui::HINT_TEXT)
                    .small(),
                );
            });
        });
    Ok(())
}
