use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::character::CharacterData;
use crate::sheet::CommitEdit;
use crate::theme;

/// Commit the edit once the widget interaction ends (focus leaves a text
/// field, a drag stops). Per-keystroke changes stay uncommitted so undo
/// steps over whole edits, not characters.
fn commit_on_release(
    response: &egui::Response,
    commits: &mut MessageWriter<CommitEdit>,
    label: &str,
) {
    if response.lost_focus() || response.drag_stopped() {
        commits.write(CommitEdit::new(label));
    }
}

fn text_row(
    ui: &mut egui::Ui,
    commits: &mut MessageWriter<CommitEdit>,
    label: &str,
    value: &mut String,
    commit_label: &str,
) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).color(theme::ui::LABEL_TEXT));
        let response = ui.add(egui::TextEdit::singleline(value).desired_width(220.0));
        commit_on_release(&response, commits, commit_label);
    });
}

/// The central character sheet form
pub fn sheet_panel_ui(
    mut contexts: EguiContexts,
    mut character: ResMut<CharacterData>,
    mut commits: MessageWriter<CommitEdit>,
) -> Result {
    egui::CentralPanel::default().show(contexts.ctx_mut()?, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Character");
            ui.add_space(8.0);

            ui.group(|ui| {
                ui.label(egui::RichText::new("Identity").strong());
                ui.add_space(4.0);

                text_row(ui, &mut commits, "Name:", &mut character.name, "Edit name");
                text_row(
                    ui,
                    &mut commits,
                    "Pronouns:",
                    &mut character.pronouns,
                    "Edit pronouns",
                );
                text_row(
                    ui,
                    &mut commits,
                    "Ancestry:",
                    &mut character.ancestry,
                    "Edit ancestry",
                );
                text_row(
                    ui,
                    &mut commits,
                    "Community:",
                    &mut character.community,
                    "Edit community",
                );
                text_row(
                    ui,
                    &mut commits,
                    "Class:",
                    &mut character.class_name,
                    "Edit class",
                );
                text_row(
                    ui,
                    &mut commits,
                    "Subclass:",
                    &mut character.subclass,
                    "Edit subclass",
                );

                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Level:").color(theme::ui::LABEL_TEXT));
                    let response = ui.add(
                        egui::DragValue::new(&mut character.level)
                            .range(1..=10)
                            .speed(0.1),
                    );
                    commit_on_release(&response, &mut commits, "Change level");
                });

                ui.add_space(4.0);
                let response =
                    ui.checkbox(&mut character.creation_complete, "Character creation complete");
                if response.changed() {
                    let label = if character.creation_complete {
                        "Finish character creation"
                    } else {
                        "Reopen character creation"
                    };
                    commits.write(CommitEdit::new(label));
                }
                ui.label(
                    egui::RichText::new(
                        "While creation is in progress the loadout is capped at its starting size.",
                    )
                    .color(theme::ui::HINT_TEXT)
                    .small(),
                );
            });

            ui.add_space(8.0);

            ui.group(|ui| {
                ui.label(egui::RichText::new("Traits").strong());
                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    for (name, value) in character.traits.fields_mut() {
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new(name).color(theme::ui::LABEL_TEXT));
                            let response =
                                ui.add(egui::DragValue::new(value).range(-3..=6).speed(0.1));
                            commit_on_release(&response, &mut commits, "Adjust traits");
                        });
                        ui.add_space(8.0);
                    }
                });
            });

            ui.add_space(8.0);

            ui.group(|ui| {
                ui.label(egui::RichText::new("Vitals").strong());
                ui.add_space(4.0);

                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Hit Points:").color(theme::ui::LABEL_TEXT));
                    let marked = ui.add(
                        egui::DragValue::new(&mut character.vitals.hit_points_marked)
                            .range(0..=12)
                            .speed(0.1),
                    );
                    commit_on_release(&marked, &mut commits, "Mark hit points");
                    ui.label("of");
                    let slots = ui.add(
                        egui::DragValue::new(&mut character.vitals.hit_point_slots)
                            .range(1..=12)
                            .speed(0.1),
                    );
                    commit_on_release(&slots, &mut commits, "Change hit point slots");
                });

                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Stress:").color(theme::ui::LABEL_TEXT));
                    let marked = ui.add(
                        egui::DragValue::new(&mut character.vitals.stress_marked)
                            .range(0..=12)
                            .speed(0.1),
                    );
                    commit_on_release(&marked, &mut commits, "Mark stress");
                    ui.label("of");
                    let slots = ui.add(
                        egui::DragValue::new(&mut character.vitals.stress_slots)
                            .range(1..=12)
                            .speed(0.1),
                    );
                    commit_on_release(&slots, &mut commits, "Change stress slots");
                });

                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Hope:").color(theme::ui::LABEL_TEXT));
                    let response = ui.add(
                        egui::DragValue::new(&mut character.vitals.hope)
                            .range(0..=6)
                            .speed(0.1),
                    );
                    commit_on_release(&response, &mut commits, "Adjust hope");

                    ui.add_space(12.0);
                    ui.label(egui::RichText::new("Evasion:").color(theme::ui::LABEL_TEXT));
                    let response = ui.add(
                        egui::DragValue::new(&mut character.vitals.evasion)
                            .range(0..=30)
                            .speed(0.1),
                    );
                    commit_on_release(&response, &mut commits, "Adjust evasion");

                    ui.add_space(12.0);
                    ui.label(egui::RichText::new("Armor:").color(theme::ui::LABEL_TEXT));
                    let response = ui.add(
                        egui::DragValue::new(&mut character.vitals.armor_score)
                            .range(0..=12)
                            .speed(0.1),
                    );
                    commit_on_release(&response, &mut commits, "Adjust armor");
                });
            });
        });
    });
    Ok(())
}
