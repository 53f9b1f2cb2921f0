use eframe::egui;

use crate::gui::constants::*;
use crate::gui::{widgets, View};
use crate::section::SectionId;
use crate::shell::ShellEvent;

/// Featured skill groups on the main canvas; clicking the heading opens the
/// skills overlay
pub fn ui(ui: &mut egui::Ui, view: &mut View<'_>) {
    let content = view.content;
    let lang = view.lang;

    widgets::card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());
        let heading = ui.add(
            egui::Label::new(egui::RichText::new(view.t("preview.skills")).heading().strong())
                .sense(egui::Sense::click()),
        );
        if heading.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
            view.emit(ShellEvent::OpenSection(SectionId::Skills));
        }
        ui.add_space(ITEM_SPACING);

        ui.columns(2, |columns| {
            for (idx, group) in content.skills.iter().filter(|g| g.featured).take(2).enumerate() {
                let ui = &mut columns[idx];
                ui.label(egui::RichText::new(group.name.text(lang)).strong());
                for skill in &group.skills {
                    ui.add(
                        egui::ProgressBar::new(skill.fraction())
                            .text(skill.name.text(lang))
                            .desired_width(ui.available_width()),
                    );
                }
            }
        });
    });
}
