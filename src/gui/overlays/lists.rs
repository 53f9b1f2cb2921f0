//! Overlays without inner views: education, experience, skills, references

use eframe::egui;

use crate::content::TimelineEntry;
use crate::gui::constants::*;
use crate::gui::{widgets, View};
use crate::shell::ShellEvent;

pub fn timeline(ui: &mut egui::Ui, view: &mut View<'_>, entries: &[TimelineEntry]) {
    let lang = view.lang;

    for entry in entries {
        widgets::card_frame(ui).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(entry.title.text(lang)).strong().size(17.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(entry.period.text(lang)).color(ACCENT));
                });
            });

            let mut place = entry.organization.clone();
            if let Some(location) = &entry.location {
                place.push_str(" · ");
                place.push_str(location.text(lang));
            }
            ui.label(egui::RichText::new(place).weak());

            if let Some(details) = &entry.details {
                ui.add_space(ITEM_SPACING / 2.0);
                widgets::bullets(ui, details.items(lang));
            }
        });
        ui.add_space(ITEM_SPACING);
    }
}

pub fn skills(ui: &mut egui::Ui, view: &mut View<'_>) {
    let content = view.content;
    let lang = view.lang;

    for group in &content.skills {
        widgets::card_frame(ui).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(group.name.text(lang)).strong().size(17.0));
            ui.add_space(ITEM_SPACING / 2.0);
            egui::Grid::new(("skills_grid", group.name.text(lang)))
                .num_columns(2)
                .spacing([SECTION_SPACING, ITEM_SPACING / 2.0])
                .show(ui, |ui| {
                    for skill in &group.skills {
                        ui.label(skill.name.text(lang));
                        ui.add(
                            egui::ProgressBar::new(skill.fraction())
                                .text(format!("{} %", skill.level.min(100)))
                                .desired_width(CARD_WIDTH),
                        );
                        ui.end_row();
                    }
                });
        });
        ui.add_space(ITEM_SPACING);
    }
}

pub fn references(ui: &mut egui::Ui, view: &mut View<'_>) {
    let content = view.content;
    let lang = view.lang;

    for reference in &content.references {
        widgets::card_frame(ui).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(format!("“{}”", reference.quote.text(lang))).italics());
            ui.add_space(ITEM_SPACING / 2.0);
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&reference.name).strong());
                ui.label(egui::RichText::new(reference.role.text(lang)).weak());
                if let Some(email) = &reference.email {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.link(view.t("references.contact")).clicked() {
                            view.emit(ShellEvent::OpenExternal(format!("mailto:{email}")));
                        }
                    });
                }
            });
        });
        ui.add_space(ITEM_SPACING);
    }
}
