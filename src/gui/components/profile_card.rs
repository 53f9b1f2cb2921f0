use eframe::egui;

use crate::gui::constants::*;
use crate::gui::{widgets, View};
use crate::media::{resolve_asset, AssetLoad};

/// Profile card: the photo is loaded once and kept for the window's lifetime
#[derive(Default)]
pub struct ProfileCardState {
    photo: Option<AssetLoad>,
}

pub fn ui(ui: &mut egui::Ui, view: &mut View<'_>, state: &mut ProfileCardState) {
    let content = view.content;
    let profile = &content.profile;
    let lang = view.lang;

    widgets::card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            if let Some(photo) = &profile.photo {
                let load = state
                    .photo
                    .get_or_insert_with(|| AssetLoad::spawn(resolve_asset(view.asset_root, photo)));
                let photo_state = load.poll(ui.ctx());
                ui.allocate_ui(egui::vec2(PHOTO_SIZE, PHOTO_SIZE), |ui| {
                    widgets::asset(ui, view, photo_state, egui::Vec2::splat(PHOTO_SIZE), 0.0, false);
                });
                ui.add_space(SECTION_SPACING);
            }

            ui.vertical(|ui| {
                ui.heading(profile.name.as_str());
                ui.label(egui::RichText::new(profile.headline.text(lang)).strong());
                ui.label(egui::RichText::new(format!("📍 {}", profile.location.text(lang))).weak());
                ui.add_space(ITEM_SPACING);
                ui.label(profile.summary.text(lang));
                if let Some(highlights) = &profile.highlights {
                    ui.add_space(ITEM_SPACING);
                    widgets::bullets(ui, highlights.items(lang));
                }
            });
        });
    });
}
