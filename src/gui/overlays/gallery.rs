use eframe::egui;

use super::inner_back;
use crate::gui::constants::*;
use crate::gui::{widgets, View};
use crate::media::resolve_asset;
use crate::overlay::{GalleryState, OverlayEvent};
use crate::shell::ShellEvent;

pub fn ui(ui: &mut egui::Ui, view: &mut View<'_>, state: &mut GalleryState) {
    let content = view.content;
    let lang = view.lang;
    let asset_root = view.asset_root;

    if let Some(lightbox) = state.lightbox_mut() {
        let Some(item) = content.gallery.get(lightbox.index) else {
            view.emit(ShellEvent::Overlay(OverlayEvent::CloseLightbox));
            return;
        };

        egui::Frame::new()
            .fill(LIGHTBOX_FILL)
            .inner_margin(ITEM_SPACING)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                inner_back(
                    ui,
                    view,
                    item.title.text(lang),
                    ShellEvent::Overlay(OverlayEvent::CloseLightbox),
                );

                match &item.media {
                    Some(media) => {
                        let load = lightbox.asset(|| resolve_asset(asset_root, media));
                        let asset = load.poll(ui.ctx());
                        let max = ui.available_size() - egui::vec2(0.0, 4.0 * ITEM_SPACING);
                        ui.vertical_centered(|ui| {
                            widgets::asset(ui, view, asset, max, 0.0, false);
                        });
                    }
                    None => {
                        ui.label(egui::RichText::new(view.t("media.no_preview")).weak());
                    }
                }

                if let Some(description) = &item.description {
                    ui.add_space(ITEM_SPACING);
                    ui.label(description.text(lang));
                }
            });
        return;
    }

    ui.horizontal_wrapped(|ui| {
        for (index, item) in content.gallery.iter().enumerate() {
            widgets::card_frame(ui).show(ui, |ui| {
                ui.set_width(CARD_WIDTH);
                let tile = egui::Button::new(egui::RichText::new(item.title.text(lang)).strong())
                    .min_size(egui::vec2(CARD_WIDTH, THUMBNAIL_SIZE / 2.0));
                let mut response = ui.add(tile);
                if item.link.is_some() {
                    response = response.on_hover_text(view.t("gallery.visit"));
                }
                if response.clicked() {
                    view.emit(ShellEvent::Overlay(OverlayEvent::SelectMedia(index)));
                }
                ui.label(egui::RichText::new(&item.category).small().color(ACCENT));
                if let Some(description) = &item.description {
                    ui.label(egui::RichText::new(description.text(lang)).small());
                }
            });
        }
    });
}
