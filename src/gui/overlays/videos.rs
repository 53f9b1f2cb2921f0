use eframe::egui;

use super::inner_back;
use crate::gui::constants::*;
use crate::gui::{widgets, View};
use crate::media::{file_uri, resolve_asset};
use crate::overlay::{OverlayEvent, VideosState};
use crate::shell::ShellEvent;

pub fn ui(ui: &mut egui::Ui, view: &mut View<'_>, state: &mut VideosState) {
    let content = view.content;
    let lang = view.lang;
    let asset_root = view.asset_root;

    if let Some(player) = state.playing_mut() {
        let Some(video) = content.videos.get(player.index) else {
            view.emit(ShellEvent::Overlay(OverlayEvent::StopVideo));
            return;
        };

        inner_back(
            ui,
            view,
            video.title.text(lang),
            ShellEvent::Overlay(OverlayEvent::StopVideo),
        );

        // The poster stands in for the frame; playback itself is the host player's job
        if let Some(poster) = &video.poster {
            let load = player.asset(|| resolve_asset(asset_root, poster));
            let asset = load.poll(ui.ctx());
            let max = ui.available_size() - egui::vec2(0.0, 6.0 * ITEM_SPACING);
            ui.vertical_centered(|ui| {
                widgets::asset(ui, view, asset, max, 0.0, false);
            });
        }

        ui.add_space(ITEM_SPACING);
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(view.t("videos.player_hint")).weak());
            if ui.button(format!("▶ {}", view.t("action.open_external"))).clicked() {
                let source = resolve_asset(asset_root, &video.source);
                view.emit(ShellEvent::OpenExternal(file_uri(&source)));
            }
        });
        return;
    }

    for (index, video) in content.videos.iter().enumerate() {
        widgets::card_frame(ui).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                if ui.button(format!("▶ {}", view.t("videos.play"))).clicked() {
                    view.emit(ShellEvent::Overlay(OverlayEvent::PlayVideo(index)));
                }
                ui.add_space(ITEM_SPACING);
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(video.title.text(lang)).strong().size(17.0));
                    if let Some(description) = &video.description {
                        ui.label(description.text(lang));
                    }
                });
            });
        });
        ui.add_space(ITEM_SPACING);
    }
}
