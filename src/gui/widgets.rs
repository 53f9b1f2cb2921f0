//! Small drawing helpers shared by panels and overlays

use eframe::egui;

use super::constants::*;
use super::View;
use crate::media::{file_uri, AssetState};
use crate::shell::ShellEvent;

/// Draw a loaded asset, or its loading / failure placeholder.
///
/// `rotation` is clockwise, in radians; quarter turns swap the box the image
/// is fitted into so the rotated image still fits `max_size`.
pub fn asset(
    ui: &mut egui::Ui,
    view: &mut View<'_>,
    state: &AssetState,
    max_size: egui::Vec2,
    rotation: f32,
    swaps_axes: bool,
) {
    match state {
        AssetState::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(view.t("media.loading"));
            });
        }
        AssetState::Image(texture) => {
            let fit = if swaps_axes {
                egui::vec2(max_size.y, max_size.x)
            } else {
                max_size
            };
            let mut image = egui::Image::from_texture(texture).max_size(fit);
            if rotation != 0.0 {
                image = image.rotate(rotation, egui::Vec2::splat(0.5));
            }
            ui.add(image);
        }
        AssetState::External(path) => {
            ui.label(egui::RichText::new(view.t("media.no_preview")).weak());
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            ui.label(egui::RichText::new(name).monospace());
            if ui.button(view.t("action.open_external")).clicked() {
                view.emit(ShellEvent::OpenExternal(file_uri(path)));
            }
        }
        AssetState::Failed(reason) => failure(ui, view, reason),
    }
}

/// Button switching to the other language. The overlay covers the top bar,
/// so its header carries one too.
pub fn language_toggle(ui: &mut egui::Ui, view: &mut View<'_>) {
    let other = view.lang.toggled();
    let toggle = ui
        .button(format!("🌐 {}", other.native_name()))
        .on_hover_text(other.code().to_uppercase());
    if toggle.clicked() {
        view.emit(ShellEvent::ToggleLanguage);
    }
}

/// Inline load-failure notice
pub fn failure(ui: &mut egui::Ui, view: &View<'_>, reason: &str) {
    ui.colored_label(ERROR_TEXT, view.t("media.failed"));
    ui.label(egui::RichText::new(reason).small().weak());
}

/// Bulleted list
pub fn bullets(ui: &mut egui::Ui, items: &[String]) {
    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.label("•");
            ui.label(item.as_str());
        });
    }
}

/// Frame used for cards on the main canvas and in overlays
pub fn card_frame(ui: &egui::Ui) -> egui::Frame {
    egui::Frame::group(ui.style()).inner_margin(ITEM_SPACING)
}
