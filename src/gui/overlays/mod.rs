//! Full-window overlay views, one per section

mod certificates;
mod contact;
mod gallery;
mod lists;
mod videos;

use eframe::egui;

use super::constants::*;
use super::{widgets, View};
use crate::overlay::OverlayPanel;
use crate::shell::{MountedOverlay, ShellEvent};

/// Draw the mounted overlay above the main canvas
pub fn show(ctx: &egui::Context, view: &mut View<'_>, mounted: &mut MountedOverlay) {
    let content = view.content;
    let screen = ctx.content_rect();
    let panel = mounted.panel_mut();
    let section = panel.section();

    egui::Area::new(egui::Id::new("overlay").with(section.key()))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(OVERLAY_FILL)
                .inner_margin(OVERLAY_MARGIN)
                .show(ui, |ui| {
                    let inner = screen.size() - egui::Vec2::splat(2.0 * OVERLAY_MARGIN);
                    ui.set_min_size(inner);
                    ui.set_max_size(inner);

                    header(ui, view, section.key());
                    ui.separator();
                    ui.add_space(ITEM_SPACING);

                    egui::ScrollArea::vertical()
                        .id_salt(("overlay_body", section.key()))
                        .auto_shrink([false, false])
                        .show(ui, |ui| match panel {
                            OverlayPanel::Education => {
                                lists::timeline(ui, view, &content.education)
                            }
                            OverlayPanel::Experience => {
                                lists::timeline(ui, view, &content.experience)
                            }
                            OverlayPanel::Skills => lists::skills(ui, view),
                            OverlayPanel::References => lists::references(ui, view),
                            OverlayPanel::Certificates(state) => certificates::ui(ui, view, state),
                            OverlayPanel::Videos(state) => videos::ui(ui, view, state),
                            OverlayPanel::Gallery(state) => gallery::ui(ui, view, state),
                            OverlayPanel::Contact(state) => contact::ui(ui, view, state),
                        });
                });
        });
}

fn header(ui: &mut egui::Ui, view: &mut View<'_>, key: &str) {
    let title = view
        .content
        .nav_label(key, view.lang)
        .unwrap_or(key)
        .to_string();

    ui.horizontal(|ui| {
        if ui.button(format!("← {}", view.t("action.back"))).clicked() {
            view.emit(ShellEvent::CloseOverlay);
        }
        ui.add_space(ITEM_SPACING);
        ui.heading(title);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(format!("✕ {}", view.t("action.close"))).clicked() {
                view.emit(ShellEvent::CloseOverlay);
            }
            widgets::language_toggle(ui, view);
            ui.label(egui::RichText::new(view.t("hint.cancel")).small().weak());
        });
    });
}

/// Back bar shown above an inner full-screen view
fn inner_back(ui: &mut egui::Ui, view: &mut View<'_>, title: &str, on_back: ShellEvent) {
    ui.horizontal(|ui| {
        if ui.button(format!("← {}", view.t("action.back"))).clicked() {
            view.emit(on_back);
        }
        ui.add_space(ITEM_SPACING);
        ui.label(egui::RichText::new(title).heading().strong());
    });
    ui.add_space(ITEM_SPACING);
}
