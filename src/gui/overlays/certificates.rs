use eframe::egui;

use super::inner_back;
use crate::gui::constants::*;
use crate::gui::{widgets, View};
use crate::media::resolve_asset;
use crate::overlay::{CertificatesState, OverlayEvent};
use crate::shell::ShellEvent;

pub fn ui(ui: &mut egui::Ui, view: &mut View<'_>, state: &mut CertificatesState) {
    let content = view.content;
    let lang = view.lang;
    let asset_root = view.asset_root;

    if let Some(viewer) = state.viewing_mut() {
        let Some(certificate) = content.certificates.get(viewer.index) else {
            view.emit(ShellEvent::Overlay(OverlayEvent::CloseCertificate));
            return;
        };

        inner_back(
            ui,
            view,
            certificate.title.text(lang),
            ShellEvent::Overlay(OverlayEvent::CloseCertificate),
        );

        let load = viewer.asset(|| resolve_asset(asset_root, &certificate.document));
        let asset = load.poll(ui.ctx());
        let max = ui.available_size() - egui::vec2(0.0, 2.0 * ITEM_SPACING);
        ui.vertical_centered(|ui| {
            widgets::asset(
                ui,
                view,
                asset,
                max,
                certificate.rotation_radians(),
                certificate.swaps_axes(),
            );
        });
        return;
    }

    for (index, certificate) in content.certificates.iter().enumerate() {
        widgets::card_frame(ui).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(egui::RichText::new(certificate.title.text(lang)).strong().size(17.0));
                    ui.label(
                        egui::RichText::new(format!(
                            "{} {} · {}",
                            view.t("certificates.issued_by"),
                            certificate.issuer,
                            certificate.date.text(lang)
                        ))
                        .weak(),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(view.t("certificates.view")).clicked() {
                        view.emit(ShellEvent::Overlay(OverlayEvent::ViewCertificate(index)));
                    }
                });
            });
        });
        ui.add_space(ITEM_SPACING);
    }
}
