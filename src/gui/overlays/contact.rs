use eframe::egui;

use super::inner_back;
use crate::gui::constants::*;
use crate::gui::{widgets, View};
use crate::media::{file_uri, resolve_asset, AssetState};
use crate::overlay::{ContactState, OverlayEvent};
use crate::shell::ShellEvent;

pub fn ui(ui: &mut egui::Ui, view: &mut View<'_>, state: &mut ContactState) {
    let content = view.content;
    let contact = &content.contact;
    let lang = view.lang;
    let asset_root = view.asset_root;

    if let Some(viewer) = state.resume_mut() {
        let title = view.t("contact.resume_title");
        inner_back(
            ui,
            view,
            title,
            ShellEvent::Overlay(OverlayEvent::HideResume),
        );

        let path = resolve_asset(asset_root, &contact.resume);
        let load = viewer.asset(|| path.clone());
        match load.poll(ui.ctx()) {
            // Fallback keeps a way to reach the document even when it fails to load
            AssetState::Failed(reason) => {
                widgets::failure(ui, view, reason);
                ui.add_space(ITEM_SPACING);
                if ui.link(contact.resume.as_str()).clicked() {
                    view.emit(ShellEvent::OpenExternal(file_uri(&path)));
                }
            }
            asset => {
                let max = ui.available_size();
                widgets::asset(ui, view, asset, max, 0.0, false);
            }
        }
        return;
    }

    widgets::card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());
        egui::Grid::new("contact_grid")
            .num_columns(2)
            .spacing([SECTION_SPACING, ITEM_SPACING])
            .show(ui, |ui| {
                ui.label(egui::RichText::new(view.t("contact.email")).strong());
                if ui.link(contact.email.as_str()).clicked() {
                    view.emit(ShellEvent::OpenExternal(contact.mailto()));
                }
                ui.end_row();

                if let (Some(phone), Some(tel)) = (&contact.phone, contact.tel()) {
                    ui.label(egui::RichText::new(view.t("contact.phone")).strong());
                    if ui.link(phone.as_str()).clicked() {
                        view.emit(ShellEvent::OpenExternal(tel));
                    }
                    ui.end_row();
                }

                ui.label(egui::RichText::new(view.t("contact.location")).strong());
                ui.label(contact.location.text(lang));
                ui.end_row();

                if !contact.links.is_empty() {
                    ui.label(egui::RichText::new(view.t("contact.links")).strong());
                    ui.horizontal_wrapped(|ui| {
                        for link in &contact.links {
                            if ui.link(link.label.text(lang)).clicked() {
                                view.emit(ShellEvent::OpenExternal(link.url.clone()));
                            }
                        }
                    });
                    ui.end_row();
                }
            });
    });

    ui.add_space(SECTION_SPACING);
    if ui.button(format!("📄 {}", view.t("contact.resume"))).clicked() {
        view.emit(ShellEvent::Overlay(OverlayEvent::ShowResume));
    }
}
