use eframe::egui;

use crate::content::NavEntry;
use crate::gui::constants::*;
use crate::gui::View;
use crate::shell::ShellEvent;

/// Left panel local state
pub struct LeftNavState {
    stats_expanded: bool,
}

impl Default for LeftNavState {
    fn default() -> Self {
        Self {
            stats_expanded: true,
        }
    }
}

impl LeftNavState {
    pub fn stats_expanded(&self) -> bool {
        self.stats_expanded
    }

    pub fn toggle_stats(&mut self) {
        self.stats_expanded = !self.stats_expanded;
    }
}

pub fn left(ui: &mut egui::Ui, view: &mut View<'_>, state: &mut LeftNavState) {
    let content = view.content;

    ui.add_space(SECTION_SPACING);
    ui.label(egui::RichText::new(view.t("nav.left.heading")).heading().strong());
    ui.add_space(ITEM_SPACING);

    entries(ui, view, &content.navigation.left);

    if content.stats.is_empty() {
        return;
    }

    ui.add_space(SECTION_SPACING);
    ui.separator();
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(view.t("stats.heading")).strong());
        let toggle_label = if state.stats_expanded() {
            view.t("stats.hide")
        } else {
            view.t("stats.show")
        };
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button(toggle_label).clicked() {
                state.toggle_stats();
            }
        });
    });

    if state.stats_expanded() {
        ui.add_space(ITEM_SPACING / 2.0);
        egui::Grid::new("nav_stats")
            .num_columns(2)
            .spacing([ITEM_SPACING, ITEM_SPACING / 2.0])
            .show(ui, |ui| {
                for stat in &content.stats {
                    ui.label(egui::RichText::new(&stat.value).strong().color(ACCENT));
                    ui.label(stat.label.text(view.lang));
                    ui.end_row();
                }
            });
    }
}

pub fn right(ui: &mut egui::Ui, view: &mut View<'_>) {
    let content = view.content;

    ui.add_space(SECTION_SPACING);
    ui.label(egui::RichText::new(view.t("nav.right.heading")).heading().strong());
    ui.add_space(ITEM_SPACING);

    entries(ui, view, &content.navigation.right);
}

fn entries(ui: &mut egui::Ui, view: &mut View<'_>, entries: &[NavEntry]) {
    for entry in entries {
        let active = view.active.is_some_and(|section| section.key() == entry.section);
        let button = egui::Button::new(egui::RichText::new(entry.label.text(view.lang)).strong())
            .selected(active)
            .min_size(egui::vec2(ui.available_width(), 32.0));
        if ui.add(button).clicked() {
            view.emit(ShellEvent::OpenSectionKey(entry.section.clone()));
        }
        if let Some(description) = &entry.description {
            ui.label(egui::RichText::new(description.text(view.lang)).small().weak());
        }
        ui.add_space(ITEM_SPACING);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default_expanded_and_toggle() {
        let mut state = LeftNavState::default();
        assert!(state.stats_expanded());
        state.toggle_stats();
        assert!(!state.stats_expanded());
        state.toggle_stats();
        assert!(state.stats_expanded());
    }
}
