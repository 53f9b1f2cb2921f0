use eframe::egui;

use crate::content::MediaItem;
use crate::gui::constants::*;
use crate::gui::{widgets, View};
use crate::shell::ShellEvent;

/// Category filter for the projects preview
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Tag(String),
}

impl CategoryFilter {
    pub fn matches(&self, item: &MediaItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Tag(tag) => item.category == *tag,
        }
    }
}

/// Items visible under `filter`, in their original order
pub fn filter_items<'a>(items: &'a [MediaItem], filter: &CategoryFilter) -> Vec<&'a MediaItem> {
    items.iter().filter(|item| filter.matches(item)).collect()
}

#[derive(Default)]
pub struct GalleryPreviewState {
    filter: CategoryFilter,
}

pub fn ui(ui: &mut egui::Ui, view: &mut View<'_>, state: &mut GalleryPreviewState) {
    let content = view.content;
    let lang = view.lang;

    widgets::card_frame(ui).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(view.t("preview.projects")).heading().strong());
        ui.add_space(ITEM_SPACING);

        ui.horizontal_wrapped(|ui| {
            ui.selectable_value(&mut state.filter, CategoryFilter::All, view.t("filter.all"));
            for category in content.project_categories() {
                ui.selectable_value(
                    &mut state.filter,
                    CategoryFilter::Tag(category.to_string()),
                    category,
                );
            }
        });
        ui.add_space(ITEM_SPACING);

        ui.horizontal_wrapped(|ui| {
            for item in filter_items(&content.projects, &state.filter) {
                widgets::card_frame(ui).show(ui, |ui| {
                    ui.set_width(CARD_WIDTH);
                    ui.label(egui::RichText::new(item.title.text(lang)).strong());
                    ui.label(egui::RichText::new(&item.category).small().color(ACCENT));
                    if let Some(description) = &item.description {
                        ui.label(description.text(lang));
                    }
                    if let Some(link) = &item.link {
                        if ui.link(view.t("gallery.visit")).clicked() {
                            view.emit(ShellEvent::OpenExternal(link.clone()));
                        }
                    }
                });
            }
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Portfolio;

    #[test]
    fn test_all_is_identity() {
        let content = Portfolio::bundled().unwrap();
        let visible = filter_items(&content.projects, &CategoryFilter::All);
        assert_eq!(visible.len(), content.projects.len());
        for (shown, item) in visible.iter().zip(&content.projects) {
            assert!(std::ptr::eq(*shown, item));
        }
    }

    #[test]
    fn test_tag_selects_exact_subset() {
        let content = Portfolio::bundled().unwrap();
        let filter = CategoryFilter::Tag("Design".to_string());
        let visible = filter_items(&content.projects, &filter);

        let expected: Vec<&MediaItem> = content
            .projects
            .iter()
            .filter(|item| item.category == "Design")
            .collect();
        assert!(!expected.is_empty());
        assert_eq!(visible.len(), expected.len());
        assert!(visible.iter().all(|item| item.category == "Design"));
    }

    #[test]
    fn test_unknown_tag_is_empty() {
        let content = Portfolio::bundled().unwrap();
        let filter = CategoryFilter::Tag("design".to_string());
        assert!(filter_items(&content.projects, &filter).is_empty());
    }

    #[test]
    fn test_default_filter_is_all() {
        assert_eq!(GalleryPreviewState::default().filter, CategoryFilter::All);
    }
}
