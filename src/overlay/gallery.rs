use tracing::{info, warn};

use super::{ExternalNavigation, Viewer};
use crate::content::MediaItem;

/// Gallery overlay: an optional lightbox over one item
#[derive(Default)]
pub struct GalleryState {
    lightbox: Option<Viewer>,
}

impl GalleryState {
    pub fn lightbox(&self) -> Option<&Viewer> {
        self.lightbox.as_ref()
    }

    pub fn lightbox_mut(&mut self) -> Option<&mut Viewer> {
        self.lightbox.as_mut()
    }

    /// Items with a link are opened externally and leave the gallery as it
    /// is; other items open in the lightbox.
    pub fn select(&mut self, index: usize, items: &[MediaItem]) -> Option<ExternalNavigation> {
        let Some(item) = items.get(index) else {
            warn!(index, len = items.len(), "gallery selection out of range");
            return None;
        };

        if let Some(link) = &item.link {
            info!(index, %link, "opening gallery item externally");
            return Some(ExternalNavigation::new(link.clone()));
        }

        self.lightbox = Some(Viewer::new(index));
        None
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox = None;
    }
}

/// Videos overlay: at most one video in the player view
#[derive(Default)]
pub struct VideosState {
    playing: Option<Viewer>,
}

impl VideosState {
    pub fn playing(&self) -> Option<&Viewer> {
        self.playing.as_ref()
    }

    pub fn playing_mut(&mut self) -> Option<&mut Viewer> {
        self.playing.as_mut()
    }

    pub fn play(&mut self, index: usize, len: usize) {
        if index >= len {
            warn!(index, len, "video selection out of range");
            return;
        }
        self.playing = Some(Viewer::new(index));
    }

    pub fn stop(&mut self) {
        self.playing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Text;

    fn item(category: &str, link: Option<&str>) -> MediaItem {
        MediaItem {
            title: Text::plain(format!("{category} item")),
            description: None,
            category: category.to_string(),
            media: Some("gallery/item.png".to_string()),
            link: link.map(str::to_string),
        }
    }

    #[test]
    fn test_select_without_link_opens_lightbox() {
        let items = vec![item("Design", None), item("Photo", None)];
        let mut state = GalleryState::default();
        assert_eq!(state.select(1, &items), None);
        assert_eq!(state.lightbox().map(|v| v.index), Some(1));
    }

    #[test]
    fn test_select_with_link_requests_navigation() {
        let items = vec![item("Web", Some("https://example.org/shop"))];
        let mut state = GalleryState::default();
        assert_eq!(
            state.select(0, &items),
            Some(ExternalNavigation::new("https://example.org/shop"))
        );
        assert!(state.lightbox().is_none());
    }

    #[test]
    fn test_select_with_link_keeps_open_lightbox() {
        let items = vec![item("Design", None), item("Web", Some("https://example.org"))];
        let mut state = GalleryState::default();
        state.select(0, &items);
        state.select(1, &items);
        assert_eq!(state.lightbox().map(|v| v.index), Some(0));
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut state = GalleryState::default();
        assert_eq!(state.select(3, &[]), None);
        assert!(state.lightbox().is_none());
    }

    #[test]
    fn test_play_and_stop() {
        let mut state = VideosState::default();
        state.play(5, 2);
        assert!(state.playing().is_none());
        state.play(1, 2);
        assert_eq!(state.playing().map(|v| v.index), Some(1));
        state.stop();
        assert!(state.playing().is_none());
    }
}
