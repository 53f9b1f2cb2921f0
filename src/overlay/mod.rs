//! Overlay panels
//!
//! One variant per registered section. A variant carries the panel's local
//! state; constructing it is mounting, dropping it is unmounting, so nothing
//! survives a close/reopen cycle.

mod documents;
mod gallery;

use std::path::PathBuf;

use tracing::debug;

use crate::content::Portfolio;
use crate::media::AssetLoad;
use crate::section::SectionId;

pub use documents::{CertificatesState, ContactState};
pub use gallery::{GalleryState, VideosState};

/// Interaction inside a mounted overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEvent {
    SelectMedia(usize),
    CloseLightbox,
    PlayVideo(usize),
    StopVideo,
    ViewCertificate(usize),
    CloseCertificate,
    ShowResume,
    HideResume,
}

/// Navigation the host has to carry out (new tab, mail client, system player)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalNavigation {
    pub url: String,
}

impl ExternalNavigation {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Full-screen view of one item inside an overlay (lightbox, document
/// viewer, video player). The asset is loaded lazily on first render.
pub struct Viewer {
    pub index: usize,
    asset: Option<AssetLoad>,
}

impl Viewer {
    pub fn new(index: usize) -> Self {
        Self { index, asset: None }
    }

    /// The viewer's asset, spawning its load the first time
    pub fn asset(&mut self, path: impl FnOnce() -> PathBuf) -> &mut AssetLoad {
        self.asset.get_or_insert_with(|| AssetLoad::spawn(path()))
    }
}

pub enum OverlayPanel {
    Education,
    Experience,
    Skills,
    Certificates(CertificatesState),
    Videos(VideosState),
    Gallery(GalleryState),
    References,
    Contact(ContactState),
}

impl OverlayPanel {
    /// Fresh panel for `section` in its default local state
    pub fn mount(section: SectionId) -> Self {
        match section {
            SectionId::Education => OverlayPanel::Education,
            SectionId::Experience => OverlayPanel::Experience,
            SectionId::Skills => OverlayPanel::Skills,
            SectionId::Certificates => OverlayPanel::Certificates(CertificatesState::default()),
            SectionId::Videos => OverlayPanel::Videos(VideosState::default()),
            SectionId::Gallery => OverlayPanel::Gallery(GalleryState::default()),
            SectionId::References => OverlayPanel::References,
            SectionId::Contact => OverlayPanel::Contact(ContactState::default()),
        }
    }

    pub fn section(&self) -> SectionId {
        match self {
            OverlayPanel::Education => SectionId::Education,
            OverlayPanel::Experience => SectionId::Experience,
            OverlayPanel::Skills => SectionId::Skills,
            OverlayPanel::Certificates(_) => SectionId::Certificates,
            OverlayPanel::Videos(_) => SectionId::Videos,
            OverlayPanel::Gallery(_) => SectionId::Gallery,
            OverlayPanel::References => SectionId::References,
            OverlayPanel::Contact(_) => SectionId::Contact,
        }
    }

    /// Whether a modal-within-the-modal is open
    pub fn has_inner_view(&self) -> bool {
        match self {
            OverlayPanel::Certificates(state) => state.viewing().is_some(),
            OverlayPanel::Videos(state) => state.playing().is_some(),
            OverlayPanel::Gallery(state) => state.lightbox().is_some(),
            OverlayPanel::Contact(state) => state.resume_visible(),
            OverlayPanel::Education
            | OverlayPanel::Experience
            | OverlayPanel::Skills
            | OverlayPanel::References => false,
        }
    }

    /// Close the innermost view. Returns `false` when there was none.
    pub fn close_inner_view(&mut self) -> bool {
        if !self.has_inner_view() {
            return false;
        }
        match self {
            OverlayPanel::Certificates(state) => state.close(),
            OverlayPanel::Videos(state) => state.stop(),
            OverlayPanel::Gallery(state) => state.close_lightbox(),
            OverlayPanel::Contact(state) => state.hide_resume(),
            OverlayPanel::Education
            | OverlayPanel::Experience
            | OverlayPanel::Skills
            | OverlayPanel::References => {}
        }
        true
    }

    /// Apply a panel-local event
    pub fn apply(&mut self, event: OverlayEvent, content: &Portfolio) -> Option<ExternalNavigation> {
        match (self, event) {
            (OverlayPanel::Gallery(state), OverlayEvent::SelectMedia(index)) => {
                state.select(index, &content.gallery)
            }
            (OverlayPanel::Gallery(state), OverlayEvent::CloseLightbox) => {
                state.close_lightbox();
                None
            }
            (OverlayPanel::Videos(state), OverlayEvent::PlayVideo(index)) => {
                state.play(index, content.videos.len());
                None
            }
            (OverlayPanel::Videos(state), OverlayEvent::StopVideo) => {
                state.stop();
                None
            }
            (OverlayPanel::Certificates(state), OverlayEvent::ViewCertificate(index)) => {
                state.view(index, content.certificates.len());
                None
            }
            (OverlayPanel::Certificates(state), OverlayEvent::CloseCertificate) => {
                state.close();
                None
            }
            (OverlayPanel::Contact(state), OverlayEvent::ShowResume) => {
                state.show_resume();
                None
            }
            (OverlayPanel::Contact(state), OverlayEvent::HideResume) => {
                state.hide_resume();
                None
            }
            (panel, event) => {
                debug!(section = %panel.section(), ?event, "event does not apply to this overlay");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_matches_section() {
        for id in SectionId::ALL {
            let panel = OverlayPanel::mount(id);
            assert_eq!(panel.section(), id);
            assert!(!panel.has_inner_view(), "{id} mounted with an inner view open");
        }
    }

    #[test]
    fn test_close_inner_view_without_one() {
        let mut panel = OverlayPanel::mount(SectionId::Experience);
        assert!(!panel.close_inner_view());
    }

    #[test]
    fn test_mismatched_event_is_ignored() {
        let content = Portfolio::bundled().unwrap();
        let mut panel = OverlayPanel::mount(SectionId::Skills);
        assert_eq!(panel.apply(OverlayEvent::SelectMedia(0), &content), None);
        assert!(!panel.has_inner_view());
    }

    #[test]
    fn test_contact_resume_toggle() {
        let content = Portfolio::bundled().unwrap();
        let mut panel = OverlayPanel::mount(SectionId::Contact);
        panel.apply(OverlayEvent::ShowResume, &content);
        assert!(panel.has_inner_view());
        assert!(panel.close_inner_view());
        assert!(!panel.has_inner_view());
    }

    #[test]
    fn test_certificate_viewer() {
        let content = Portfolio::bundled().unwrap();
        let mut panel = OverlayPanel::mount(SectionId::Certificates);
        panel.apply(OverlayEvent::ViewCertificate(0), &content);
        assert!(panel.has_inner_view());
        panel.apply(OverlayEvent::CloseCertificate, &content);
        assert!(!panel.has_inner_view());
    }
}
