//! Root shell state
//!
//! Owns the two pieces of global UI state: the active language and the
//! mounted overlay. Panels never touch this state; they push [`ShellEvent`]s
//! which the shell applies once the frame's panels are drawn.

use tracing::{debug, info, warn};

use crate::content::Portfolio;
use crate::i18n::Language;
use crate::overlay::{ExternalNavigation, OverlayEvent, OverlayPanel};
use crate::scroll::{PageScroll, ScrollLock};
use crate::section::SectionId;

/// Events panels emit toward the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    ToggleLanguage,
    OpenSection(SectionId),
    /// Section key as written in the content document
    OpenSectionKey(String),
    CloseOverlay,
    /// Cancel key: innermost view first, then the overlay
    Cancel,
    Overlay(OverlayEvent),
    OpenExternal(String),
}

/// A mounted overlay together with the scroll lock it holds
pub struct MountedOverlay {
    panel: OverlayPanel,
    _scroll_lock: ScrollLock,
}

impl MountedOverlay {
    #[cfg(test)]
    pub fn panel(&self) -> &OverlayPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut OverlayPanel {
        &mut self.panel
    }
}

pub struct Shell {
    language: Language,
    overlay: Option<MountedOverlay>,
    scroll: PageScroll,
}

impl Shell {
    pub fn new(scroll: PageScroll) -> Self {
        Self {
            language: Language::default(),
            overlay: None,
            scroll,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn active_section(&self) -> Option<SectionId> {
        self.overlay.as_ref().map(|mounted| mounted.panel.section())
    }

    #[cfg(test)]
    pub fn overlay(&self) -> Option<&MountedOverlay> {
        self.overlay.as_ref()
    }

    pub fn overlay_mut(&mut self) -> Option<&mut MountedOverlay> {
        self.overlay.as_mut()
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
        info!(language = %self.language, "language switched");
    }

    /// Mount a fresh panel for `section`, replacing whatever was mounted
    pub fn open_section(&mut self, section: SectionId) {
        // Old panel (and its scroll lock) goes before the new lock is taken
        if let Some(previous) = self.overlay.take() {
            debug!(section = %previous.panel.section(), "unmounting overlay");
        }
        self.overlay = Some(MountedOverlay {
            panel: OverlayPanel::mount(section),
            _scroll_lock: self.scroll.lock(),
        });
        info!(%section, "overlay opened");
    }

    /// Open by content key. Unknown keys open nothing.
    pub fn open_section_key(&mut self, key: &str) {
        match SectionId::from_key(key) {
            Some(section) => self.open_section(section),
            None => warn!(key, "ignoring unregistered section"),
        }
    }

    pub fn close_overlay(&mut self) {
        if let Some(previous) = self.overlay.take() {
            info!(section = %previous.panel.section(), "overlay closed");
        }
    }

    /// Cancel key handling: closes the innermost open view, or the overlay
    /// itself when nothing is open inside it
    pub fn cancel(&mut self) {
        let Some(mounted) = self.overlay.as_mut() else {
            return;
        };
        if mounted.panel.close_inner_view() {
            debug!(section = %mounted.panel.section(), "inner view closed");
        } else {
            self.close_overlay();
        }
    }

    /// Apply one event. Returns the external navigation the host must
    /// perform, if any.
    pub fn dispatch(&mut self, event: ShellEvent, content: &Portfolio) -> Option<ExternalNavigation> {
        debug!(?event, "dispatch");
        match event {
            ShellEvent::ToggleLanguage => self.toggle_language(),
            ShellEvent::OpenSection(section) => self.open_section(section),
            ShellEvent::OpenSectionKey(key) => self.open_section_key(&key),
            ShellEvent::CloseOverlay => self.close_overlay(),
            ShellEvent::Cancel => self.cancel(),
            ShellEvent::Overlay(event) => {
                return match self.overlay.as_mut() {
                    Some(mounted) => mounted.panel.apply(event, content),
                    None => {
                        debug!(?event, "no overlay mounted");
                        None
                    }
                };
            }
            ShellEvent::OpenExternal(url) => return Some(ExternalNavigation::new(url)),
        }
        None
    }
}
