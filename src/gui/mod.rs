//! egui front end
//!
//! Panels draw from read-only content and the active language and push
//! [`ShellEvent`]s into the frame's [`View`]; the app applies them after
//! drawing.

mod app;
mod components;
mod constants;
mod overlays;
mod widgets;

use std::path::Path;

use anyhow::{anyhow, Result};
use eframe::{egui, NativeOptions};

use crate::config::Settings;
use crate::content::Portfolio;
use crate::i18n::{self, Language};
use crate::section::SectionId;
use crate::shell::ShellEvent;

use app::FolioApp;
use constants::{WINDOW_MIN_HEIGHT, WINDOW_MIN_WIDTH};

/// What every panel gets for one frame
pub struct View<'a> {
    pub content: &'a Portfolio,
    pub lang: Language,
    pub asset_root: &'a Path,
    /// Section whose overlay is mounted
    pub active: Option<SectionId>,
    events: &'a mut Vec<ShellEvent>,
}

impl<'a> View<'a> {
    pub fn new(
        content: &'a Portfolio,
        lang: Language,
        asset_root: &'a Path,
        active: Option<SectionId>,
        events: &'a mut Vec<ShellEvent>,
    ) -> Self {
        Self {
            content,
            lang,
            asset_root,
            active,
            events,
        }
    }

    pub fn emit(&mut self, event: ShellEvent) {
        self.events.push(event);
    }

    /// UI chrome string in the active language
    pub fn t(&self, key: &'static str) -> &'static str {
        i18n::t(self.lang, key)
    }
}

pub fn run_gui(settings: Settings, content: Portfolio) -> Result<()> {
    let title = content.profile.name.clone();
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                f32::from(settings.window_width),
                f32::from(settings.window_height),
            ])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|cc| Ok(Box::new(FolioApp::new(cc, settings, content)))),
    )
    .map_err(|err| anyhow!("Failed to launch portfolio window: {err}"))
}
