//! Root window: navigation, main canvas and the mounted overlay

use std::path::PathBuf;

use eframe::egui::scroll_area::ScrollSource;
use eframe::{egui, CreationContext};
use tracing::info;

use super::components::{gallery_preview, nav, profile_card, skills_preview};
use super::constants::*;
use super::{overlays, widgets, View};
use crate::config::Settings;
use crate::content::Portfolio;
use crate::scroll::PageScroll;
use crate::shell::{Shell, ShellEvent};

pub struct FolioApp {
    content: Portfolio,
    asset_root: PathBuf,
    shell: Shell,
    scroll: PageScroll,
    left_nav: nav::LeftNavState,
    profile: profile_card::ProfileCardState,
    projects: gallery_preview::GalleryPreviewState,
}

impl FolioApp {
    pub fn new(_cc: &CreationContext<'_>, settings: Settings, content: Portfolio) -> Self {
        info!(asset_root = ?settings.asset_root, "Initializing portfolio window");
        Self::with_content(settings.asset_root, content)
    }

    fn with_content(asset_root: PathBuf, content: Portfolio) -> Self {
        let scroll = PageScroll::new();
        Self {
            content,
            asset_root,
            shell: Shell::new(scroll.clone()),
            scroll,
            left_nav: nav::LeftNavState::default(),
            profile: profile_card::ProfileCardState::default(),
            projects: gallery_preview::GalleryPreviewState::default(),
        }
    }

    fn top_bar(ctx: &egui::Context, view: &mut View<'_>) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(view.content.profile.name.as_str());
                ui.label(egui::RichText::new(view.content.profile.headline.text(view.lang)).weak());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    widgets::language_toggle(ui, view);
                });
            });
        });
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx);
    }
}

impl FolioApp {
    /// Draw one pass, then apply what the panels emitted
    fn frame(&mut self, ctx: &egui::Context) {
        let mut events = Vec::new();

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            events.push(ShellEvent::Cancel);
        }

        {
            let mut view = View::new(
                &self.content,
                self.shell.language(),
                &self.asset_root,
                self.shell.active_section(),
                &mut events,
            );

            Self::top_bar(ctx, &mut view);

            egui::SidePanel::left("nav_left")
                .resizable(false)
                .exact_width(NAV_PANEL_WIDTH)
                .show(ctx, |ui| {
                    nav::left(ui, &mut view, &mut self.left_nav);
                });

            egui::SidePanel::right("nav_right")
                .resizable(false)
                .exact_width(NAV_PANEL_WIDTH)
                .show(ctx, |ui| {
                    nav::right(ui, &mut view);
                });

            let locked = self.scroll.is_locked();
            egui::CentralPanel::default().show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("main_canvas")
                    .scroll_source(if locked {
                        ScrollSource::NONE
                    } else {
                        ScrollSource::ALL
                    })
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        profile_card::ui(ui, &mut view, &mut self.profile);
                        ui.add_space(SECTION_SPACING);
                        skills_preview::ui(ui, &mut view);
                        ui.add_space(SECTION_SPACING);
                        gallery_preview::ui(ui, &mut view, &mut self.projects);
                    });
            });

            if let Some(mounted) = self.shell.overlay_mut() {
                overlays::show(ctx, &mut view, mounted);
            }
        }

        for event in events {
            if let Some(request) = self.shell.dispatch(event, &self.content) {
                info!(url = %request.url, "opening external link");
                ctx.open_url(egui::OpenUrl::new_tab(request.url));
            }
        }
    }
}
