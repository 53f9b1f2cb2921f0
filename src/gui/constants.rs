//! GUI-specific constants for layout, colors and sizes

use egui;

/// Window limits
pub const WINDOW_MIN_WIDTH: f32 = 900.0;
pub const WINDOW_MIN_HEIGHT: f32 = 600.0;

/// Side navigation width
pub const NAV_PANEL_WIDTH: f32 = 240.0;

/// Layout spacing
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;
pub const OVERLAY_MARGIN: f32 = 24.0;

/// Project and gallery thumbnails
pub const CARD_WIDTH: f32 = 220.0;
pub const THUMBNAIL_SIZE: f32 = 160.0;

/// Profile photo edge length
pub const PHOTO_SIZE: f32 = 120.0;

/// Colors
pub const OVERLAY_FILL: egui::Color32 = egui::Color32::from_rgb(24, 26, 31);
pub const LIGHTBOX_FILL: egui::Color32 = egui::Color32::from_rgb(8, 8, 10);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(94, 170, 255);
pub const ERROR_TEXT: egui::Color32 = egui::Color32::from_rgb(230, 90, 90);
