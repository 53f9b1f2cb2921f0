//! Panels drawn on the main window: navigation and the main canvas cards

pub mod gallery_preview;
pub mod nav;
pub mod profile_card;
pub mod skills_preview;
