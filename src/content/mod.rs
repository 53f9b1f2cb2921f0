//! Portfolio content
//!
//! The whole portfolio is one JSON document. The bundled copy is compiled
//! into the binary; an alternative document can be loaded from disk. After
//! loading, content is read-only.

mod validate;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::i18n::{Language, Text, TextList};

pub use validate::validate;

const BUNDLED: &str = include_str!("../../assets/content.json");

#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub stats: Vec<Stat>,
    pub navigation: Navigation,
    #[serde(default)]
    pub education: Vec<TimelineEntry>,
    #[serde(default)]
    pub experience: Vec<TimelineEntry>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub certificates: Vec<Certificate>,
    #[serde(default)]
    pub videos: Vec<Video>,
    #[serde(default)]
    pub gallery: Vec<MediaItem>,
    #[serde(default)]
    pub projects: Vec<MediaItem>,
    #[serde(default)]
    pub references: Vec<Reference>,
    pub contact: Contact,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: Text,
    pub summary: Text,
    pub location: Text,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub highlights: Option<TextList>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub label: Text,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Navigation {
    pub left: Vec<NavEntry>,
    pub right: Vec<NavEntry>,
}

/// One clickable navigation entry. `section` is matched against the registry
/// when activated.
#[derive(Debug, Clone, Deserialize)]
pub struct NavEntry {
    pub section: String,
    pub label: Text,
    #[serde(default)]
    pub description: Option<Text>,
}

/// Education or experience entry
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineEntry {
    pub title: Text,
    pub organization: String,
    pub period: Text,
    #[serde(default)]
    pub location: Option<Text>,
    #[serde(default)]
    pub details: Option<TextList>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillGroup {
    pub name: Text,
    pub skills: Vec<Skill>,
    /// Shown on the main canvas skills card
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skill {
    pub name: Text,
    /// Proficiency in percent
    pub level: u8,
}

impl Skill {
    pub fn fraction(&self) -> f32 {
        f32::from(self.level.min(100)) / 100.0
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Certificate {
    pub title: Text,
    pub issuer: String,
    pub date: Text,
    pub document: String,
    /// Clockwise correction for scans stored in the wrong orientation
    #[serde(default)]
    pub rotation: u16,
}

impl Certificate {
    pub fn rotation_radians(&self) -> f32 {
        f32::from(self.rotation % 360).to_radians()
    }

    /// Quarter or three-quarter turns swap the displayed width and height
    pub fn swaps_axes(&self) -> bool {
        matches!(self.rotation % 360, 90 | 270)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub title: Text,
    #[serde(default)]
    pub description: Option<Text>,
    pub source: String,
    #[serde(default)]
    pub poster: Option<String>,
}

/// Gallery image or project card
#[derive(Debug, Clone, Deserialize)]
pub struct MediaItem {
    pub title: Text,
    #[serde(default)]
    pub description: Option<Text>,
    pub category: String,
    #[serde(default)]
    pub media: Option<String>,
    /// Items with a link open it instead of the lightbox
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Reference {
    pub name: String,
    pub role: Text,
    pub quote: Text,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contact {
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub location: Text,
    #[serde(default)]
    pub links: Vec<ExternalLink>,
    pub resume: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalLink {
    pub label: Text,
    pub url: String,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn tel(&self) -> Option<String> {
        self.phone
            .as_ref()
            .map(|phone| format!("tel:{}", phone.replace(' ', "")))
    }
}

impl Portfolio {
    /// Content compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED).context("Failed to parse bundled content")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let portfolio: Portfolio = serde_json::from_str(json)?;
        Ok(portfolio)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read content from {:?}", path))?;
        Self::from_json(&json).with_context(|| format!("Failed to parse content from {:?}", path))
    }

    /// Load content and apply the validation policy: debug builds refuse
    /// content with issues, release builds log them and carry on.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let portfolio = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::bundled()?,
        };

        let issues = validate(&portfolio);
        if !issues.is_empty() {
            for issue in &issues {
                warn!(%issue, "content issue");
            }
            if cfg!(debug_assertions) {
                anyhow::bail!(
                    "content has {} issue(s); run `folio check` for the full list",
                    issues.len()
                );
            }
        }

        info!(
            name = %portfolio.profile.name,
            gallery = portfolio.gallery.len(),
            projects = portfolio.projects.len(),
            "Loaded portfolio content"
        );
        Ok(portfolio)
    }

    /// Distinct project categories, in first-seen order
    pub fn project_categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for item in &self.projects {
            if !categories.contains(&item.category.as_str()) {
                categories.push(&item.category);
            }
        }
        categories
    }

    /// Label of the navigation entry for `key`, if any
    pub fn nav_label(&self, key: &str, lang: Language) -> Option<&str> {
        self.navigation
            .left
            .iter()
            .chain(&self.navigation.right)
            .find(|entry| entry.section == key)
            .map(|entry| entry.label.text(lang))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_content_parses_and_is_clean() {
        let portfolio = Portfolio::bundled().unwrap();
        let issues = validate(&portfolio);
        assert!(issues.is_empty(), "bundled content has issues: {issues:?}");
    }

    #[test]
    fn test_bundled_content_covers_every_section() {
        let portfolio = Portfolio::bundled().unwrap();
        for id in crate::section::SectionId::ALL {
            assert!(
                portfolio.nav_label(id.key(), Language::En).is_some(),
                "no navigation entry for {id}"
            );
        }
    }

    #[test]
    fn test_project_categories_are_distinct_in_order() {
        let portfolio = Portfolio::bundled().unwrap();
        let categories = portfolio.project_categories();
        let mut deduped = categories.clone();
        deduped.dedup();
        assert_eq!(categories, deduped);
        assert!(categories.contains(&"Design"));
        assert_eq!(categories[0], portfolio.projects[0].category);
    }

    #[test]
    fn test_certificate_rotation() {
        let mut certificate: Certificate = serde_json::from_str(
            r#"{"title": "Scrum", "issuer": "Scrum.org", "date": "2021", "document": "certs/scrum.png"}"#,
        )
        .unwrap();
        assert_eq!(certificate.rotation, 0);
        assert!(!certificate.swaps_axes());

        certificate.rotation = 270;
        assert!(certificate.swaps_axes());
        assert!((certificate.rotation_radians() - 270f32.to_radians()).abs() < f32::EPSILON);
    }

    #[test]
    fn test_contact_links() {
        let contact: Contact = serde_json::from_str(
            r#"{"email": "jane@example.org", "phone": "+49 30 1234", "location": "Berlin", "resume": "docs/resume.pdf"}"#,
        )
        .unwrap();
        assert_eq!(contact.mailto(), "mailto:jane@example.org");
        assert_eq!(contact.tel().as_deref(), Some("tel:+49301234"));
        assert!(contact.links.is_empty());
    }

    #[test]
    fn test_from_path_reports_missing_file() {
        let err = Portfolio::from_path(Path::new("/nonexistent/content.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read content"));
    }
}
