//! Content authoring checks
//!
//! None of these are fatal at runtime: unknown section keys open nothing and
//! missing translations fall back to English. They are still authoring
//! mistakes, so they are reported here.

use std::collections::HashSet;

use thiserror::Error;

use super::{MediaItem, Portfolio, TimelineEntry};
use crate::constants::content::ROTATION_STEP_DEGREES;
use crate::i18n::{Language, Localized};
use crate::section::SectionId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentIssue {
    #[error("{location}: navigation entry points at unknown section '{key}'")]
    UnknownSection { location: String, key: String },

    #[error("navigation lists section '{key}' more than once")]
    DuplicateNavEntry { key: String },

    #[error("{location}: missing translation for {}", format_languages(.missing))]
    MissingTranslation { location: String, missing: Vec<Language> },

    #[error("{location}: rotation {degrees} is not a multiple of 90 degrees")]
    BadRotation { location: String, degrees: u16 },

    #[error("{location}: category is empty")]
    EmptyCategory { location: String },

    #[error("{location}: skill level {level} is above 100")]
    SkillLevelOutOfRange { location: String, level: u8 },
}

fn format_languages(languages: &[Language]) -> String {
    languages
        .iter()
        .map(|lang| lang.code())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Default)]
struct Checker {
    issues: Vec<ContentIssue>,
}

impl Checker {
    fn localized<T>(&mut self, location: impl Into<String>, value: &Localized<T>) {
        let missing = value.missing_languages();
        if !missing.is_empty() {
            self.issues.push(ContentIssue::MissingTranslation {
                location: location.into(),
                missing,
            });
        }
    }

    fn optional<T>(&mut self, location: impl Into<String>, value: Option<&Localized<T>>) {
        if let Some(value) = value {
            self.localized(location, value);
        }
    }

    fn timeline(&mut self, section: &str, entries: &[TimelineEntry]) {
        for (idx, entry) in entries.iter().enumerate() {
            let at = format!("{section}[{idx}]");
            self.localized(format!("{at}.title"), &entry.title);
            self.localized(format!("{at}.period"), &entry.period);
            self.optional(format!("{at}.location"), entry.location.as_ref());
            self.optional(format!("{at}.details"), entry.details.as_ref());
        }
    }

    fn media(&mut self, section: &str, items: &[MediaItem]) {
        for (idx, item) in items.iter().enumerate() {
            let at = format!("{section}[{idx}]");
            self.localized(format!("{at}.title"), &item.title);
            self.optional(format!("{at}.description"), item.description.as_ref());
            if item.category.trim().is_empty() {
                self.issues.push(ContentIssue::EmptyCategory {
                    location: format!("{at}.category"),
                });
            }
        }
    }
}

/// Every authoring issue in `portfolio`, in document order
pub fn validate(portfolio: &Portfolio) -> Vec<ContentIssue> {
    let mut checker = Checker::default();

    let profile = &portfolio.profile;
    checker.localized("profile.headline", &profile.headline);
    checker.localized("profile.summary", &profile.summary);
    checker.localized("profile.location", &profile.location);
    checker.optional("profile.highlights", profile.highlights.as_ref());

    for (idx, stat) in portfolio.stats.iter().enumerate() {
        checker.localized(format!("stats[{idx}].label"), &stat.label);
    }

    let mut seen = HashSet::new();
    let panels = [
        ("navigation.left", &portfolio.navigation.left),
        ("navigation.right", &portfolio.navigation.right),
    ];
    for (panel, entries) in panels {
        for (idx, entry) in entries.iter().enumerate() {
            let at = format!("{panel}[{idx}]");
            if SectionId::from_key(&entry.section).is_none() {
                checker.issues.push(ContentIssue::UnknownSection {
                    location: at.clone(),
                    key: entry.section.clone(),
                });
            }
            if !seen.insert(entry.section.as_str()) {
                checker.issues.push(ContentIssue::DuplicateNavEntry {
                    key: entry.section.clone(),
                });
            }
            checker.localized(format!("{at}.label"), &entry.label);
            checker.optional(format!("{at}.description"), entry.description.as_ref());
        }
    }

    checker.timeline("education", &portfolio.education);
    checker.timeline("experience", &portfolio.experience);

    for (group_idx, group) in portfolio.skills.iter().enumerate() {
        let at = format!("skills[{group_idx}]");
        checker.localized(format!("{at}.name"), &group.name);
        for (idx, skill) in group.skills.iter().enumerate() {
            checker.localized(format!("{at}.skills[{idx}].name"), &skill.name);
            if skill.level > 100 {
                checker.issues.push(ContentIssue::SkillLevelOutOfRange {
                    location: format!("{at}.skills[{idx}]"),
                    level: skill.level,
                });
            }
        }
    }

    for (idx, certificate) in portfolio.certificates.iter().enumerate() {
        let at = format!("certificates[{idx}]");
        checker.localized(format!("{at}.title"), &certificate.title);
        checker.localized(format!("{at}.date"), &certificate.date);
        if certificate.rotation % ROTATION_STEP_DEGREES != 0 {
            checker.issues.push(ContentIssue::BadRotation {
                location: at,
                degrees: certificate.rotation,
            });
        }
    }

    for (idx, video) in portfolio.videos.iter().enumerate() {
        let at = format!("videos[{idx}]");
        checker.localized(format!("{at}.title"), &video.title);
        checker.optional(format!("{at}.description"), video.description.as_ref());
    }

    checker.media("gallery", &portfolio.gallery);
    checker.media("projects", &portfolio.projects);

    for (idx, reference) in portfolio.references.iter().enumerate() {
        let at = format!("references[{idx}]");
        checker.localized(format!("{at}.role"), &reference.role);
        checker.localized(format!("{at}.quote"), &reference.quote);
    }

    checker.localized("contact.location", &portfolio.contact.location);
    for (idx, link) in portfolio.contact.links.iter().enumerate() {
        checker.localized(format!("contact.links[{idx}].label"), &link.label);
    }

    checker.issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(navigation: &str, extra: &str) -> Portfolio {
        let json = format!(
            r#"{{
                "profile": {{
                    "name": "Jane Doe",
                    "headline": {{"en": "Engineer", "de": "Ingenieurin"}},
                    "summary": {{"en": "Builds things", "de": "Baut Dinge"}},
                    "location": "Berlin"
                }},
                "navigation": {navigation},
                "contact": {{"email": "jane@example.org", "location": "Berlin", "resume": "docs/resume.pdf"}}
                {extra}
            }}"#
        );
        Portfolio::from_json(&json).unwrap()
    }

    const NAV_OK: &str = r#"{
        "left": [{"section": "education", "label": {"en": "Education", "de": "Ausbildung"}}],
        "right": [{"section": "contact", "label": {"en": "Contact", "de": "Kontakt"}}]
    }"#;

    #[test]
    fn test_clean_content_has_no_issues() {
        assert_eq!(validate(&minimal(NAV_OK, "")), Vec::new());
    }

    #[test]
    fn test_unknown_and_duplicate_sections() {
        let nav = r#"{
            "left": [
                {"section": "experiance", "label": "Experience"},
                {"section": "contact", "label": "Contact"}
            ],
            "right": [{"section": "contact", "label": "Contact"}]
        }"#;
        let issues = validate(&minimal(nav, ""));
        assert_eq!(
            issues,
            vec![
                ContentIssue::UnknownSection {
                    location: "navigation.left[0]".to_string(),
                    key: "experiance".to_string(),
                },
                ContentIssue::DuplicateNavEntry {
                    key: "contact".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_missing_translation_is_reported_with_location() {
        let extra = r#",
            "experience": [{
                "title": {"en": "Developer"},
                "organization": "ACME",
                "period": "2020 - 2022"
            }]"#;
        let issues = validate(&minimal(NAV_OK, extra));
        assert_eq!(
            issues,
            vec![ContentIssue::MissingTranslation {
                location: "experience[0].title".to_string(),
                missing: vec![Language::De],
            }]
        );
        assert_eq!(
            issues[0].to_string(),
            "experience[0].title: missing translation for de"
        );
    }

    #[test]
    fn test_rotation_category_and_level_checks() {
        let extra = r#",
            "certificates": [{"title": "Scan", "issuer": "X", "date": "2020", "document": "a.png", "rotation": 45}],
            "projects": [{"title": "Logo", "category": " "}],
            "skills": [{"name": "Rust", "skills": [{"name": "async", "level": 120}]}]"#;
        let issues = validate(&minimal(NAV_OK, extra));
        assert!(issues.contains(&ContentIssue::BadRotation {
            location: "certificates[0]".to_string(),
            degrees: 45,
        }));
        assert!(issues.contains(&ContentIssue::EmptyCategory {
            location: "projects[0].category".to_string(),
        }));
        assert!(issues.contains(&ContentIssue::SkillLevelOutOfRange {
            location: "skills[0].skills[0]".to_string(),
            level: 120,
        }));
    }
}
