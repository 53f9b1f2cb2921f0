//! Section registry
//!
//! The fixed set of portfolio sections that can be opened as an overlay.
//! Content refers to sections by string key; everything past the content
//! boundary uses [`SectionId`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Education,
    Experience,
    Skills,
    Certificates,
    Videos,
    Gallery,
    References,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 8] = [
        SectionId::Education,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Certificates,
        SectionId::Videos,
        SectionId::Gallery,
        SectionId::References,
        SectionId::Contact,
    ];

    /// Key used in the content document
    pub fn key(self) -> &'static str {
        match self {
            SectionId::Education => "education",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Certificates => "certificates",
            SectionId::Videos => "videos",
            SectionId::Gallery => "gallery",
            SectionId::References => "references",
            SectionId::Contact => "contact",
        }
    }

    /// Registered section for `key`, `None` if the key is unknown
    pub fn from_key(key: &str) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|id| id.key() == key)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section '{0}'")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::from_key(s).ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_section_parses_from_its_key() {
        for id in SectionId::ALL {
            assert_eq!(id.key().parse::<SectionId>(), Ok(id));
        }
    }

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = SectionId::ALL.iter().map(|id| id.key()).collect();
        assert_eq!(keys.len(), SectionId::ALL.len());
    }

    #[test]
    fn test_unregistered_key() {
        assert_eq!(SectionId::from_key("projects"), None);
        assert_eq!(SectionId::from_key("Experience"), None);
        assert_eq!(
            "experiance".parse::<SectionId>(),
            Err(UnknownSection("experiance".to_string()))
        );
    }
}
