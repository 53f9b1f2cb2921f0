//! UI chrome catalog
//!
//! Button labels, headings and fallback messages that are part of the viewer
//! itself rather than of the portfolio content. Lookup is a linear scan over
//! a few dozen keys, done a handful of times per frame.
//!
//! Adding a key: add the English entry to `EN`, then the German one to `DE`.

use super::Language;

const EN: &[(&str, &str)] = &[
    ("action.close", "Close"),
    ("action.back", "Back"),
    ("action.open_external", "Open externally"),
    ("filter.all", "All"),
    ("stats.heading", "At a glance"),
    ("stats.show", "Show details"),
    ("stats.hide", "Hide details"),
    ("nav.left.heading", "About"),
    ("nav.right.heading", "Work"),
    ("preview.skills", "Core skills"),
    ("preview.projects", "Projects"),
    ("media.loading", "Loading…"),
    ("media.failed", "This file could not be loaded."),
    ("media.no_preview", "No preview available for this file type."),
    ("gallery.visit", "Visit"),
    ("videos.play", "Play"),
    ("videos.player_hint", "Videos open in your system player."),
    ("certificates.view", "View certificate"),
    ("certificates.issued_by", "Issued by"),
    ("contact.email", "Email"),
    ("contact.phone", "Phone"),
    ("contact.location", "Location"),
    ("contact.links", "Profiles"),
    ("contact.resume", "Show resume"),
    ("contact.resume_title", "Resume"),
    ("references.contact", "Contact"),
    ("hint.cancel", "Press Esc to close"),
];

const DE: &[(&str, &str)] = &[
    ("action.close", "Schließen"),
    ("action.back", "Zurück"),
    ("action.open_external", "Extern öffnen"),
    ("filter.all", "Alle"),
    ("stats.heading", "Auf einen Blick"),
    ("stats.show", "Details anzeigen"),
    ("stats.hide", "Details ausblenden"),
    ("nav.left.heading", "Über mich"),
    ("nav.right.heading", "Arbeiten"),
    ("preview.skills", "Kernkompetenzen"),
    ("preview.projects", "Projekte"),
    ("media.loading", "Wird geladen…"),
    ("media.failed", "Diese Datei konnte nicht geladen werden."),
    ("media.no_preview", "Für diesen Dateityp ist keine Vorschau verfügbar."),
    ("gallery.visit", "Besuchen"),
    ("videos.play", "Abspielen"),
    ("videos.player_hint", "Videos werden im Systemplayer geöffnet."),
    ("certificates.view", "Zertifikat ansehen"),
    ("certificates.issued_by", "Ausgestellt von"),
    ("contact.email", "E-Mail"),
    ("contact.phone", "Telefon"),
    ("contact.location", "Standort"),
    ("contact.links", "Profile"),
    ("contact.resume", "Lebenslauf anzeigen"),
    ("contact.resume_title", "Lebenslauf"),
    ("references.contact", "Kontakt"),
    ("hint.cancel", "Esc zum Schließen"),
];

fn catalog_for(lang: Language) -> &'static [(&'static str, &'static str)] {
    match lang {
        Language::En => EN,
        Language::De => DE,
    }
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Look up a UI string.
///
/// Falls back to English when the key is missing in `lang`, and to the key
/// itself when English lacks it too.
pub fn t<'a>(lang: Language, key: &'a str) -> &'a str {
    lookup(catalog_for(lang), key)
        .or_else(|| lookup(catalog_for(Language::FALLBACK), key))
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_per_language() {
        assert_eq!(t(Language::En, "action.close"), "Close");
        assert_eq!(t(Language::De, "action.close"), "Schließen");
    }

    #[test]
    fn test_unknown_key_returns_key() {
        assert_eq!(t(Language::De, "nonexistent.key"), "nonexistent.key");
    }

    #[test]
    fn test_catalogs_have_same_keys() {
        assert_eq!(EN.len(), DE.len(), "DE catalog key count mismatch");
        for (key, _) in EN {
            assert!(lookup(DE, key).is_some(), "DE catalog lacks {key}");
        }
    }
}
