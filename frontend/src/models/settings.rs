use serde::Deserialize;

use crate::config;
use crate::models::remote::Remote;

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct SiteSettings {
    #[serde(default)]
    pub hero_badge_text: Option<String>,
}

/// Badge text for the hero; anything short of a loaded, non-empty value falls back.
pub fn badge_text(settings: &Remote<SiteSettings>) -> &str {
    settings
        .loaded()
        .and_then(|s| s.hero_badge_text.as_deref())
        .filter(|text| !text.is_empty())
        .unwrap_or(config::DEFAULT_HERO_BADGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(text: Option<&str>) -> Remote<SiteSettings> {
        Remote::Loaded(SiteSettings {
            hero_badge_text: text.map(str::to_string),
        })
    }

    #[test]
    fn configured_badge_wins() {
        assert_eq!(badge_text(&loaded(Some("Research Use Only"))), "Research Use Only");
    }

    #[test]
    fn falls_back_when_missing_or_unavailable() {
        assert_eq!(badge_text(&loaded(None)), "Advanced Peptide Science");
        assert_eq!(badge_text(&loaded(Some(""))), "Advanced Peptide Science");
        assert_eq!(badge_text(&Remote::Loading), "Advanced Peptide Science");
        assert_eq!(
            badge_text(&Remote::Failed("HTTP 404".into())),
            "Advanced Peptide Science"
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let settings: SiteSettings =
            serde_json::from_str(r#"{"hero_badge_text":"New Batch","store_name":"PeptidePro"}"#)
                .unwrap();
        assert_eq!(settings.hero_badge_text.as_deref(), Some("New Batch"));

        let empty: SiteSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, SiteSettings::default());
    }
}
