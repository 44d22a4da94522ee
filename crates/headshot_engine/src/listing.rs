use url::Url;

use crate::config::ScrapeConfig;
use crate::document::{PageDocument, ParseError};
use crate::PlayerEntry;

/// A listing anchor that could not be turned into an entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListingWarning {
    #[error("Player link not found for item {index}")]
    MissingHref { index: usize },
    #[error("Invalid profile url for item {index}: {url}")]
    InvalidProfileUrl { index: usize, url: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingExtract {
    pub entries: Vec<PlayerEntry>,
    pub warnings: Vec<ListingWarning>,
}

/// Collect every player anchor on the listing page. Bad anchors become
/// warnings; the rest of the listing is still returned.
pub fn extract_players(
    doc: &PageDocument,
    config: &ScrapeConfig,
) -> Result<ListingExtract, ParseError> {
    let mut extract = ListingExtract::default();
    for (index, anchor) in doc.select(&config.player_selector)?.into_iter().enumerate() {
        let Some(href) = anchor.attr(&config.profile_link_attr) else {
            extract.warnings.push(ListingWarning::MissingHref { index });
            continue;
        };
        match resolve_profile_url(&config.origin, href) {
            Some(profile_url) => extract.entries.push(PlayerEntry {
                name: anchor.text().trim().to_string(),
                profile_url,
            }),
            None => extract.warnings.push(ListingWarning::InvalidProfileUrl {
                index,
                url: format!("{}{}", config.origin, href),
            }),
        }
    }
    Ok(extract)
}

/// Prefix the site origin onto a relative href. The joined string is kept
/// as-is; it only has to parse as an absolute URL.
pub fn resolve_profile_url(origin: &str, href: &str) -> Option<String> {
    let joined = format!("{origin}{href}");
    Url::parse(&joined).ok().map(|_| joined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config() -> ScrapeConfig {
        ScrapeConfig {
            origin: "https://example.com".to_string(),
            ..ScrapeConfig::default()
        }
    }

    #[test]
    fn resolves_relative_href_against_origin() {
        let doc = PageDocument::parse_str(
            r#"<ul><li><a class="playerName" href="/players/10/john-smith/overview">John Smith</a></li></ul>"#,
        );
        let extract = extract_players(&doc, &config()).unwrap();
        assert_eq!(
            extract.entries,
            vec![PlayerEntry {
                name: "John Smith".to_string(),
                profile_url: "https://example.com/players/10/john-smith/overview".to_string(),
            }]
        );
        assert!(extract.warnings.is_empty());
    }

    #[test]
    fn anchors_without_href_are_skipped_with_warning() {
        let doc = PageDocument::parse_str(
            r#"<a class="playerName" href="/p/1">One</a>
               <a class="playerName">Two</a>
               <a class="playerName" href="/p/3">Three</a>
               <a class="playerName">Four</a>
               <a class="coach" href="/c/1">Coach</a>"#,
        );
        let extract = extract_players(&doc, &config()).unwrap();
        let names: Vec<_> = extract.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["One", "Three"]);
        assert_eq!(
            extract.warnings,
            vec![
                ListingWarning::MissingHref { index: 1 },
                ListingWarning::MissingHref { index: 3 },
            ]
        );
    }

    #[test]
    fn duplicate_names_are_kept() {
        let doc = PageDocument::parse_str(
            r#"<a class="playerName" href="/p/1">Sam</a><a class="playerName" href="/p/2">Sam</a>"#,
        );
        let extract = extract_players(&doc, &config()).unwrap();
        assert_eq!(extract.entries.len(), 2);
    }

    #[test]
    fn unparseable_join_is_a_warning() {
        assert_eq!(resolve_profile_url("not a url", "/x"), None);
        assert_eq!(
            resolve_profile_url("https://example.com", "/x"),
            Some("https://example.com/x".to_string())
        );
    }
}
