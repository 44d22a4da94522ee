use std::path::PathBuf;

use crate::fetch::FetchSettings;

pub const DEFAULT_ORIGIN: &str = "https://www.premierleague.com";
pub const LISTING_PATH: &str = "/players";
pub const DEFAULT_OUTPUT_DIR: &str = "player_headshots";

/// Everything a run needs to know. There are no flags or config files;
/// the binary always uses `ScrapeConfig::default()`.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub listing_url: String,
    /// Prefixed onto each relative profile href.
    pub origin: String,
    pub player_selector: String,
    pub profile_link_attr: String,
    pub image_selector: String,
    pub image_src_attr: String,
    pub output_dir: PathBuf,
    pub image_extension: String,
    pub fetch: FetchSettings,
}

impl ScrapeConfig {
    /// Default selectors against another site, listing at `{origin}/players`.
    pub fn for_origin(origin: impl Into<String>, output_dir: PathBuf) -> Self {
        let origin = origin.into();
        Self {
            listing_url: format!("{origin}{LISTING_PATH}"),
            origin,
            output_dir,
            ..Self::default()
        }
    }
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            listing_url: format!("{DEFAULT_ORIGIN}{LISTING_PATH}"),
            origin: DEFAULT_ORIGIN.to_string(),
            player_selector: "a.playerName".to_string(),
            profile_link_attr: "href".to_string(),
            image_selector: "img.playerImage".to_string(),
            image_src_attr: "src".to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            image_extension: "jpg".to_string(),
            fetch: FetchSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_premier_league() {
        let config = ScrapeConfig::default();
        assert_eq!(config.listing_url, "https://www.premierleague.com/players");
        assert!(config.fetch.request_timeout.is_none());
    }

    #[test]
    fn for_origin_derives_listing_url() {
        let config = ScrapeConfig::for_origin("http://127.0.0.1:9000", PathBuf::from("out"));
        assert_eq!(config.listing_url, "http://127.0.0.1:9000/players");
        assert_eq!(config.origin, "http://127.0.0.1:9000");
        assert_eq!(config.player_selector, "a.playerName");
    }
}
