use crate::config::ScrapeConfig;
use crate::document::{PageDocument, ParseError};
use crate::fetch::Fetcher;
use crate::FetchError;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("failed to fetch player page: {0}")]
    Fetch(#[from] FetchError),
    #[error("failed to parse player page: {0}")]
    Parse(#[from] ParseError),
    #[error("image url not found for player at {url}")]
    ImageNotFound { url: String },
}

/// Source URL of the first headshot element on a profile page, untouched.
pub fn extract_image_url(
    doc: &PageDocument,
    config: &ScrapeConfig,
) -> Result<Option<String>, ParseError> {
    Ok(doc
        .select_first(&config.image_selector)?
        .and_then(|img| img.attr(&config.image_src_attr))
        .map(str::to_string))
}

/// Fetch and parse a profile page, then pull the headshot URL out of it.
/// A missing headshot is reported against the URL the page was served from.
pub async fn fetch_image_url(
    fetcher: &dyn Fetcher,
    profile_url: &str,
    config: &ScrapeConfig,
) -> Result<String, ProfileError> {
    let page = fetcher.get(profile_url).await?;
    let doc = PageDocument::parse(&page.bytes, page.metadata.content_type.as_deref());
    extract_image_url(&doc, config)?.ok_or(ProfileError::ImageNotFound {
        url: page.metadata.final_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_wins() {
        let doc = PageDocument::parse_str(
            r#"<img class="playerImage" src="https://img.example.com/10.jpg">
               <img class="playerImage" src="https://img.example.com/11.jpg">"#,
        );
        let url = extract_image_url(&doc, &ScrapeConfig::default()).unwrap();
        assert_eq!(url.as_deref(), Some("https://img.example.com/10.jpg"));
    }

    #[test]
    fn image_without_src_counts_as_missing() {
        let doc = PageDocument::parse_str(r#"<img class="playerImage" data-src="x.jpg">"#);
        assert_eq!(extract_image_url(&doc, &ScrapeConfig::default()).unwrap(), None);
    }
}
