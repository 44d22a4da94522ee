use headshot_logging::headshot_debug;
use scraper::{ElementRef, Html, Selector};

use crate::decode::decode_html;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },
}

/// A parsed HTML page. Parsing is lenient: broken markup and badly encoded
/// bytes still yield a tree.
pub struct PageDocument {
    html: Html,
}

impl PageDocument {
    /// Decode and parse a raw response body.
    pub fn parse(bytes: &[u8], content_type: Option<&str>) -> Self {
        let decoded = decode_html(bytes, content_type);
        if decoded.had_errors {
            headshot_debug!(
                "page is not valid {}, invalid bytes replaced",
                decoded.encoding_label
            );
        }
        Self::parse_str(&decoded.html)
    }

    pub fn parse_str(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// All elements matching `selector`, in document order.
    pub fn select(&self, selector: &str) -> Result<Vec<PageNode<'_>>, ParseError> {
        let compiled = compile(selector)?;
        Ok(self.html.select(&compiled).map(PageNode).collect())
    }

    /// The first element matching `selector`, if any.
    pub fn select_first(&self, selector: &str) -> Result<Option<PageNode<'_>>, ParseError> {
        let compiled = compile(selector)?;
        Ok(self.html.select(&compiled).next().map(PageNode))
    }
}

fn compile(selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|err| ParseError::InvalidSelector {
        selector: selector.to_string(),
        message: format!("{err:?}"),
    })
}

#[derive(Debug, Clone, Copy)]
pub struct PageNode<'a>(ElementRef<'a>);

impl<'a> PageNode<'a> {
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    /// Concatenated text of all descendants, untrimmed.
    pub fn text(&self) -> String {
        self.0.text().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <a class="playerName" href="/a">Ann <span>Lee</span></a>
        <a class="playerName">No Link</a>
        <p class="other">x</p>
    </body></html>"#;

    #[test]
    fn select_returns_matches_in_order() {
        let doc = PageDocument::parse_str(PAGE);
        let nodes = doc.select("a.playerName").unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].text(), "Ann Lee");
        assert_eq!(nodes[0].attr("href"), Some("/a"));
        assert_eq!(nodes[1].attr("href"), None);
    }

    #[test]
    fn select_with_no_match_is_empty() {
        let doc = PageDocument::parse_str(PAGE);
        assert!(doc.select("img.playerImage").unwrap().is_empty());
        assert!(doc.select_first("img.playerImage").unwrap().is_none());
    }

    #[test]
    fn unbalanced_markup_still_parses() {
        let doc = PageDocument::parse_str("<div><a class='playerName' href='/x'>X<div>");
        assert_eq!(doc.select("a.playerName").unwrap().len(), 1);
    }

    #[test]
    fn stray_byte_in_utf8_page_still_parses() {
        let doc = PageDocument::parse(
            b"<a class=\"playerName\" href=\"/p/1\">Jos\xe9 Sa</a>",
            Some("text/html; charset=utf-8"),
        );
        let nodes = doc.select("a.playerName").unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].text(), "Jos\u{FFFD} Sa");
        assert_eq!(nodes[0].attr("href"), Some("/p/1"));
    }

    #[test]
    fn bad_selector_is_reported() {
        let doc = PageDocument::parse_str(PAGE);
        let err = doc.select("a..b").err().unwrap();
        assert!(matches!(err, ParseError::InvalidSelector { .. }));
    }
}
