use chardetng::EncodingDetector;
use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHtml {
    pub html: String,
    pub encoding_label: &'static str,
    /// Some bytes were invalid and replaced with U+FFFD.
    pub had_errors: bool,
}

/// Decode a page body to UTF-8: BOM first, then the Content-Type charset,
/// then a chardetng guess. Invalid sequences become U+FFFD; this never fails.
pub fn decode_html(bytes: &[u8], content_type: Option<&str>) -> DecodedHtml {
    let encoding = detect_encoding(bytes, content_type);
    let (text, used, had_errors) = encoding.decode(bytes);
    DecodedHtml {
        html: text.into_owned(),
        encoding_label: used.name(),
        had_errors,
    }
}

fn detect_encoding(bytes: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }
    if let Some(encoding) = content_type
        .and_then(charset_param)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return encoding;
    }
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(['"', '\''].as_ref()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_is_read_case_insensitively() {
        assert_eq!(charset_param("text/html; Charset=\"latin1\""), Some("latin1"));
        assert_eq!(charset_param("text/html"), None);
    }

    #[test]
    fn header_charset_wins_over_detection() {
        let decoded = decode_html(b"caf\xe9", Some("text/html; charset=windows-1252"));
        assert_eq!(decoded.html, "café");
        assert_eq!(decoded.encoding_label, "windows-1252");
        assert!(!decoded.had_errors);
    }

    #[test]
    fn bom_wins_over_header() {
        let decoded = decode_html(b"\xEF\xBB\xBFok", Some("text/html; charset=latin1"));
        assert_eq!(decoded.html, "ok");
        assert_eq!(decoded.encoding_label, "UTF-8");
    }

    #[test]
    fn stray_byte_under_declared_utf8_is_replaced() {
        let decoded = decode_html(b"Jos\xe9 Sa", Some("text/html; charset=utf-8"));
        assert_eq!(decoded.html, "Jos\u{FFFD} Sa");
        assert_eq!(decoded.encoding_label, "UTF-8");
        assert!(decoded.had_errors);
    }
}
