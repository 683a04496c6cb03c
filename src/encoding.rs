//! Character encoding detection and decoding.
//!
//! Raw page bytes are decoded to UTF-8 before parsing. The charset comes
//! from, in order: an explicit label (typically from a MIME type), a byte
//! order mark, a `<meta>` declaration in the first 1024 bytes, and finally
//! UTF-8. Undecodable bytes become U+FFFD.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// `<meta charset=...>` or the charset parameter of an http-equiv content type
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// `charset=` parameter of a MIME type
#[allow(clippy::expect_used)]
static MIME_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid regex")
});

/// Bytes scanned for a `<meta>` declaration.
const META_SCAN_LIMIT: usize = 1024;

/// Charset label carried by a MIME type such as `text/html; charset=koi8-r`.
#[must_use]
pub fn charset_from_mime(mime: &str) -> Option<&str> {
    MIME_CHARSET_RE
        .captures(mime)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Charset label declared in the document head.
#[must_use]
pub fn charset_from_meta(html: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&html[..html.len().min(META_SCAN_LIMIT)]);
    META_CHARSET_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Pick the encoding of `html`, preferring an explicit `declared` label.
///
/// Unknown labels are ignored and detection falls through to the next source.
#[must_use]
pub fn detect_encoding(html: &[u8], declared: Option<&str>) -> &'static Encoding {
    if let Some(encoding) = declared.and_then(|label| Encoding::for_label(label.trim().as_bytes())) {
        return encoding;
    }

    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    charset_from_meta(html)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode raw HTML bytes to a UTF-8 string.
///
/// # Examples
///
/// ```
/// use rs_readability::encoding::decode_html;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(decode_html(html, None).contains("Café"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8], declared: Option<&str>) -> String {
    let encoding = detect_encoding(html, declared);
    let (decoded, _had_errors) = encoding.decode_with_bom_removal(html);
    decoded.into_owned()
}
