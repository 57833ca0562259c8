//! URL normalization and meta description extraction.

use scraper::{Html, Selector};

/// Prefix `http://` onto URLs that name no scheme.
///
/// Only a leading `scheme://` counts; a `://` later in the path or query
/// does not.
pub fn normalize_url(raw: &str) -> String {
    if has_scheme(raw) {
        raw.to_string()
    } else {
        format!("http://{raw}")
    }
}

// RFC 3986: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) followed by "://".
fn has_scheme(raw: &str) -> bool {
    let Some((scheme, _)) = raw.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Content of the first `<meta name="description">` tag, if it has a
/// non-empty `content` attribute. The value is returned as written.
pub fn extract_meta_description(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(r#"meta[name="description"]"#).ok()?;
    let element = document.select(&selector).next()?;
    element
        .value()
        .attr("content")
        .filter(|content| !content.is_empty())
        .map(String::from)
}
