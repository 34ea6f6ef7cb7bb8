//! Page parameter reader.
//!
//! The greeting is personalized through a single `name` query parameter. No
//! validation happens here: whatever the URL carries is rendered verbatim.

use crate::constants::{ABSENT_NAME, GREETING_LINE, NAME_INDENT, NAME_QUERY_KEY};
use url::Url;

/// Returns the first `name` query value of `href`, percent-decoded.
///
/// An href the URL parser rejects is treated like a missing parameter.
pub fn name_param(href: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    url.query_pairs()
        .find(|(k, _)| k == NAME_QUERY_KEY)
        .map(|(_, v)| v.into_owned())
}

/// Two-line greeting with the display name (or the absence marker) on the
/// second line.
pub fn greeting_text(name: Option<&str>) -> String {
    format!(
        "{}\n{}{}",
        GREETING_LINE,
        NAME_INDENT,
        name.unwrap_or(ABSENT_NAME)
    )
}
