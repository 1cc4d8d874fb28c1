//! Request path helpers.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

/// Drop the query string and fragment from a request target.
///
/// ```ignore
/// assert_eq!(strip_query_fragment("/en/blog/a?x=1#top"), "/en/blog/a");
/// ```
#[inline]
pub fn strip_query_fragment(target: &str) -> &str {
    let end = target.find(['?', '#']).unwrap_or(target.len());
    &target[..end]
}

/// Split a URL path into percent-decoded, non-empty segments.
///
/// Returns `None` when a segment does not decode to UTF-8.
pub fn decoded_segments(path: &str) -> Option<Vec<String>> {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|s| {
            percent_decode_str(s)
                .decode_utf8()
                .ok()
                .map(Cow::into_owned)
        })
        .collect()
}
