//! URL helpers for query parameters and full-page redirects

use web_sys::window;

/// Extract a query parameter from a raw `location.search` string.
///
/// Kept separate from the browser lookup so the parsing is testable.
pub fn parse_query_param(search: &str, key: &str) -> Option<String> {
    let query_string = search.strip_prefix('?').unwrap_or(search);
    if query_string.is_empty() {
        return None;
    }

    for pair in query_string.split('&') {
        match pair.find('=') {
            Some(equal_pos) => {
                let param_key = &pair[..equal_pos];
                let param_value = &pair[equal_pos + 1..];
                if param_key == key {
                    return Some(
                        urlencoding::decode(param_value)
                            .unwrap_or_else(|_| param_value.into())
                            .into_owned(),
                    );
                }
            }
            // key present with no value
            None => {
                if pair == key {
                    return Some(String::new());
                }
            }
        }
    }

    None
}

/// Read a query parameter directly from `window.location.search`.
///
/// Fallback for when the router's query map is not initialized yet
/// (e.g. the OAuth callback landing straight from the provider redirect).
pub fn get_query_param(key: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    parse_query_param(&search, key)
}

/// Full-page navigation, leaving the SPA entirely (OAuth authorization hop).
pub fn redirect_to(url: &str) {
    if let Some(window) = window() {
        if window.location().set_href(url).is_err() {
            log::error!("redirect to {} failed", url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_param_in_search_string() {
        assert_eq!(
            parse_query_param("?code=abc123&state=xyz", "code").as_deref(),
            Some("abc123")
        );
        assert_eq!(
            parse_query_param("?code=abc123&state=xyz", "state").as_deref(),
            Some("xyz")
        );
    }

    #[test]
    fn missing_param_is_none() {
        assert_eq!(parse_query_param("?code=abc", "state"), None);
        assert_eq!(parse_query_param("", "code"), None);
        assert_eq!(parse_query_param("?", "code"), None);
    }

    #[test]
    fn decodes_url_encoding() {
        assert_eq!(
            parse_query_param("?next=%2Fdashboard%3Ftab%3Dcost", "next").as_deref(),
            Some("/dashboard?tab=cost")
        );
    }

    #[test]
    fn valueless_key_yields_empty_string() {
        assert_eq!(parse_query_param("?debug&code=x", "debug").as_deref(), Some(""));
    }

    #[test]
    fn works_without_leading_question_mark() {
        assert_eq!(parse_query_param("a=1&b=2", "b").as_deref(), Some("2"));
    }
}
