use crate::{
    constants::{DEFAULT_API_BASE_URL, DEFAULT_API_PATH},
    error::ConfigError,
};
use lazy_regex::regex_is_match;
use log::debug;
use std::borrow::Cow;
use url::Url;

/// Normalizes an explicit API base URL.
///
/// If `value` has no scheme then `https://` is assumed. If the URL's path is empty or `/`, it is
/// replaced with `/api/v2`. Any other path is kept, minus its trailing slashes. The query string
/// and fragment are always removed. Empty or whitespace-only input gives the default base URL.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidUrl`] if the value can't be parsed as a URL.
pub fn normalize_base_url(value: &str) -> Result<String, ConfigError> {
    let raw = trim_blank(value);
    if raw.is_empty() {
        return Ok(DEFAULT_API_BASE_URL.to_string());
    }

    let mut url = parse_with_scheme(raw)?;
    let path = url.path().trim_end_matches('/').to_string();
    if path.is_empty() {
        url.set_path(DEFAULT_API_PATH);
    } else {
        url.set_path(&path);
    }

    Ok(into_base_url_string(url))
}

/// Normalizes hostname-style configuration like `codecov.example.com`.
///
/// This works like [`normalize_base_url`] except that the path is always replaced with
/// `/api/v2`, whatever was given.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidUrl`] if the hostname can't be parsed as part of a URL.
pub fn normalize_hostname(hostname: &str) -> Result<String, ConfigError> {
    let raw = trim_blank(hostname);
    if raw.is_empty() {
        return Ok(DEFAULT_API_BASE_URL.to_string());
    }

    let mut url = parse_with_scheme(raw)?;
    url.set_path(DEFAULT_API_PATH);

    Ok(into_base_url_string(url))
}

/// Picks the API base URL from a base URL and a hostname. A base URL that isn't blank always
/// wins. A hostname is only used when there is no base URL. If neither is set, the result is
/// [`DEFAULT_API_BASE_URL`].
///
/// # Errors
///
/// Returns [`ConfigError::InvalidUrl`] if the chosen input can't be parsed as a URL.
pub fn resolve_api_base_url(
    base_url: Option<&str>,
    hostname: Option<&str>,
) -> Result<String, ConfigError> {
    let chosen = if let Some(base_url) = base_url.map(trim_blank).filter(|u| !u.is_empty()) {
        debug!("Using the configured API base URL `{base_url}`.");
        base_url.to_string()
    } else if let Some(hostname) = hostname.filter(|h| !h.is_empty()) {
        debug!("Using the configured API hostname `{hostname}`.");
        normalize_hostname(hostname)?
    } else {
        debug!("No API base URL or hostname given, using the default.");
        DEFAULT_API_BASE_URL.to_string()
    };

    let base_url = normalize_base_url(&chosen)?;
    debug!("API base URL is `{base_url}`.");
    Ok(base_url)
}

// Blank means whitespace or a byte order mark.
fn trim_blank(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

fn has_scheme(raw: &str) -> bool {
    regex_is_match!(r"^[a-zA-Z][a-zA-Z0-9+\-.]*://", raw)
}

fn parse_with_scheme(raw: &str) -> Result<Url, ConfigError> {
    let with_scheme = if has_scheme(raw) {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(format!("https://{raw}"))
    };

    Url::parse(&with_scheme).map_err(|source| ConfigError::InvalidUrl {
        input: raw.to_string(),
        source,
    })
}

fn into_base_url_string(mut url: Url) -> String {
    url.set_query(None);
    url.set_fragment(None);
    url.as_str().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::empty("")]
    #[case::spaces("   ")]
    #[case::tabs_and_newlines("\t\n ")]
    #[case::byte_order_mark("\u{FEFF}")]
    #[case::byte_order_mark_and_spaces(" \u{FEFF} ")]
    fn blank_input_is_default(#[case] input: &str) -> Result<(), ConfigError> {
        assert_eq!(normalize_base_url(input)?, DEFAULT_API_BASE_URL);
        assert_eq!(normalize_hostname(input)?, DEFAULT_API_BASE_URL);
        Ok(())
    }

    #[rstest]
    #[case::bare_host("codecov.example.com", "https://codecov.example.com/api/v2")]
    #[case::keeps_http_scheme("http://codecov.example.com", "http://codecov.example.com/api/v2")]
    #[case::surrounding_whitespace(
        "  codecov.example.com \n",
        "https://codecov.example.com/api/v2"
    )]
    #[case::replaces_path(
        "https://codecov.example.com/custom/path/",
        "https://codecov.example.com/api/v2"
    )]
    #[case::drops_query_and_fragment(
        "codecov.example.com/?foo=bar#frag",
        "https://codecov.example.com/api/v2"
    )]
    #[case::keeps_port("codecov.example.com:8443", "https://codecov.example.com:8443/api/v2")]
    fn hostname(#[case] input: &str, #[case] expect: &str) -> Result<(), ConfigError> {
        assert_eq!(normalize_hostname(input)?, expect);
        Ok(())
    }

    #[rstest]
    #[case::root_path("https://codecov.example.com", "https://codecov.example.com/api/v2")]
    #[case::slash_path("https://codecov.example.com/", "https://codecov.example.com/api/v2")]
    #[case::many_slashes("https://codecov.example.com//", "https://codecov.example.com/api/v2")]
    #[case::no_scheme("codecov.example.com", "https://codecov.example.com/api/v2")]
    #[case::keeps_custom_path(
        "https://codecov.example.com/custom/path/",
        "https://codecov.example.com/custom/path"
    )]
    #[case::keeps_api_path(
        "https://codecov.example.com/api/v2",
        "https://codecov.example.com/api/v2"
    )]
    #[case::drops_query_and_fragment(
        "https://codecov.example.com/api/v2?foo=bar#frag",
        "https://codecov.example.com/api/v2"
    )]
    #[case::drops_query_on_root(
        "https://codecov.example.com/?x=1",
        "https://codecov.example.com/api/v2"
    )]
    #[case::keeps_http_and_port(
        "http://localhost:8080/codecov/api/v2/",
        "http://localhost:8080/codecov/api/v2"
    )]
    #[case::lowercases_host("https://Codecov.Example.COM", "https://codecov.example.com/api/v2")]
    fn base_url(#[case] input: &str, #[case] expect: &str) -> Result<(), ConfigError> {
        assert_eq!(normalize_base_url(input)?, expect);
        Ok(())
    }

    #[rstest]
    #[case::empty_host("http://")]
    #[case::empty_https_host("https://")]
    #[case::space_in_host("codecov example.com")]
    #[case::space_in_host_with_scheme("https://codecov example.com")]
    #[case::bad_port("https://codecov.example.com:99999")]
    #[case::non_numeric_port("codecov.example.com:port")]
    fn malformed_input_fails(#[case] input: &str) {
        for res in [normalize_base_url(input), normalize_hostname(input)] {
            assert!(
                matches!(
                    &res,
                    Err(ConfigError::InvalidUrl { input: i, .. }) if i == trim_blank(input)
                ),
                "{input:?} was rejected, got {res:?}",
            );
        }
    }

    #[rstest]
    #[case("codecov.example.com")]
    #[case("https://codecov.example.com/custom/path/")]
    #[case("http://localhost:8080/?q=1#f")]
    #[case("")]
    fn normalizing_is_idempotent(#[case] input: &str) -> Result<(), ConfigError> {
        let once = normalize_base_url(input)?;
        assert_eq!(normalize_base_url(&once)?, once);

        let once = normalize_hostname(input)?;
        assert_eq!(normalize_hostname(&once)?, once);
        assert_eq!(normalize_base_url(&once)?, once);

        Ok(())
    }

    #[rstest]
    #[case::nothing_set(None, None, DEFAULT_API_BASE_URL)]
    #[case::both_blank(Some("  "), Some(""), DEFAULT_API_BASE_URL)]
    #[case::blank_hostname(None, Some("  "), DEFAULT_API_BASE_URL)]
    #[case::base_url_only(
        Some("https://codecov.example.com/custom/"),
        None,
        "https://codecov.example.com/custom"
    )]
    #[case::hostname_only(None, Some("codecov.example.com"), "https://codecov.example.com/api/v2")]
    #[case::base_url_wins(
        Some("https://primary.example.com"),
        Some("secondary.example.com"),
        "https://primary.example.com/api/v2"
    )]
    #[case::byte_order_mark_base_url_falls_back_to_hostname(
        Some("\u{FEFF}"),
        Some("codecov.example.com"),
        "https://codecov.example.com/api/v2"
    )]
    #[case::byte_order_mark_everywhere(Some("\u{FEFF}"), Some("\u{FEFF}"), DEFAULT_API_BASE_URL)]
    #[case::blank_base_url_falls_back_to_hostname(
        Some(" "),
        Some("secondary.example.com/ignored"),
        "https://secondary.example.com/api/v2"
    )]
    fn resolve(
        #[case] base_url: Option<&str>,
        #[case] hostname: Option<&str>,
        #[case] expect: &str,
    ) -> Result<(), ConfigError> {
        assert_eq!(resolve_api_base_url(base_url, hostname)?, expect);
        Ok(())
    }

    #[rstest]
    #[case::https("https://codecov.example.com")]
    #[case::http("http://codecov.example.com")]
    #[case::compound_scheme("git+ssh://codecov.example.com")]
    #[case::digits_and_dots("a1.b-c://codecov.example.com")]
    fn detects_scheme(#[case] input: &str) {
        assert!(has_scheme(input), "{input:?} has a scheme");
    }

    #[rstest]
    #[case::bare_host("codecov.example.com")]
    #[case::host_and_port("codecov.example.com:8443")]
    #[case::leading_digit("1http://codecov.example.com")]
    #[case::non_ascii_digit("a\u{0661}://codecov.example.com")]
    #[case::no_slashes("mailto:someone@example.com")]
    fn detects_missing_scheme(#[case] input: &str) {
        assert!(!has_scheme(input), "{input:?} has no scheme");
    }

    #[test_log::test]
    fn resolve_does_not_fall_back_on_bad_base_url() {
        let res = resolve_api_base_url(Some("http://"), Some("codecov.example.com"));
        assert!(matches!(res, Err(ConfigError::InvalidUrl { .. })));
    }
}
