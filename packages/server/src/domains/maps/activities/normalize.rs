//! URL normalization for user-supplied map links.

/// True if the URL is a Maps short link that needs a redirect to expand.
///
/// Only the host and path are inspected, so a short-link string inside a
/// query parameter does not count.
pub fn is_short_link(url: &str) -> bool {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let location = rest.split(['?', '#']).next().unwrap_or_default();
    let (host, path) = location.split_once('/').unwrap_or((location, ""));

    match host.to_ascii_lowercase().as_str() {
        "maps.app.goo.gl" => true,
        "goo.gl" => path == "maps" || path.starts_with("maps/"),
        _ => false,
    }
}

fn has_http_scheme(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Ensure an `http(s)://` scheme and strip tracking parameters from short links.
///
/// Short links are cut at whichever of `?` or `#` comes first. Never fails, and
/// applying it twice gives the same result as applying it once.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();

    let mut url = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    if is_short_link(&url) {
        if let Some(cut) = url.find(['?', '#']) {
            url.truncate(cut);
        }
    }

    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_https_when_scheme_missing() {
        assert_eq!(
            normalize_url("www.google.com/maps/@7.99,98.32,17z"),
            "https://www.google.com/maps/@7.99,98.32,17z"
        );
    }

    #[test]
    fn keeps_existing_scheme() {
        assert_eq!(
            normalize_url("http://maps.google.com/?q=1,2"),
            "http://maps.google.com/?q=1,2"
        );
        assert_eq!(
            normalize_url("HTTPS://www.google.com/maps"),
            "HTTPS://www.google.com/maps"
        );
    }

    #[test]
    fn short_link_query_and_fragment_stripped() {
        assert_eq!(
            normalize_url("maps.app.goo.gl/abc?z=1#frag"),
            "https://maps.app.goo.gl/abc"
        );
        assert_eq!(
            normalize_url("https://maps.app.goo.gl/abc#frag?g_st=ic"),
            "https://maps.app.goo.gl/abc"
        );
        assert_eq!(
            normalize_url("https://goo.gl/maps/xyz?g_st=iw"),
            "https://goo.gl/maps/xyz"
        );
    }

    #[test]
    fn long_links_keep_query() {
        let url = "https://www.google.com/maps/search/?api=1&query=1,2#top";
        assert_eq!(normalize_url(url), url);
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(
            normalize_url("  maps.app.goo.gl/abc \n"),
            "https://maps.app.goo.gl/abc"
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = [
            "maps.app.goo.gl/abc?z=1#frag",
            "https://www.google.com/maps/@7.998158,98.3251492,17z",
            "goo.gl/maps/xyz#a",
            "google.com/maps?q=Patong+Beach",
            "",
        ];
        for input in inputs {
            let once = normalize_url(input);
            assert_eq!(normalize_url(&once), once, "input: {}", input);
        }
    }

    #[test]
    fn detects_short_links() {
        assert!(is_short_link("https://maps.app.goo.gl/xyz123"));
        assert!(is_short_link("https://goo.gl/maps/xyz123"));
        assert!(!is_short_link("https://www.google.com/maps/@1,2,3z"));
        assert!(!is_short_link("https://goo.gl/other"));
        assert!(is_short_link("maps.app.goo.gl/xyz123"));
    }

    #[test]
    fn short_link_text_in_query_is_not_a_short_link() {
        let url = "https://www.google.com/maps?q=Patong&ref=goo.gl/maps";
        assert!(!is_short_link(url));
        assert_eq!(normalize_url(url), url);
        assert!(!is_short_link("https://www.google.com/maps#maps.app.goo.gl"));
    }
}
