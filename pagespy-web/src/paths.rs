//! Fragment URLs that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/docs` for GitHub Pages),
/// fragment URLs are prefixed accordingly. Without it they stay relative to
/// the page, like a plain `fetch("sections/x.html")`.
#[must_use]
pub fn fragment_url(relative: &str) -> String {
    fragment_url_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

fn fragment_url_with_base(relative: &str, base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        rel.to_string()
    } else {
        format!("{base}/{rel}")
    }
}

#[cfg(test)]
mod tests {
    use super::fragment_url_with_base;

    #[test]
    fn stays_relative_without_base() {
        assert_eq!(
            fragment_url_with_base("sections/overview.html", ""),
            "sections/overview.html"
        );
        assert_eq!(
            fragment_url_with_base("/sections/overview.html", " "),
            "sections/overview.html"
        );
    }

    #[test]
    fn prefixes_public_base() {
        assert_eq!(
            fragment_url_with_base("sections/legal.html", "/docs/"),
            "/docs/sections/legal.html"
        );
    }
}
