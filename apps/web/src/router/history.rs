//! History mode selection and path normalization.

/// How the navigator tracks the address bar. Only `Browser` is used by this
/// application; `Hash` is the fragment-based fallback for hosts that cannot
/// rewrite URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Browser,
    Hash,
}

/// Reduce a raw location path to the canonical form stored in the route
/// table: query and fragment dropped, the deployment base prefix stripped,
/// trailing slash collapsed (except for the bare root), leading slash
/// guaranteed.
#[must_use]
pub fn normalize_path(raw: &str, base: &str) -> String {
    let path = raw.split(['?', '#']).next().unwrap_or("");
    let base = base.trim_end_matches('/');
    let path = if base.is_empty() {
        path
    } else {
        // only strip on a segment boundary
        match path.strip_prefix(base) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => path,
        }
    };
    let path = path.trim_end_matches('/');
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_path;

    #[test]
    fn strips_the_base_prefix() {
        assert_eq!(normalize_path("/login-practice/admin", "/login-practice/"), "/admin");
        assert_eq!(normalize_path("/login-practice/", "/login-practice/"), "/");
        assert_eq!(normalize_path("/login-practice", "/login-practice/"), "/");
    }

    #[test]
    fn leaves_paths_outside_the_base_alone() {
        assert_eq!(normalize_path("/other/admin", "/login-practice/"), "/other/admin");
        // prefix must end on a segment boundary
        assert_eq!(
            normalize_path("/login-practice-extra", "/login-practice/"),
            "/login-practice-extra"
        );
    }

    #[test]
    fn collapses_trailing_slash_except_for_root() {
        assert_eq!(normalize_path("/admin/", ""), "/admin");
        assert_eq!(normalize_path("/", ""), "/");
        assert_eq!(normalize_path("", ""), "/");
    }

    #[test]
    fn drops_query_and_fragment() {
        assert_eq!(normalize_path("/admin?tab=users", ""), "/admin");
        assert_eq!(normalize_path("/admin#section", ""), "/admin");
    }

    #[test]
    fn guarantees_a_leading_slash() {
        assert_eq!(normalize_path("admin", ""), "/admin");
    }
}
