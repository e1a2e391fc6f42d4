//! The route table: ordered path→view bindings with exact-match lookup.

/// Identifies a renderable page. Opaque to the router; mapping a variant to a
/// component happens in `app.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    CreateUser,
    OneStepLogin,
    TwoStepLogin,
    Admin,
    ChangePassword,
}

/// One path→view binding. Paths are literal, no dynamic segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub view: View,
}

/// Outcome of a lookup. The unmatched case is an explicit value so callers
/// must decide how to surface it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Matched(View),
    NotFound,
}

/// The fixed bindings for this application.
#[must_use]
pub fn build_routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry {
            path: "/",
            view: View::Landing,
        },
        RouteEntry {
            path: "/create-user",
            view: View::CreateUser,
        },
        RouteEntry {
            path: "/one-step-login",
            view: View::OneStepLogin,
        },
        RouteEntry {
            path: "/two-step-login",
            view: View::TwoStepLogin,
        },
        RouteEntry {
            path: "/admin",
            view: View::Admin,
        },
        RouteEntry {
            path: "/change-password",
            view: View::ChangePassword,
        },
    ]
}

/// Ordered sequence of entries, frozen at construction.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Paths must be unique within the sequence; lookup is first-match-wins,
    /// so with exact matching the order is immaterial in practice.
    #[must_use]
    pub fn new(entries: Vec<RouteEntry>) -> Self {
        debug_assert!(
            entries
                .iter()
                .enumerate()
                .all(|(i, a)| entries[..i].iter().all(|b| a.path != b.path)),
            "duplicate route path"
        );
        Self { entries }
    }

    /// Exact string match against the entry paths. Callers normalize the
    /// requested path first (see `history::normalize_path`).
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .map_or(Resolution::NotFound, |entry| Resolution::Matched(entry.view))
    }

    #[must_use]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_path_resolves_to_its_view() {
        let table = RouteTable::new(build_routes());

        for entry in table.entries().to_vec() {
            assert_eq!(table.resolve(entry.path), Resolution::Matched(entry.view));
        }
    }

    #[test]
    fn known_paths_resolve_to_the_expected_views() {
        let table = RouteTable::new(build_routes());

        assert_eq!(table.resolve("/"), Resolution::Matched(View::Landing));
        assert_eq!(
            table.resolve("/create-user"),
            Resolution::Matched(View::CreateUser)
        );
        assert_eq!(table.resolve("/admin"), Resolution::Matched(View::Admin));
        assert_eq!(
            table.resolve("/change-password"),
            Resolution::Matched(View::ChangePassword)
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        let table = RouteTable::new(build_routes());

        assert_eq!(table.resolve("/does-not-exist"), Resolution::NotFound);
        assert_eq!(table.resolve(""), Resolution::NotFound);
        assert_eq!(table.resolve("/admin/extra"), Resolution::NotFound);
        // exact match only, no prefix semantics
        assert_eq!(table.resolve("/create"), Resolution::NotFound);
    }

    #[test]
    fn route_paths_are_unique() {
        let entries = build_routes();

        for (index, entry) in entries.iter().enumerate() {
            assert!(
                entries[..index].iter().all(|other| other.path != entry.path),
                "duplicate path {}",
                entry.path
            );
        }
    }
}
