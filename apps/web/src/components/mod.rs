//! Shared UI components exported for routes.

pub(crate) mod layout;
pub(crate) mod nav_link;

pub(crate) use layout::AppShell;
pub(crate) use nav_link::NavLink;
