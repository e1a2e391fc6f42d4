//! Client-side routing.
//!
//! # Data Flow
//! ```text
//! URL change (link activation, back/forward, programmatic push)
//!     → navigator.rs (history integration, current-path signal)
//!     → history.rs (path normalization)
//!     → table.rs (exact-match lookup)
//!     → Return: Matched(View) or NotFound
//! ```
//!
//! # Design Decisions
//! - The table is built once at bootstrap and immutable afterwards
//! - Exact string matching only, no wildcards or parameters
//! - An unmatched path is an explicit `NotFound`, never a silent default

pub mod history;
pub mod table;

#[cfg(target_arch = "wasm32")]
pub mod navigator;

pub use history::HistoryMode;
pub use table::{build_routes, Resolution, RouteEntry, RouteTable, View};

#[cfg(target_arch = "wasm32")]
pub use navigator::Navigator;
