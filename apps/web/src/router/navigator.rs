//! Navigation controller bound to the browser history.
//!
//! The navigator keeps the current path in a signal so the view re-resolves
//! reactively: `push` updates the address bar without a document reload, and
//! popstate/hashchange events from back/forward navigation sync the signal
//! back from `window.location`.

use crate::router::history::{normalize_path, HistoryMode};
use crate::router::table::{Resolution, RouteTable};
use leptos::ev;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::JsValue;

/// Cheap to clone; all clones share the same table and current-path signal.
#[derive(Clone)]
pub struct Navigator {
    table: Arc<RouteTable>,
    mode: HistoryMode,
    base: Arc<str>,
    current: RwSignal<String>,
}

impl Navigator {
    /// Bind a table to the history mechanism. Seeds the current-path signal
    /// from `window.location`, which is the initial resolve.
    #[must_use]
    pub fn new(table: RouteTable, mode: HistoryMode, base: &str) -> Self {
        let initial = read_location(mode, base);
        Self {
            table: Arc::new(table),
            mode,
            base: Arc::from(base),
            current: RwSignal::new(initial),
        }
    }

    /// Resolve an arbitrary requested path.
    #[must_use]
    pub fn resolve(&self, requested: &str) -> Resolution {
        let base = match self.mode {
            HistoryMode::Browser => &self.base,
            // hash paths never carry the deployment prefix
            HistoryMode::Hash => "",
        };
        self.table.resolve(&normalize_path(requested, base))
    }

    /// Resolution for the path the address bar currently shows. Reactive:
    /// reading it inside a view tracks the current-path signal.
    #[must_use]
    pub fn current(&self) -> Resolution {
        self.table.resolve(&self.current.get())
    }

    /// Navigate programmatically without a document reload. `path` is a
    /// table path, without the deployment prefix.
    pub fn push(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        match self.mode {
            HistoryMode::Browser => {
                let href = format!("{}{path}", self.base.trim_end_matches('/'));
                if let Ok(history) = window.history() {
                    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&href));
                }
            }
            HistoryMode::Hash => {
                let _ = window.location().set_hash(path);
            }
        }
        self.current.set(normalize_path(path, ""));
    }

    /// Install the back/forward listener. Lives for the lifetime of the
    /// reactive owner that calls this, which for `App` is the whole session.
    pub fn mount(&self) {
        let navigator = self.clone();
        let _handle = match self.mode {
            HistoryMode::Browser => window_event_listener(ev::popstate, move |_| navigator.sync()),
            HistoryMode::Hash => window_event_listener(ev::hashchange, move |_| navigator.sync()),
        };
    }

    fn sync(&self) {
        self.current.set(read_location(self.mode, &self.base));
    }
}

fn read_location(mode: HistoryMode, base: &str) -> String {
    let Some(window) = web_sys::window() else {
        return "/".to_string();
    };
    let location = window.location();
    match mode {
        HistoryMode::Browser => {
            let path = location.pathname().unwrap_or_else(|_| "/".to_string());
            normalize_path(&path, base)
        }
        HistoryMode::Hash => {
            let hash = location.hash().unwrap_or_default();
            normalize_path(hash.trim_start_matches('#'), "")
        }
    }
}
