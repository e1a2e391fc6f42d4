#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod router;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
use crate::app::App;
#[cfg(target_arch = "wasm32")]
use leptos::prelude::mount_to_body;
#[cfg(target_arch = "wasm32")]
pub fn main() {
    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
