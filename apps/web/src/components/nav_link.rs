use crate::router::Navigator;
use leptos::prelude::*;

/// Anchor that routes through the navigator instead of triggering a full
/// document load. Modified clicks (new tab, etc.) keep the default behavior.
#[component]
pub fn NavLink(
    href: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let navigator = expect_context::<Navigator>();

    view! {
        <a
            href=href
            class=class
            on:click=move |event| {
                if event.ctrl_key() || event.meta_key() || event.shift_key() {
                    return;
                }
                event.prevent_default();
                navigator.push(href);
            }
        >
            {children()}
        </a>
    }
}
