use crate::components::NavLink;
use leptos::prelude::*;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <div class="max-w-screen-md mx-auto">
            <h1 class="text-2xl font-bold text-gray-900 mb-2">"Admin"</h1>
            <p class="text-gray-500 mb-6">
                "The page a successful login would land on. No access control here; this playground has no backend."
            </p>
            <NavLink href="/change-password" class="text-blue-700 hover:underline text-sm">
                "Change password"
            </NavLink>
        </div>
    }
}
