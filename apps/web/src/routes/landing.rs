use crate::components::NavLink;
use leptos::prelude::*;

const CARD_CLASS: &str = "block p-6 bg-white border border-gray-200 rounded-lg shadow-sm hover:bg-gray-100";

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="max-w-screen-md mx-auto">
            <h1 class="text-3xl font-bold text-gray-900 mb-2">"Login Practice"</h1>
            <p class="text-gray-500 mb-8">
                "A playground for account creation and login flows."
            </p>
            <div class="grid gap-4 md:grid-cols-2">
                <NavLink href="/create-user" class=CARD_CLASS>
                    <h2 class="text-xl font-semibold mb-1">"Create account"</h2>
                    <p class="text-sm text-gray-500">"Register a new user."</p>
                </NavLink>
                <NavLink href="/one-step-login" class=CARD_CLASS>
                    <h2 class="text-xl font-semibold mb-1">"One-step login"</h2>
                    <p class="text-sm text-gray-500">"Email and password on a single form."</p>
                </NavLink>
                <NavLink href="/two-step-login" class=CARD_CLASS>
                    <h2 class="text-xl font-semibold mb-1">"Two-step login"</h2>
                    <p class="text-sm text-gray-500">"Identify first, authenticate second."</p>
                </NavLink>
                <NavLink href="/change-password" class=CARD_CLASS>
                    <h2 class="text-xl font-semibold mb-1">"Change password"</h2>
                    <p class="text-sm text-gray-500">"Rotate an existing credential."</p>
                </NavLink>
                <NavLink href="/admin" class=CARD_CLASS>
                    <h2 class="text-xl font-semibold mb-1">"Admin"</h2>
                    <p class="text-sm text-gray-500">"The page behind the login."</p>
                </NavLink>
            </div>
        </div>
    }
}
