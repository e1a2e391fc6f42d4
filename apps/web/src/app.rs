use crate::app_lib::config::AppConfig;
use crate::components::AppShell;
use crate::router::{build_routes, HistoryMode, Navigator, Resolution, RouteTable, View};
use crate::routes::{
    AdminPage, ChangePasswordPage, CreateUserPage, LandingPage, NotFoundPage, OneStepLoginPage,
    TwoStepLoginPage,
};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    let navigator = Navigator::new(
        RouteTable::new(build_routes()),
        HistoryMode::Browser,
        &config.base_path,
    );
    navigator.mount();
    provide_context(navigator.clone());

    view! {
        <AppShell>
            {move || match navigator.current() {
                Resolution::Matched(View::Landing) => view! { <LandingPage /> }.into_any(),
                Resolution::Matched(View::CreateUser) => view! { <CreateUserPage /> }.into_any(),
                Resolution::Matched(View::OneStepLogin) => {
                    view! { <OneStepLoginPage /> }.into_any()
                }
                Resolution::Matched(View::TwoStepLogin) => {
                    view! { <TwoStepLoginPage /> }.into_any()
                }
                Resolution::Matched(View::Admin) => view! { <AdminPage /> }.into_any(),
                Resolution::Matched(View::ChangePassword) => {
                    view! { <ChangePasswordPage /> }.into_any()
                }
                Resolution::NotFound => view! { <NotFoundPage /> }.into_any(),
            }}
        </AppShell>
    }
}
