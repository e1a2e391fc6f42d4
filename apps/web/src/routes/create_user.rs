use leptos::prelude::*;

/// Account creation form. Submission handling is out of scope for this
/// playground; the page exists to exercise navigation.
#[component]
pub fn CreateUserPage() -> impl IntoView {
    view! {
        <div class="max-w-sm mx-auto">
            <h1 class="text-2xl font-bold text-gray-900 mb-6">"Create account"</h1>
            <form on:submit=move |event| event.prevent_default()>
                <div class="mb-5">
                    <label for="email" class="block mb-2 text-sm font-medium text-gray-900">
                        "Email"
                    </label>
                    <input
                        type="email"
                        id="email"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5"
                        required
                    />
                </div>
                <div class="mb-5">
                    <label for="password" class="block mb-2 text-sm font-medium text-gray-900">
                        "Password"
                    </label>
                    <input
                        type="password"
                        id="password"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5"
                        required
                    />
                </div>
                <div class="mb-5">
                    <label for="confirm" class="block mb-2 text-sm font-medium text-gray-900">
                        "Confirm password"
                    </label>
                    <input
                        type="password"
                        id="confirm"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5"
                        required
                    />
                </div>
                <button
                    type="submit"
                    class="text-white bg-blue-700 hover:bg-blue-800 font-medium rounded-lg text-sm w-full px-5 py-2.5 text-center"
                >
                    "Create account"
                </button>
            </form>
        </div>
    }
}
