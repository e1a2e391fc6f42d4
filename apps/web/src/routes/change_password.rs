use leptos::prelude::*;

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    view! {
        <div class="max-w-sm mx-auto">
            <h1 class="text-2xl font-bold text-gray-900 mb-6">"Change password"</h1>
            <form on:submit=move |event| event.prevent_default()>
                <div class="mb-5">
                    <label for="current" class="block mb-2 text-sm font-medium text-gray-900">
                        "Current password"
                    </label>
                    <input
                        type="password"
                        id="current"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5"
                        required
                    />
                </div>
                <div class="mb-5">
                    <label for="new" class="block mb-2 text-sm font-medium text-gray-900">
                        "New password"
                    </label>
                    <input
                        type="password"
                        id="new"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5"
                        required
                    />
                </div>
                <button
                    type="submit"
                    class="text-white bg-blue-700 hover:bg-blue-800 font-medium rounded-lg text-sm w-full px-5 py-2.5 text-center"
                >
                    "Update password"
                </button>
            </form>
        </div>
    }
}
