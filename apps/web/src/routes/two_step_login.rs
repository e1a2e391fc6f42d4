use leptos::prelude::*;

/// Two-step variant: the email step is shown first, the password step after.
/// Only the step switching lives here; verifying credentials is out of scope.
#[component]
pub fn TwoStepLoginPage() -> impl IntoView {
    let (email_entered, set_email_entered) = signal(false);

    view! {
        <div class="max-w-sm mx-auto">
            <h1 class="text-2xl font-bold text-gray-900 mb-6">"Sign in"</h1>
            <Show
                when=move || email_entered.get()
                fallback=move || {
                    view! {
                        <form on:submit=move |event| {
                            event.prevent_default();
                            set_email_entered.set(true);
                        }>
                            <div class="mb-5">
                                <label
                                    for="email"
                                    class="block mb-2 text-sm font-medium text-gray-900"
                                >
                                    "Email"
                                </label>
                                <input
                                    type="email"
                                    id="email"
                                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg block w-full p-2.5"
                                    required
                                />
                            </div>
                            <button
                                type="submit"
                                class="text-white bg-blue-700 hover:bg-blue-800 font-medium rounded-lg text-sm w-full px-5 py-2.5 text-center"
                            >
                                "Next"
                            </button>
                        </form>
                    }
                }
            >
                <form on:submit=move |event| event.prevent_default()>
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
                    <button
                        type="submit"
                        class="text-white bg-blue-700 hover:bg-blue-800 font-medium rounded-lg text-sm w-full px-5 py-2.5 text-center"
                    >
                        "Sign in"
                    </button>
                    <button
                        type="button"
                        class="mt-2 text-gray-900 bg-white border border-gray-200 hover:bg-gray-100 font-medium rounded-lg text-sm w-full px-5 py-2.5"
                        on:click=move |_| set_email_entered.set(false)
                    >
                        "Back"
                    </button>
                </form>
            </Show>
        </div>
    }
}
