use super::view_model::use_login_view_model;
use crate::components::layout::ErrorMessage;
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-form-control-border placeholder-fg-muted text-fg rounded-md focus:outline-none focus:ring-action-primary-focus focus:border-action-primary-focus sm:text-sm";

#[component]
pub fn LoginPage() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();
    let email = vm.form.email;
    let password = vm.form.password;

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">"ログイン"</h2>
                <form class="mt-8 space-y-4" on:submit=on_submit>
                    <div>
                        <label for="email" class="sr-only">"メールアドレス"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            required
                            autocomplete="username"
                            class=INPUT_CLASS
                            placeholder="メールアドレス"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label for="password" class="sr-only">"パスワード"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            required
                            autocomplete="current-password"
                            class=INPUT_CLASS
                            placeholder="パスワード"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    {move || vm.error.get().map(|msg| view! { <ErrorMessage message=msg /> })}
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "ログイン中..." } else { "ログイン" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
