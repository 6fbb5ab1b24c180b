use crate::{
    api::ApiError,
    state::session::{use_logout_action, use_session},
    utils::navigation,
};
use leptos::*;

const NAV_LINK_CLASS: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Header() -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let is_admin = move || state.with(|s| s.is_admin());
    let company_name = move || {
        state.with(|s| {
            s.profile()
                .and_then(|p| p.company_name())
                .unwrap_or_default()
                .to_string()
        })
    };
    let email = move || {
        state.with(|s| s.profile().map(|p| p.email.clone()).unwrap_or_default())
    };

    let logout_action = use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if let Some(result) = logout_action.value().get() {
            if let Err(err) = result {
                log::warn!("logout failed: {}", err);
            }
            navigation::redirect("/login");
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-6">
                        <a href="/" class="text-xl font-semibold text-fg">"勤怠管理"</a>
                        <nav class="flex space-x-2">
                            <a href="/" class=NAV_LINK_CLASS>"従業員一覧"</a>
                            <Show when=is_admin>
                                <a href="/admin" class=NAV_LINK_CLASS>"管理者ページ"</a>
                                <a href="/admin/clock-requests" class=NAV_LINK_CLASS>"打刻修正申請"</a>
                            </Show>
                        </nav>
                    </div>
                    <div class="flex items-center gap-4 text-sm">
                        <span class="font-medium text-fg">{company_name}</span>
                        <span class="text-fg-muted">{email}</span>
                        <button
                            on:click=on_logout
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-action-ghost-bg-hover"
                            disabled=move || logout_pending.get()
                        >
                            "ログアウト"
                        </button>
                    </div>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-5xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

/// Success/error feedback after a mutation. Cancelled requests are not shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, err: &ApiError) {
        if err.is_cancelled() {
            return;
        }
        self.error = Some(err.message.clone());
        self.success = None;
    }

    pub fn set_error_message(&mut self, msg: impl Into<String>) {
        self.error = Some(msg.into());
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

#[component]
pub fn Messages(state: RwSignal<MessageState>) -> impl IntoView {
    view! {
        {move || state.get().success.map(|msg| view! { <SuccessMessage message=msg /> })}
        {move || state.get().error.map(|msg| view! { <ErrorMessage message=msg /> })}
    }
}
