use crate::api::{ApiError, ApiErrorKind};
use leptos::*;

fn headline(error: &ApiError) -> &'static str {
    match error.kind {
        ApiErrorKind::Network => "サーバーに接続できませんでした",
        ApiErrorKind::Decode => "サーバーの応答を解釈できませんでした",
        ApiErrorKind::Server | ApiErrorKind::Cancelled => "エラーが発生しました",
    }
}

/// Renders a request failure; cancelled requests render nothing.
#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    let visible = move || error.with(|e| e.as_ref().map(|e| !e.is_cancelled()).unwrap_or(false));
    view! {
        <Show when=visible fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.with(|e| e.as_ref().map(headline).unwrap_or_default())}</div>
                <div class="text-sm">{move || error.with(|e| e.as_ref().map(|e| e.message.clone()).unwrap_or_default())}</div>
                {move || error.with(|e| {
                    e.as_ref()
                        .and_then(|e| e.status)
                        .map(|status| view! { <div class="text-xs opacity-75">{format!("Status: {}", status)}</div> })
                })}
            </div>
        </Show>
    }
}

/// A settled resource failure.
#[component]
pub fn ResourceError(error: ApiError) -> impl IntoView {
    let error = store_value(error);
    view! { <InlineErrorMessage error=Signal::derive(move || Some(error.get_value())) /> }
}
