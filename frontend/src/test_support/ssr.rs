use leptos::*;
use std::future::Future;
use std::time::Duration;

use super::helpers::{provide_session_state, with_runtime};
use crate::state::session::SessionState;

/// Renders on the server with resource loading suppressed, so no view
/// reaches the network.
pub fn render_to_string<F, N>(view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    leptos_reactive::suppress_resource_load(true);
    let html = with_runtime(|| view().into_view().render_to_string().to_string());
    leptos_reactive::suppress_resource_load(false);
    html
}

pub fn render_with_session<F, N>(state: SessionState, view: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    render_to_string(move || {
        provide_session_state(state);
        view()
    })
}

/// Runs `f` in a reactive runtime whose resources never fetch. Tests feed
/// data with `Resource::set`.
pub fn with_offline_runtime<T>(f: impl FnOnce() -> T) -> T {
    leptos_reactive::suppress_resource_load(true);
    let result = with_runtime(f);
    leptos_reactive::suppress_resource_load(false);
    result
}

/// Drives `f` on a current-thread runtime inside a `LocalSet`, which
/// `spawn_local` needs when actions and resources run natively.
pub fn with_local_runtime_async<F, Fut>(f: F)
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = ()>,
{
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = tokio::task::LocalSet::new();
    local.block_on(&rt, f());
}

pub async fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0..100 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}
