use crate::{
    components::layout::LoadingSpinner,
    state::session::{use_session, SessionState},
    utils::navigation,
};
use leptos::*;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Pending,
    Redirect(&'static str),
    Render,
}

pub fn guard_decision(state: &SessionState, require_admin: bool) -> GuardDecision {
    match state {
        SessionState::Uninitialized | SessionState::Loading => GuardDecision::Pending,
        SessionState::Anonymous => GuardDecision::Redirect(LOGIN_PATH),
        SessionState::Authenticated(profile) if require_admin && !profile.is_admin => {
            GuardDecision::Redirect(HOME_PATH)
        }
        SessionState::Authenticated(_) => GuardDecision::Render,
    }
}

// Children are only built on `Render`, so a redirected page never issues its fetches.
fn guarded(require_admin: bool, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let decision = create_memo(move |_| state.with(|s| guard_decision(s, require_admin)));
    create_effect(move |_| {
        if let GuardDecision::Redirect(path) = decision.get() {
            navigation::replace(path);
        }
    });
    view! {
        <Show
            when=move || decision.get() == GuardDecision::Render
            fallback=move || {
                if decision.get() == GuardDecision::Pending {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(false, children)
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    guarded(true, children)
}
