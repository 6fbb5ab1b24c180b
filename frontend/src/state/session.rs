use crate::api::{ApiClient, ApiError, LoginRequest, UserProfile};
use leptos::*;

/// Lifecycle of the signed-in identity: `Uninitialized -> Loading ->
/// Authenticated | Anonymous`. Later refreshes replace the resolved state
/// wholesale without passing through `Loading` again.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SessionState {
    #[default]
    Uninitialized,
    Loading,
    Authenticated(UserProfile),
    Anonymous,
}

impl SessionState {
    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            SessionState::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SessionState::Uninitialized | SessionState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        self.profile().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.profile().map(|p| p.is_admin).unwrap_or(false)
    }
}

#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
    api: StoredValue<ApiClient>,
}

impl Session {
    pub fn new(api: ApiClient) -> Self {
        Self::with_state(api, SessionState::Uninitialized)
    }

    pub fn with_state(api: ApiClient, state: SessionState) -> Self {
        Self {
            state: create_rw_signal(state),
            api: store_value(api),
        }
    }

    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    pub fn get(&self) -> SessionState {
        self.state.get()
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// Re-reads `/current_account`. Any failure resolves to `Anonymous`.
    pub async fn refresh(self) -> SessionState {
        if self.state.get_untracked() == SessionState::Uninitialized {
            self.state.set(SessionState::Loading);
        }
        let next = match self.api().get_current_account().await {
            Ok(profile) => {
                log::debug!("session resolved for {}", profile.email);
                SessionState::Authenticated(profile)
            }
            Err(err) => {
                log::info!("no active session: {}", err);
                SessionState::Anonymous
            }
        };
        self.state.set(next.clone());
        next
    }

    pub async fn login(self, request: LoginRequest) -> Result<UserProfile, ApiError> {
        self.api().login(&request).await?;
        match self.refresh().await {
            SessionState::Authenticated(profile) => Ok(profile),
            _ => Err(ApiError::server(
                401,
                "ログイン後のアカウント情報を取得できませんでした",
            )),
        }
    }

    /// The session is refreshed even when the logout call fails.
    pub async fn logout(self) -> Result<(), ApiError> {
        let result = self.api().logout().await.map(|_| ());
        self.refresh().await;
        result
    }
}

pub fn provide_session(session: Session) -> Session {
    provide_context(session);
    session
}

/// Installs the session and starts the initial profile fetch.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let session = provide_session(Session::new(api));
    spawn_local(async move {
        session.refresh().await;
    });
    view! { <>{children()}</> }
}

pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_else(|| {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        Session::new(api)
    })
}

pub fn use_login_action() -> Action<LoginRequest, Result<UserProfile, ApiError>> {
    let session = use_session();
    create_action(move |request: &LoginRequest| {
        let request = request.clone();
        async move { session.login(request).await }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let session = use_session();
    create_action(move |_: &()| async move { session.logout().await })
}
