use super::utils::LoginFormState;
use crate::api::{ApiError, LoginRequest, UserProfile};
use crate::components::guard::HOME_PATH;
use crate::state::session;
use crate::utils::navigation;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<UserProfile, ApiError>>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<String>);
    let login_action = session::use_login_action();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(profile) => {
                    log::info!("signed in as {}", profile.email);
                    error.set(None);
                    form.clear_password();
                    navigation::redirect(HOME_PATH);
                }
                Err(err) if err.is_cancelled() => {}
                Err(err) => error.set(Some(err.message)),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(msg) => self.error.set(Some(msg)),
        }
    }
}
