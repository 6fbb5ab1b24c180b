#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiClient, Company, UserProfile};
    use crate::state::session::{provide_session, Session, SessionState};

    pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
        let runtime = leptos::create_runtime();
        let result = f();
        runtime.dispose();
        result
    }

    pub fn admin_profile() -> UserProfile {
        UserProfile {
            account_id: 1,
            company_id: 1,
            is_admin: true,
            email: "admin@example.com".into(),
            company: Some(Company {
                id: 1,
                name: "Acme".into(),
            }),
        }
    }

    pub fn member_profile() -> UserProfile {
        UserProfile {
            account_id: 2,
            company_id: 1,
            is_admin: false,
            email: "member@example.com".into(),
            company: Some(Company {
                id: 1,
                name: "Acme".into(),
            }),
        }
    }

    pub fn provide_session_state(state: SessionState) -> Session {
        provide_session(Session::with_state(
            ApiClient::new_with_base_url("http://localhost:0"),
            state,
        ))
    }
}
