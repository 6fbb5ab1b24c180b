use crate::api::LoginRequest;
use leptos::*;

pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("メールアドレスを入力してください".into());
    }
    if password.is_empty() {
        return Err("パスワードを入力してください".into());
    }
    Ok(())
}

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn to_request(&self) -> Result<LoginRequest, String> {
        let email = self.email.get_untracked();
        let password = self.password.get_untracked();
        validate_credentials(&email, &password)?;
        Ok(LoginRequest {
            email: email.trim().to_string(),
            password,
        })
    }

    pub fn clear_password(&self) {
        self.password.set(String::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::with_runtime;

    #[test]
    fn validate_credentials_requires_both_fields() {
        assert!(validate_credentials("", "secret").is_err());
        assert!(validate_credentials("   ", "secret").is_err());
        assert!(validate_credentials("a@example.com", "").is_err());
        assert!(validate_credentials("a@example.com", "secret").is_ok());
    }

    #[test]
    fn to_request_trims_email_but_not_password() {
        with_runtime(|| {
            let form = LoginFormState::default();
            form.email.set("  admin@example.com ".into());
            form.password.set(" pass ".into());
            let request = form.to_request().unwrap();
            assert_eq!(request.email, "admin@example.com");
            assert_eq!(request.password, " pass ");
        });
    }
}
