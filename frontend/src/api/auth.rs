use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, MessageResponse, UserProfile},
};

impl ApiClient {
    /// Sets the session cookie on success; the profile is read separately
    /// through [`ApiClient::get_current_account`].
    pub async fn login(&self, request: &LoginRequest) -> Result<MessageResponse, ApiError> {
        self.send_json(Method::POST, "/login", request).await
    }

    pub async fn logout(&self) -> Result<MessageResponse, ApiError> {
        self.send_empty(Method::POST, "/logout").await
    }

    pub async fn get_current_account(&self) -> Result<UserProfile, ApiError> {
        self.get_json("/current_account").await
    }
}
