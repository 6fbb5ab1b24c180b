use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, ClockRequest, ClockRequestFilter, ReviewResponse},
};

impl ApiClient {
    pub async fn get_clock_requests(
        &self,
        filter: &ClockRequestFilter,
    ) -> Result<Vec<ClockRequest>, ApiError> {
        self.get_list_with_query("/clock_requests", filter).await
    }

    pub async fn approve_clock_request(&self, id: u64) -> Result<ReviewResponse, ApiError> {
        self.send_empty(Method::POST, &format!("/clock_requests/{}/approve", id))
            .await
    }

    pub async fn reject_clock_request(&self, id: u64) -> Result<ReviewResponse, ApiError> {
        self.send_empty(Method::POST, &format!("/clock_requests/{}/reject", id))
            .await
    }
}
