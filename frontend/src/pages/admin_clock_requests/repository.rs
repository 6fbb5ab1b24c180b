use super::utils::{Review, ReviewDecision};
use crate::api::{ApiClient, ApiError, ClockRequest, ClockRequestFilter, ReviewResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct ClockRequestsRepository {
    client: Rc<ApiClient>,
}

impl ClockRequestsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self, filter: ClockRequestFilter) -> Result<Vec<ClockRequest>, ApiError> {
        self.client.get_clock_requests(&filter).await
    }

    pub async fn review(&self, review: Review) -> Result<ReviewResponse, ApiError> {
        match review.decision {
            ReviewDecision::Approve => self.client.approve_clock_request(review.id).await,
            ReviewDecision::Reject => self.client.reject_clock_request(review.id).await,
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::RequestStatus;
    use crate::pages::admin_clock_requests::utils::to_filter;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn list_sends_status_filter() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/clock_requests")
                .query_param("status", "pending");
            then.status(200).json_body(json!([]));
        });
        let repo = ClockRequestsRepository::new(ApiClient::new_with_base_url(server.url("/api")));
        let list = repo.list(to_filter(Some(RequestStatus::Pending))).await.unwrap();
        assert!(list.is_empty());
        mock.assert();
    }

    #[tokio::test]
    async fn review_routes_decision_to_endpoint() {
        let server = MockServer::start_async().await;
        let approve = server.mock(|when, then| {
            when.method(POST).path("/api/clock_requests/7/approve");
            then.status(200).json_body(json!({ "message": "approved" }));
        });
        let reject = server.mock(|when, then| {
            when.method(POST).path("/api/clock_requests/8/reject");
            then.status(200).json_body(json!({ "message": "rejected" }));
        });
        let repo = ClockRequestsRepository::new(ApiClient::new_with_base_url(server.url("/api")));
        repo.review(Review { id: 7, decision: ReviewDecision::Approve })
            .await
            .unwrap();
        repo.review(Review { id: 8, decision: ReviewDecision::Reject })
            .await
            .unwrap();
        approve.assert();
        reject.assert();
    }

    #[tokio::test]
    async fn reviewing_a_settled_request_surfaces_server_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/clock_requests/9/approve");
            then.status(400).json_body(json!({ "error": "already processed" }));
        });
        let repo = ClockRequestsRepository::new(ApiClient::new_with_base_url(server.url("/api")));
        let err = repo
            .review(Review { id: 9, decision: ReviewDecision::Approve })
            .await
            .unwrap_err();
        assert_eq!(err.message, "already processed");
        assert_eq!(err.status, Some(400));
    }
}
