use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, ClockRequest, CreateClockRequest, CreateTimeClock, TimeClock},
};

impl ApiClient {
    pub async fn get_time_clocks(
        &self,
        employee_id: u64,
        year: Option<i32>,
        month: Option<u32>,
    ) -> Result<Vec<TimeClock>, ApiError> {
        let mut query = vec![("employee_id", employee_id.to_string())];
        if let Some(year) = year {
            query.push(("year", year.to_string()));
        }
        if let Some(month) = month {
            query.push(("month", month.to_string()));
        }
        self.get_list_with_query("/time_clocks", &query).await
    }

    pub async fn get_time_clock(&self, id: u64) -> Result<TimeClock, ApiError> {
        self.get_json(&format!("/time_clocks/{}", id)).await
    }

    pub async fn create_time_clock(&self, payload: &CreateTimeClock) -> Result<TimeClock, ApiError> {
        self.send_json(Method::POST, "/time_clocks", payload).await
    }

    pub async fn create_clock_request(
        &self,
        clock_id: u64,
        payload: &CreateClockRequest,
    ) -> Result<ClockRequest, ApiError> {
        self.send_json(
            Method::POST,
            &format!("/time_clocks/{}/requests", clock_id),
            payload,
        )
        .await
    }
}
