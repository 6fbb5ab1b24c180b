use super::{
    client::ApiClient,
    types::{ApiError, WorkRecord},
};

impl ApiClient {
    pub async fn get_work_records(&self, employee_id: u64) -> Result<Vec<WorkRecord>, ApiError> {
        self.get_list_with_query("/work_records", &[("employee_id", employee_id)])
            .await
    }
}
