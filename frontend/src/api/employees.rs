use reqwest::Method;

use super::{
    client::ApiClient,
    types::{ApiError, Attendance, CreateAttendance, Employee, PayrollResponse},
};

impl ApiClient {
    pub async fn get_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get_list("/employees").await
    }

    pub async fn get_employee(&self, id: u64) -> Result<Employee, ApiError> {
        self.get_json(&format!("/employees/{}", id)).await
    }

    /// Legacy check-in/check-out pair. Superseded by time clocks.
    pub async fn create_attendance(
        &self,
        employee_id: u64,
        payload: &CreateAttendance,
    ) -> Result<Attendance, ApiError> {
        self.send_json(
            Method::POST,
            &format!("/employees/{}/attendances", employee_id),
            payload,
        )
        .await
    }

    pub async fn get_payroll(
        &self,
        employee_id: u64,
        year: i32,
        month: u32,
    ) -> Result<PayrollResponse, ApiError> {
        self.get_json_with_query(
            &format!("/employees/{}/payroll", employee_id),
            &[("year", year.to_string()), ("month", month.to_string())],
        )
        .await
    }
}
