use crate::api::{
    ApiClient, ApiError, ClockRequest, CreateClockRequest, CreateTimeClock, Employee,
    PayrollResponse, TimeClock, WorkRecord,
};
use crate::utils::period::YearMonth;
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeeDetailRepository {
    client: Rc<ApiClient>,
}

impl EmployeeDetailRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn employee(&self, id: u64) -> Result<Employee, ApiError> {
        self.client.get_employee(id).await
    }

    pub async fn time_clocks(&self, id: u64, period: YearMonth) -> Result<Vec<TimeClock>, ApiError> {
        self.client
            .get_time_clocks(id, Some(period.year), Some(period.month))
            .await
    }

    pub async fn payroll(&self, id: u64, period: YearMonth) -> Result<PayrollResponse, ApiError> {
        self.client.get_payroll(id, period.year, period.month).await
    }

    pub async fn work_records(&self, id: u64) -> Result<Vec<WorkRecord>, ApiError> {
        self.client.get_work_records(id).await
    }

    pub async fn create_time_clock(&self, payload: CreateTimeClock) -> Result<TimeClock, ApiError> {
        self.client.create_time_clock(&payload).await
    }

    pub async fn request_correction(
        &self,
        clock_id: u64,
        payload: CreateClockRequest,
    ) -> Result<ClockRequest, ApiError> {
        self.client.create_clock_request(clock_id, &payload).await
    }
}
