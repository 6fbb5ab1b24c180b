use crate::api::{
    AllowanceType, ApiClient, ApiError, Employee, EmployeeAllowance, EmployeeAllowanceInput,
    MessageResponse,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct AssignAllowanceRepository {
    client: Rc<ApiClient>,
}

impl AssignAllowanceRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.get_employees().await
    }

    pub async fn allowance_types(&self) -> Result<Vec<AllowanceType>, ApiError> {
        self.client.get_allowance_types().await
    }

    pub async fn grants(&self) -> Result<Vec<EmployeeAllowance>, ApiError> {
        self.client.get_employee_allowances().await
    }

    pub async fn grant(&self, id: u64) -> Result<EmployeeAllowance, ApiError> {
        self.client.get_employee_allowance(id).await
    }

    /// Creates when `id` is `None`, otherwise updates.
    pub async fn save(
        &self,
        id: Option<u64>,
        input: EmployeeAllowanceInput,
    ) -> Result<EmployeeAllowance, ApiError> {
        match id {
            Some(id) => self.client.update_employee_allowance(id, &input).await,
            None => self.client.create_employee_allowance(&input).await,
        }
    }

    pub async fn delete(&self, id: u64) -> Result<MessageResponse, ApiError> {
        self.client.delete_employee_allowance(id).await
    }
}
