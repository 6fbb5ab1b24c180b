use reqwest::Method;

use super::{
    client::ApiClient,
    types::{
        AllowanceType, AllowanceTypeInput, ApiError, EmployeeAllowance, EmployeeAllowanceInput,
        MessageResponse,
    },
};

impl ApiClient {
    pub async fn get_allowance_types(&self) -> Result<Vec<AllowanceType>, ApiError> {
        self.get_list("/allowance_types").await
    }

    pub async fn get_allowance_type(&self, id: u64) -> Result<AllowanceType, ApiError> {
        self.get_json(&format!("/allowance_types/{}", id)).await
    }

    pub async fn create_allowance_type(
        &self,
        payload: &AllowanceTypeInput,
    ) -> Result<AllowanceType, ApiError> {
        self.send_json(Method::POST, "/allowance_types", payload).await
    }

    pub async fn update_allowance_type(
        &self,
        id: u64,
        payload: &AllowanceTypeInput,
    ) -> Result<AllowanceType, ApiError> {
        self.send_json(Method::PUT, &format!("/allowance_types/{}", id), payload)
            .await
    }

    pub async fn delete_allowance_type(&self, id: u64) -> Result<MessageResponse, ApiError> {
        self.send_empty(Method::DELETE, &format!("/allowance_types/{}", id))
            .await
    }

    pub async fn get_employee_allowances(&self) -> Result<Vec<EmployeeAllowance>, ApiError> {
        self.get_list("/employee_allowances").await
    }

    pub async fn get_employee_allowance(&self, id: u64) -> Result<EmployeeAllowance, ApiError> {
        self.get_json(&format!("/employee_allowances/{}", id)).await
    }

    pub async fn create_employee_allowance(
        &self,
        payload: &EmployeeAllowanceInput,
    ) -> Result<EmployeeAllowance, ApiError> {
        self.send_json(Method::POST, "/employee_allowances", payload)
            .await
    }

    pub async fn update_employee_allowance(
        &self,
        id: u64,
        payload: &EmployeeAllowanceInput,
    ) -> Result<EmployeeAllowance, ApiError> {
        self.send_json(Method::PUT, &format!("/employee_allowances/{}", id), payload)
            .await
    }

    pub async fn delete_employee_allowance(&self, id: u64) -> Result<MessageResponse, ApiError> {
        self.send_empty(Method::DELETE, &format!("/employee_allowances/{}", id))
            .await
    }
}
