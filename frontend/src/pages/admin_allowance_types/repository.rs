use crate::api::{AllowanceType, AllowanceTypeInput, ApiClient, ApiError, MessageResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct AllowanceTypesRepository {
    client: Rc<ApiClient>,
}

impl AllowanceTypesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self) -> Result<Vec<AllowanceType>, ApiError> {
        self.client.get_allowance_types().await
    }

    pub async fn get(&self, id: u64) -> Result<AllowanceType, ApiError> {
        self.client.get_allowance_type(id).await
    }

    /// Creates when `id` is `None`, otherwise updates.
    pub async fn save(
        &self,
        id: Option<u64>,
        input: AllowanceTypeInput,
    ) -> Result<AllowanceType, ApiError> {
        match id {
            Some(id) => self.client.update_allowance_type(id, &input).await,
            None => self.client.create_allowance_type(&input).await,
        }
    }

    pub async fn delete(&self, id: u64) -> Result<MessageResponse, ApiError> {
        self.client.delete_allowance_type(id).await
    }
}
