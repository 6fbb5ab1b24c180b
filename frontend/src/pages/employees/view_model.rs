use super::repository::EmployeesRepository;
use crate::api::{ApiClient, ApiError, Employee};
use crate::utils::task::RequestSlot;
use leptos::*;

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub employees_resource: Resource<u32, Result<Vec<Employee>, ApiError>>,
    reload: RwSignal<u32>,
}

impl EmployeesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(EmployeesRepository::new(api));
        let slot = RequestSlot::scoped();
        let reload = create_rw_signal(0u32);

        let employees_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                let request = slot.run(async move { repo.list().await });
                async move { request.await }
            },
        );

        Self {
            employees_resource,
            reload,
        }
    }

    pub fn reload(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

impl Default for EmployeesViewModel {
    fn default() -> Self {
        Self::new()
    }
}
