use super::{components::EmployeeTable, view_model::EmployeesViewModel};
use crate::components::{error::ResourceError, layout::LoadingSpinner};
use leptos::*;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let vm = EmployeesViewModel::new();
    let resource = vm.employees_resource;

    view! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold text-fg">"従業員一覧"</h1>
            {move || match resource.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Ok(employees)) => view! { <EmployeeTable employees=employees /> }.into_view(),
                Some(Err(err)) => view! { <ResourceError error=err /> }.into_view(),
            }}
        </div>
    }
}
