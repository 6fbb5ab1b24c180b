use crate::api::Employee;
use crate::components::empty_state::EmptyState;
use crate::utils::time::format_date;
use leptos::*;

#[component]
pub fn EmployeeTable(employees: Vec<Employee>) -> impl IntoView {
    if employees.is_empty() {
        return view! { <EmptyState title="従業員が登録されていません" /> }.into_view();
    }

    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"ID"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Name"</th>
                        <th class="px-4 py-2 text-left text-xs font-medium text-fg-muted uppercase">"Created At"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {employees
                        .into_iter()
                        .map(|employee| {
                            let href = format!("/employees/{}", employee.id);
                            let created = employee
                                .created_at
                                .as_deref()
                                .map(format_date)
                                .unwrap_or_default();
                            view! {
                                <tr class="hover:bg-surface-muted">
                                    <td class="px-4 py-2 text-sm text-fg">{employee.id}</td>
                                    <td class="px-4 py-2 text-sm">
                                        <a href=href class="text-action-primary-bg hover:underline">{employee.name}</a>
                                    </td>
                                    <td class="px-4 py-2 text-sm text-fg-muted">{created}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
    .into_view()
}
