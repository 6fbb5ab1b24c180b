use crate::api::EmployeeAllowance;
use crate::components::common::{Button, ButtonVariant};
use crate::components::empty_state::EmptyState;
use crate::pages::employee_detail::utils::format_yen;
use crate::utils::rate::format_rate;
use leptos::*;

/// Existing grants with edit and delete actions.
#[component]
pub fn GrantTable(
    grants: Vec<EmployeeAllowance>,
    on_edit: Callback<u64>,
    on_delete: Callback<EmployeeAllowance>,
) -> impl IntoView {
    if grants.is_empty() {
        return view! { <EmptyState title="手当の割り当てはありません" /> }.into_view();
    }

    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border text-sm">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-2 text-left">"従業員"</th>
                        <th class="px-4 py-2 text-left">"手当タイプ"</th>
                        <th class="px-4 py-2 text-right">"金額"</th>
                        <th class="px-4 py-2 text-right">"歩合率"</th>
                        <th class="px-4 py-2 text-left">"対象月"</th>
                        <th class="px-4 py-2 text-center">"操作"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {grants
                        .into_iter()
                        .map(|grant| {
                            let employee = grant
                                .employee_name
                                .clone()
                                .unwrap_or_else(|| format!("#{}", grant.employee_id));
                            let type_name = grant
                                .type_name()
                                .unwrap_or_else(|| format!("#{}", grant.allowance_type_id));
                            let period = format!("{}年{}月", grant.year, grant.month);
                            let id = grant.id;
                            let delete_target = grant.clone();
                            view! {
                                <tr>
                                    <td class="px-4 py-2">{employee}</td>
                                    <td class="px-4 py-2">{type_name}</td>
                                    <td class="px-4 py-2 text-right tabular-nums">{format_yen(grant.amount as f64)}</td>
                                    <td class="px-4 py-2 text-right tabular-nums">{format_rate(grant.commission_rate)}</td>
                                    <td class="px-4 py-2 tabular-nums">{period}</td>
                                    <td class="px-4 py-2">
                                        {id.map(|id| {
                                            let delete_target = delete_target.clone();
                                            view! {
                                                <div class="flex justify-center gap-2">
                                                    <Button
                                                        variant=ButtonVariant::Secondary
                                                        on:click=move |_| on_edit.call(id)
                                                    >
                                                        "編集"
                                                    </Button>
                                                    <Button
                                                        variant=ButtonVariant::Danger
                                                        on:click=move |_| on_delete.call(delete_target.clone())
                                                    >
                                                        "削除"
                                                    </Button>
                                                </div>
                                            }
                                        })}
                                    </td>
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

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    fn grant(id: Option<u64>) -> EmployeeAllowance {
        EmployeeAllowance {
            id,
            employee_id: 7,
            allowance_type_id: 1,
            amount: 300000,
            commission_rate: Some(0.075),
            year: 2025,
            month: 3,
            created_at: None,
            updated_at: None,
            employee_name: Some("青木".into()),
            allowance_type_name: None,
            allowance_type: Some(json!({ "id": 1, "name": "営業手当" })),
        }
    }

    #[test]
    fn rows_show_names_amount_and_rate() {
        let html = render_to_string(|| {
            view! {
                <GrantTable
                    grants=vec![grant(Some(1)), grant(None)]
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("青木"));
        assert!(html.contains("営業手当"));
        assert!(html.contains("300,000 円"));
        assert!(html.contains("7.5%"));
        assert!(html.contains("2025年3月"));
        assert_eq!(html.matches("編集").count(), 1);
    }

    #[test]
    fn empty_grants_render_placeholder() {
        let html = render_to_string(|| {
            view! {
                <GrantTable
                    grants=Vec::new()
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("手当の割り当てはありません"));
    }
}
