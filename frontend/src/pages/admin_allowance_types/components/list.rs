use crate::api::{AllowanceKind, AllowanceType};
use crate::components::common::{Button, ButtonVariant};
use crate::components::empty_state::EmptyState;
use crate::utils::rate::format_rate;
use leptos::*;

#[component]
pub fn AllowanceTypeList(
    types: Vec<AllowanceType>,
    on_edit: Callback<AllowanceType>,
    on_delete: Callback<AllowanceType>,
) -> impl IntoView {
    if types.is_empty() {
        return view! { <EmptyState title="手当タイプが登録されていません" /> }.into_view();
    }

    view! {
        <ul class="divide-y divide-border">
            {types
                .into_iter()
                .map(|allowance| {
                    let rate = match allowance.kind {
                        AllowanceKind::Commission => Some(format!("歩合率: {}", format_rate(allowance.commission_rate))),
                        AllowanceKind::Fixed => None,
                    };
                    let description = (!allowance.description.is_empty()).then(|| allowance.description.clone());
                    let edit_target = allowance.clone();
                    let delete_target = allowance.clone();
                    view! {
                        <li class="flex items-start justify-between gap-4 py-3">
                            <div class="space-y-1">
                                <p class="font-semibold text-fg">
                                    {allowance.name.clone()}
                                    <span class="ml-2 text-xs text-fg-muted">{format!("({})", allowance.kind.label())}</span>
                                </p>
                                {description.map(|text| view! { <p class="text-sm text-fg-muted">{text}</p> })}
                                {rate.map(|text| view! { <p class="text-sm text-fg-muted">{text}</p> })}
                            </div>
                            <div class="flex gap-2">
                                <Button
                                    variant=ButtonVariant::Secondary
                                    on:click=move |_| on_edit.call(edit_target.clone())
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
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_view()
}
