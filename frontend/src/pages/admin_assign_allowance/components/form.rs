use crate::api::{AllowanceKind, AllowanceType, Employee};
use crate::components::common::Button;
use crate::pages::admin_assign_allowance::utils::{parse_id, AssignmentFormState};
use leptos::{ev::SubmitEvent, *};

const FIELD_CLASS: &str = "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm";

#[component]
pub fn AssignmentForm(
    form: AssignmentFormState,
    employees: Vec<Employee>,
    types: Vec<AllowanceType>,
    #[prop(into)] selected_kind: Signal<Option<AllowanceKind>>,
    #[prop(into)] pending: MaybeSignal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };
    let editing = move || form.editing.get().is_some();

    view! {
        <form class="space-y-4" on:submit=handle_submit>
            <div>
                <label for="grant-employee" class="block text-sm font-medium text-fg">"従業員"</label>
                <select
                    id="grant-employee"
                    required
                    class=FIELD_CLASS
                    on:change=move |ev| form.employee_id.set(parse_id(&event_target_value(&ev)))
                >
                    <option value="" selected=move || form.employee_id.get().is_none()>"選択してください"</option>
                    {employees
                        .into_iter()
                        .map(|employee| {
                            let id = employee.id;
                            view! {
                                <option value=id.to_string() selected=move || form.employee_id.get() == Some(id)>
                                    {employee.name}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div>
                <label for="grant-type" class="block text-sm font-medium text-fg">"手当タイプ"</label>
                <select
                    id="grant-type"
                    required
                    class=FIELD_CLASS
                    on:change=move |ev| form.allowance_type_id.set(parse_id(&event_target_value(&ev)))
                >
                    <option value="" selected=move || form.allowance_type_id.get().is_none()>"選択してください"</option>
                    {types
                        .into_iter()
                        .map(|allowance| {
                            let id = allowance.id;
                            view! {
                                <option value=id.to_string() selected=move || form.allowance_type_id.get() == Some(id)>
                                    {allowance.name}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div>
                <label for="grant-amount" class="block text-sm font-medium text-fg">"金額"</label>
                <input
                    id="grant-amount"
                    type="number"
                    min="0"
                    required
                    class=FIELD_CLASS
                    prop:value=move || form.amount.get()
                    on:input=move |ev| form.amount.set(event_target_value(&ev))
                />
            </div>
            <Show when=move || selected_kind.get() == Some(AllowanceKind::Commission)>
                <div>
                    <label for="grant-rate" class="block text-sm font-medium text-fg">"歩合率"</label>
                    <div class="flex items-center gap-2">
                        <input
                            id="grant-rate"
                            type="number"
                            min="0"
                            step="0.1"
                            required
                            class=FIELD_CLASS
                            prop:value=move || form.commission_percent.get()
                            on:input=move |ev| form.commission_percent.set(event_target_value(&ev))
                        />
                        <span class="text-sm text-fg-muted">"%"</span>
                    </div>
                </div>
            </Show>
            <div class="flex gap-2">
                <div class="flex-1">
                    <label for="grant-year" class="block text-sm font-medium text-fg">"年"</label>
                    <input
                        id="grant-year"
                        type="number"
                        required
                        class=FIELD_CLASS
                        prop:value=move || form.year.get()
                        on:input=move |ev| form.year.set(event_target_value(&ev))
                    />
                </div>
                <div class="flex-1">
                    <label for="grant-month" class="block text-sm font-medium text-fg">"月"</label>
                    <input
                        id="grant-month"
                        type="number"
                        min="1"
                        max="12"
                        required
                        class=FIELD_CLASS
                        prop:value=move || form.month.get()
                        on:input=move |ev| form.month.set(event_target_value(&ev))
                    />
                </div>
            </div>
            <div class="flex gap-2">
                <Button class="flex-1" loading=pending>
                    {move || if editing() { "更新" } else { "割り当て登録" }}
                </Button>
                <Show when=editing>
                    <button
                        type="button"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold border border-border bg-surface-muted text-fg"
                        on:click=move |_| on_cancel.call(())
                    >
                        "キャンセル"
                    </button>
                </Show>
            </div>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use crate::utils::period::YearMonth;

    fn employee(id: u64, name: &str) -> Employee {
        Employee {
            id,
            name: name.into(),
            created_at: None,
            updated_at: None,
            attendances: Vec::new(),
            time_clocks: Vec::new(),
            line_linked: false,
        }
    }

    fn allowance(id: u64, name: &str, kind: AllowanceKind) -> AllowanceType {
        AllowanceType {
            id,
            company_id: 1,
            name: name.into(),
            kind,
            description: String::new(),
            commission_rate: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn render(kind: Option<AllowanceKind>) -> String {
        render_to_string(move || {
            let form = AssignmentFormState::new(YearMonth::new(2025, 3));
            view! {
                <AssignmentForm
                    form=form
                    employees=vec![employee(7, "青木"), employee(8, "佐藤")]
                    types=vec![
                        allowance(1, "営業手当", AllowanceKind::Commission),
                        allowance(2, "住宅手当", AllowanceKind::Fixed),
                    ]
                    selected_kind=Signal::derive(move || kind)
                    pending=false
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn selects_list_employees_and_types() {
        let html = render(None);
        assert!(html.contains("青木"));
        assert!(html.contains("佐藤"));
        assert!(html.contains("営業手当"));
        assert!(html.contains("住宅手当"));
        assert_eq!(html.matches("選択してください").count(), 2);
        assert!(html.contains("割り当て登録"));
        assert!(!html.contains("歩合率"));
    }

    #[test]
    fn commission_type_shows_rate_field() {
        let html = render(Some(AllowanceKind::Commission));
        assert!(html.contains("歩合率"));
        assert!(!render(Some(AllowanceKind::Fixed)).contains("歩合率"));
    }
}
