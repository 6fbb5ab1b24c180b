use super::components::{
    ClockRequestDialog, PayrollDisplay, TimeClockForm, TimeClockList, WorkRecordTable,
};
use super::utils::records_in_period;
use super::view_model::EmployeeDetailViewModel;
use crate::api::TimeClock;
use crate::components::{
    common::Card,
    date_selector::DateSelector,
    error::ResourceError,
    layout::{ErrorMessage, LoadingSpinner, Messages},
};
use crate::utils::period::YearMonth;
use leptos::*;
use leptos_router::use_params_map;

/// Route entry for `/employees/:id`.
#[component]
pub fn EmployeeDetailPage() -> impl IntoView {
    let params = use_params_map();
    let employee_id =
        create_memo(move |_| params.with(|p| p.get("id").and_then(|id| id.parse::<u64>().ok())));

    move || match employee_id.get() {
        Some(id) => view! { <EmployeeDetailPanel employee_id=id /> }.into_view(),
        None => view! { <ErrorMessage message="従業員IDが不正です" /> }.into_view(),
    }
}

#[component]
pub fn EmployeeDetailPanel(employee_id: u64) -> impl IntoView {
    let vm = EmployeeDetailViewModel::new(employee_id);
    let on_period_change = Callback::new(move |period: YearMonth| vm.set_period(period));
    let on_request = Callback::new(move |clock: TimeClock| vm.open_request(clock));
    let on_clock_submit = Callback::new(move |_| vm.submit_clock());
    let on_request_submit = Callback::new(move |_| vm.submit_request());
    let on_request_cancel = Callback::new(move |_| vm.close_request());

    let title = move || match vm.employee_resource.get() {
        Some(Ok(employee)) => format!("{}の詳細", employee.name),
        _ => "従業員詳細".to_string(),
    };

    view! {
        <div class="space-y-4">
            <h1 class="text-2xl font-bold text-fg">{title}</h1>
            {move || vm.employee_resource.get().and_then(Result::err).map(|err| view! { <ResourceError error=err /> })}
            <DateSelector value=vm.period on_change=on_period_change />

            <Card title="給与明細">
                {move || match vm.payroll_resource.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Ok(payroll)) => view! { <PayrollDisplay payroll=payroll /> }.into_view(),
                    Some(Err(err)) => view! { <ResourceError error=err /> }.into_view(),
                }}
            </Card>

            <Card title="勤務実績">
                {move || match vm.work_records_resource.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Ok(records)) => {
                        let records = records_in_period(&records, vm.period.get());
                        view! { <WorkRecordTable records=records /> }.into_view()
                    }
                    Some(Err(err)) => view! { <ResourceError error=err /> }.into_view(),
                }}
            </Card>

            <Card title="打刻一覧">
                <Messages state=vm.request_message />
                {move || match vm.time_clocks_resource.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Ok(clocks)) => view! { <TimeClockList clocks=clocks on_request=on_request /> }.into_view(),
                    Some(Err(err)) => view! { <ResourceError error=err /> }.into_view(),
                }}
            </Card>

            <Card title="打刻登録">
                <TimeClockForm
                    form=vm.clock_form
                    message=vm.clock_message
                    pending=vm.create_clock_action.pending()
                    on_submit=on_clock_submit
                />
            </Card>

            <ClockRequestDialog
                target=vm.request_target
                form=vm.request_form
                error=vm.request_error
                pending=vm.request_action.pending()
                on_submit=on_request_submit
                on_cancel=on_request_cancel
            />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::SessionState;
    use crate::test_support::helpers::admin_profile;
    use crate::test_support::ssr::render_with_session;

    #[test]
    fn panel_renders_all_sections_while_loading() {
        let html = render_with_session(SessionState::Authenticated(admin_profile()), || {
            view! { <EmployeeDetailPanel employee_id=1 /> }
        });
        assert!(html.contains("従業員詳細"));
        assert!(html.contains("給与明細"));
        assert!(html.contains("勤務実績"));
        assert!(html.contains("打刻一覧"));
        assert!(html.contains("打刻登録"));
        assert!(html.contains("aria-label=\"前年\""));
        assert!(!html.contains("打刻修正申請"));
    }
}
