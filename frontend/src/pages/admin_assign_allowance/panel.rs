use super::components::{AssignmentForm, GrantTable};
use super::view_model::AssignAllowanceViewModel;
use crate::api::EmployeeAllowance;
use crate::components::{
    common::Card,
    confirm_dialog::ConfirmDialog,
    error::ResourceError,
    layout::{LoadingSpinner, Messages},
};
use leptos::*;

#[component]
pub fn AdminAssignAllowancePage() -> impl IntoView {
    let vm = AssignAllowanceViewModel::new();
    let on_submit = Callback::new(move |_| vm.submit());
    let on_cancel = Callback::new(move |_| vm.cancel_edit());
    let on_edit = Callback::new(move |id: u64| vm.start_edit(id));
    let on_delete = Callback::new(move |grant: EmployeeAllowance| vm.request_delete(grant));
    let selected_kind = Signal::derive(move || vm.selected_kind());
    let pending = vm.save_action.pending();

    let delete_message = Signal::derive(move || {
        vm.delete_target
            .get()
            .map(|grant| {
                format!(
                    "{}年{}月の「{}」の割り当てを削除しますか？",
                    grant.year,
                    grant.month,
                    grant.type_name().unwrap_or_default()
                )
            })
            .unwrap_or_default()
    });

    view! {
        <div class="space-y-4 max-w-3xl mx-auto">
            <Card title="従業員への手当割り当て">
                <Messages state=vm.message />
                {move || match (vm.employees_resource.get(), vm.types_resource.get()) {
                    (Some(Err(err)), _) | (_, Some(Err(err))) => {
                        view! { <ResourceError error=err /> }.into_view()
                    }
                    (Some(Ok(employees)), Some(Ok(types))) => view! {
                        <AssignmentForm
                            form=vm.form
                            employees=employees
                            types=types
                            selected_kind=selected_kind
                            pending=pending
                            on_submit=on_submit
                            on_cancel=on_cancel
                        />
                    }
                    .into_view(),
                    _ => view! { <LoadingSpinner /> }.into_view(),
                }}
            </Card>
            <Card title="割り当て済みの手当">
                {move || match vm.grants_resource.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Ok(grants)) => view! {
                        <GrantTable grants=grants on_edit=on_edit on_delete=on_delete />
                    }
                    .into_view(),
                    Some(Err(err)) => view! { <ResourceError error=err /> }.into_view(),
                }}
            </Card>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.delete_target.with(Option::is_some))
                title="削除の確認"
                message=delete_message
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
                confirm_label="削除"
                pending=vm.delete_action.pending()
                destructive=true
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
    fn page_renders_form_and_grant_cards() {
        let html = render_with_session(SessionState::Authenticated(admin_profile()), || {
            view! { <AdminAssignAllowancePage /> }
        });
        assert!(html.contains("従業員への手当割り当て"));
        assert!(html.contains("割り当て済みの手当"));
        assert!(!html.contains("削除の確認"));
    }
}
