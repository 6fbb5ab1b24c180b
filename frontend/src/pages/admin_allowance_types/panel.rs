use super::components::{AllowanceTypeForm, AllowanceTypeList};
use super::view_model::AllowanceTypesViewModel;
use crate::api::AllowanceType;
use crate::components::{
    common::Card,
    confirm_dialog::ConfirmDialog,
    error::ResourceError,
    layout::{LoadingSpinner, Messages},
};
use leptos::*;

#[component]
pub fn AdminAllowanceTypesPage() -> impl IntoView {
    let vm = AllowanceTypesViewModel::new();
    let on_submit = Callback::new(move |_| vm.submit());
    let on_cancel = Callback::new(move |_| vm.cancel_edit());
    let on_edit = Callback::new(move |allowance: AllowanceType| vm.start_edit(&allowance));
    let on_delete = Callback::new(move |allowance: AllowanceType| vm.request_delete(allowance));

    let form_title = Signal::derive(move || {
        if vm.form.editing.get().is_some() {
            "手当タイプの編集".to_string()
        } else {
            "新規手当タイプ追加".to_string()
        }
    });
    let delete_message = Signal::derive(move || {
        vm.delete_target
            .get()
            .map(|target| format!("「{}」を削除しますか？", target.name))
            .unwrap_or_default()
    });

    view! {
        <div class="space-y-4">
            <Messages state=vm.message />
            {move || view! {
                <Card title=form_title.get()>
                    <AllowanceTypeForm
                        form=vm.form
                        pending=vm.save_action.pending()
                        on_submit=on_submit
                        on_cancel=on_cancel
                    />
                </Card>
            }}
            <Card title="手当タイプ一覧">
                {move || match vm.types_resource.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Ok(types)) => view! {
                        <AllowanceTypeList types=types on_edit=on_edit on_delete=on_delete />
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
    fn page_renders_add_form_and_list_card() {
        let html = render_with_session(SessionState::Authenticated(admin_profile()), || {
            view! { <AdminAllowanceTypesPage /> }
        });
        assert!(html.contains("新規手当タイプ追加"));
        assert!(html.contains("手当タイプ一覧"));
        assert!(!html.contains("削除の確認"));
    }
}
