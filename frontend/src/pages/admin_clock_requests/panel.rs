use super::components::ClockRequestTable;
use super::utils::{parse_status_filter, status_filter_value, Review};
use super::view_model::ClockRequestsViewModel;
use crate::api::RequestStatus;
use crate::components::{
    common::Card,
    error::ResourceError,
    layout::{LoadingSpinner, Messages},
};
use leptos::*;

#[component]
pub fn AdminClockRequestsPage() -> impl IntoView {
    let vm = ClockRequestsViewModel::new();
    let on_review = Callback::new(move |review: Review| vm.review(review));
    let pending = vm.review_action.pending();

    view! {
        <Card title="打刻修正申請一覧">
            <div class="flex items-center gap-2 mb-4 text-sm">
                <label for="status-filter" class="text-fg-muted">"ステータス"</label>
                <select
                    id="status-filter"
                    class="rounded-md border border-form-control-border bg-form-control-bg px-2 py-1"
                    on:change=move |ev| vm.set_status_filter(parse_status_filter(&event_target_value(&ev)))
                >
                    <option value="" selected=move || vm.status_filter.get().is_none()>"すべて"</option>
                    {RequestStatus::ALL
                        .into_iter()
                        .map(|status| view! {
                            <option
                                value=status_filter_value(Some(status))
                                selected=move || vm.status_filter.get() == Some(status)
                            >
                                {status.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>
            <Messages state=vm.message />
            {move || match vm.requests_resource.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Ok(requests)) => view! {
                    <ClockRequestTable requests=requests on_review=on_review pending=pending />
                }
                .into_view(),
                Some(Err(err)) => view! { <ResourceError error=err /> }.into_view(),
            }}
        </Card>
    }
}
