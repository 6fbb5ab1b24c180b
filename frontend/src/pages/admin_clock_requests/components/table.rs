use crate::api::{ClockRequest, RequestStatus};
use crate::components::empty_state::EmptyState;
use crate::pages::admin_clock_requests::utils::{can_review, reason_or_dash, Review, ReviewDecision};
use crate::utils::time::format_timestamp;
use leptos::*;

fn status_class(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Pending => "bg-status-warning-bg text-status-warning-text",
        RequestStatus::Approved => "bg-status-success-bg text-status-success-text",
        RequestStatus::Rejected => "bg-status-error-bg text-status-error-text",
    }
}

#[component]
pub fn ClockRequestTable(
    requests: Vec<ClockRequest>,
    on_review: Callback<Review>,
    #[prop(into)] pending: MaybeSignal<bool>,
) -> impl IntoView {
    if requests.is_empty() {
        return view! { <EmptyState title="打刻修正申請はありません" /> }.into_view();
    }

    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border text-sm">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-2 text-left">"従業員名"</th>
                        <th class="px-4 py-2 text-left">"申請日"</th>
                        <th class="px-4 py-2 text-left">"種別"</th>
                        <th class="px-4 py-2 text-left">"修正時刻"</th>
                        <th class="px-4 py-2 text-left">"理由"</th>
                        <th class="px-4 py-2 text-center">"ステータス"</th>
                        <th class="px-4 py-2 text-center">"操作"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {requests
                        .into_iter()
                        .map(|request| {
                            let id = request.id;
                            let reviewable = can_review(&request);
                            let name = request
                                .employee_name
                                .clone()
                                .unwrap_or_else(|| format!("#{}", request.employee_id));
                            let filed = request
                                .created_at
                                .as_deref()
                                .map(format_timestamp)
                                .unwrap_or_default();
                            view! {
                                <tr>
                                    <td class="px-4 py-2">{name}</td>
                                    <td class="px-4 py-2 tabular-nums">{filed}</td>
                                    <td class="px-4 py-2">{request.kind.label()}</td>
                                    <td class="px-4 py-2 tabular-nums">{format_timestamp(&request.time)}</td>
                                    <td class="px-4 py-2">{reason_or_dash(&request.reason).to_string()}</td>
                                    <td class="px-4 py-2 text-center">
                                        <span class=format!("px-2 py-0.5 rounded-full text-xs {}", status_class(request.status))>
                                            {request.status.label()}
                                        </span>
                                    </td>
                                    <td class="px-4 py-2 text-center whitespace-nowrap">
                                        <Show when=move || reviewable>
                                            <button
                                                type="button"
                                                class="mr-2 px-2 py-1 rounded bg-status-success-bg text-status-success-text disabled:opacity-50"
                                                disabled=move || pending.get()
                                                on:click=move |_| on_review.call(Review { id, decision: ReviewDecision::Approve })
                                            >
                                                "承認"
                                            </button>
                                            <button
                                                type="button"
                                                class="px-2 py-1 rounded bg-status-error-bg text-status-error-text disabled:opacity-50"
                                                disabled=move || pending.get()
                                                on:click=move |_| on_review.call(Review { id, decision: ReviewDecision::Reject })
                                            >
                                                "却下"
                                            </button>
                                        </Show>
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
