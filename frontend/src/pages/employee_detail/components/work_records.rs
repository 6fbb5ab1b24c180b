use crate::api::WorkRecord;
use crate::components::empty_state::EmptyState;
use crate::utils::time::{format_date, format_minutes, format_timestamp};
use leptos::*;

fn time_or_dash(value: Option<&str>) -> String {
    value
        .map(|v| {
            let formatted = format_timestamp(v);
            formatted.rsplit(' ').next().unwrap_or(&formatted).to_string()
        })
        .unwrap_or_else(|| "―".to_string())
}

#[component]
pub fn WorkRecordTable(records: Vec<WorkRecord>) -> impl IntoView {
    if records.is_empty() {
        return view! { <EmptyState title="この月の勤務実績はありません" /> }.into_view();
    }

    view! {
        <table class="min-w-full divide-y divide-border text-sm">
            <thead class="bg-surface-muted">
                <tr>
                    <th class="px-3 py-2 text-left">"日付"</th>
                    <th class="px-3 py-2 text-left">"出勤"</th>
                    <th class="px-3 py-2 text-left">"退勤"</th>
                    <th class="px-3 py-2 text-right">"休憩"</th>
                    <th class="px-3 py-2 text-right">"労働時間"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                {records
                    .into_iter()
                    .map(|record| view! {
                        <tr>
                            <td class="px-3 py-2">{format_date(&record.date)}</td>
                            <td class="px-3 py-2">{time_or_dash(record.clock_in.as_deref())}</td>
                            <td class="px-3 py-2">{time_or_dash(record.clock_out.as_deref())}</td>
                            <td class="px-3 py-2 text-right">{format_minutes(record.break_minutes)}</td>
                            <td class="px-3 py-2 text-right">{format_minutes(record.work_minutes)}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_view()
}
