use crate::api::TimeClock;
use crate::components::empty_state::EmptyState;
use crate::utils::time::format_timestamp;
use leptos::*;

#[component]
pub fn TimeClockList(clocks: Vec<TimeClock>, on_request: Callback<TimeClock>) -> impl IntoView {
    if clocks.is_empty() {
        return view! { <EmptyState title="この月の打刻はありません" /> }.into_view();
    }

    view! {
        <table class="min-w-full divide-y divide-border text-sm">
            <thead class="bg-surface-muted">
                <tr>
                    <th class="px-3 py-2 text-left">"打刻種別"</th>
                    <th class="px-3 py-2 text-left">"打刻日時"</th>
                    <th class="px-3 py-2"></th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                {clocks
                    .into_iter()
                    .map(|clock| {
                        let label = clock.kind.label();
                        let stamped = format_timestamp(&clock.timestamp);
                        view! {
                            <tr>
                                <td class="px-3 py-2">{label}</td>
                                <td class="px-3 py-2 tabular-nums">{stamped}</td>
                                <td class="px-3 py-2 text-right">
                                    <button
                                        type="button"
                                        class="text-action-primary-bg hover:underline"
                                        on:click=move |_| on_request.call(clock.clone())
                                    >
                                        "修正申請"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_view()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ClockType;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn rows_show_label_and_formatted_time() {
        let html = render_to_string(|| {
            let clocks = vec![
                TimeClock {
                    id: 1,
                    employee_id: 1,
                    kind: ClockType::ClockIn,
                    timestamp: "2025/3/3 09:00:00".into(),
                    created_at: None,
                },
                TimeClock {
                    id: 2,
                    employee_id: 1,
                    kind: ClockType::BreakEnd,
                    timestamp: "2025-03-03T13:00:00+09:00".into(),
                    created_at: None,
                },
            ];
            view! { <TimeClockList clocks=clocks on_request=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("出勤"));
        assert!(html.contains("2025&#x2F;03&#x2F;03 09:00"));
        assert!(html.contains("休憩終了"));
        assert!(html.contains("2025&#x2F;03&#x2F;03 13:00"));
        assert_eq!(html.matches("修正申請").count(), 2);
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let html = render_to_string(|| {
            view! { <TimeClockList clocks=vec![] on_request=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("この月の打刻はありません"));
    }
}
