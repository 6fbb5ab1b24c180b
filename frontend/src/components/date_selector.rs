use leptos::*;

use crate::utils::period::{available_months, can_go_next_year, can_go_prev_year, YearMonth};

#[component]
pub fn DateSelector(
    #[prop(into)] value: Signal<YearMonth>,
    on_change: Callback<YearMonth>,
) -> impl IntoView {
    let year = move || value.get().year;
    view! {
        <div class="flex flex-col items-center gap-2 mb-4">
            <div class="flex items-center gap-2">
                <button
                    type="button"
                    aria-label="前年"
                    class="px-2 py-1 rounded hover:bg-action-ghost-bg-hover disabled:opacity-40"
                    disabled=move || !can_go_prev_year(year())
                    on:click=move |_| on_change.call(value.get_untracked().prev_year())
                >
                    "«"
                </button>
                <span class="text-lg font-semibold text-fg">{move || format!("{}年", year())}</span>
                <button
                    type="button"
                    aria-label="翌年"
                    class="px-2 py-1 rounded hover:bg-action-ghost-bg-hover disabled:opacity-40"
                    disabled=move || !can_go_next_year(year())
                    on:click=move |_| on_change.call(value.get_untracked().next_year())
                >
                    "»"
                </button>
            </div>
            <div class="flex flex-row flex-wrap items-center justify-center gap-2">
                {move || {
                    let current = value.get();
                    available_months(current.year)
                        .into_iter()
                        .map(|m| {
                            let class = if m == current.month {
                                "px-3 py-1 rounded bg-action-primary-bg text-action-primary-text"
                            } else {
                                "px-3 py-1 rounded hover:bg-action-ghost-bg-hover text-fg"
                            };
                            view! {
                                <button
                                    type="button"
                                    class=class
                                    data-month=m
                                    on:click=move |_| on_change.call(current.with_month(m))
                                >
                                    {format!("{}月", m)}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
