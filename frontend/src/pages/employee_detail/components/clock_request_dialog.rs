use crate::api::{ClockType, TimeClock};
use crate::components::common::{Button, ButtonVariant};
use crate::components::layout::ErrorMessage;
use crate::pages::employee_detail::utils::ClockRequestFormState;
use leptos::{ev::SubmitEvent, *};

const FIELD_CLASS: &str = "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm";

/// Correction request for the clock in `target`; closed while `target` is `None`.
#[component]
pub fn ClockRequestDialog(
    #[prop(into)] target: Signal<Option<TimeClock>>,
    form: ClockRequestFormState,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] pending: MaybeSignal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <Show when=move || target.with(Option::is_some)>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <div
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_cancel.call(())
                ></div>
                <form
                    class="relative w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    on:submit=handle_submit
                >
                    <h2 class="text-lg font-semibold text-fg">"打刻修正申請"</h2>
                    {move || error.get().map(|msg| view! { <ErrorMessage message=msg /> })}
                    <div>
                        <label class="block text-sm font-medium text-fg">"打刻種別"</label>
                        <select
                            class=FIELD_CLASS
                            on:change=move |ev| {
                                if let Some(kind) = ClockType::parse(&event_target_value(&ev)) {
                                    form.kind.set(kind);
                                }
                            }
                        >
                            {ClockType::ALL
                                .into_iter()
                                .map(|kind| view! {
                                    <option value=kind.as_str() selected=move || form.kind.get() == kind>
                                        {kind.label()}
                                    </option>
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg">"打刻日時"</label>
                        <input
                            type="datetime-local"
                            required
                            class=FIELD_CLASS
                            prop:value=move || form.time.get()
                            on:input=move |ev| form.time.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg">"申請理由"</label>
                        <input
                            type="text"
                            class=FIELD_CLASS
                            prop:value=move || form.reason.get()
                            on:input=move |ev| form.reason.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold border border-border bg-surface-muted text-fg"
                            on:click=move |_| on_cancel.call(())
                        >
                            "キャンセル"
                        </button>
                        <Button variant=ButtonVariant::Primary loading=pending>"送信"</Button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
