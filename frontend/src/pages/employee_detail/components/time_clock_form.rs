use crate::api::ClockType;
use crate::components::common::Button;
use crate::components::layout::{MessageState, Messages};
use crate::pages::employee_detail::utils::{NotifyMode, TimeClockFormState};
use leptos::{ev::SubmitEvent, *};

const FIELD_CLASS: &str = "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm";

#[component]
pub fn TimeClockForm(
    form: TimeClockFormState,
    message: RwSignal<MessageState>,
    #[prop(into)] pending: MaybeSignal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };
    let notify = form.notify;
    let mode = form.mode;

    view! {
        <form class="space-y-4" on:submit=handle_submit>
            <Messages state=message />
            <div>
                <label for="clock-type" class="block text-sm font-medium text-fg">"打刻種別"</label>
                <select
                    id="clock-type"
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
                <label for="clock-timestamp" class="block text-sm font-medium text-fg">"打刻日時"</label>
                <input
                    id="clock-timestamp"
                    type="datetime-local"
                    required
                    class=FIELD_CLASS
                    prop:value=move || form.timestamp.get()
                    on:input=move |ev| form.timestamp.set(event_target_value(&ev))
                />
            </div>
            <Show when=move || form.kind.get() == ClockType::ClockIn>
                <div class="flex items-center gap-2">
                    <input
                        id="clock-notify"
                        type="checkbox"
                        prop:checked=move || notify.get()
                        on:change=move |ev| notify.set(event_target_checked(&ev))
                    />
                    <label for="clock-notify" class="text-sm text-fg">"通知する"</label>
                </div>
                <Show when=move || notify.get()>
                    <fieldset class="space-y-2 rounded-md border border-border p-3">
                        <div class="flex gap-4 text-sm">
                            <label class="flex items-center gap-1">
                                <input
                                    type="radio"
                                    name="notify-mode"
                                    value=NotifyMode::Delay.as_str()
                                    prop:checked=move || mode.get() == NotifyMode::Delay
                                    on:change=move |ev| mode.set(NotifyMode::parse(&event_target_value(&ev)))
                                />
                                "経過時間で通知"
                            </label>
                            <label class="flex items-center gap-1">
                                <input
                                    type="radio"
                                    name="notify-mode"
                                    value=NotifyMode::At.as_str()
                                    prop:checked=move || mode.get() == NotifyMode::At
                                    on:change=move |ev| mode.set(NotifyMode::parse(&event_target_value(&ev)))
                                />
                                "時刻で通知"
                            </label>
                        </div>
                        <Show
                            when=move || mode.get() == NotifyMode::At
                            fallback=move || view! {
                                <div class="flex gap-2 items-center text-sm">
                                    <input
                                        type="number"
                                        min="0"
                                        max="23"
                                        class="w-20 rounded-md border border-form-control-border px-2 py-1"
                                        prop:value=move || form.delay_h.get()
                                        on:input=move |ev| form.delay_h.set(event_target_value(&ev))
                                    />
                                    "時間"
                                    <input
                                        type="number"
                                        min="0"
                                        max="59"
                                        class="w-20 rounded-md border border-form-control-border px-2 py-1"
                                        prop:value=move || form.delay_m.get()
                                        on:input=move |ev| form.delay_m.set(event_target_value(&ev))
                                    />
                                    "分後"
                                </div>
                            }
                        >
                            <input
                                type="time"
                                class="rounded-md border border-form-control-border px-2 py-1 text-sm"
                                prop:value=move || form.notify_at.get()
                                on:input=move |ev| form.notify_at.set(event_target_value(&ev))
                            />
                        </Show>
                    </fieldset>
                </Show>
            </Show>
            <Button loading=pending>"登録"</Button>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn form_lists_every_clock_type_and_hides_notify_options_by_default() {
        let html = render_to_string(|| {
            let form = TimeClockFormState::default();
            let message = create_rw_signal(MessageState::default());
            view! {
                <TimeClockForm form=form message=message pending=false on_submit=Callback::new(|_| {}) />
            }
        });
        for label in ["出勤", "退勤", "休憩開始", "休憩終了"] {
            assert!(html.contains(label), "missing {}", label);
        }
        assert!(html.contains("type=\"datetime-local\""));
        assert!(html.contains("通知する"));
        assert!(!html.contains("経過時間で通知"));
    }

    #[test]
    fn notify_options_appear_when_enabled() {
        let html = render_to_string(|| {
            let form = TimeClockFormState::default();
            form.notify.set(true);
            form.mode.set(NotifyMode::At);
            let message = create_rw_signal(MessageState::default());
            view! {
                <TimeClockForm form=form message=message pending=false on_submit=Callback::new(|_| {}) />
            }
        });
        assert!(html.contains("経過時間で通知"));
        assert!(html.contains("type=\"time\""));
    }

    #[test]
    fn notify_toggle_only_offered_for_clock_in() {
        let html = render_to_string(|| {
            let form = TimeClockFormState::default();
            form.kind.set(ClockType::ClockOut);
            form.notify.set(true);
            let message = create_rw_signal(MessageState::default());
            view! {
                <TimeClockForm form=form message=message pending=false on_submit=Callback::new(|_| {}) />
            }
        });
        assert!(html.contains("退勤"));
        assert!(!html.contains("通知する"));
        assert!(!html.contains("経過時間で通知"));
    }
}
