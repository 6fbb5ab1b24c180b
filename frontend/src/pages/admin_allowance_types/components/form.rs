use crate::api::AllowanceKind;
use crate::components::common::Button;
use crate::pages::admin_allowance_types::utils::{shows_commission_field, AllowanceTypeFormState};
use leptos::{ev::SubmitEvent, *};

const FIELD_CLASS: &str = "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm";

/// Add form, switching to edit mode while `form.editing` holds an id.
#[component]
pub fn AllowanceTypeForm(
    form: AllowanceTypeFormState,
    #[prop(into)] pending: MaybeSignal<bool>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };
    let editing = move || form.editing.get().is_some();

    view! {
        <form class="space-y-4" on:submit=handle_submit>
            <div>
                <label for="allowance-name" class="block text-sm font-medium text-fg">"名前"</label>
                <input
                    id="allowance-name"
                    type="text"
                    required
                    class=FIELD_CLASS
                    prop:value=move || form.name.get()
                    on:input=move |ev| form.name.set(event_target_value(&ev))
                />
            </div>
            <div>
                <label for="allowance-kind" class="block text-sm font-medium text-fg">"タイプ"</label>
                <select
                    id="allowance-kind"
                    required
                    class=FIELD_CLASS
                    on:change=move |ev| form.kind.set(AllowanceKind::parse(&event_target_value(&ev)))
                >
                    <option value="" selected=move || form.kind.get().is_none()>"選択してください"</option>
                    <option
                        value=AllowanceKind::Commission.as_str()
                        selected=move || form.kind.get() == Some(AllowanceKind::Commission)
                    >
                        "歩合制"
                    </option>
                    <option
                        value=AllowanceKind::Fixed.as_str()
                        selected=move || form.kind.get() == Some(AllowanceKind::Fixed)
                    >
                        "固定額"
                    </option>
                </select>
            </div>
            <div>
                <label for="allowance-description" class="block text-sm font-medium text-fg">"説明"</label>
                <textarea
                    id="allowance-description"
                    rows="2"
                    class=FIELD_CLASS
                    prop:value=move || form.description.get()
                    on:input=move |ev| form.description.set(event_target_value(&ev))
                ></textarea>
            </div>
            <Show when=move || shows_commission_field(form.kind.get())>
                <div>
                    <label for="allowance-rate" class="block text-sm font-medium text-fg">"歩合率"</label>
                    <div class="flex items-center gap-2">
                        <input
                            id="allowance-rate"
                            type="number"
                            min="0"
                            step="0.1"
                            required
                            class=FIELD_CLASS
                            prop:value=move || form.commission_percent.get()
                            on:input=move |ev| form.commission_percent.set(event_target_value(&ev))
                        />
                        <span class="text-sm text-fg-muted">"%"</span>
                    </div>
                </div>
            </Show>
            <div class="flex gap-2">
                <Button loading=pending>{move || if editing() { "更新" } else { "追加" }}</Button>
                <Show when=editing>
                    <button
                        type="button"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold border border-border bg-surface-muted text-fg"
                        on:click=move |_| on_cancel.call(())
                    >
                        "キャンセル"
                    </button>
                </Show>
            </div>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn render(setup: impl Fn(&AllowanceTypeFormState) + 'static) -> String {
        render_to_string(move || {
            let form = AllowanceTypeFormState::default();
            setup(&form);
            view! {
                <AllowanceTypeForm
                    form=form
                    pending=false
                    on_submit=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        })
    }

    #[test]
    fn add_mode_hides_rate_and_cancel() {
        let html = render(|_| {});
        assert!(html.contains("選択してください"));
        assert!(html.contains("歩合制"));
        assert!(html.contains("固定額"));
        assert!(html.contains("追加"));
        assert!(!html.contains("歩合率"));
        assert!(!html.contains("キャンセル"));
    }

    #[test]
    fn edit_mode_on_commission_type_shows_rate_and_cancel() {
        let html = render(|form| {
            form.kind.set(Some(AllowanceKind::Commission));
            form.editing.set(Some(3));
        });
        assert!(html.contains("歩合率"));
        assert!(html.contains("更新"));
        assert!(html.contains("キャンセル"));
    }
}
