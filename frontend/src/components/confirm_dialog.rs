use leptos::ev::KeyboardEvent;
use leptos::*;

use crate::components::common::{Button, ButtonVariant};

/// Modal yes/no prompt used before destructive or irreversible actions.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: Option<String>,
    #[prop(optional, into)] pending: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_label = store_value(confirm_label.unwrap_or_else(|| "実行".to_string()));
    let confirm_variant = if destructive {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Primary
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
                <div
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_cancel.call(())
                ></div>
                <div
                    class="relative w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{title.clone()}</h2>
                    <p class="text-sm text-fg-muted">{message.clone()}</p>
                    <div class="flex justify-end gap-2">
                        <Button
                            variant=ButtonVariant::Secondary
                            on:click=move |_| on_cancel.call(())
                        >
                            "キャンセル"
                        </Button>
                        <Button
                            variant=confirm_variant
                            loading=pending
                            on:click=move |_| on_confirm.call(())
                        >
                            {move || confirm_label.get_value()}
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
