use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="text-center py-10 px-4 rounded-lg border-2 border-dashed border-border-strong bg-surface-muted">
            <p class="text-sm font-semibold text-fg">{title}</p>
            {description.map(|desc| view! { <p class="mt-1 text-sm text-fg-muted">{desc}</p> })}
        </div>
    }
}
