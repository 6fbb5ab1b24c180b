use leptos::*;

/// Destinations offered on the admin hub, as `(path, label)`.
pub const ADMIN_LINKS: [(&str, &str); 3] = [
    ("/admin/allowance-types", "手当タイプの追加・管理"),
    ("/admin/assign-allowance", "従業員への手当割り当て"),
    ("/admin/clock-requests", "打刻修正申請一覧"),
];

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg border border-border">
            <h1 class="px-6 py-4 border-b border-border text-3xl font-bold text-fg">"管理者ページ"</h1>
            <nav class="p-6 flex flex-col sm:flex-row gap-6">
                {ADMIN_LINKS
                    .into_iter()
                    .map(|(href, label)| view! {
                        <a
                            href=href
                            class="flex items-center gap-2 px-4 py-2 rounded bg-surface-muted hover:bg-action-ghost-bg-hover text-action-primary-bg font-medium"
                        >
                            {label}
                        </a>
                    })
                    .collect_view()}
            </nav>
        </section>
    }
}
