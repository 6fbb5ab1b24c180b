use crate::api::PayrollResponse;
use crate::pages::employee_detail::utils::format_yen;
use leptos::*;

#[component]
pub fn PayrollDisplay(payroll: PayrollResponse) -> impl IntoView {
    let rows = [
        ("支給額", payroll.gross_salary),
        ("手当合計", payroll.total_allowance),
        ("健康保険（従業員負担分）", payroll.health_insurance),
        ("厚生年金（従業員負担分）", payroll.pension),
        ("控除合計", payroll.total_deductions),
    ];

    view! {
        <dl class="divide-y divide-border text-sm">
            <div class="flex justify-between py-2">
                <dt class="text-fg-muted">"従業員名"</dt>
                <dd class="text-fg">{payroll.employee_name}</dd>
            </div>
            {rows
                .into_iter()
                .map(|(label, amount)| view! {
                    <div class="flex justify-between py-2">
                        <dt class="text-fg-muted">{label}</dt>
                        <dd class="text-fg tabular-nums">{format_yen(amount)}</dd>
                    </div>
                })
                .collect_view()}
            <div class="flex justify-between py-2 font-semibold">
                <dt class="text-fg">"手取り給与"</dt>
                <dd class="text-fg tabular-nums">{format_yen(payroll.net_salary)}</dd>
            </div>
        </dl>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_every_payroll_line() {
        let html = render_to_string(|| {
            let payroll = PayrollResponse {
                employee_name: "Aoki".into(),
                gross_salary: 300000.0,
                total_allowance: 20000.0,
                health_insurance: 15000.0,
                pension: 27450.0,
                total_deductions: 42450.0,
                net_salary: 277550.0,
            };
            view! { <PayrollDisplay payroll=payroll /> }
        });
        assert!(html.contains("Aoki"));
        assert!(html.contains("300,000 円"));
        assert!(html.contains("健康保険（従業員負担分）"));
        assert!(html.contains("厚生年金（従業員負担分）"));
        assert!(html.contains("手取り給与"));
        assert!(html.contains("277,550 円"));
    }

    #[test]
    fn fractional_amounts_render_rounded() {
        let html = render_to_string(|| {
            let payroll = PayrollResponse {
                employee_name: "Aoki".into(),
                gross_salary: 300925.875,
                total_allowance: 925.875,
                health_insurance: 14946.25,
                pension: 27525.5,
                total_deductions: 42471.75,
                net_salary: 258454.125,
            };
            view! { <PayrollDisplay payroll=payroll /> }
        });
        assert!(html.contains("300,926 円"));
        assert!(html.contains("27,526 円"));
        assert!(html.contains("258,454 円"));
    }
}
