use contracts::domain::a003_sellers::BillingSettings;
use leptos::prelude::*;

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// Сводка настроек биллинга (только чтение)
#[component]
pub fn SettingsSummary(#[prop(into)] settings: Signal<Option<BillingSettings>>) -> impl IntoView {
    view! {
        {move || settings.get().map(|s| view! {
            <div class="settings-summary">
                <span class="settings-summary__item">
                    "Billing cycle: " {or_dash(&s.billing_cycle)}
                </span>
                <span class="settings-summary__item">
                    "Cycle start: " {or_dash(&s.start_date)}
                </span>
                <span class="settings-summary__item">
                    "Cycle end: " {or_dash(&s.end_date)}
                </span>
                <span class="settings-summary__item">
                    "Integration: " {or_dash(&s.integration)}
                </span>
            </div>
        })}
    }
}
