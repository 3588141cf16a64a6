use crate::dashboards::CommissionReportDashboard;
use crate::shared::config::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Host context is read once; every view takes it from context.
    provide_context(AppConfig::from_location());

    view! {
        <CommissionReportDashboard />
    }
}
