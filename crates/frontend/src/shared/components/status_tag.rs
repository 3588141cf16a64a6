use contracts::domain::a001_seller_orders::StatusDisplay;
use leptos::prelude::*;

/// Status tag colored from the status style table; unknown statuses render unstyled
#[component]
pub fn StatusTag(status: StatusDisplay) -> impl IntoView {
    let style = if status.bg_color.is_empty() && status.font_color.is_empty() {
        String::new()
    } else {
        format!(
            "background-color: {}; color: {};",
            status.bg_color, status.font_color
        )
    };

    view! {
        <span class="badge badge--status" style=style>
            {status.label}
        </span>
    }
}
