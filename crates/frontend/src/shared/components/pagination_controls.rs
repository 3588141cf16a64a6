use crate::shared::icons::icon;
use crate::shared::list_state::{PaginationAction, PaginationWindow};
use leptos::prelude::*;

/// PaginationControls component - "from-to of total" window with prev/next and rows selector
///
/// Hidden while the list has no items. The upper bound is clamped for display only.
#[component]
pub fn PaginationControls(
    /// Current window
    #[prop(into)]
    window: Signal<PaginationWindow>,

    /// Callback for next / previous / page size change
    on_action: Callback<PaginationAction>,

    /// Available page sizes
    page_size_options: Vec<u32>,
) -> impl IntoView {
    view! {
        <Show when=move || { window.get().total_items > 0 }>
            <div class="pagination-controls">
                <span class="pagination-label">"Show"</span>
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                            on_action.run(PaginationAction::ChangePageSize(size));
                        }
                    }
                    prop:value=move || window.get().page_size.to_string()
                >
                    {page_size_options.iter().map(|&size| {
                        view! {
                            <option value={size.to_string()} selected=move || window.get().page_size == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
                <span class="pagination-info">
                    {move || {
                        let w = window.get();
                        format!("{}-{} of {}", w.item_from, w.displayed_to(), w.total_items)
                    }}
                </span>
                <button
                    class="pagination-btn"
                    on:click=move |_| on_action.run(PaginationAction::Prev)
                    disabled=move || !window.get().has_prev()
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| on_action.run(PaginationAction::Next)
                    disabled=move || !window.get().has_next()
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
            </div>
        </Show>
    }
}
