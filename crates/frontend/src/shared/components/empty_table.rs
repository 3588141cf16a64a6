use leptos::prelude::*;

#[component]
pub fn EmptyTable(
    /// Optional error from the last fetch, shown under the empty state
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="empty-table">
            <p class="empty-table__title">"No data available"</p>
            <p class="empty-table__text">"Adjust the filters to see records"</p>
            {move || error.get().map(|e| view! {
                <p class="empty-table__error">{e}</p>
            })}
        </div>
    }
}
