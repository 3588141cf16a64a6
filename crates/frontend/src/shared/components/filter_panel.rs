use contracts::domain::a003_sellers::SellerOption;
use contracts::shared::dates::{date_string, parse_date};
use contracts::shared::order_status::status_options;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::icons::icon;
use crate::shared::list_state::{FilterAction, FilterCriteria};

/// FilterPanel component - период, продавец и статус для списков отчета.
///
/// Edits stay local until "Filter" is pressed; "Delete" restores the defaults.
#[component]
pub fn FilterPanel(
    /// Currently applied filter
    #[prop(into)]
    criteria: Signal<FilterCriteria>,

    /// Options of the seller select
    #[prop(into)]
    seller_options: Signal<Vec<SellerOption>>,

    /// Account-bound views cannot pick another seller
    #[prop(optional)]
    disable_seller_select: bool,

    /// Apply / reset requests
    on_action: Callback<FilterAction>,
) -> impl IntoView {
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());
    let seller_id = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);

    // Черновик повторяет применённый фильтр (в том числе после сброса)
    Effect::new(move |_| {
        let applied = criteria.get();
        date_from.set(date_string(applied.start_date));
        date_to.set(date_string(applied.end_date));
        seller_id.set(
            applied
                .seller_selection
                .first()
                .map(|s| s.id.clone())
                .unwrap_or_default(),
        );
        status.set(applied.status.clone());
        form_error.set(None);
    });

    let range_inverted = move || date_from.get() > date_to.get();

    let on_filter = move |_| {
        let start = parse_date(&date_from.get_untracked());
        let end = parse_date(&date_to.get_untracked());
        let (start, end) = match (start, end) {
            (Ok(start), Ok(end)) => (start, end),
            (Err(e), _) | (_, Err(e)) => {
                form_error.set(Some(e.to_string()));
                return;
            }
        };

        let selected = seller_id.get_untracked();
        let sellers = seller_options
            .get_untracked()
            .into_iter()
            .filter(|option| !selected.is_empty() && option.value.id == selected)
            .map(|option| option.value)
            .collect();

        form_error.set(None);
        on_action.run(FilterAction::Apply {
            start,
            end,
            sellers,
            status: status.get_untracked(),
        });
    };

    let on_delete = move |_| {
        on_action.run(FilterAction::Reset);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                {icon("filter")}
                <span class="filter-panel__title">"Filters"</span>
            </div>
            <div class="filter-panel-content">
                <Flex align=FlexAlign::Center gap=FlexGap::Small>
                    <DateRangePicker
                        date_from=date_from
                        date_to=date_to
                        on_change=Callback::new(move |(from, to): (String, String)| {
                            date_from.set(from);
                            date_to.set(to);
                        })
                        label="Period".to_string()
                    />
                    <div class="form-group">
                        <label>"Seller"</label>
                        <select
                            disabled=disable_seller_select
                            prop:value=move || seller_id.get()
                            on:change=move |ev| seller_id.set(event_target_value(&ev))
                        >
                            <option value="">"All sellers"</option>
                            {move || seller_options.get().into_iter().map(|option| {
                                let id = option.value.id.clone();
                                let is_selected = id.clone();
                                view! {
                                    <option value=id selected=move || seller_id.get() == is_selected>
                                        {option.label}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label>"Status"</label>
                        <select
                            prop:value=move || status.get()
                            on:change=move |ev| status.set(event_target_value(&ev))
                        >
                            <option value="">"All statuses"</option>
                            {status_options().into_iter().map(|option| {
                                let value = option.value.clone();
                                let is_selected = option.value;
                                view! {
                                    <option value=value selected=move || status.get() == is_selected>
                                        {option.label}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>
                    <Button appearance=ButtonAppearance::Primary on_click=on_filter>
                        "Filter"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=on_delete>
                        "Delete"
                    </Button>
                </Flex>
                <Show when=range_inverted>
                    <div class="filter-panel__warning">
                        "Start date is after end date"
                    </div>
                </Show>
                {move || form_error.get().map(|e| view! {
                    <div class="filter-panel__error">{e}</div>
                })}
            </div>
        </div>
    }
}
