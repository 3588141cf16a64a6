use chrono::Datelike;
use contracts::shared::dates::{date_string, month_range, parse_date, previous_month_range};
use leptos::prelude::*;
use thaw::*;

/// Range as `YYYY-MM-DD` strings, the format the date inputs use
fn range_strings(range: Option<(chrono::NaiveDate, chrono::NaiveDate)>) -> Option<(String, String)> {
    range.map(|(start, end)| (date_string(start), date_string(end)))
}

/// "-1M": the month before the current "from" date; nothing when "from" is unparseable
pub fn previous_month_of(date_from: &str) -> Option<(String, String)> {
    let from = parse_date(date_from).ok()?;
    range_strings(previous_month_range(from))
}

/// "0M": the whole month containing `today`
pub fn current_month_of(today: chrono::NaiveDate) -> Option<(String, String)> {
    range_strings(month_range(today.year(), today.month()))
}

/// DateRangePicker component - период дат: два поля и быстрый выбор месяца
#[component]
pub fn DateRangePicker(
    /// Значение даты "от" в формате yyyy-mm-dd
    #[prop(into)]
    date_from: Signal<String>,

    /// Значение даты "до" в формате yyyy-mm-dd
    #[prop(into)]
    date_to: Signal<String>,

    /// Callback при изменении диапазона дат (from, to)
    on_change: Callback<(String, String)>,

    #[prop(optional)]
    label: Option<String>,
) -> impl IntoView {
    let on_from_change = move |new_from: String| {
        on_change.run((new_from, date_to.get_untracked()));
    };

    let on_to_change = move |new_to: String| {
        on_change.run((date_from.get_untracked(), new_to));
    };

    let on_previous_month = move |_| {
        if let Some(range) = previous_month_of(&date_from.get_untracked()) {
            on_change.run(range);
        }
    };

    let on_current_month = move |_| {
        if let Some(range) = current_month_of(chrono::Local::now().date_naive()) {
            on_change.run(range);
        }
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small>
            {label.map(|l| view! { <Label>{l}</Label> })}

            <Flex class="date-range-picker" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    prop:value=date_from
                    on:input=move |ev| on_from_change(event_target_value(&ev))
                />
                <div>"-"</div>
                <input
                    type="date"
                    prop:value=date_to
                    on:input=move |ev| on_to_change(event_target_value(&ev))
                />
                <div class="date-range-picker-compact">
                    <ButtonGroup>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=on_previous_month
                        >
                            "-1M"
                        </Button>
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Subtle
                            on_click=on_current_month
                        >
                            "0M"
                        </Button>
                    </ButtonGroup>
                </div>
            </Flex>
        </Flex>
    }
}
