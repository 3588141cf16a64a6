use std::collections::BTreeMap;

use chrono::NaiveDate;
use contracts::domain::a001_seller_orders::QueryVariables;
use contracts::domain::a003_sellers::SellerRef;
use contracts::shared::dates::{date_string, default_range};
use contracts::shared::query_params::filter_empty_params;
use contracts::shared::seller_filter::aggregate;

/// User edits of the filter panel
#[derive(Debug, Clone, PartialEq)]
pub enum FilterAction {
    SetDateRange(NaiveDate, NaiveDate),
    SetSellerSelection(Vec<SellerRef>),
    SetStatus(String),
    /// Everything the filter panel submits at once
    Apply {
        start: NaiveDate,
        end: NaiveDate,
        sellers: Vec<SellerRef>,
        status: String,
    },
    Reset,
}

/// What the owner of the filter has to do after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome {
    Changed,
    /// Defaults restored; the owner zeroes its totals
    ResetTotals,
}

/// Фильтры списка: период, продавцы, статус.
///
/// Date order is not enforced here; the filter panel warns about an inverted range.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub seller_selection: Vec<SellerRef>,
    pub status: String,
    default_start: NaiveDate,
    default_end: NaiveDate,
}

impl FilterCriteria {
    /// Defaults: first day of `today`'s month through yesterday
    pub fn new(today: NaiveDate) -> Self {
        let (start, end) = default_range(today);
        Self {
            start_date: start,
            end_date: end,
            seller_selection: Vec::new(),
            status: String::new(),
            default_start: start,
            default_end: end,
        }
    }

    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    pub fn apply(&mut self, action: FilterAction) -> FilterOutcome {
        match action {
            FilterAction::SetDateRange(start, end) => self.set_date_range(start, end),
            FilterAction::SetSellerSelection(selection) => self.set_seller_selection(selection),
            FilterAction::SetStatus(status) => self.set_status(status),
            FilterAction::Apply {
                start,
                end,
                sellers,
                status,
            } => {
                self.set_date_range(start, end);
                self.set_seller_selection(sellers);
                self.set_status(status);
            }
            FilterAction::Reset => return self.reset(),
        }
        FilterOutcome::Changed
    }

    pub fn set_date_range(&mut self, start: NaiveDate, end: NaiveDate) {
        self.start_date = start;
        self.end_date = end;
    }

    /// Empty selection means all sellers
    pub fn set_seller_selection(&mut self, selection: Vec<SellerRef>) {
        self.seller_selection = selection;
    }

    /// Empty status means no status filter
    pub fn set_status(&mut self, status: String) {
        self.status = status;
    }

    pub fn reset(&mut self) -> FilterOutcome {
        self.start_date = self.default_start;
        self.end_date = self.default_end;
        self.seller_selection.clear();
        self.status.clear();
        FilterOutcome::ResetTotals
    }

    pub fn default_dates(&self) -> (NaiveDate, NaiveDate) {
        (self.default_start, self.default_end)
    }

    pub fn is_range_inverted(&self) -> bool {
        self.start_date > self.end_date
    }

    /// A single seller is sent by name; several are sent as the comma-joined name list
    pub fn seller_name(&self) -> String {
        match self.seller_selection.as_slice() {
            [] => String::new(),
            [single] => single.name.clone(),
            many => aggregate(many, true).seller_filter,
        }
    }

    pub fn to_query_variables(&self, page: u32, page_size: u32) -> QueryVariables {
        QueryVariables {
            date_start: date_string(self.start_date),
            date_end: date_string(self.end_date),
            seller_name: self.seller_name(),
            page,
            perpage: page_size,
            status: self.status.clone(),
        }
    }

    /// Applied filters keyed by their host query names, empty values included
    pub fn host_params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        params.insert("startDate".to_string(), date_string(self.start_date));
        params.insert("endDate".to_string(), date_string(self.end_date));
        params.insert("sellerName".to_string(), self.seller_name());
        params.insert("status".to_string(), self.status.clone());
        params
    }

    /// Applied filters as a host query string; empty values are left out
    pub fn to_host_query(&self) -> Result<String, String> {
        encode_host_params(self.host_params())
    }
}

pub fn encode_host_params(params: BTreeMap<String, String>) -> Result<String, String> {
    serde_qs::to_string(&filter_empty_params(params))
        .map_err(|e| format!("Failed to encode filters: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn filter() -> FilterCriteria {
        FilterCriteria::new(ymd(2024, 3, 15))
    }

    #[test]
    fn test_default_dates_on_fixed_clock() {
        let criteria = filter();
        assert_eq!(date_string(criteria.start_date), "2024-03-01");
        assert_eq!(date_string(criteria.end_date), "2024-03-14");
        assert!(criteria.seller_selection.is_empty());
        assert!(criteria.status.is_empty());
    }

    #[test]
    fn test_query_variables_projection() {
        let mut criteria = filter();
        criteria.set_seller_selection(vec![SellerRef::new("1", "Seller 1")]);
        criteria.set_status("invoiced".to_string());
        criteria.set_date_range(ymd(2024, 1, 5), ymd(2024, 2, 9));

        assert_eq!(
            criteria.to_query_variables(3, 40),
            QueryVariables {
                date_start: "2024-01-05".into(),
                date_end: "2024-02-09".into(),
                seller_name: "Seller 1".into(),
                page: 3,
                perpage: 40,
                status: "invoiced".into(),
            }
        );
    }

    #[test]
    fn test_seller_name_for_selection_sizes() {
        let mut criteria = filter();
        assert_eq!(criteria.seller_name(), "");
        criteria.set_seller_selection(vec![
            SellerRef::new("1", "Seller 1"),
            SellerRef::new("2", "Seller 2"),
        ]);
        assert_eq!(criteria.seller_name(), "Seller 1,Seller 2,");
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut criteria = filter();
        criteria.apply(FilterAction::SetDateRange(ymd(2023, 1, 1), ymd(2023, 12, 31)));
        criteria.apply(FilterAction::SetSellerSelection(vec![SellerRef::new("1", "Seller 1")]));
        criteria.apply(FilterAction::SetStatus("canceled".into()));

        assert_eq!(criteria.apply(FilterAction::Reset), FilterOutcome::ResetTotals);
        assert_eq!(criteria, filter());
    }

    #[test]
    fn test_apply_sets_all_fields() {
        let mut criteria = filter();
        let outcome = criteria.apply(FilterAction::Apply {
            start: ymd(2024, 2, 1),
            end: ymd(2024, 2, 29),
            sellers: vec![SellerRef::new("2", "Seller 2")],
            status: "handling".into(),
        });
        assert_eq!(outcome, FilterOutcome::Changed);
        let vars = criteria.to_query_variables(1, 20);
        assert_eq!(vars.date_start, "2024-02-01");
        assert_eq!(vars.date_end, "2024-02-29");
        assert_eq!(vars.seller_name, "Seller 2");
        assert_eq!(vars.status, "handling");
    }

    #[test]
    fn test_setters_report_change() {
        let mut criteria = filter();
        assert_eq!(
            criteria.apply(FilterAction::SetStatus(String::new())),
            FilterOutcome::Changed
        );
    }

    #[test]
    fn test_inverted_range_is_stored_as_is() {
        let mut criteria = filter();
        criteria.set_date_range(ymd(2024, 3, 10), ymd(2024, 3, 1));
        assert!(criteria.is_range_inverted());
        assert_eq!(criteria.to_query_variables(1, 20).date_start, "2024-03-10");
    }

    #[test]
    fn test_first_of_month_defaults_are_inverted() {
        let criteria = FilterCriteria::new(ymd(2024, 3, 1));
        assert!(criteria.is_range_inverted());
    }

    #[test]
    fn test_host_query_skips_empty_values() {
        let criteria = filter();
        assert_eq!(
            criteria.to_host_query().unwrap(),
            "endDate=2024-03-14&startDate=2024-03-01"
        );
    }
}
