use contracts::domain::a001_seller_orders::QueryVariables;

use super::filter_criteria::{FilterAction, FilterCriteria, FilterOutcome};
use super::pagination_window::{PaginationAction, PaginationWindow};

/// Identity supplied by the host environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListScope {
    /// Account-bound views always query their own account
    pub account: Option<String>,
    /// `sellerName` passed in the host query string
    pub host_seller_name: Option<String>,
}

impl ListScope {
    pub fn is_account_bound(&self) -> bool {
        self.account.is_some()
    }

    fn has_alternate_scope(&self) -> bool {
        self.account.is_some() || self.host_seller_name.is_some()
    }
}

/// How responses that arrive out of issuance order are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Whatever arrives last overwrites the list
    #[default]
    AcceptAll,
    /// Responses older than the newest issued fetch are dropped
    LatestOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub variables: QueryVariables,
}

/// What the view has to do after a state change
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncCommand {
    Fetch(FetchRequest),
    /// Nothing to query: list and totals were cleared locally
    Cleared,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<Row> {
    pub rows: Vec<Row>,
    pub total: u64,
}

impl<Row> From<(Vec<Row>, u64)> for ListPage<Row> {
    fn from((rows, total): (Vec<Row>, u64)) -> Self {
        Self { rows, total }
    }
}

/// Синхронизация списка: фильтры + окно пагинации -> запрос -> строки.
///
/// Every filter or window change yields exactly one [`SyncCommand`]; the view
/// runs the fetch and hands the result back to [`ListSync::on_response`].
#[derive(Debug, Clone)]
pub struct ListSync<Row> {
    pub filter: FilterCriteria,
    pub window: PaginationWindow,
    pub rows: Vec<Row>,
    pub loading: bool,
    pub last_error: Option<String>,
    scope: ListScope,
    policy: StalePolicy,
    issued: u64,
    settled: u64,
}

impl<Row> ListSync<Row> {
    pub fn new(filter: FilterCriteria, scope: ListScope) -> Self {
        Self {
            filter,
            window: PaginationWindow::default(),
            rows: Vec::new(),
            loading: false,
            last_error: None,
            scope,
            policy: StalePolicy::default(),
            issued: 0,
            settled: 0,
        }
    }

    pub fn with_policy(mut self, policy: StalePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn scope(&self) -> &ListScope {
        &self.scope
    }

    pub fn generation(&self) -> u64 {
        self.issued
    }

    /// Query variables for the current filter and window.
    /// The account overrides the seller selection; the host seller fills an empty one.
    pub fn variables(&self) -> QueryVariables {
        let mut vars = self
            .filter
            .to_query_variables(self.window.page, self.window.page_size);

        if let Some(account) = &self.scope.account {
            vars.seller_name = account.clone();
        } else if vars.seller_name.is_empty() {
            if let Some(host_seller) = &self.scope.host_seller_name {
                vars.seller_name = host_seller.clone();
            }
        }
        vars
    }

    /// Issue a fetch for the current state, or clear when no seller is in scope
    pub fn refresh(&mut self) -> SyncCommand {
        let variables = self.variables();
        self.issued += 1;

        if variables.seller_name.is_empty() && !self.scope.has_alternate_scope() {
            log::debug!("list sync: no seller in scope, clearing (gen {})", self.issued);
            self.rows.clear();
            self.window.set_total_items(0);
            self.loading = false;
            self.last_error = None;
            self.settled = self.issued;
            return SyncCommand::Cleared;
        }

        log::debug!("list sync: fetch gen {} {:?}", self.issued, variables);
        self.loading = true;
        SyncCommand::Fetch(FetchRequest {
            generation: self.issued,
            variables,
        })
    }

    /// Filter edits always restart from page 1
    pub fn on_filter(&mut self, action: FilterAction) -> SyncCommand {
        if self.filter.apply(action) == FilterOutcome::ResetTotals {
            self.window.set_total_items(0);
        }
        self.window.rewind();
        self.refresh()
    }

    /// `None` when the action did not move the window
    pub fn on_page(&mut self, action: PaginationAction) -> Option<SyncCommand> {
        if self.window.apply(action) {
            Some(self.refresh())
        } else {
            None
        }
    }

    /// Returns false when the response was dropped as stale.
    /// A failed fetch keeps the current rows ("no data yet").
    pub fn on_response(&mut self, generation: u64, result: Result<ListPage<Row>, String>) -> bool {
        if self.policy == StalePolicy::LatestOnly && generation < self.issued {
            log::debug!(
                "list sync: dropping stale response gen {} (latest {})",
                generation,
                self.issued
            );
            return false;
        }

        self.settled = self.settled.max(generation);
        self.loading = self.settled < self.issued;

        match result {
            Ok(page) => {
                self.rows = page.rows;
                self.window.set_total_items(page.total);
                self.last_error = None;
            }
            Err(e) => {
                log::warn!("list sync: fetch gen {} failed: {}", generation, e);
                self.last_error = Some(e);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a003_sellers::SellerRef;

    fn filter() -> FilterCriteria {
        FilterCriteria::new(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())
    }

    fn admin_sync() -> ListSync<&'static str> {
        ListSync::new(filter(), ListScope::default())
    }

    fn select_seller(sync: &mut ListSync<&'static str>) -> FetchRequest {
        match sync.on_filter(FilterAction::SetSellerSelection(vec![SellerRef::new("1", "Seller 1")])) {
            SyncCommand::Fetch(req) => req,
            other => panic!("expected fetch, got {:?}", other),
        }
    }

    fn page(rows: &[&'static str], total: u64) -> Result<ListPage<&'static str>, String> {
        Ok(ListPage {
            rows: rows.to_vec(),
            total,
        })
    }

    #[test]
    fn test_empty_seller_short_circuits() {
        let mut sync = admin_sync();
        sync.rows = vec!["old"];
        sync.window.set_total_items(99);

        assert_eq!(sync.refresh(), SyncCommand::Cleared);
        assert!(sync.rows.is_empty());
        assert_eq!(sync.window.total_items, 0);
        assert!(!sync.loading);
    }

    #[test]
    fn test_account_scope_fetches_without_selection() {
        let scope = ListScope {
            account: Some("acme".into()),
            host_seller_name: None,
        };
        let mut sync: ListSync<&str> = ListSync::new(filter(), scope);
        match sync.refresh() {
            SyncCommand::Fetch(req) => {
                assert_eq!(req.variables.seller_name, "acme");
                assert_eq!(req.generation, 1);
            }
            other => panic!("expected fetch, got {:?}", other),
        }
        assert!(sync.loading);
    }

    #[test]
    fn test_host_seller_fills_empty_selection() {
        let scope = ListScope {
            account: None,
            host_seller_name: Some("Seller 7".into()),
        };
        let mut sync: ListSync<&str> = ListSync::new(filter(), scope);
        assert_eq!(sync.variables().seller_name, "Seller 7");
        assert!(matches!(sync.refresh(), SyncCommand::Fetch(_)));
    }

    #[test]
    fn test_filter_change_rewinds_window() {
        let mut sync = admin_sync();
        select_seller(&mut sync);
        sync.on_page(PaginationAction::Next);
        sync.on_page(PaginationAction::Next);
        assert_eq!(sync.window.page, 3);

        match sync.on_filter(FilterAction::SetStatus("invoiced".into())) {
            SyncCommand::Fetch(req) => {
                assert_eq!(req.variables.page, 1);
                assert_eq!(req.variables.status, "invoiced");
                assert_eq!(req.variables.date_start, "2024-03-01");
                assert_eq!(req.variables.date_end, "2024-03-14");
            }
            other => panic!("expected fetch, got {:?}", other),
        }
        assert_eq!((sync.window.item_from, sync.window.item_to), (1, 20));
    }

    #[test]
    fn test_page_change_fetches_with_new_window() {
        let mut sync = admin_sync();
        select_seller(&mut sync);
        let cmd = sync.on_page(PaginationAction::ChangePageSize(50)).unwrap();
        match cmd {
            SyncCommand::Fetch(req) => {
                assert_eq!(req.variables.perpage, 50);
                assert_eq!(req.variables.page, 1);
            }
            other => panic!("expected fetch, got {:?}", other),
        }
        assert!(sync.on_page(PaginationAction::ChangePageSize(33)).is_none());
        assert!(sync.on_page(PaginationAction::Prev).is_none());
    }

    #[test]
    fn test_response_replaces_rows_and_total() {
        let mut sync = admin_sync();
        let req = select_seller(&mut sync);
        assert!(sync.on_response(req.generation, page(&["a", "b"], 42)));
        assert_eq!(sync.rows, vec!["a", "b"]);
        assert_eq!(sync.window.total_items, 42);
        assert!(!sync.loading);
    }

    #[test]
    fn test_failed_fetch_keeps_rows() {
        let mut sync = admin_sync();
        let req = select_seller(&mut sync);
        sync.on_response(req.generation, page(&["a"], 1));

        let next = match sync.on_page(PaginationAction::Next).unwrap() {
            SyncCommand::Fetch(req) => req,
            other => panic!("expected fetch, got {:?}", other),
        };
        assert!(sync.on_response(next.generation, Err("HTTP error: 502".into())));
        assert_eq!(sync.rows, vec!["a"]);
        assert_eq!(sync.last_error.as_deref(), Some("HTTP error: 502"));
        assert!(!sync.loading);
    }

    #[test]
    fn test_reset_zeroes_totals_and_clears() {
        let mut sync = admin_sync();
        let req = select_seller(&mut sync);
        sync.on_response(req.generation, page(&["a"], 10));

        assert_eq!(sync.on_filter(FilterAction::Reset), SyncCommand::Cleared);
        assert_eq!(sync.window.total_items, 0);
        assert!(sync.rows.is_empty());
        assert!(sync.filter.seller_selection.is_empty());
        assert!(sync.filter.status.is_empty());
    }

    #[test]
    fn test_accept_all_lets_late_response_win() {
        let mut sync = admin_sync();
        let first = select_seller(&mut sync);
        let second = match sync.on_filter(FilterAction::SetStatus("canceled".into())) {
            SyncCommand::Fetch(req) => req,
            other => panic!("expected fetch, got {:?}", other),
        };

        assert!(sync.on_response(second.generation, page(&["new"], 1)));
        assert!(sync.on_response(first.generation, page(&["old"], 5)));
        assert_eq!(sync.rows, vec!["old"]);
        assert_eq!(sync.window.total_items, 5);
        assert!(!sync.loading);
    }

    #[test]
    fn test_accept_all_response_after_reset_restores_rows() {
        let mut sync = admin_sync();
        let in_flight = select_seller(&mut sync);
        assert_eq!(sync.on_filter(FilterAction::Reset), SyncCommand::Cleared);
        assert!(sync.rows.is_empty());

        // the earlier seller's page still lands under the cleared filter
        assert!(sync.on_response(in_flight.generation, page(&["seller 1 order"], 3)));
        assert_eq!(sync.rows, vec!["seller 1 order"]);
        assert_eq!(sync.window.total_items, 3);
        assert!(sync.filter.seller_selection.is_empty());
        assert!(!sync.loading);
    }

    #[test]
    fn test_latest_only_drops_response_after_reset() {
        let mut sync = admin_sync().with_policy(StalePolicy::LatestOnly);
        let in_flight = select_seller(&mut sync);
        sync.on_filter(FilterAction::Reset);
        assert!(!sync.on_response(in_flight.generation, page(&["seller 1 order"], 3)));
        assert!(sync.rows.is_empty());
        assert_eq!(sync.window.total_items, 0);
    }

    #[test]
    fn test_latest_only_drops_stale_response() {
        let mut sync = admin_sync().with_policy(StalePolicy::LatestOnly);
        let first = select_seller(&mut sync);
        let second = match sync.on_filter(FilterAction::SetStatus("canceled".into())) {
            SyncCommand::Fetch(req) => req,
            other => panic!("expected fetch, got {:?}", other),
        };

        assert!(!sync.on_response(first.generation, page(&["old"], 5)));
        assert!(sync.loading);
        assert!(sync.on_response(second.generation, page(&["new"], 1)));
        assert_eq!(sync.rows, vec!["new"]);
        assert!(!sync.loading);
    }
}
