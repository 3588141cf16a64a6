//! Состояние списков: фильтры, окно пагинации и их синхронизация с запросами

pub mod filter_criteria;
pub mod list_sync;
pub mod pagination_window;

pub use filter_criteria::{encode_host_params, FilterAction, FilterCriteria, FilterOutcome};
pub use list_sync::{FetchRequest, ListPage, ListScope, ListSync, StalePolicy, SyncCommand};
pub use pagination_window::{PaginationAction, PaginationWindow, PAGE_SIZE_OPTIONS};
