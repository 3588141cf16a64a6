/// Allowed page sizes, in the order the selector shows them
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [20, 30, 40, 50];
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// User actions that move the window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationAction {
    Next,
    Prev,
    ChangePageSize(u32),
}

/// Окно отображаемых записей `[item_from, item_to]` для текущей страницы.
///
/// `item_to - item_from + 1 == page_size` after every transition. `item_to` is
/// not clamped to `total_items` on the last page; the view clamps for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationWindow {
    pub page: u32,
    pub page_size: u32,
    pub item_from: u64,
    pub item_to: u64,
    pub total_items: u64,
}

impl Default for PaginationWindow {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            item_from: 1,
            item_to: DEFAULT_PAGE_SIZE as u64,
            total_items: 0,
        }
    }
}

impl PaginationWindow {
    /// Returns true when the window changed and a refetch is due
    pub fn apply(&mut self, action: PaginationAction) -> bool {
        match action {
            PaginationAction::Next => {
                self.next_page();
                true
            }
            PaginationAction::Prev => self.prev_page(),
            PaginationAction::ChangePageSize(size) => self.change_page_size(size),
        }
    }

    pub fn next_page(&mut self) {
        let previous_to = self.item_to;
        self.page += 1;
        self.item_to = self.page_size as u64 * self.page as u64;
        self.item_from = previous_to + 1;
    }

    /// No-op on the first page
    pub fn prev_page(&mut self) -> bool {
        if self.page <= 1 {
            return false;
        }
        let size = self.page_size as u64;
        self.page -= 1;
        self.item_to = self.item_to.saturating_sub(size);
        self.item_from = self.item_from.saturating_sub(size);
        true
    }

    /// Sizes outside [`PAGE_SIZE_OPTIONS`] are rejected and leave the window as is
    pub fn change_page_size(&mut self, size: u32) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&size) {
            return false;
        }
        self.page_size = size;
        self.page = 1;
        self.item_from = 1;
        self.item_to = size as u64;
        true
    }

    /// Back to page 1 keeping the page size (after a filter change)
    pub fn rewind(&mut self) {
        self.page = 1;
        self.item_from = 1;
        self.item_to = self.page_size as u64;
    }

    pub fn set_total_items(&mut self, total: u64) {
        self.total_items = total;
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.item_to < self.total_items
    }

    /// Upper bound for the "from-to of total" label
    pub fn displayed_to(&self) -> u64 {
        self.item_to.min(self.total_items)
    }
}
