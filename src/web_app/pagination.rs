// web_app/pagination.rs - Paginated list state
//
// Holds everything a list page needs between fetches: the current page
// window, the settled search term and the last applied page of items.
// Every fetch is tagged with a request id; a response whose id is not the
// latest one is dropped, so a slow fetch for an old page can never overwrite
// a newer result.

use std::time::Duration;

use crate::web_app::debounce::DEFAULT_DELAY;
use crate::web_app::model::{Book, BookQuery, PageResponse, ReadingStatus, DEFAULT_PAGE_SIZE};

/// Default number of numbered page buttons
pub const DEFAULT_PAGE_BUTTONS: usize = 5;

/// Current page (1-based) and the totals reported by the last fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub size: u32,
    pub total_pages: u32,
    pub total_elements: u64,
}

impl PageWindow {
    pub fn new(size: u32) -> Self {
        PageWindow {
            page: 1,
            size,
            total_pages: 0,
            total_elements: 0,
        }
    }

    /// 0-based index sent to the API
    pub fn backend_index(&self) -> u32 {
        self.page.saturating_sub(1)
    }

    /// Bring a requested page into `[1, total_pages]` (page 1 when empty)
    pub fn clamp(&self, requested: u32) -> u32 {
        requested.clamp(1, self.total_pages.max(1))
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// At most `max_buttons` consecutive page numbers containing the current page
    pub fn visible_pages(&self, max_buttons: usize) -> Vec<u32> {
        if self.total_pages == 0 || max_buttons == 0 {
            return Vec::new();
        }
        let count = (max_buttons as u32).min(self.total_pages);
        let last_start = self.total_pages - count + 1;
        let start = self
            .page
            .saturating_sub(count / 2)
            .clamp(1, last_start);
        (start..start + count).collect()
    }
}

/// Identifier attached to one list fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestId(u64);

/// Hands out increasing request ids and remembers the latest one
#[derive(Clone, Debug, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn next(&mut self) -> RequestId {
        self.latest += 1;
        RequestId(self.latest)
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        id.0 == self.latest
    }
}

/// What happened to a fetch result handed to [`ListState::apply`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The result replaced the list
    Applied,
    /// A newer request was issued; the result was ignored
    Stale,
    /// The current page no longer exists; the page moved back and needs a fetch
    PageShifted,
}

#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub window: PageWindow,
    pub query: String,
    pub loading: bool,
    pub error: Option<String>,
    sequencer: RequestSequencer,
}

impl<T> ListState<T> {
    pub fn new(page_size: u32) -> Self {
        ListState {
            items: Vec::new(),
            window: PageWindow::new(page_size),
            query: String::new(),
            loading: false,
            error: None,
            sequencer: RequestSequencer::default(),
        }
    }

    /// Mark a fetch as started and return its id
    pub fn begin(&mut self) -> RequestId {
        self.loading = true;
        self.sequencer.next()
    }

    /// Apply the outcome of the fetch identified by `id`
    pub fn apply(&mut self, id: RequestId, result: Result<PageResponse<T>, String>) -> ApplyOutcome {
        if !self.sequencer.is_current(id) {
            tracing::debug!("dropping stale list response {:?}", id);
            return ApplyOutcome::Stale;
        }
        self.loading = false;

        match result {
            Ok(page) => {
                self.window.total_pages = page.total_pages;
                self.window.total_elements = page.total_elements;
                self.error = None;
                if page.content.is_empty() && page.total_pages > 0 && self.window.page > page.total_pages {
                    self.items.clear();
                    self.window.page = page.total_pages;
                    return ApplyOutcome::PageShifted;
                }
                self.items = page.content;
            }
            Err(message) => {
                self.items.clear();
                self.window.total_pages = 0;
                self.window.total_elements = 0;
                self.error = Some(message);
            }
        }
        ApplyOutcome::Applied
    }

    /// Store a new settled search term; a change sends the list back to page 1
    pub fn set_query(&mut self, query: &str) -> bool {
        if self.query == query {
            return false;
        }
        self.query = query.to_string();
        self.window.page = 1;
        true
    }

    /// Move to a page, clamped to the known range; returns whether it moved
    pub fn go_to(&mut self, requested: u32) -> bool {
        let target = self.window.clamp(requested);
        if target == self.window.page {
            return false;
        }
        self.window.page = target;
        true
    }

    /// Drop matching items without a refetch
    pub fn remove_where(&mut self, pred: impl Fn(&T) -> bool) {
        let before = self.items.len();
        self.items.retain(|item| !pred(item));
        let removed = (before - self.items.len()) as u64;
        self.window.total_elements = self.window.total_elements.saturating_sub(removed);
    }
}

impl ListState<Book> {
    /// Request parameters for the current page and search term
    pub fn book_query(&self, status: Option<ReadingStatus>) -> BookQuery {
        BookQuery {
            status,
            page: self.window.backend_index(),
            size: self.window.size,
            search: self.query.clone(),
        }
    }
}

/// Per-page settings of the shared list view
#[derive(Clone, Debug, PartialEq)]
pub struct ListViewConfig {
    /// `None` shows the whole library
    pub status: Option<ReadingStatus>,
    pub title: &'static str,
    pub empty_text: &'static str,
    pub page_size: u32,
    pub max_page_buttons: usize,
    pub search_delay: Duration,
    pub confirm_delete: &'static str,
}

impl ListViewConfig {
    pub fn library() -> Self {
        ListViewConfig {
            status: None,
            title: "Library",
            empty_text: "No books in your library yet.",
            page_size: DEFAULT_PAGE_SIZE,
            max_page_buttons: DEFAULT_PAGE_BUTTONS,
            search_delay: DEFAULT_DELAY,
            confirm_delete: "Are you sure you want to delete this book?",
        }
    }

    pub fn for_status(status: ReadingStatus) -> Self {
        let (title, empty_text) = match status {
            ReadingStatus::ToRead => ("To Read", "No books waiting to be read."),
            ReadingStatus::CurrentlyReading => ("Currently Reading", "You are not reading anything right now."),
            ReadingStatus::Finished => ("Finished", "No finished books yet."),
            ReadingStatus::GaveUp => ("Gave Up", "No abandoned books."),
        };
        ListViewConfig {
            status: Some(status),
            title,
            empty_text,
            ..ListViewConfig::library()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(ids: &[i64], total_elements: u64, total_pages: u32) -> PageResponse<i64> {
        PageResponse {
            content: ids.to_vec(),
            total_elements,
            total_pages,
            size: 10,
            number: 0,
        }
    }

    #[test]
    fn test_backend_index_is_zero_based() {
        let mut window = PageWindow::new(10);
        assert_eq!(window.backend_index(), 0);
        window.page = 3;
        assert_eq!(window.backend_index(), 2);
    }

    #[test]
    fn test_visible_pages_window() {
        let window = PageWindow { page: 1, size: 10, total_pages: 12, total_elements: 120 };
        assert_eq!(window.visible_pages(5), vec![1, 2, 3, 4, 5]);

        let window = PageWindow { page: 7, ..window };
        assert_eq!(window.visible_pages(5), vec![5, 6, 7, 8, 9]);

        let window = PageWindow { page: 12, ..window };
        assert_eq!(window.visible_pages(5), vec![8, 9, 10, 11, 12]);

        let window = PageWindow { page: 2, total_pages: 3, ..window };
        assert_eq!(window.visible_pages(5), vec![1, 2, 3]);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state: ListState<i64> = ListState::new(10);
        let first = state.begin();
        let second = state.begin();

        assert_eq!(state.apply(second, Ok(page(&[2], 1, 1))), ApplyOutcome::Applied);
        assert_eq!(state.apply(first, Ok(page(&[1], 1, 1))), ApplyOutcome::Stale);
        assert_eq!(state.items, vec![2]);
    }

    #[test]
    fn test_failure_clears_list() {
        let mut state: ListState<i64> = ListState::new(10);
        let id = state.begin();
        state.apply(id, Ok(page(&[1, 2], 2, 1)));

        let id = state.begin();
        state.apply(id, Err("boom".to_string()));
        assert!(state.items.is_empty());
        assert_eq!(state.window.total_pages, 0);
        assert_eq!(state.window.total_elements, 0);
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(!state.loading);
    }

    #[test]
    fn test_query_change_resets_page() {
        let mut state: ListState<i64> = ListState::new(10);
        state.window.total_pages = 4;
        assert!(state.go_to(3));
        assert!(state.set_query("orwell"));
        assert_eq!(state.window.page, 1);
        assert!(!state.set_query("orwell"));
    }

    #[test]
    fn test_empty_trailing_page_steps_back() {
        let mut state: ListState<i64> = ListState::new(10);
        state.window.total_pages = 2;
        state.go_to(2);

        let id = state.begin();
        assert_eq!(state.apply(id, Ok(page(&[], 10, 1))), ApplyOutcome::PageShifted);
        assert_eq!(state.window.page, 1);
    }

    #[test]
    fn test_status_config_keeps_defaults() {
        let config = ListViewConfig::for_status(ReadingStatus::Finished);
        assert_eq!(config.status, Some(ReadingStatus::Finished));
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.max_page_buttons, DEFAULT_PAGE_BUTTONS);
    }
}
