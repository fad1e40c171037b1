// tests/pagination_tests.rs
// List state: page window, clamping and out-of-order responses

use bookshelf::web_app::model::*;
use bookshelf::web_app::pagination::*;

fn page_of(ids: std::ops::RangeInclusive<i64>, total_elements: u64, number: u32) -> PageResponse<i64> {
    PageResponse {
        content: ids.collect(),
        total_elements,
        total_pages: total_elements.div_ceil(10) as u32,
        size: 10,
        number,
    }
}

#[test]
fn test_first_fetch_populates_window() {
    let mut state = ListState::<i64>::new(DEFAULT_PAGE_SIZE);
    let id = state.begin();
    assert!(state.loading);

    assert_eq!(state.apply(id, Ok(page_of(1..=10, 47, 0))), ApplyOutcome::Applied);
    assert!(!state.loading);
    assert_eq!(state.items.len(), 10);
    assert_eq!(state.window.total_pages, 5);
    assert_eq!(state.window.total_elements, 47);
    assert!(!state.window.can_go_prev());
    assert!(state.window.can_go_next());
}

#[test]
fn test_navigation_is_clamped() {
    let mut state = ListState::<i64>::new(10);
    let id = state.begin();
    state.apply(id, Ok(page_of(1..=10, 30, 0)));

    assert!(!state.go_to(0), "page 0 clamps to the current page 1");
    assert!(state.go_to(3));
    assert_eq!(state.window.backend_index(), 2);
    assert!(!state.go_to(99), "clamps to the last page, which is current");
    assert!(state.go_to(2));
    assert_eq!(state.window.page, 2);
}

#[test]
fn test_slow_older_response_cannot_overwrite_newer() {
    let mut state = ListState::<i64>::new(10);
    let id = state.begin();
    state.apply(id, Ok(page_of(1..=10, 50, 0)));

    // Request page 2, then page 3 before page 2 answers
    state.go_to(2);
    let slow = state.begin();
    state.go_to(3);
    let fast = state.begin();

    assert_eq!(state.apply(fast, Ok(page_of(21..=30, 50, 2))), ApplyOutcome::Applied);
    assert_eq!(state.apply(slow, Ok(page_of(11..=20, 50, 1))), ApplyOutcome::Stale);

    assert_eq!(state.window.page, 3);
    assert_eq!(state.items.first(), Some(&21));
}

#[test]
fn test_search_term_resets_to_first_page() {
    let mut state = ListState::<Book>::new(10);
    state.window.total_pages = 4;
    state.go_to(4);

    assert!(state.set_query("tolkien"));
    assert_eq!(state.window.page, 1);
    assert!(!state.set_query("tolkien"), "same term does not refetch");

    let query = state.book_query(Some(ReadingStatus::Finished));
    assert_eq!(query.page, 0);
    assert_eq!(query.size, 10);
    assert_eq!(query.search, "tolkien");
    assert_eq!(query.path(), "/api/books/status/finished");
}

#[test]
fn test_deleting_last_item_of_last_page_steps_back() {
    let mut state = ListState::<i64>::new(10);
    let id = state.begin();
    state.apply(id, Ok(page_of(1..=10, 21, 0)));
    state.go_to(3);
    let id = state.begin();
    state.apply(id, Ok(page_of(21..=21, 21, 2)));

    // Item 21 is deleted; the refetch of page 3 comes back empty
    let id = state.begin();
    let outcome = state.apply(
        id,
        Ok(PageResponse {
            content: vec![],
            total_elements: 20,
            total_pages: 2,
            size: 10,
            number: 2,
        }),
    );
    assert_eq!(outcome, ApplyOutcome::PageShifted);
    assert_eq!(state.window.page, 2);
    assert_eq!(state.window.backend_index(), 1);
}

#[test]
fn test_error_leaves_list_empty_and_usable() {
    let mut state = ListState::<i64>::new(10);
    let id = state.begin();
    state.apply(id, Ok(page_of(1..=10, 10, 0)));

    let id = state.begin();
    state.apply(id, Err("Network error - please check if server is running".to_string()));
    assert!(state.items.is_empty());
    assert_eq!(state.error.as_deref(), Some("Network error - please check if server is running"));
    assert_eq!(state.window.total_pages, 0);

    let id = state.begin();
    state.apply(id, Ok(page_of(1..=3, 3, 0)));
    assert!(state.error.is_none());
    assert_eq!(state.items, vec![1, 2, 3]);
}

#[test]
fn test_remove_locally_adjusts_total() {
    let mut state = ListState::<i64>::new(10);
    let id = state.begin();
    state.apply(id, Ok(page_of(1..=10, 12, 0)));

    state.remove_where(|n| *n == 7);
    assert_eq!(state.items.len(), 9);
    assert_eq!(state.window.total_elements, 11);
}

#[test]
fn test_page_buttons_follow_current_page() {
    let mut window = PageWindow::new(10);
    window.total_pages = 12;

    window.page = 1;
    assert_eq!(window.visible_pages(DEFAULT_PAGE_BUTTONS), vec![1, 2, 3, 4, 5]);
    window.page = 7;
    assert_eq!(window.visible_pages(DEFAULT_PAGE_BUTTONS), vec![5, 6, 7, 8, 9]);
    window.page = 12;
    assert_eq!(window.visible_pages(DEFAULT_PAGE_BUTTONS), vec![8, 9, 10, 11, 12]);

    window.total_pages = 2;
    window.page = 2;
    assert_eq!(window.visible_pages(DEFAULT_PAGE_BUTTONS), vec![1, 2]);
}

#[test]
fn test_list_configs() {
    let library = ListViewConfig::library();
    assert_eq!(library.status, None);
    assert_eq!(library.page_size, 10);
    assert_eq!(library.max_page_buttons, 5);
    assert_eq!(library.search_delay.as_millis(), 1000);

    for status in ReadingStatus::ALL {
        let config = ListViewConfig::for_status(status);
        assert_eq!(config.status, Some(status));
        assert_eq!(config.page_size, library.page_size);
    }
}
