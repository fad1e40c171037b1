// Component render tests
// Components are rendered to HTML on the server side inside an Owner and the
// markup is checked for the pieces a user relies on.

use bookshelf::web_app::components::*;
use bookshelf::web_app::model::*;
use bookshelf::web_app::pagination::PageWindow;
use leptos::prelude::*;
use rust_decimal::Decimal;

fn render<F, V>(f: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| f().into_view().to_html())
}

fn book() -> Book {
    Book {
        id: 12,
        cover_image: None,
        title: "Dune".to_string(),
        author: "Frank Herbert".to_string(),
        publisher: "Chilton".to_string(),
        pages: 412,
        cost: Decimal::new(1599, 2),
        reading_status: ReadingStatus::CurrentlyReading,
        review_rating: Some(4.5),
        start_date: None,
        finish_date: None,
        notes: Some("Spice must flow".to_string()),
    }
}

#[test]
fn test_star_rating_renders_five_stars() {
    let html = render(|| view! { <StarRating rating=3.0 /> });
    assert_eq!(html.matches('★').count(), 5);
    assert!(html.contains("3.0"));
}

#[test]
fn test_status_badge_colour() {
    let html = render(|| view! { <StatusBadge status=ReadingStatus::GaveUp /> });
    assert!(html.contains("bg-red-100"));
    assert!(html.contains("Gave up"));
}

#[test]
fn test_book_card_shows_details_and_actions() {
    let html = render(|| {
        view! {
            <BookCard book=book() on_delete=Callback::new(|_: i64| {}) deleting=Signal::stored(false) />
        }
    });

    assert!(html.contains("Dune"));
    assert!(html.contains("Frank Herbert"));
    assert!(html.contains("412 pages"));
    assert!(html.contains("Spice must flow"));
    assert!(html.contains("/edit/12"));
    assert!(html.contains("Delete"));
    assert!(html.contains("bg-yellow-100"), "currently reading is yellow");
}

#[test]
fn test_book_card_without_rating_has_no_stars() {
    let unrated = Book {
        review_rating: None,
        ..book()
    };
    let html = render(move || {
        view! {
            <BookCard book=unrated on_delete=Callback::new(|_: i64| {}) deleting=Signal::stored(true) />
        }
    });
    assert!(!html.contains('★'));
    assert!(html.contains("Deleting..."));
}

#[test]
fn test_empty_grid_shows_empty_text() {
    let html = render(|| {
        view! {
            <BookGrid
                books=Signal::stored(Vec::new())
                on_delete=Callback::new(|_: i64| {})
                deleting=Signal::stored(None)
                empty_text="Nothing on this shelf."
            />
        }
    });
    assert!(html.contains("Nothing on this shelf."));
}

#[test]
fn test_error_list_renders_every_message() {
    let errors = vec!["Title is required".to_string(), "Cost must be a number".to_string()];
    let html = render(move || view! { <ErrorList errors=Signal::stored(errors) /> });
    assert!(html.contains("Title is required"));
    assert!(html.contains("Cost must be a number"));
}

#[test]
fn test_pagination_buttons() {
    let window = PageWindow {
        page: 4,
        size: 10,
        total_pages: 9,
        total_elements: 85,
    };
    let html = render(move || {
        view! { <Pagination window=Signal::stored(window) on_page=Callback::new(|_: u32| {}) /> }
    });

    for page in 2..=6 {
        assert!(html.contains(&format!(">{}<", page)), "button {} missing", page);
    }
    assert!(!html.contains(">7<"));
    assert!(html.contains("Previous"));
    assert!(html.contains("Next"));
    assert!(html.contains("Page 4 of 9"));
}

#[test]
fn test_single_page_hides_pagination() {
    let window = PageWindow {
        page: 1,
        size: 10,
        total_pages: 1,
        total_elements: 4,
    };
    let html = render(move || {
        view! { <Pagination window=Signal::stored(window) on_page=Callback::new(|_: u32| {}) /> }
    });
    assert!(!html.contains("Previous"));
}

#[test]
fn test_form_renders_fields_and_status_options() {
    let initial = BookForm::from(&book());
    let html = render(move || {
        view! {
            <BookFormView
                initial=initial
                on_submit=Callback::new(|_: BookForm| {})
                errors=Signal::stored(Vec::new())
                submitting=Signal::stored(false)
                submit_label="Save changes"
            />
        }
    });

    // Input values are DOM properties and only appear after hydration
    assert!(html.contains("Save changes"));
    assert!(html.contains("selected"), "current status is preselected");
    assert!(html.contains("Cover image"));
    for status in ReadingStatus::ALL {
        assert!(html.contains(status.as_str()), "option {} missing", status);
    }
}

#[test]
fn test_confirm_dialog_message() {
    let html = render(|| {
        view! {
            <ConfirmDialog
                message="Are you sure you want to delete this book?".to_string()
                on_confirm=Callback::new(|_| {})
                on_cancel=Callback::new(|_| {})
            />
        }
    });
    assert!(html.contains("Are you sure you want to delete this book?"));
    assert!(html.contains("Cancel"));
}
