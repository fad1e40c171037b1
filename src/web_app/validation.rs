// web_app/validation.rs - Client-side form validation
//
// Runs synchronously before any network call. Every rule is checked and all
// violations are returned in field order, so the form can show them at once.
// An empty list means the submission may proceed.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::web_app::model::{BookDraft, BookForm, RegisterRequest};

pub const MAX_TEXT_LEN: usize = 100;
pub const MAX_PAGES: u32 = 10_000;
pub const MAX_RATING: f64 = 5.0;
pub const MIN_PASSWORD_LEN: usize = 12;
pub const USERNAME_LEN: (usize, usize) = (3, 20);
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Check an already typed draft (used for edits loaded from the API too)
pub fn validate_book(draft: &BookDraft, today: NaiveDate) -> Vec<String> {
    let mut errors = Vec::new();
    check_text("Title", &draft.title, &mut errors);
    check_text("Author", &draft.author, &mut errors);
    check_text("Publisher", &draft.publisher, &mut errors);
    check_pages(draft.pages as i64, &mut errors);
    check_cost(draft.cost, &mut errors);
    if let Some(rating) = draft.review_rating {
        check_rating(rating, &mut errors);
    }
    check_dates(draft.start_date, draft.finish_date, today, &mut errors);
    errors
}

/// Parse and validate the raw form, producing the request body on success
pub fn parse_book_form(form: &BookForm, today: NaiveDate) -> Result<BookDraft, Vec<String>> {
    let mut errors = Vec::new();

    let title = form.title.trim().to_string();
    let author = form.author.trim().to_string();
    let publisher = form.publisher.trim().to_string();
    check_text("Title", &title, &mut errors);
    check_text("Author", &author, &mut errors);
    check_text("Publisher", &publisher, &mut errors);

    let pages = match form.pages.trim().parse::<i64>() {
        Ok(pages) => {
            check_pages(pages, &mut errors);
            u32::try_from(pages).ok()
        }
        Err(_) => {
            errors.push(pages_message());
            None
        }
    };

    let cost = match Decimal::from_str(form.cost.trim()) {
        Ok(cost) => {
            check_cost(cost, &mut errors);
            Some(cost)
        }
        Err(_) => {
            errors.push("Cost must be a number".to_string());
            None
        }
    };

    let review_rating = match form.review_rating.trim() {
        "" => None,
        raw => match raw.parse::<f64>() {
            Ok(rating) => {
                check_rating(rating, &mut errors);
                Some(rating)
            }
            Err(_) => {
                errors.push("Review rating must be a number".to_string());
                None
            }
        },
    };

    let start_date = parse_date("Start date", &form.start_date, &mut errors);
    let finish_date = parse_date("Finish date", &form.finish_date, &mut errors);
    check_dates(start_date, finish_date, today, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    let notes = form.notes.trim();
    Ok(BookDraft {
        cover_image: form.cover_image.clone().filter(|c| !c.is_empty()),
        title,
        author,
        publisher,
        pages: pages.unwrap_or_default(),
        cost: cost.unwrap_or_default(),
        reading_status: form.reading_status,
        review_rating,
        start_date,
        finish_date,
        notes: (!notes.is_empty()).then(|| notes.to_string()),
    })
}

/// Password strength rules for new accounts
pub fn validate_password(password: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(format!("Password must be at least {} characters long", MIN_PASSWORD_LEN));
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one number".to_string());
    }
    if !password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)) {
        errors.push("Password must contain at least one special character".to_string());
    }
    errors
}

pub fn validate_registration(req: &RegisterRequest) -> Vec<String> {
    let mut errors = Vec::new();

    let username_len = req.username.trim().chars().count();
    if username_len < USERNAME_LEN.0 || username_len > USERNAME_LEN.1 {
        errors.push(format!(
            "Username must be between {} and {} characters",
            USERNAME_LEN.0, USERNAME_LEN.1
        ));
    }

    let email = req.email.trim();
    if email.is_empty() || !email.contains('@') {
        errors.push("Email must be a valid address".to_string());
    }

    errors.extend(validate_password(&req.password));

    if req.password != req.confirm_password {
        errors.push("Passwords do not match".to_string());
    }
    errors
}

fn check_text(field: &str, value: &str, errors: &mut Vec<String>) {
    if value.trim().is_empty() {
        errors.push(format!("{} is required", field));
    } else if value.chars().count() > MAX_TEXT_LEN {
        errors.push(format!("{} must be at most {} characters", field, MAX_TEXT_LEN));
    }
}

fn pages_message() -> String {
    format!("Pages must be a whole number between 0 and {}", MAX_PAGES)
}

fn check_pages(pages: i64, errors: &mut Vec<String>) {
    if !(0..=MAX_PAGES as i64).contains(&pages) {
        errors.push(pages_message());
    }
}

fn check_cost(cost: Decimal, errors: &mut Vec<String>) {
    if cost.is_sign_negative() && !cost.is_zero() {
        errors.push("Cost cannot be negative".to_string());
    }
}

fn check_rating(rating: f64, errors: &mut Vec<String>) {
    if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
        errors.push(format!("Review rating must be between 0 and {}", MAX_RATING));
    }
}

fn parse_date(field: &str, raw: &str, errors: &mut Vec<String>) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(format!("{} is not a valid date", field));
            None
        }
    }
}

fn check_dates(
    start: Option<NaiveDate>,
    finish: Option<NaiveDate>,
    today: NaiveDate,
    errors: &mut Vec<String>,
) {
    if start.is_some_and(|d| d > today) {
        errors.push("Start date cannot be in the future".to_string());
    }
    if finish.is_some_and(|d| d > today) {
        errors.push("Finish date cannot be in the future".to_string());
    }
    if let (Some(start), Some(finish)) = (start, finish) {
        if finish < start {
            errors.push("Finish date cannot be earlier than start date".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn valid_form() -> BookForm {
        BookForm {
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            publisher: "Secker & Warburg".to_string(),
            pages: "328".to_string(),
            cost: "0".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_form_parses() {
        let draft = parse_book_form(&valid_form(), today()).unwrap();
        assert_eq!(draft.pages, 328);
        assert!(draft.cost.is_zero());
        assert!(draft.review_rating.is_none());
        assert!(draft.notes.is_none());
    }

    #[test]
    fn test_whitespace_title_is_rejected() {
        let mut form = valid_form();
        form.title = "   ".to_string();
        let errors = parse_book_form(&form, today()).unwrap_err();
        assert_eq!(errors, vec!["Title is required".to_string()]);
    }

    #[test]
    fn test_text_length_cap() {
        let mut form = valid_form();
        form.author = "a".repeat(101);
        let errors = parse_book_form(&form, today()).unwrap_err();
        assert_eq!(errors, vec!["Author must be at most 100 characters".to_string()]);

        form.author = "a".repeat(100);
        assert!(parse_book_form(&form, today()).is_ok());
    }

    #[test]
    fn test_errors_are_aggregated_in_field_order() {
        let form = BookForm {
            pages: "-1".to_string(),
            cost: "abc".to_string(),
            review_rating: "6".to_string(),
            ..Default::default()
        };
        let errors = parse_book_form(&form, today()).unwrap_err();
        assert_eq!(errors.len(), 6);
        assert_eq!(errors[0], "Title is required");
        assert_eq!(errors[1], "Author is required");
        assert_eq!(errors[2], "Publisher is required");
        assert!(errors[3].starts_with("Pages"));
        assert_eq!(errors[4], "Cost must be a number");
        assert!(errors[5].starts_with("Review rating"));
    }

    #[test]
    fn test_zero_rating_is_kept() {
        let mut form = valid_form();
        form.review_rating = "0".to_string();
        let draft = parse_book_form(&form, today()).unwrap();
        assert_eq!(draft.review_rating, Some(0.0));
    }

    #[test]
    fn test_date_rules() {
        let mut form = valid_form();
        form.start_date = "2025-06-02".to_string();
        let errors = parse_book_form(&form, today()).unwrap_err();
        assert_eq!(errors, vec!["Start date cannot be in the future".to_string()]);

        form.start_date = "2025-05-10".to_string();
        form.finish_date = "2025-05-01".to_string();
        let errors = parse_book_form(&form, today()).unwrap_err();
        assert_eq!(errors, vec!["Finish date cannot be earlier than start date".to_string()]);

        form.finish_date = "2025-05-10".to_string();
        assert!(parse_book_form(&form, today()).is_ok());
    }

    #[test]
    fn test_validate_draft_negative_cost() {
        let mut draft = parse_book_form(&valid_form(), today()).unwrap();
        draft.cost = Decimal::new(-1, 0);
        assert_eq!(validate_book(&draft, today()), vec!["Cost cannot be negative".to_string()]);
    }

    #[test]
    fn test_password_rules() {
        assert_eq!(validate_password("short").len(), 4);
        assert!(validate_password("Str0ng-Passw0rd!").is_empty());
        assert_eq!(
            validate_password("NoSymbolsHere123"),
            vec!["Password must contain at least one special character".to_string()]
        );
    }
}
