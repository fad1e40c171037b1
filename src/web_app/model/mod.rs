// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between the browser, the SSR server and the remote book API.
// Field names follow the remote API's camelCase JSON.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default number of books per page in every list view
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Reading status of a book
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingStatus {
    #[default]
    ToRead,
    CurrentlyReading,
    Finished,
    GaveUp,
}

impl ReadingStatus {
    pub const ALL: [ReadingStatus; 4] = [
        ReadingStatus::ToRead,
        ReadingStatus::CurrentlyReading,
        ReadingStatus::Finished,
        ReadingStatus::GaveUp,
    ];

    /// Wire name used in JSON bodies and in `/api/books/status/{status}`
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingStatus::ToRead => "to_read",
            ReadingStatus::CurrentlyReading => "currently_reading",
            ReadingStatus::Finished => "finished",
            ReadingStatus::GaveUp => "gave_up",
        }
    }

    /// Label shown in selects and badges
    pub fn label(&self) -> &'static str {
        match self {
            ReadingStatus::ToRead => "📚 To Read",
            ReadingStatus::CurrentlyReading => "📖 Currently Reading",
            ReadingStatus::Finished => "✅ Finished",
            ReadingStatus::GaveUp => "❌ Gave up",
        }
    }
}

impl std::fmt::Display for ReadingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReadingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReadingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| format!("Unknown reading status: {}", s))
    }
}

/// Book as stored by the remote API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i64,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub pages: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub cost: Decimal,
    #[serde(default)]
    pub reading_status: ReadingStatus,
    #[serde(default)]
    pub review_rating: Option<f64>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub finish_date: Option<NaiveDate>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Body of a create (POST) or full-replacement update (PUT) request
///
/// Absent optional values are sent as `null`, never omitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub cover_image: Option<String>,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub pages: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub cost: Decimal,
    pub reading_status: ReadingStatus,
    pub review_rating: Option<f64>,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        BookDraft {
            cover_image: book.cover_image.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            publisher: book.publisher.clone(),
            pages: book.pages,
            cost: book.cost,
            reading_status: book.reading_status,
            review_rating: book.review_rating,
            start_date: book.start_date,
            finish_date: book.finish_date,
            notes: book.notes.clone(),
        }
    }
}

/// Raw text of the add/edit form inputs, before validation
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookForm {
    pub cover_image: Option<String>,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub pages: String,
    pub cost: String,
    pub reading_status: ReadingStatus,
    pub review_rating: String,
    pub start_date: String,
    pub finish_date: String,
    pub notes: String,
}

impl From<&Book> for BookForm {
    fn from(book: &Book) -> Self {
        BookForm {
            cover_image: book.cover_image.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            publisher: book.publisher.clone(),
            pages: book.pages.to_string(),
            cost: book.cost.to_string(),
            reading_status: book.reading_status,
            review_rating: book.review_rating.map(|r| r.to_string()).unwrap_or_default(),
            start_date: book.start_date.map(|d| d.to_string()).unwrap_or_default(),
            finish_date: book.finish_date.map(|d| d.to_string()).unwrap_or_default(),
            notes: book.notes.clone().unwrap_or_default(),
        }
    }
}

/// One page of a remote collection (Spring-style page envelope)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub number: u32,
}

impl<T> PageResponse<T> {
    pub fn empty(size: u32) -> Self {
        PageResponse {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            size,
            number: 0,
        }
    }
}

pub type BookPage = PageResponse<Book>;

/// Parameters of a list request
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookQuery {
    /// `None` lists the whole library
    pub status: Option<ReadingStatus>,
    /// 0-based page index as expected by the API
    pub page: u32,
    pub size: u32,
    pub search: String,
}

impl Default for BookQuery {
    fn default() -> Self {
        BookQuery {
            status: None,
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            search: String::new(),
        }
    }
}

impl BookQuery {
    /// Collection path, scoped by status when one is set
    pub fn path(&self) -> String {
        match self.status {
            Some(status) => format!("/api/books/status/{}", status.as_str()),
            None => "/api/books".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub id: i64,
    pub username: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Credentials of the logged-in user, passed explicitly to every API call
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub username: String,
}

impl Session {
    /// Value of the `Authorization` header
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl From<LoginResponse> for Session {
    fn from(res: LoginResponse) -> Self {
        Session {
            token: res.token,
            user_id: res.id,
            username: res.username,
        }
    }
}
