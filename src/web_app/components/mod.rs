// web_app/components/mod.rs - UI components module
//
// Structure:
// - common.rs: Reusable atomic components (Button, ConfirmDialog, Loading, etc.)
// - search.rs: List controls (SearchBar, Pagination)
// - book.rs: Book display and editing (BookCard, BookGrid, BookFormView)

pub mod common;
pub mod search;
pub mod book;

// Re-export commonly used components for convenience
pub use common::*;
pub use search::*;
pub use book::*;
