// web_app/api/mod.rs - API module for server-side logic
//
// This module contains the HTTP client for the remote book API
// and the helpers that configure and share it.

pub mod config;
pub mod http;
pub mod books;

pub use books::BookApiClient;
pub use config::ApiConfig;
