// web_app/api/config.rs - Remote API configuration
//
// Values come from the environment (a `.env` file is honoured).

use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the book API, without a trailing slash
    pub base_url: String,
    /// `None` leaves requests without a timeout
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiConfig {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    /// Read `BOOKSHELF_API_URL` and `BOOKSHELF_API_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let base_url = env::var("BOOKSHELF_API_URL").unwrap_or_else(|_| {
            tracing::info!("BOOKSHELF_API_URL not set, using default: {}", DEFAULT_API_URL);
            DEFAULT_API_URL.to_string()
        });

        let timeout = match env::var("BOOKSHELF_API_TIMEOUT_SECS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) => Some(Duration::from_secs(secs)),
                Err(e) => {
                    tracing::warn!("Invalid BOOKSHELF_API_TIMEOUT_SECS value '{}': {}", raw, e);
                    None
                }
            },
            Err(_) => None,
        };

        ApiConfig {
            timeout,
            ..ApiConfig::new(base_url)
        }
    }
}
