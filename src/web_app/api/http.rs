// web_app/api/http.rs - Shared API client registry
//
// The server builds one `BookApiClient` at startup and registers it here;
// server functions pick it up without threading it through every call.

use std::sync::{Mutex, OnceLock};

use super::books::BookApiClient;

static CLIENT: OnceLock<BookApiClient> = OnceLock::new();
static TEST_CLIENT_OVERRIDE: Mutex<Option<BookApiClient>> = Mutex::new(None);

/// Initialize the global API client
pub fn init_client(client: BookApiClient) {
    tracing::info!("Initializing global book API client for {}", client.base_url());
    if CLIENT.set(client).is_err() {
        tracing::warn!("Book API client already initialized");
    }
}

/// Set a client override for testing
pub fn set_test_client(client: BookApiClient) {
    match TEST_CLIENT_OVERRIDE.lock() {
        Ok(mut guard) => *guard = Some(client),
        Err(e) => tracing::error!("Test client override poisoned: {}", e),
    }
}

/// Get the global API client
pub fn get_client() -> Option<BookApiClient> {
    if let Ok(guard) = TEST_CLIENT_OVERRIDE.lock() {
        if let Some(ref client) = *guard {
            return Some(client.clone());
        }
    }

    let client = CLIENT.get().cloned();
    if client.is_none() {
        tracing::warn!("Global book API client is empty!");
    }
    client
}
