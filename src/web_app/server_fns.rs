// web_app/server_fns.rs - Leptos server function declarations
//
// These are the server function declarations that are accessible from both
// client (WASM) and server (native Rust). The #[server] macro automatically
// generates:
// - On server: The actual function implementation
// - On client: A stub that makes HTTP POST requests to the server
//
// Every book call takes the session as an argument; the server never keeps
// a token of its own. API failures are encoded with
// `ApiError::into_server_error` so the client can recover the variant.
//
// IMPORTANT: This file must be compiled for BOTH ssr and hydrate features!

use leptos::prelude::*;
use crate::web_app::model::*;

#[cfg(feature = "ssr")]
async fn client() -> Result<crate::web_app::api::BookApiClient, ServerFnError> {
    use actix_web::{web::Data, HttpRequest};
    use leptos_actix::extract;
    use crate::web_app::api::{http, BookApiClient};

    // First try to get from context (for testing or if manually set)
    if let Some(client) = use_context::<BookApiClient>() {
        return Ok(client);
    }

    if let Some(client) = http::get_client() {
        return Ok(client);
    }

    match extract::<HttpRequest>().await {
        Ok(req) => {
            if let Some(client) = req.app_data::<Data<BookApiClient>>() {
                return Ok(client.as_ref().clone());
            }
        }
        Err(e) => {
            tracing::error!("Failed to extract HttpRequest: {}", e);
        }
    }

    Err(ServerFnError::new("Book API client not available"))
}

/// Exchange credentials for a session
#[server(Login, "/api")]
pub async fn login(request: LoginRequest) -> Result<Session, ServerFnError> {
    use crate::web_app::error::ApiError;

    let client = client().await?;
    let result = client.login(&request).await;
    match &result {
        Ok(session) => tracing::info!("Login successful for '{}'", session.username),
        Err(e) => tracing::warn!("Login failed for '{}': {}", request.username, e),
    }
    result.map_err(ApiError::into_server_error)
}

/// Create an account
#[server(Register, "/api")]
pub async fn register(request: RegisterRequest) -> Result<(), ServerFnError> {
    use crate::web_app::error::ApiError;

    let client = client().await?;
    client
        .register(&request)
        .await
        .map_err(ApiError::into_server_error)
}

/// One page of books, optionally scoped by status and filtered by search
#[server(ListBooks, "/api")]
pub async fn list_books(session: Session, query: BookQuery) -> Result<BookPage, ServerFnError> {
    use crate::web_app::error::ApiError;

    tracing::info!(
        "List request: user='{}', status={:?}, page={}, search='{}'",
        session.username,
        query.status,
        query.page,
        query.search
    );

    let client = client().await?;
    client
        .list_books(&session, &query)
        .await
        .map_err(ApiError::into_server_error)
}

/// A single book, used to pre-fill the edit form
#[server(GetBook, "/api")]
pub async fn get_book(session: Session, id: i64) -> Result<Book, ServerFnError> {
    use crate::web_app::error::ApiError;

    let client = client().await?;
    client
        .get_book(&session, id)
        .await
        .map_err(ApiError::into_server_error)
}

#[server(CreateBook, "/api")]
pub async fn create_book(session: Session, draft: BookDraft) -> Result<(), ServerFnError> {
    use crate::web_app::error::ApiError;

    let client = client().await?;
    client
        .create_book(&session, &draft)
        .await
        .map_err(ApiError::into_server_error)
}

#[server(UpdateBook, "/api")]
pub async fn update_book(session: Session, id: i64, draft: BookDraft) -> Result<(), ServerFnError> {
    use crate::web_app::error::ApiError;

    let client = client().await?;
    client
        .update_book(&session, id, &draft)
        .await
        .map_err(ApiError::into_server_error)
}

#[server(DeleteBook, "/api")]
pub async fn delete_book(session: Session, id: i64) -> Result<(), ServerFnError> {
    use crate::web_app::error::ApiError;

    let client = client().await?;
    client
        .delete_book(&session, id)
        .await
        .map_err(ApiError::into_server_error)
}

/// Total number of books owned by the session's user
#[server(CountBooks, "/api")]
pub async fn count_books(session: Session) -> Result<u64, ServerFnError> {
    use crate::web_app::error::ApiError;

    let client = client().await?;
    client
        .count_books(&session)
        .await
        .map_err(ApiError::into_server_error)
}
