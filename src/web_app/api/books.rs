// web_app/api/books.rs - Remote book API calls
//
// One method per endpoint. Each takes the session explicitly, attaches the
// bearer token, and turns any non-2xx response into an `ApiError` through
// `ApiError::from_response`. Nothing is retried.

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::config::ApiConfig;
use crate::web_app::error::{parse_error_messages, ApiError};
use crate::web_app::model::*;

#[derive(Clone, Debug)]
pub struct BookApiClient {
    http: Client,
    base_url: String,
}

impl BookApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Config(format!("cannot build HTTP client: {}", e)))?;

        Ok(BookApiClient {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authed(&self, builder: RequestBuilder, session: &Session) -> RequestBuilder {
        builder.bearer_auth(&session.token)
    }

    /// `POST /api/auth/login`
    pub async fn login(&self, req: &LoginRequest) -> Result<Session, ApiError> {
        tracing::info!("Login request for user '{}'", req.username);

        let res = send(self.http.post(self.url("/api/auth/login")).json(req)).await?;
        if !res.status().is_success() {
            tracing::warn!("Login failed with status {}", res.status());
            return Err(ApiError::InvalidCredentials);
        }

        let login: LoginResponse = read_json(res).await?;
        Ok(Session::from(login))
    }

    /// `POST /api/register`
    pub async fn register(&self, req: &RegisterRequest) -> Result<(), ApiError> {
        tracing::info!("Register request for user '{}'", req.username);

        let res = send(self.http.post(self.url("/api/register")).json(req)).await?;
        if res.status().is_success() {
            return Ok(());
        }

        let status = res.status().as_u16();
        let body = read_text(res).await?;
        tracing::warn!("Registration rejected with status {}: {}", status, body);
        let messages = parse_error_messages(&body);
        if messages.is_empty() {
            return Err(ApiError::from_response(status, &body));
        }
        Err(ApiError::Rejected(messages))
    }

    /// `GET /api/books` or `GET /api/books/status/{status}`
    pub async fn list_books(&self, session: &Session, query: &BookQuery) -> Result<BookPage, ApiError> {
        tracing::debug!(
            "List books: status={:?} page={} size={} search='{}'",
            query.status,
            query.page,
            query.size,
            query.search
        );

        let page = query.page.to_string();
        let size = query.size.to_string();
        let builder = self
            .http
            .get(self.url(&query.path()))
            .query(&[("page", page.as_str()), ("size", size.as_str()), ("search", query.search.as_str())]);

        let res = send(self.authed(builder, session)).await?;
        let page: BookPage = expect_json(res).await?;
        tracing::info!(
            "Listed {} of {} books (page {} of {})",
            page.content.len(),
            page.total_elements,
            query.page + 1,
            page.total_pages
        );
        Ok(page)
    }

    /// `GET /api/books/{id}`
    pub async fn get_book(&self, session: &Session, id: i64) -> Result<Book, ApiError> {
        let builder = self.http.get(self.url(&format!("/api/books/{}", id)));
        let res = send(self.authed(builder, session)).await?;
        expect_json(res).await
    }

    /// `POST /api/books`
    pub async fn create_book(&self, session: &Session, draft: &BookDraft) -> Result<(), ApiError> {
        tracing::info!("Create book '{}'", draft.title);

        let builder = self.http.post(self.url("/api/books")).json(draft);
        let res = send(self.authed(builder, session)).await?;
        expect_success(res).await
    }

    /// `PUT /api/books/{id}` (full replacement)
    pub async fn update_book(&self, session: &Session, id: i64, draft: &BookDraft) -> Result<(), ApiError> {
        tracing::info!("Update book {} ('{}')", id, draft.title);

        let builder = self.http.put(self.url(&format!("/api/books/{}", id))).json(draft);
        let res = send(self.authed(builder, session)).await?;
        expect_success(res).await
    }

    /// `DELETE /api/books/{id}`
    pub async fn delete_book(&self, session: &Session, id: i64) -> Result<(), ApiError> {
        tracing::info!("Delete book {}", id);

        let builder = self.http.delete(self.url(&format!("/api/books/{}", id)));
        let res = send(self.authed(builder, session)).await?;
        expect_success(res).await
    }

    /// `GET /api/books/count` (plain number body)
    pub async fn count_books(&self, session: &Session) -> Result<u64, ApiError> {
        let builder = self.http.get(self.url("/api/books/count"));
        let res = send(self.authed(builder, session)).await?;
        if !res.status().is_success() {
            return Err(error_from(res).await);
        }

        let body = read_text(res).await?;
        body.trim()
            .parse::<u64>()
            .map_err(|e| ApiError::Transport(format!("invalid count '{}': {}", body.trim(), e)))
    }
}

async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    builder.send().await.map_err(|e| {
        tracing::error!("Book API request failed: {}", e);
        ApiError::Transport(e.to_string())
    })
}

async fn read_text(res: Response) -> Result<String, ApiError> {
    res.text().await.map_err(|e| ApiError::Transport(e.to_string()))
}

async fn read_json<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
    res.json::<T>()
        .await
        .map_err(|e| ApiError::Transport(format!("invalid response body: {}", e)))
}

async fn error_from(res: Response) -> ApiError {
    let status = res.status().as_u16();
    let body = res.text().await.unwrap_or_default();
    let err = ApiError::from_response(status, &body);
    tracing::warn!("Book API returned {}: {}", status, err);
    err
}

async fn expect_success(res: Response) -> Result<(), ApiError> {
    if res.status().is_success() {
        Ok(())
    } else {
        Err(error_from(res).await)
    }
}

async fn expect_json<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
    if res.status().is_success() {
        read_json(res).await
    } else {
        Err(error_from(res).await)
    }
}
