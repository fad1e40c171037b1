// common/mod.rs - In-process stand-in for the remote book API
//
// `start_stub_api` binds an actix-web server on an ephemeral port that keeps
// books in memory and records every request, so tests can assert on both
// the client's results and what actually went over the wire.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use bookshelf::web_app::api::{ApiConfig, BookApiClient};
use bookshelf::web_app::model::*;
use rust_decimal::Decimal;

pub const TOKEN: &str = "test-token";
pub const USERNAME: &str = "reader";
pub const PASSWORD: &str = "Correct-Horse-42!";

/// One request as received by the stub
#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub query: HashMap<String, String>,
    pub authorization: Option<String>,
    pub body: String,
}

#[derive(Default)]
pub struct StubState {
    books: Mutex<Vec<Book>>,
    next_id: Mutex<i64>,
    requests: Mutex<Vec<Recorded>>,
}

impl StubState {
    pub fn books(&self) -> Vec<Book> {
        self.books.lock().map(|b| b.clone()).unwrap_or_default()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    pub fn last_request(&self) -> Option<Recorded> {
        self.requests().pop()
    }

    fn insert(&self, draft: BookDraft) -> i64 {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let id = *next;
        self.books.lock().unwrap().push(book_from(id, draft));
        id
    }
}

pub struct StubApi {
    pub base_url: String,
    pub state: web::Data<StubState>,
}

impl StubApi {
    pub fn client(&self) -> BookApiClient {
        BookApiClient::new(&ApiConfig::new(self.base_url.clone())).expect("client builds")
    }

    /// Preload books directly, bypassing the API
    pub fn seed(&self, drafts: Vec<BookDraft>) -> Vec<i64> {
        drafts.into_iter().map(|d| self.state.insert(d)).collect()
    }
}

pub async fn start_stub_api() -> anyhow::Result<StubApi> {
    let state = web::Data::new(StubState::default());
    let data = state.clone();

    let server = HttpServer::new(move || App::new().app_data(data.clone()).default_service(web::to(handle)))
        .workers(1)
        .bind(("127.0.0.1", 0))?;
    let addr = server
        .addrs()
        .first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("stub server has no address"))?;
    actix_web::rt::spawn(server.run());

    Ok(StubApi {
        base_url: format!("http://{}", addr),
        state,
    })
}

pub fn session() -> Session {
    Session {
        token: TOKEN.to_string(),
        user_id: 1,
        username: USERNAME.to_string(),
    }
}

pub fn draft(title: &str) -> BookDraft {
    BookDraft {
        cover_image: None,
        title: title.to_string(),
        author: "Test Author".to_string(),
        publisher: "Test House".to_string(),
        pages: 100,
        cost: Decimal::new(999, 2),
        reading_status: ReadingStatus::ToRead,
        review_rating: None,
        start_date: None,
        finish_date: None,
        notes: None,
    }
}

fn book_from(id: i64, d: BookDraft) -> Book {
    Book {
        id,
        cover_image: d.cover_image,
        title: d.title,
        author: d.author,
        publisher: d.publisher,
        pages: d.pages,
        cost: d.cost,
        reading_status: d.reading_status,
        review_rating: d.review_rating,
        start_date: d.start_date,
        finish_date: d.finish_date,
        notes: d.notes,
    }
}

async fn handle(
    req: HttpRequest,
    query: web::Query<HashMap<String, String>>,
    body: web::Bytes,
    state: web::Data<StubState>,
) -> HttpResponse {
    let body = String::from_utf8_lossy(&body).to_string();
    let authorization = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.requests.lock().unwrap().push(Recorded {
        method: req.method().to_string(),
        path: req.path().to_string(),
        query: query.0.clone(),
        authorization: authorization.clone(),
        body: body.clone(),
    });

    let method = req.method().as_str().to_string();
    let segments: Vec<&str> = req.path().trim_matches('/').split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        ("POST", ["api", "auth", "login"]) => login(&body),
        ("POST", ["api", "register"]) => register(&body),
        (_, ["api", "books", ..]) => {
            if authorization.as_deref() != Some(format!("Bearer {}", TOKEN).as_str()) {
                return HttpResponse::Unauthorized()
                    .json(serde_json::json!({"code": "TOKEN_EXPIRED", "message": "Token expired"}));
            }
            books(&method, &segments[2..], &query.0, &body, &state)
        }
        _ => HttpResponse::NotFound().finish(),
    }
}

fn login(body: &str) -> HttpResponse {
    match serde_json::from_str::<LoginRequest>(body) {
        Ok(req) if req.username == USERNAME && req.password == PASSWORD => HttpResponse::Ok().json(LoginResponse {
            token: TOKEN.to_string(),
            id: 1,
            username: USERNAME.to_string(),
        }),
        _ => HttpResponse::Unauthorized().body("Bad credentials"),
    }
}

fn register(body: &str) -> HttpResponse {
    match serde_json::from_str::<RegisterRequest>(body) {
        Ok(req) if req.username == USERNAME => {
            HttpResponse::BadRequest().json(serde_json::json!({"username": "Username already exists"}))
        }
        Ok(_) => HttpResponse::Created().json(serde_json::json!({"id": 2})),
        Err(e) => HttpResponse::BadRequest().body(e.to_string()),
    }
}

fn books(
    method: &str,
    rest: &[&str],
    query: &HashMap<String, String>,
    body: &str,
    state: &StubState,
) -> HttpResponse {
    match (method, rest) {
        ("GET", []) => list(None, query, state),
        ("GET", ["status", status]) => match status.parse::<ReadingStatus>() {
            Ok(s) => list(Some(s), query, state),
            Err(e) => HttpResponse::BadRequest().body(e),
        },
        ("GET", ["count"]) => HttpResponse::Ok().body(state.books().len().to_string()),
        ("POST", []) => {
            let Ok(draft) = serde_json::from_str::<BookDraft>(body) else {
                return HttpResponse::BadRequest().body("malformed book");
            };
            if state.books().iter().any(|b| b.title == draft.title) {
                return HttpResponse::InternalServerError().body(format!(
                    "Duplicate entry '{}-1' for key 'unique_book_title_per_user'",
                    draft.title
                ));
            }
            let id = state.insert(draft);
            HttpResponse::Created().json(serde_json::json!({ "id": id }))
        }
        (method, [id]) => {
            let Ok(id) = id.parse::<i64>() else {
                return HttpResponse::BadRequest().finish();
            };
            let mut books = state.books.lock().unwrap();
            let Some(pos) = books.iter().position(|b| b.id == id) else {
                return HttpResponse::NotFound().body("Book not found");
            };
            match method {
                "GET" => HttpResponse::Ok().json(&books[pos]),
                "PUT" => match serde_json::from_str::<BookDraft>(body) {
                    Ok(draft) => {
                        books[pos] = book_from(id, draft);
                        HttpResponse::Ok().json(&books[pos])
                    }
                    Err(e) => HttpResponse::BadRequest().body(e.to_string()),
                },
                "DELETE" => {
                    books.remove(pos);
                    HttpResponse::NoContent().finish()
                }
                _ => HttpResponse::MethodNotAllowed().finish(),
            }
        }
        _ => HttpResponse::NotFound().finish(),
    }
}

fn list(status: Option<ReadingStatus>, query: &HashMap<String, String>, state: &StubState) -> HttpResponse {
    let page: usize = query.get("page").and_then(|p| p.parse().ok()).unwrap_or(0);
    let size: usize = query.get("size").and_then(|s| s.parse().ok()).unwrap_or(10).max(1);
    let search = query.get("search").map(|s| s.to_lowercase()).unwrap_or_default();

    let matching: Vec<Book> = state
        .books()
        .into_iter()
        .filter(|b| status.map_or(true, |s| b.reading_status == s))
        .filter(|b| {
            search.is_empty()
                || [&b.title, &b.author, &b.publisher]
                    .iter()
                    .any(|f| f.to_lowercase().contains(&search))
        })
        .collect();

    let total_elements = matching.len();
    let total_pages = total_elements.div_ceil(size);
    let content: Vec<Book> = matching.into_iter().skip(page * size).take(size).collect();

    HttpResponse::Ok().json(PageResponse {
        content,
        total_elements: total_elements as u64,
        total_pages: total_pages as u32,
        size: size as u32,
        number: page as u32,
    })
}
