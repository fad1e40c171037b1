// web_app/pages/home.rs - Landing page after login

use leptos::prelude::*;

use super::{require_session, PageShell};
use crate::web_app::app::routes;
use crate::web_app::error::ApiError;
use crate::web_app::server_fns;

/// Tiles of the navigation grid: (route, icon, label)
pub const NAV_TILES: [(&str, &str, &str); 6] = [
    (routes::LIBRARY, "📚", "Library"),
    (routes::CURRENTLY_READING, "📖", "Currently Reading"),
    (routes::TO_READ, "🔖", "To Read"),
    (routes::FINISHED, "✅", "Finished"),
    (routes::GAVE_UP, "❌", "Gave Up"),
    (routes::ADD_BOOK, "➕", "Add Book"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let session = require_session();

    // Browser only; the count needs the session from local storage
    let count = LocalResource::new(move || async move {
        let current = session.get()?;
        match server_fns::count_books(current).await {
            Ok(n) => Some(n),
            Err(e) => {
                let err = ApiError::from(e);
                session.observe(&err);
                tracing::warn!("Could not load book count: {}", err);
                None
            }
        }
    });

    view! {
        <PageShell title="My Bookshelf">
            <p class="text-lg text-amber-800 mb-8">
                {move || match session.username() {
                    Some(name) => format!("Welcome, {}!", name),
                    None => "Welcome!".to_string(),
                }}
                " "
                {move || count.get().flatten().map(|n| match n {
                    1 => "You have 1 book in your library.".to_string(),
                    n => format!("You have {} books in your library.", n),
                })}
            </p>

            <div class="grid grid-cols-2 md:grid-cols-3 gap-6">
                {NAV_TILES.into_iter().map(|(href, icon, label)| view! {
                    <a
                        href=href
                        class="bg-white rounded-2xl shadow-sm hover:shadow-xl border border-amber-100 p-8 \
                               flex flex-col items-center gap-3 transition-all hover:-translate-y-1"
                    >
                        <span class="text-5xl">{icon}</span>
                        <span class="font-bold text-amber-900">{label}</span>
                    </a>
                }).collect_view()}
            </div>
        </PageShell>
    }
}
