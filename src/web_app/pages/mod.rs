// web_app/pages/mod.rs - Page components module
//
// - auth: Login, registration and logout
// - home: Navigation grid with the total book count
// - books: The shared paginated list and its per-status routes
// - edit: Add and edit forms

pub mod auth;
pub mod home;
pub mod books;
pub mod edit;

pub use auth::{LoginPage, LogoutPage, RegisterPage};
pub use books::{BookListPage, CurrentlyReadingPage, FinishedPage, GaveUpPage, LibraryPage, ToReadPage};
pub use edit::{AddBookPage, EditBookPage};
pub use home::HomePage;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::web_app::app::routes;
use crate::web_app::session::{use_session, SessionContext};

/// Session of a page that needs a logged-in user
///
/// Redirects to the login page once storage has been read and no session
/// was found, including when a later call expires it.
pub fn require_session() -> SessionContext {
    let session = use_session();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if session.is_ready() && session.get().is_none() {
            tracing::info!("No session, redirecting to login");
            navigate(routes::LOGIN, Default::default());
        }
    });

    session
}

/// Page chrome shared by the logged-in pages
#[component]
pub fn PageShell(
    title: &'static str,
    children: Children,
) -> impl IntoView {
    let session = use_session();

    view! {
        <div class="min-h-screen bg-amber-50 font-sans text-gray-900 flex flex-col">
            <header class="bg-white shadow-sm sticky top-0 z-40 border-b border-gray-200">
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                    <a href=routes::HOME class="flex items-center gap-2">
                        <span class="text-2xl">"📖"</span>
                        <span class="text-xl font-bold text-amber-800">"BookShelf"</span>
                    </a>
                    <nav class="flex items-center gap-4 text-sm font-medium text-gray-600">
                        <a href=routes::LIBRARY class="hover:text-amber-800">"Library"</a>
                        <a href=routes::ADD_BOOK class="hover:text-amber-800">"Add book"</a>
                        <span class="text-gray-400">{move || session.username().unwrap_or_default()}</span>
                        <a href=routes::LOG_OUT class="hover:text-red-700">"Log out"</a>
                    </nav>
                </div>
            </header>

            <main class="max-w-7xl w-full mx-auto px-4 sm:px-6 lg:px-8 py-8 flex-1">
                <h1 class="text-3xl font-bold text-amber-900 mb-6">{title}</h1>
                {children()}
            </main>

            <Footer />
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-emerald-950 text-amber-100 mt-auto">
            <div class="max-w-7xl mx-auto py-6 text-center text-sm font-semibold">
                "📖 BookShelf - All Rights Reserved 📖"
            </div>
        </footer>
    }
}
