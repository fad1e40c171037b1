// web_app/app.rs - Root application component
//
// Sets up the meta context, the session holder and the router.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::pages::*;
use crate::web_app::session::provide_session;

/// Paths of every page
pub mod routes {
    pub const ROOT: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register_page";
    pub const HOME: &str = "/home_page";
    pub const LIBRARY: &str = "/library";
    pub const TO_READ: &str = "/to_read";
    pub const CURRENTLY_READING: &str = "/currently_reading";
    pub const FINISHED: &str = "/finished";
    pub const GAVE_UP: &str = "/gave_up";
    pub const ADD_BOOK: &str = "/add_book";
    pub const LOG_OUT: &str = "/log_out";

    /// Edit page of one book
    pub fn edit(id: i64) -> String {
        format!("/edit/{}", id)
    }
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session();

    view! {
        <Title text="BookShelf" />
        <Meta name="description" content="Track the books you own, read and plan to read" />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Stylesheet id="leptos" href="/pkg/bookshelf.css" />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=LoginPage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register_page") view=RegisterPage />
                <Route path=path!("/home_page") view=HomePage />
                <Route path=path!("/library") view=LibraryPage />
                <Route path=path!("/to_read") view=ToReadPage />
                <Route path=path!("/currently_reading") view=CurrentlyReadingPage />
                <Route path=path!("/finished") view=FinishedPage />
                <Route path=path!("/gave_up") view=GaveUpPage />
                <Route path=path!("/add_book") view=AddBookPage />
                <Route path=path!("/edit/:id") view=EditBookPage />
                <Route path=path!("/log_out") view=LogoutPage />
            </Routes>
        </Router>
    }
}

/// HTML document rendered by the server around `App`
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-amber-50 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-amber-200 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <a
                    href=routes::HOME
                    class="px-6 py-3 bg-amber-700 text-white rounded-lg hover:bg-amber-800 transition-colors"
                >
                    "Go to my bookshelf"
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::routes;

    #[test]
    fn test_edit_route() {
        assert_eq!(routes::edit(42), "/edit/42");
    }
}
