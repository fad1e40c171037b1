// web_app/pages/books.rs - Paginated book lists
//
// One component serves the whole library and every status view; the routes
// below only pick a `ListViewConfig`. All list state lives in a single
// `ListState` signal so responses are applied (or dropped as stale) in one
// place.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{require_session, PageShell};
use crate::web_app::actions::{remove_book, AfterDelete, DeleteGuard, MutationConfig};
use crate::web_app::components::*;
use crate::web_app::error::ApiError;
use crate::web_app::model::{Book, ReadingStatus};
use crate::web_app::pagination::{ApplyOutcome, ListState, ListViewConfig};
use crate::web_app::server_fns;

#[component]
pub fn BookListPage(
    config: ListViewConfig,
    #[prop(default = MutationConfig::default())]
    mutation: MutationConfig,
) -> impl IntoView {
    let session = require_session();
    let state = RwSignal::new(ListState::<Book>::new(config.page_size));
    // Bumped whenever the current page has to be (re)loaded
    let refresh = RwSignal::new(0_u64);
    let status = config.status;

    let reload = move || refresh.update(|n| *n += 1);

    Effect::new(move |_| {
        refresh.track();
        let Some(current) = session.get() else {
            return;
        };
        let Some((id, query)) = state.try_update(|s| (s.begin(), s.book_query(status))) else {
            return;
        };

        spawn_local(async move {
            let result = server_fns::list_books(current, query).await.map_err(ApiError::from);
            if let Err(err) = &result {
                session.observe(err);
            }
            let outcome = state.try_update(|s| s.apply(id, result.map_err(|e| e.user_message())));
            if outcome == Some(ApplyOutcome::PageShifted) {
                reload();
            }
        });
    });

    let on_search = Callback::new(move |term: String| {
        if state.try_update(|s| s.set_query(&term)).unwrap_or(false) {
            reload();
        }
    });

    let on_page = Callback::new(move |page: u32| {
        if state.try_update(|s| s.go_to(page)).unwrap_or(false) {
            reload();
        }
    });

    // Delete flow: card button -> confirmation -> request -> refetch
    let guard = DeleteGuard::new();
    let confirming = RwSignal::new(None::<i64>);
    let action_error = RwSignal::new(None::<String>);

    let on_delete = Callback::new(move |id: i64| {
        action_error.set(None);
        confirming.set(Some(id));
    });

    let on_cancel = Callback::new(move |()| confirming.set(None));

    let on_confirm = Callback::new(move |()| {
        let Some(id) = confirming.get_untracked() else {
            return;
        };
        confirming.set(None);
        if !guard.try_acquire(id) {
            tracing::debug!("Delete of {} ignored, another delete is running", id);
            return;
        }

        spawn_local(async move {
            match remove_book(session.get_untracked(), id).await {
                Ok(()) => match mutation.after_delete {
                    AfterDelete::Refetch => reload(),
                    AfterDelete::RemoveLocal => state.update(|s| s.remove_where(|b| b.id == id)),
                },
                Err(err) => {
                    session.observe(&err);
                    action_error.set(Some(err.user_message()));
                }
            }
            guard.release();
        });
    });

    let books = Signal::derive(move || state.with(|s| s.items.clone()));
    let window = Signal::derive(move || state.with(|s| s.window));
    let deleting = Signal::derive(move || guard.current());
    let confirm_message = config.confirm_delete;
    let empty_text = config.empty_text;
    let max_buttons = config.max_page_buttons;

    view! {
        <PageShell title=config.title>
            <section class="bg-white rounded-2xl shadow-sm p-6 mb-8 border border-gray-100">
                <SearchBar on_settled=on_search delay=config.search_delay />
            </section>

            {move || action_error.get().map(|e| view! {
                <div class="mb-6"><ErrorDisplay error=e /></div>
            })}

            {move || {
                let (loading, error, empty) = state.with(|s| (s.loading, s.error.clone(), s.items.is_empty()));
                match error {
                    Some(e) => view! { <ErrorDisplay error=e /> }.into_any(),
                    None if loading && empty => view! { <Loading message="Loading books..." /> }.into_any(),
                    None => view! {
                        <BookGrid
                            books=books
                            on_delete=on_delete
                            deleting=deleting
                            empty_text=empty_text
                        />
                    }.into_any(),
                }
            }}

            <Pagination window=window on_page=on_page max_buttons=max_buttons />

            {move || confirming.get().map(|_| view! {
                <ConfirmDialog
                    message=confirm_message.to_string()
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            })}
        </PageShell>
    }
}

#[component]
pub fn LibraryPage() -> impl IntoView {
    view! { <BookListPage config=ListViewConfig::library() /> }
}

#[component]
pub fn ToReadPage() -> impl IntoView {
    view! { <BookListPage config=ListViewConfig::for_status(ReadingStatus::ToRead) /> }
}

#[component]
pub fn CurrentlyReadingPage() -> impl IntoView {
    view! { <BookListPage config=ListViewConfig::for_status(ReadingStatus::CurrentlyReading) /> }
}

#[component]
pub fn FinishedPage() -> impl IntoView {
    view! { <BookListPage config=ListViewConfig::for_status(ReadingStatus::Finished) /> }
}

#[component]
pub fn GaveUpPage() -> impl IntoView {
    view! { <BookListPage config=ListViewConfig::for_status(ReadingStatus::GaveUp) /> }
}
