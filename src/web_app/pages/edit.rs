// web_app/pages/edit.rs - Add and edit forms

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::{require_session, PageShell};
use crate::web_app::actions::{redirect_after, submit_book, today, MutationConfig, SubmitState, SubmitTarget};
use crate::web_app::app::routes;
use crate::web_app::components::*;
use crate::web_app::error::ApiError;
use crate::web_app::model::{Book, BookForm};
use crate::web_app::server_fns;

/// Form plus submit handling shared by the add and edit pages
#[component]
fn BookEditor(
    target: SubmitTarget,
    initial: BookForm,
    #[prop(default = MutationConfig::default())]
    mutation: MutationConfig,
) -> impl IntoView {
    let session = require_session();
    let navigate = StoredValue::new_local(use_navigate());
    let state = RwSignal::new(SubmitState::Idle);

    let on_submit = Callback::new(move |form: BookForm| {
        if state.get_untracked() == SubmitState::Submitting {
            return;
        }
        state.set(SubmitState::Submitting);

        let navigate = navigate.get_value();
        spawn_local(async move {
            match submit_book(session.get_untracked(), target, form, today()).await {
                Ok(()) => {
                    tracing::info!("Book saved ({:?})", target);
                    state.set(SubmitState::Saved);
                    redirect_after(navigate, routes::LIBRARY, mutation.redirect_delay);
                }
                Err(err) => {
                    session.observe(&err);
                    state.set(SubmitState::Failed(err.messages()));
                }
            }
        });
    });

    let errors = Signal::derive(move || state.with(|s| s.errors()));
    let submitting = Signal::derive(move || matches!(state.get(), SubmitState::Submitting | SubmitState::Saved));
    let (label, notice) = match target {
        SubmitTarget::Create => ("Add book", "Book added successfully! Redirecting to your library..."),
        SubmitTarget::Update(_) => ("Save changes", "Book updated successfully! Redirecting to your library..."),
    };

    view! {
        <Show when=move || state.get() == SubmitState::Saved>
            <div class="mb-6"><SuccessMessage message=notice /></div>
        </Show>
        <BookFormView
            initial=initial
            on_submit=on_submit
            errors=errors
            submitting=submitting
            submit_label=label
        />
    }
}

#[component]
pub fn AddBookPage() -> impl IntoView {
    view! {
        <PageShell title="Add a Book">
            <BookEditor target=SubmitTarget::Create initial=BookForm::default() />
        </PageShell>
    }
}

/// Result of loading the book behind `/edit/:id`
#[derive(Clone, Debug, PartialEq)]
enum Loaded {
    Found(Book),
    Missing,
    Failed(String),
}

#[component]
pub fn EditBookPage() -> impl IntoView {
    let session = require_session();
    let params = use_params_map();

    let id = move || params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok()));

    let book = LocalResource::new(move || async move {
        let current = session.get()?;
        let Some(id) = id() else {
            return Some(Loaded::Missing);
        };
        let loaded = match server_fns::get_book(current, id).await.map_err(ApiError::from) {
            Ok(book) => Loaded::Found(book),
            Err(ApiError::NotFound) => Loaded::Missing,
            Err(err) => {
                session.observe(&err);
                Loaded::Failed(err.user_message())
            }
        };
        Some(loaded)
    });

    view! {
        <PageShell title="Edit Book">
            {move || match book.get().flatten() {
                None => view! { <Loading message="Loading book..." /> }.into_any(),
                Some(Loaded::Found(b)) => view! {
                    <BookEditor target=SubmitTarget::Update(b.id) initial=BookForm::from(&b) />
                }.into_any(),
                Some(Loaded::Missing) => view! { <BookNotFound /> }.into_any(),
                Some(Loaded::Failed(e)) => view! { <ErrorDisplay error=e /> }.into_any(),
            }}
        </PageShell>
    }
}

#[component]
fn BookNotFound() -> impl IntoView {
    view! {
        <div class="text-center py-16 bg-white rounded-2xl border border-dashed border-gray-300">
            <div class="text-gray-300 text-6xl mb-4">"📕"</div>
            <h2 class="text-xl font-bold text-gray-900 mb-4">"Book not found"</h2>
            <a
                href=routes::LIBRARY
                class="px-6 py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors"
            >
                "Back to library"
            </a>
        </div>
    }
}
