// web_app/actions.rs - Create, update and delete flows
//
// The add page, the edit page and every list page go through these helpers,
// so validation, error mapping, redirect timing and the delete follow-up
// behave the same everywhere. Timing and delete behaviour are configuration.

use std::time::Duration;

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::web_app::error::ApiError;
use crate::web_app::model::{BookForm, Session};
use crate::web_app::server_fns;
use crate::web_app::validation::parse_book_form;

/// What a list does once a delete has completed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AfterDelete {
    /// Fetch the current page again
    #[default]
    Refetch,
    /// Drop the item from the loaded page only
    RemoveLocal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MutationConfig {
    /// Pause between the success notice and the redirect to the list
    pub redirect_delay: Duration,
    pub after_delete: AfterDelete,
}

impl Default for MutationConfig {
    fn default() -> Self {
        MutationConfig {
            redirect_delay: Duration::from_secs(2),
            after_delete: AfterDelete::Refetch,
        }
    }
}

/// Whether a submission creates a book or replaces an existing one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitTarget {
    Create,
    Update(i64),
}

/// Form status shown under the submit button
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Saved,
    Failed(Vec<String>),
}

impl SubmitState {
    pub fn errors(&self) -> Vec<String> {
        match self {
            SubmitState::Failed(errors) => errors.clone(),
            _ => Vec::new(),
        }
    }
}

/// Current local date, used by the "not in the future" rules
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Validate the form and, only if it passes, send it
pub async fn submit_book(
    session: Option<Session>,
    target: SubmitTarget,
    form: BookForm,
    today: NaiveDate,
) -> Result<(), ApiError> {
    let draft = parse_book_form(&form, today).map_err(ApiError::Validation)?;
    let session = session.ok_or(ApiError::Unauthorized)?;

    let result = match target {
        SubmitTarget::Create => server_fns::create_book(session, draft).await,
        SubmitTarget::Update(id) => server_fns::update_book(session, id, draft).await,
    };
    result.map_err(ApiError::from)
}

/// Delete one book; the caller refreshes the list afterwards
pub async fn remove_book(session: Option<Session>, id: i64) -> Result<(), ApiError> {
    let session = session.ok_or(ApiError::Unauthorized)?;
    server_fns::delete_book(session, id).await.map_err(ApiError::from)
}

/// Allows one delete at a time per list
#[derive(Clone, Copy, Debug)]
pub struct DeleteGuard {
    in_flight: RwSignal<Option<i64>>,
}

impl DeleteGuard {
    pub fn new() -> Self {
        DeleteGuard {
            in_flight: RwSignal::new(None),
        }
    }

    /// Claim the guard for `id`; false while another delete is running
    pub fn try_acquire(&self, id: i64) -> bool {
        if self.in_flight.get_untracked().is_some() {
            return false;
        }
        self.in_flight.set(Some(id));
        true
    }

    pub fn release(&self) {
        self.in_flight.set(None);
    }

    /// Id of the book being deleted, if any
    pub fn current(&self) -> Option<i64> {
        self.in_flight.get()
    }
}

impl Default for DeleteGuard {
    fn default() -> Self {
        DeleteGuard::new()
    }
}

/// Navigate to `path` after `delay` (immediately for a zero delay)
pub fn redirect_after<F>(navigate: F, path: &'static str, delay: Duration)
where
    F: Fn(&str, leptos_router::NavigateOptions) + 'static,
{
    if delay.is_zero() {
        navigate(path, Default::default());
        return;
    }
    set_timeout(move || navigate(path, Default::default()), delay);
}
