// web_app/session.rs - Session holder
//
// `SessionContext` is the single source of truth for who is logged in. It is
// provided once by `App` and read by every page that talks to the API. The
// browser copy in local storage only seeds it after hydration and mirrors it
// on login/logout; nothing else reads storage directly.

use leptos::prelude::*;

use crate::web_app::error::ApiError;
use crate::web_app::model::Session;

/// Local storage keys
pub const TOKEN_KEY: &str = "authToken";
pub const USER_ID_KEY: &str = "userId";
pub const USERNAME_KEY: &str = "username";

#[derive(Clone, Copy, Debug)]
pub struct SessionContext {
    session: RwSignal<Option<Session>>,
    /// Set once storage has been read; guards must not redirect before that
    ready: RwSignal<bool>,
}

impl SessionContext {
    pub fn new() -> Self {
        let ctx = SessionContext {
            session: RwSignal::new(None),
            ready: RwSignal::new(false),
        };

        // Effects only run in the browser, after hydration
        Effect::new(move |_| {
            if let Some(stored) = storage::load() {
                tracing::debug!("Restored session for '{}'", stored.username);
                ctx.session.set(Some(stored));
            }
            ctx.ready.set(true);
        });

        ctx
    }

    pub fn get(&self) -> Option<Session> {
        self.session.get()
    }

    pub fn get_untracked(&self) -> Option<Session> {
        self.session.get_untracked()
    }

    pub fn is_ready(&self) -> bool {
        self.ready.get()
    }

    pub fn username(&self) -> Option<String> {
        self.session.with(|s| s.as_ref().map(|s| s.username.clone()))
    }

    pub fn login(&self, session: Session) {
        storage::save(&session);
        self.session.set(Some(session));
        self.ready.set(true);
    }

    pub fn logout(&self) {
        storage::clear();
        self.session.set(None);
    }

    /// Drop a session the API no longer accepts
    pub fn expire(&self) {
        tracing::warn!("Session rejected by the API, logging out");
        self.logout();
    }

    /// Expire the session when `err` says the token is no longer valid
    pub fn observe(&self, err: &ApiError) {
        if matches!(err, ApiError::Unauthorized) {
            self.expire();
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        SessionContext::new()
    }
}

/// Create the session holder and put it in context
pub fn provide_session() -> SessionContext {
    let ctx = SessionContext::new();
    provide_context(ctx);
    ctx
}

pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}

mod storage {
    use crate::web_app::model::Session;

    cfg_if::cfg_if! {
        if #[cfg(feature = "hydrate")] {
            use super::{TOKEN_KEY, USERNAME_KEY, USER_ID_KEY};

            fn local_storage() -> Option<web_sys::Storage> {
                web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            }

            pub fn load() -> Option<Session> {
                let storage = local_storage()?;
                let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
                let user_id = storage
                    .get_item(USER_ID_KEY)
                    .ok()
                    .flatten()
                    .and_then(|id| id.parse().ok())
                    .unwrap_or_default();
                let username = storage.get_item(USERNAME_KEY).ok().flatten().unwrap_or_default();
                Some(Session { token, user_id, username })
            }

            pub fn save(session: &Session) {
                if let Some(storage) = local_storage() {
                    let _ = storage.set_item(TOKEN_KEY, &session.token);
                    let _ = storage.set_item(USER_ID_KEY, &session.user_id.to_string());
                    let _ = storage.set_item(USERNAME_KEY, &session.username);
                }
            }

            pub fn clear() {
                if let Some(storage) = local_storage() {
                    for key in [TOKEN_KEY, USER_ID_KEY, USERNAME_KEY] {
                        let _ = storage.remove_item(key);
                    }
                }
            }
        } else {
            pub fn load() -> Option<Session> {
                None
            }

            pub fn save(_session: &Session) {}

            pub fn clear() {}
        }
    }
}
