// web_app/mod.rs - Root module for the Leptos web application
//
// This module contains the book tracking client built with Leptos.
//
// Architecture:
// - model/: Shared data types (used by both client and server)
// - validation, pagination, debounce, error: Plain Rust logic, no framework
// - session: Session holder (signal + browser local storage)
// - server_fns/: Server function declarations (both client and server)
// - api/: HTTP client for the remote book API (SSR only)
// - actions: Create/update/delete flows shared by the pages
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;
pub mod validation;
pub mod pagination;
pub mod debounce;
pub mod error;

// Server function declarations - must be available to both client and server
// The #[server] macro generates client stubs that call the server via HTTP
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

// HTTP client for the remote API (native only)
#[cfg(feature = "api-client")]
pub mod api;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod session;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod actions;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
