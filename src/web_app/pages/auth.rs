// web_app/pages/auth.rs - Login, registration and logout

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::Footer;
use crate::web_app::actions::redirect_after;
use crate::web_app::app::routes;
use crate::web_app::components::*;
use crate::web_app::error::ApiError;
use crate::web_app::model::{LoginRequest, RegisterRequest};
use crate::web_app::server_fns;
use crate::web_app::session::use_session;
use crate::web_app::validation::validate_registration;

/// Centered card used by the logged-out pages
#[component]
fn AuthCard(title: &'static str, subtitle: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-amber-50">
            <div class="h-32 bg-gradient-to-r from-amber-800 to-emerald-900 shadow-lg"></div>
            <div class="flex-grow py-8 px-4">
                <div class="max-w-md mx-auto bg-white p-8 border-2 border-amber-800 rounded-xl shadow-lg space-y-6">
                    <div class="text-center">
                        <h1 class="text-3xl font-bold text-amber-800">{title}</h1>
                        <p class="text-amber-700 mt-2">{subtitle}</p>
                    </div>
                    {children()}
                </div>
            </div>
            <Footer />
        </div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let request = LoginRequest {
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        pending.set(true);
        error.set(None);

        let navigate = navigate.clone();
        spawn_local(async move {
            match server_fns::login(request).await {
                Ok(s) => {
                    session.login(s);
                    navigate(routes::HOME, Default::default());
                }
                Err(e) => {
                    let err = ApiError::from(e);
                    tracing::warn!("Login failed: {}", err);
                    error.set(Some(err.user_message()));
                }
            }
            pending.set(false);
        });
    };

    view! {
        <AuthCard title="Sign In" subtitle="Welcome back to your library">
            <form on:submit=on_submit class="space-y-5">
                <TextInput value=username label="Username" />
                <TextInput value=password label="Password" input_type="password" />
                {move || error.get().map(|e| view! { <ErrorDisplay error=e /> })}
                <Button button_type="submit" disabled=pending class="w-full">
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </Button>
                <p class="text-center text-sm text-gray-600">
                    "Don't have an account? "
                    <a href=routes::REGISTER class="text-amber-600 hover:text-amber-800 font-bold underline">
                        "Sign up"
                    </a>
                </p>
            </form>
        </AuthCard>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<String>::new());
    let pending = RwSignal::new(false);
    let registered = RwSignal::new(false);

    // Editing any field clears the previous errors
    Effect::new(move |_| {
        username.track();
        email.track();
        password.track();
        confirm_password.track();
        errors.set(Vec::new());
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let request = RegisterRequest {
            username: username.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };

        let problems = validate_registration(&request);
        if !problems.is_empty() {
            errors.set(problems);
            return;
        }

        pending.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match server_fns::register(request).await {
                Ok(()) => {
                    registered.set(true);
                    redirect_after(navigate, routes::LOGIN, std::time::Duration::from_secs(2));
                }
                Err(e) => errors.set(ApiError::from(e).messages()),
            }
            pending.set(false);
        });
    };

    view! {
        <AuthCard title="Sign Up" subtitle="Create your account">
            <form on:submit=on_submit class="space-y-5">
                <TextInput value=username label="Username" />
                <TextInput value=email label="Email" input_type="email" />
                <TextInput value=password label="Password" input_type="password" />
                <TextInput value=confirm_password label="Confirm password" input_type="password" />
                <p class="text-xs text-gray-500">
                    "At least 12 characters with upper and lower case letters, a number and a symbol."
                </p>
                <ErrorList errors=errors.into() />
                <Show when=move || registered.get()>
                    <SuccessMessage message="Registration successful! Please login." />
                </Show>
                <Button button_type="submit" disabled=pending class="w-full">
                    {move || if pending.get() { "Creating account..." } else { "Create account" }}
                </Button>
                <p class="text-center text-sm text-gray-600">
                    "Already registered? "
                    <a href=routes::LOGIN class="text-amber-600 hover:text-amber-800 font-bold underline">"Sign in"</a>
                </p>
            </form>
        </AuthCard>
    }
}

/// Clears the session and shows the login form
#[component]
pub fn LogoutPage() -> impl IntoView {
    let session = use_session();

    // Effects only run in the browser; the server has no session to clear
    Effect::new(move |_| {
        if session.get_untracked().is_some() {
            tracing::info!("Logging out");
        }
        session.logout();
    });

    view! { <LoginPage /> }
}
