//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical redirect behavior: protected
//! pages leave for `/login` once bootstrap resolves without a session,
//! and the login page leaves for `/` once a session exists.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthHandle;

/// Whether a protected page should bounce to `/login`.
pub fn should_redirect_unauth(loading: bool, authenticated: bool) -> bool {
    !loading && !authenticated
}

/// Whether the login page should bounce home.
pub fn should_redirect_auth(loading: bool, authenticated: bool) -> bool {
    !loading && authenticated
}

/// Redirect to `/login` whenever auth has loaded and no session exists.
pub fn install_unauth_redirect<F>(auth: &AuthHandle, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    let auth = auth.clone();
    Effect::new(move || {
        let state = auth.state.get();
        if should_redirect_unauth(state.loading, auth.is_authenticated()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Redirect to `/` whenever auth has loaded and a session exists.
pub fn install_auth_redirect<F>(auth: &AuthHandle, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    let auth = auth.clone();
    Effect::new(move || {
        let state = auth.state.get();
        if should_redirect_auth(state.loading, auth.is_authenticated()) {
            navigate("/", NavigateOptions::default());
        }
    });
}
