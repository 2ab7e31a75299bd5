//! Login page with email + password credentials.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthHandle;
use crate::util::auth::install_auth_redirect;

#[cfg(feature = "csr")]
const LOGIN_ERROR_FALLBACK: &str = "Přihlášení se nezdařilo";

/// Trim and require both credentials before hitting the network.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Vyplňte email i heslo.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Login page. Redirects home as soon as a session exists, whether from
/// this form or from a restored token.
#[component]
pub fn LoginPage(auth: AuthHandle) -> impl IntoView {
    install_auth_redirect(&auth, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };

        busy.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = auth.login(&email_value, &password_value).await {
                    error.set(Some(err.message(LOGIN_ERROR_FALLBACK)));
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__badge">"👨‍🍳"</div>
                <h1>"Vítejte zpět"</h1>
                <p class="login-card__subtitle">"Přihlaste se do své osobní kuchařky"</p>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || error.get().is_some()>
                        <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="vas@email.cz"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="••••••••"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Přihlašování..." } else { "Vstoupit" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
