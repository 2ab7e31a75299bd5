//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` constructs one [`AuthHandle`] and passes it into every page as a
//! prop, so the session dependency stays explicit instead of being looked
//! up from ambient context. The handle bundles the gateway (tokens +
//! refresh protocol) with the reactive identity state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::gateway::AuthGateway;
use crate::net::http::FetchClient;
use crate::net::tokens::BrowserTokens;
use crate::net::types::User;

/// The gateway wired to the browser transport and localStorage.
pub type AppGateway = AuthGateway<FetchClient, BrowserTokens>;

/// Authentication state tracking the current user and the one-time
/// bootstrap resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True until the startup bootstrap has resolved, then false for the
    /// rest of the process lifetime.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// The session dependency handed to pages: gateway plus identity signal.
#[derive(Clone)]
pub struct AuthHandle {
    pub gateway: Arc<AppGateway>,
    pub state: RwSignal<AuthState>,
}

impl AuthHandle {
    pub fn new() -> Self {
        Self {
            gateway: Arc::new(AuthGateway::new(FetchClient, BrowserTokens)),
            state: RwSignal::new(AuthState::default()),
        }
    }

    /// Whether a session exists right now. Derived from token presence,
    /// never stored.
    pub fn is_authenticated(&self) -> bool {
        self.gateway.is_authenticated()
    }

    /// Resolve the stored session once at startup. Clears the loading
    /// flag on every path.
    pub fn init(&self) {
        #[cfg(feature = "csr")]
        {
            let handle = self.clone();
            leptos::task::spawn_local(async move {
                let user = handle.gateway.bootstrap().await;
                handle.state.update(|s| {
                    s.user = user;
                    s.loading = false;
                });
            });
        }
        #[cfg(not(feature = "csr"))]
        self.state.update(|s| s.loading = false);
    }

    /// Exchange credentials for a session and publish the resolved user.
    ///
    /// # Errors
    ///
    /// `ApiError::Authentication` with the server's detail message on
    /// rejected credentials; transport errors otherwise.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let user = self.gateway.login(email, password).await?;
        self.state.update(|s| s.user = user);
        Ok(())
    }

    /// Drop the session and the published identity. Cannot fail.
    pub fn logout(&self) {
        self.gateway.logout();
        self.state.update(|s| s.user = None);
    }
}

impl Default for AuthHandle {
    fn default() -> Self {
        Self::new()
    }
}
