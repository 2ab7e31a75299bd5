//! Authenticated request gateway: bearer injection plus a single
//! transparent refresh-and-retry on 401.
//!
//! DESIGN
//! ======
//! The gateway owns the token store and the transport, both injected at
//! construction, and tracks an explicit session phase advanced by
//! request outcomes. Guarantees per call: at most one refresh attempt
//! and at most one retried request; a non-401 response never touches the
//! refresh endpoint. Concurrent calls may each trigger their own refresh;
//! refresh is idempotent server-side and the last writer to the store
//! wins, so the cost is a redundant network call, not corrupted state.

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use std::sync::Mutex;

use crate::config::api_url;

use super::error::{ApiError, detail_message};
use super::http::{HttpClient, HttpError, HttpRequest, HttpResponse};
use super::tokens::{TokenKind, TokenStore};
use super::types::{ProfileResponse, RefreshRequest, TokenPair, User};

const LOGIN_PATH: &str = "/api/v1/auth/login";
const REFRESH_PATH: &str = "/api/v1/auth/refresh";
const PROFILE_PATH: &str = "/api/v1/users/me";

const LOGIN_FALLBACK: &str = "Login failed";

/// Where the session currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Unauthenticated,
    /// A login request is in flight.
    Authenticating,
    Authenticated,
    /// A 401 was observed and a refresh cycle is in flight.
    Refreshing,
}

/// Request outcomes that drive the session phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthEvent {
    LoginStarted,
    LoginSucceeded,
    LoginFailed,
    /// A bearer-authenticated request came back 401.
    RequestUnauthorized,
    RefreshSucceeded,
    RefreshFailed,
    LoggedOut,
}

/// Pure transition function for the session phase machine.
pub fn advance(phase: SessionPhase, event: AuthEvent) -> SessionPhase {
    use AuthEvent as E;
    use SessionPhase as P;
    match (phase, event) {
        (_, E::LoginStarted) => P::Authenticating,
        (P::Authenticating, E::LoginSucceeded) => P::Authenticated,
        (P::Authenticating, E::LoginFailed) => P::Unauthenticated,
        (P::Authenticated, E::RequestUnauthorized) => P::Refreshing,
        (P::Refreshing, E::RefreshSucceeded) => P::Authenticated,
        (P::Refreshing, E::RefreshFailed) => P::Unauthenticated,
        (_, E::LoggedOut) => P::Unauthenticated,
        // Out-of-order events (e.g. a stale refresh result after logout)
        // leave the phase untouched.
        (phase, _) => phase,
    }
}

/// Executes API requests on behalf of pages, attaching credentials and
/// recovering from expired access tokens.
pub struct AuthGateway<C, S> {
    http: C,
    tokens: S,
    // Mutex rather than Cell so the browser-wired gateway stays Sync and
    // can be shared behind an Arc; wasm is single-threaded, so the lock
    // is never contended.
    phase: Mutex<SessionPhase>,
}

impl<C: HttpClient, S: TokenStore> AuthGateway<C, S> {
    pub fn new(http: C, tokens: S) -> Self {
        let phase = if tokens.get(TokenKind::Access).is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Unauthenticated
        };
        Self {
            http,
            tokens,
            phase: Mutex::new(phase),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase.lock().map(|phase| *phase).unwrap_or_default()
    }

    fn transition(&self, event: AuthEvent) {
        if let Ok(mut phase) = self.phase.lock() {
            *phase = advance(*phase, event);
        }
    }

    /// Whether a session exists. Derived from token presence; never
    /// tracked separately.
    pub fn is_authenticated(&self) -> bool {
        self.tokens.get(TokenKind::Access).is_some()
    }

    /// Issue a request without touching credentials (public endpoints).
    ///
    /// # Errors
    ///
    /// Propagates transport failures.
    pub async fn fetch(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.http.execute(req).await
    }

    /// Issue a request with the access token attached, refreshing the
    /// session once if the server answers 401.
    ///
    /// # Errors
    ///
    /// Propagates transport failures; HTTP error statuses (including an
    /// unrecovered 401) come back as `Ok` responses for the caller to
    /// inspect, mirroring the fetch primitive.
    pub async fn authenticated_fetch(&self, mut req: HttpRequest) -> Result<HttpResponse, HttpError> {
        if let Some(token) = self.tokens.get(TokenKind::Access) {
            // The gateway owns the Authorization header; other caller
            // headers pass through untouched.
            req.set_header("Authorization", &format!("Bearer {token}"));
        }

        let first = self.http.execute(req.clone()).await?;
        if first.status() != 401 {
            return Ok(first);
        }

        self.transition(AuthEvent::RequestUnauthorized);
        match self.refresh().await {
            Some(token) => {
                req.set_header("Authorization", &format!("Bearer {token}"));
                self.http.execute(req).await
            }
            // Refresh already cleared the session; hand back the
            // original 401 unmodified.
            None => Ok(first),
        }
    }

    /// One refresh cycle. Returns the new access token on success; on any
    /// failure clears the session and returns `None`.
    async fn refresh(&self) -> Option<String> {
        let Some(refresh_token) = self.tokens.get(TokenKind::Refresh) else {
            self.tokens.clear();
            self.transition(AuthEvent::RefreshFailed);
            return None;
        };

        let request = HttpRequest::post(&api_url(REFRESH_PATH))
            .json(&RefreshRequest { refresh_token })
            .ok()?;

        let pair = match self.http.execute(request).await {
            Ok(resp) if resp.ok() => resp.json::<TokenPair>().ok(),
            _ => None,
        };

        match pair {
            Some(pair) => {
                self.tokens.set(TokenKind::Access, &pair.access_token);
                self.tokens.set(TokenKind::Refresh, &pair.refresh_token);
                self.transition(AuthEvent::RefreshSucceeded);
                Some(pair.access_token)
            }
            None => {
                self.tokens.clear();
                self.transition(AuthEvent::RefreshFailed);
                None
            }
        }
    }

    /// Exchange credentials for a session and load the user profile.
    ///
    /// Returns `Ok(None)` when login succeeded but the profile fetch did
    /// not. The session exists either way; the identity is just
    /// unresolved.
    ///
    /// # Errors
    ///
    /// `ApiError::Authentication` with the server's detail message on
    /// rejected credentials; transport errors otherwise. No tokens are
    /// stored on any error path.
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<User>, ApiError> {
        self.transition(AuthEvent::LoginStarted);

        let request = HttpRequest::post(&api_url(LOGIN_PATH)).form(&[("username", email), ("password", password)]);

        let response = match self.http.execute(request).await {
            Ok(resp) => resp,
            Err(err) => {
                self.transition(AuthEvent::LoginFailed);
                return Err(err.into());
            }
        };

        if !response.ok() {
            self.transition(AuthEvent::LoginFailed);
            return Err(ApiError::Authentication(detail_message(response.text(), LOGIN_FALLBACK)));
        }

        let pair: TokenPair = match response.json() {
            Ok(pair) => pair,
            Err(err) => {
                self.transition(AuthEvent::LoginFailed);
                return Err(err.into());
            }
        };

        self.tokens.set(TokenKind::Access, &pair.access_token);
        self.tokens.set(TokenKind::Refresh, &pair.refresh_token);
        self.transition(AuthEvent::LoginSucceeded);

        Ok(self.fetch_profile(&pair.access_token).await)
    }

    /// Drop the session. Synchronous, no network call, cannot fail.
    pub fn logout(&self) {
        self.tokens.clear();
        self.transition(AuthEvent::LoggedOut);
    }

    /// Resolve the stored session into a user once at startup.
    ///
    /// Runs directly on the transport rather than through
    /// [`Self::authenticated_fetch`] so the recovery path stays
    /// non-recursive: profile fetch, then on failure one refresh cycle,
    /// then one profile retry. An irrecoverable refresh failure clears
    /// the session.
    pub async fn bootstrap(&self) -> Option<User> {
        let token = self.tokens.get(TokenKind::Access)?;

        if let Some(user) = self.fetch_profile(&token).await {
            return Some(user);
        }

        self.transition(AuthEvent::RequestUnauthorized);
        let token = self.refresh().await?;
        self.fetch_profile(&token).await
    }

    async fn fetch_profile(&self, token: &str) -> Option<User> {
        let request = HttpRequest::get(&api_url(PROFILE_PATH)).header("Authorization", &format!("Bearer {token}"));
        let response = self.http.execute(request).await.ok()?;
        if !response.ok() {
            return None;
        }
        let profile: ProfileResponse = response.json().ok()?;
        Some(User::from_profile(profile))
    }
}
