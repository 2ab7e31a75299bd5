//! Build-time API configuration.
//!
//! The backend host is baked in at compile time: `RECEPTAR_ENV=production`
//! selects the deployed address, anything else the local dev server, and
//! `RECEPTAR_API_URL` overrides both.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Local dev backend (FastAPI default port).
pub const DEV_API_URL: &str = "http://localhost:8000";

/// Deployed backend.
pub const PROD_API_URL: &str = "https://receptar-api.onrender.com";

/// Compile-time environment name, defaulting to `development`.
pub fn env_name() -> &'static str {
    option_env!("RECEPTAR_ENV").unwrap_or("development")
}

/// Base URL of the REST API, without a trailing slash.
pub fn api_base_url() -> &'static str {
    if let Some(url) = option_env!("RECEPTAR_API_URL") {
        return url;
    }
    if env_name() == "production" {
        PROD_API_URL
    } else {
        DEV_API_URL
    }
}

/// Join an absolute API path onto the configured base URL.
pub fn api_url(path: &str) -> String {
    join_url(api_base_url(), path)
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
