//! # receptar
//!
//! Leptos + WASM frontend for the Receptář recipe manager. Replaces the
//! React `frontend/` with a Rust-native UI layer over the same REST API.
//!
//! This crate contains pages, components, application state, the typed
//! API layer, and the authenticated-request gateway that handles bearer
//! injection and transparent token refresh.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
