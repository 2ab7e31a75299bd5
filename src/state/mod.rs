//! Shared application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` owns the session and current-user identity handed to every
//! page; `chat` holds the AI conversation types.

pub mod auth;
pub mod chat;
