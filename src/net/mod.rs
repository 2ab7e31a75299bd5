//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the transport abstraction, `tokens` the persisted session
//! credentials, `gateway` the bearer-injection + refresh protocol, `api`
//! the typed endpoint wrappers, and `types` the wire schema.

pub mod api;
pub mod error;
pub mod gateway;
pub mod http;
pub mod tokens;
pub mod types;
