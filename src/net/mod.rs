//! Networking for the chat endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema and `api` carries one request per user
//! submission through the [`api::ChatTransport`] seam.

pub mod api;
pub mod types;
