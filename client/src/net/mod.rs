//! Networking modules for the Mentutor REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues requests and classifies failures, `types` defines the JSON
//! payloads exchanged with the remote API.

pub mod api;
pub mod types;
