//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (cookies, location, unmount
//! tracking) from page and component logic.

pub mod auth;
pub mod cookies;
pub mod mount;
pub mod task;
