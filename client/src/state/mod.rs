//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the only process-wide state; `logout` is the pure
//! confirmation state machine driven by the sidebars.

pub mod logout;
pub mod session;
