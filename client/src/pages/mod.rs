//! Route-level screens.
//!
//! Each page owns its form state and request orchestration and delegates
//! rendering of shared pieces to `components`.

pub mod forum;
pub mod home;
pub mod input_class;
pub mod input_member;
pub mod login;
pub mod profile;
pub mod task;
