//! Reusable UI components shared by pages.
//!
//! ARCHITECTURE
//! ============
//! `layout` and `sidebar` frame every authenticated page, `dialog` hosts the
//! modal notices, and `form_field` binds inputs to a `FormDraft`.

pub mod dialog;
pub mod form_field;
pub mod layout;
pub mod sidebar;
