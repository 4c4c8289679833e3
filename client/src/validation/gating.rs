//! Field-driven submit gating.
//!
//! A submit button stays disabled until every required field holds a
//! non-empty value. This is recomputed on each field change and is separate
//! from schema validation, which runs at submit time.

#[cfg(test)]
#[path = "gating_test.rs"]
mod gating_test;

use super::{FormDraft, Schema};

/// `true` iff every field in `required` is non-empty in `draft`.
pub fn submit_enabled(draft: &FormDraft, required: &[&str]) -> bool {
    required.iter().all(|field| !draft.get(field).is_empty())
}

/// [`submit_enabled`] over the schema's required fields.
pub fn schema_submit_enabled(draft: &FormDraft, schema: &Schema) -> bool {
    submit_enabled(draft, &schema.required_fields())
}
