//! Declarative form validation.
//!
//! DESIGN
//! ======
//! A [`Schema`] is a static table: field name → ordered rules, each rule a
//! predicate plus the message shown under the field when it fails. The
//! generic validator checks every field and reports the first failing rule
//! per field. Submit gating (`gating`) is a separate, cheaper check run on
//! every keystroke.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod gating;
pub mod schemas;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Special characters accepted by the password rule.
pub const SPECIAL_CHARS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

static EMAIL_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .ok()
});

/// Predicate half of a rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Check {
    Required,
    /// Minimum length in characters.
    MinLen(usize),
    /// Maximum length in characters.
    MaxLen(usize),
    Email,
    HasUppercase,
    HasDigit,
    /// At least one of [`SPECIAL_CHARS`].
    HasSpecial,
}

impl Check {
    pub fn passes(self, value: &str) -> bool {
        match self {
            Self::Required => !value.is_empty(),
            Self::MinLen(n) => value.chars().count() >= n,
            Self::MaxLen(n) => value.chars().count() <= n,
            Self::Email => EMAIL_RE.as_ref().is_some_and(|re| re.is_match(value)),
            Self::HasUppercase => value.chars().any(|c| c.is_ascii_uppercase()),
            Self::HasDigit => value.chars().any(|c| c.is_ascii_digit()),
            Self::HasSpecial => value.chars().any(|c| SPECIAL_CHARS.contains(&c)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    pub check: Check,
    pub message: &'static str,
}

/// Rules for one field.
pub type FieldRules = (&'static str, &'static [Rule]);

/// Field-level error messages keyed by field name.
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

/// Transient form input keyed by field name. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormDraft {
    values: BTreeMap<&'static str, String>,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: &'static str, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Value of `field`; empty when never set.
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map_or("", String::as_str)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Schema {
    pub fields: &'static [FieldRules],
}

impl Schema {
    /// First failing rule per field, for every field.
    ///
    /// # Errors
    ///
    /// Returns the collected messages when any field fails.
    pub fn validate(&self, draft: &FormDraft) -> Result<(), FieldErrors> {
        let errors: FieldErrors = self
            .fields
            .iter()
            .filter_map(|(field, rules)| {
                let value = draft.get(field);
                rules
                    .iter()
                    .find(|rule| !rule.check.passes(value))
                    .map(|rule| (*field, rule.message))
            })
            .collect();
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Fields carrying a [`Check::Required`] rule, in table order.
    pub fn required_fields(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|(_, rules)| rules.iter().any(|r| r.check == Check::Required))
            .map(|(field, _)| *field)
            .collect()
    }
}
