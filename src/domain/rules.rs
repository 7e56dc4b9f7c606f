//! Field constraint tables.
//!
//! Each record kind declares its fields as [`FieldRule`] constants. Records
//! run the same rule on construction and in every setter, so a value that
//! passes once always passes.

use crate::error::{RecordError, RecordResult};

/// Shape a field value must take beyond its length bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Any characters, up to `max_len`.
    Free,
    /// Exactly `max_len` ASCII digits, nothing else.
    ExactDigits,
}

/// Constraint on a single string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Name used in error messages.
    pub field: &'static str,
    /// Upper bound in characters; the exact length for `ExactDigits`.
    pub max_len: usize,
    /// Whether the empty string is acceptable.
    pub allow_empty: bool,
    pub format: Format,
}

impl FieldRule {
    /// A free-form field bounded by `max_len`.
    pub const fn bounded(field: &'static str, max_len: usize) -> Self {
        Self {
            field,
            max_len,
            allow_empty: true,
            format: Format::Free,
        }
    }

    /// A field of exactly `len` ASCII digits.
    pub const fn digits(field: &'static str, len: usize) -> Self {
        Self {
            field,
            max_len: len,
            allow_empty: false,
            format: Format::ExactDigits,
        }
    }

    /// Same rule, but the empty string is rejected.
    pub const fn non_empty(self) -> Self {
        Self {
            allow_empty: false,
            ..self
        }
    }

    /// Validate `value` against this rule.
    ///
    /// # Errors
    ///
    /// Returns `Empty`, `NotDigits` or `TooLong` naming this field.
    pub fn check(&self, value: &str) -> RecordResult<()> {
        if !self.allow_empty && value.is_empty() {
            return Err(RecordError::Empty { field: self.field });
        }

        match self.format {
            Format::ExactDigits => {
                if !self.matches_digits(value) {
                    return Err(RecordError::NotDigits {
                        field: self.field,
                        len: self.max_len,
                    });
                }
            }
            Format::Free => {
                if value.chars().count() > self.max_len {
                    return Err(RecordError::TooLong {
                        field: self.field,
                        max: self.max_len,
                    });
                }
            }
        }

        Ok(())
    }

    /// Validate and take ownership in one step, for constructors and setters.
    pub fn accept(&self, value: impl Into<String>) -> RecordResult<String> {
        let value = value.into();
        self.check(&value)?;
        Ok(value)
    }

    // Whole value, not a substring: "contains ten digits" is not "is ten digits".
    fn matches_digits(&self, value: &str) -> bool {
        value.len() == self.max_len && value.bytes().all(|b| b.is_ascii_digit())
    }
}

/// Turn an absent value into a `Missing` error for `field`.
///
/// Used wherever a value can arrive as `None`: deserialized records and
/// commands. Inside the typed API an argument cannot be null.
pub fn require<T>(field: &'static str, value: Option<T>) -> RecordResult<T> {
    value.ok_or(RecordError::Missing { field })
}

// Contact fields reject the empty string.
pub const CONTACT_ID: FieldRule = FieldRule::bounded("contact_id", 10).non_empty();
pub const FIRST_NAME: FieldRule = FieldRule::bounded("first_name", 10).non_empty();
pub const LAST_NAME: FieldRule = FieldRule::bounded("last_name", 10).non_empty();
pub const PHONE: FieldRule = FieldRule::digits("phone", 10);
pub const ADDRESS: FieldRule = FieldRule::bounded("address", 30).non_empty();

// Task and appointment fields only bound the length.
pub const TASK_ID: FieldRule = FieldRule::bounded("task_id", 10);
pub const TASK_NAME: FieldRule = FieldRule::bounded("name", 20);
pub const TASK_DESCRIPTION: FieldRule = FieldRule::bounded("description", 50);

pub const APPOINTMENT_ID: FieldRule = FieldRule::bounded("appointment_id", 10);
pub const APPOINTMENT_DESCRIPTION: FieldRule = FieldRule::bounded("description", 50);
