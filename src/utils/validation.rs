//! Generic field validation for the project input form.
//!
//! Each form field is checked against the constraints declared for it in a
//! [`Validatable`] descriptor. Checks are independent and combined with a
//! logical AND; a constraint declared for the wrong kind of value is skipped
//! rather than treated as a failure.

use derive_more::Display;

/// Minimum length of a project description, in characters.
pub const DESCRIPTION_MIN_LENGTH: usize = 5;
/// Smallest team size accepted for a project.
pub const PEOPLE_MIN: f64 = 1.0;
/// Largest team size accepted for a project.
pub const PEOPLE_MAX: f64 = 5.0;

/// The runtime value of a single form field.
///
/// Numeric fields carry an `f64` so that loosely coerced input (see
/// [`coerce_number`]) flows through the bounds checks unchanged.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum Value {
    Text(String),
    Number(f64),
}

/// The constraints declared for one field, together with its value.
///
/// A descriptor is built for a single [`validate`] call and dropped
/// immediately afterwards. Absent constraints impose nothing.
#[derive(Debug, Clone)]
pub struct Validatable {
    pub value: Value,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    /// A descriptor with no constraints declared.
    pub fn unconstrained(value: Value) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    /// A descriptor whose only constraint is presence.
    pub fn required(value: Value) -> Self {
        Self {
            required: true,
            ..Self::unconstrained(value)
        }
    }
}

/// Checks a value against the constraints declared for it.
///
/// Returns `true` only if every applicable check passes. This never fails:
/// the caller only learns whether the field is acceptable, and decides on
/// its own how to react.
pub fn validate(input: &Validatable) -> bool {
    let mut is_valid = true;

    if input.required {
        // Presence is measured on the value's string form, trimmed. A number
        // always renders non-empty (even NaN), so this check only ever
        // rejects text; out-of-range numeric input is left to the bounds
        // checks below.
        is_valid = is_valid && !input.value.to_string().trim().is_empty();
    }

    if let (Some(min_length), Value::Text(text)) = (input.min_length, &input.value) {
        is_valid = is_valid && text.chars().count() >= min_length;
    }

    if let (Some(max_length), Value::Text(text)) = (input.max_length, &input.value) {
        is_valid = is_valid && text.chars().count() <= max_length;
    }

    if let (Some(min), Value::Number(number)) = (input.min, &input.value) {
        is_valid = is_valid && *number >= min;
    }

    if let (Some(max), Value::Number(number)) = (input.max, &input.value) {
        is_valid = is_valid && *number <= max;
    }

    is_valid
}

/// Coerces a raw numeric form entry to an `f64`, with loose form semantics:
/// surrounding whitespace is ignored, an empty entry counts as zero, and
/// anything unparseable becomes NaN. Both zero and NaN then fail the team
/// size bounds, so neither reaches the board.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}
