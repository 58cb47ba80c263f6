//! Field validation rules for the property form.
//!
//! DESIGN
//! ======
//! Rules are pure functions of `(field, raw value)` so the form state can run
//! them on blur and on submit without touching any rendering layer.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::fmt;

pub const ADDRESS_MIN_CHARS: usize = 5;
pub const ADDRESS_MAX_CHARS: usize = 255;
pub const PRICE_MAX: f64 = 999_999_999.0;
pub const SIZE_MAX: f64 = 999_999.0;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// Editable fields of the property form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Address,
    Price,
    Size,
    Description,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 4] = [Field::Address, Field::Price, Field::Size, Field::Description];

    /// Fields that gate submission.
    pub const REQUIRED: [Field; 3] = [Field::Address, Field::Price, Field::Size];

    /// Stable identifier used for input `id`/`name` attributes.
    pub fn key(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Price => "price",
            Self::Size => "size",
            Self::Description => "description",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Self::Description)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single rule violation. `Display` is the message shown under the field.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("The {field} must be at least {min} characters")]
    TooShort { field: Field, min: usize },
    #[error("The {field} cannot exceed {max} characters")]
    TooLong { field: Field, max: usize },
    #[error("The {field} must be a number greater than 0")]
    NotPositive { field: Field },
    #[error("The {field} is too high")]
    TooHigh { field: Field },
}

/// Validate one field value.
///
/// The value is trimmed first. Empty required fields fail with
/// [`FieldError::Required`] before any type-specific rule runs; an empty
/// optional field is always valid.
///
/// # Errors
///
/// Returns the first rule the value violates.
pub fn validate_field(field: Field, raw: &str) -> Result<(), FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return if field.is_required() { Err(FieldError::Required) } else { Ok(()) };
    }

    match field {
        Field::Address => {
            let len = value.chars().count();
            if len < ADDRESS_MIN_CHARS {
                Err(FieldError::TooShort { field, min: ADDRESS_MIN_CHARS })
            } else if len > ADDRESS_MAX_CHARS {
                Err(FieldError::TooLong { field, max: ADDRESS_MAX_CHARS })
            } else {
                Ok(())
            }
        }
        Field::Price => check_amount(field, value, PRICE_MAX),
        Field::Size => check_amount(field, value, SIZE_MAX),
        Field::Description => {
            if value.chars().count() > DESCRIPTION_MAX_CHARS {
                Err(FieldError::TooLong { field, max: DESCRIPTION_MAX_CHARS })
            } else {
                Ok(())
            }
        }
    }
}

fn check_amount(field: Field, value: &str, max: f64) -> Result<(), FieldError> {
    match parse_amount(value) {
        Some(n) if n > 0.0 && n <= max => Ok(()),
        Some(n) if n > max => Err(FieldError::TooHigh { field }),
        _ => Err(FieldError::NotPositive { field }),
    }
}

/// Parse a numeric form value. Blank, non-numeric and non-finite input yield `None`.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}
