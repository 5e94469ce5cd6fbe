//! Length check - bounds the password length in characters.

use secrecy::{ExposeSecret, SecretString};

use super::Check;
use crate::failure::{ValidationFailure, ValidationResult};

/// Enforces optional minimum and maximum lengths, counted in code points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthCheck {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

impl LengthCheck {
    pub fn new(min_length: Option<usize>, max_length: Option<usize>) -> Self {
        Self {
            min_length,
            max_length,
        }
    }
}

impl Check for LengthCheck {
    fn name(&self) -> &'static str {
        "length"
    }

    fn help_text(&self) -> String {
        match (self.min_length, self.max_length) {
            (Some(min), Some(max)) => {
                format!("Your password must be between {min} and {max} characters long.")
            }
            (Some(min), None) => format!("Your password must be at least {min} characters long."),
            (None, Some(max)) => format!("Your password must be at most {max} characters long."),
            (None, None) => "Your password may be of any length.".to_string(),
        }
    }

    /// # Returns
    /// - `TooShort` if below the minimum (checked first)
    /// - `TooLong` if above the maximum
    fn check(&self, password: &SecretString) -> ValidationResult {
        let len = password.expose_secret().chars().count();
        let failure = match (self.min_length, self.max_length) {
            (Some(min_length), _) if len < min_length => {
                Some(ValidationFailure::TooShort { min_length })
            }
            (_, Some(max_length)) if len > max_length => {
                Some(ValidationFailure::TooLong { max_length })
            }
            _ => None,
        };
        failure.into()
    }
}
