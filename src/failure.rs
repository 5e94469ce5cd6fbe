//! Validation outcomes.
//!
//! Checks never raise: a rejected password is described by a
//! [`ValidationFailure`] value collected into a [`ValidationResult`].

use thiserror::Error;

use crate::policy::ComplexityClass;

/// Fieldless tag for a [`ValidationFailure`], handy for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    TooShort,
    TooLong,
    Complexity,
    TooSimilarToSequence,
    TooSimilarToDictionaryWord,
}

/// One complexity class the password did not satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnmetRequirement {
    pub class: ComplexityClass,
    pub required: usize,
    pub found: usize,
}

impl std::fmt::Display for UnmetRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.required;
        match self.class {
            ComplexityClass::Upper => {
                write!(f, "must contain {n} or more unique uppercase characters")
            }
            ComplexityClass::Lower => {
                write!(f, "must contain {n} or more unique lowercase characters")
            }
            ComplexityClass::Letters => write!(f, "must contain {n} or more unique letters"),
            ComplexityClass::Digits => write!(f, "must contain {n} or more unique digits"),
            ComplexityClass::Punctuation => write!(
                f,
                "must contain {n} or more unique punctuation characters: {}",
                crate::checks::ASCII_PUNCTUATION
            ),
            ComplexityClass::Special => {
                write!(f, "must contain {n} or more unique special characters")
            }
            ComplexityClass::Words => write!(f, "must contain {n} or more unique words"),
        }
    }
}

fn join_unmet(unmet: &[UnmetRequirement]) -> String {
    unmet
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A single rule the password violated.
///
/// The `Display` output is the default English message. Callers that
/// localise messages should key their catalog on [`code`](Self::code) and
/// read the parameters from the variant instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Invalid Length (Must be {min_length} characters or more)")]
    TooShort { min_length: usize },
    #[error("Invalid Length (Must be {max_length} characters or less)")]
    TooLong { max_length: usize },
    #[error("Must be more complex ({})", join_unmet(.unmet))]
    Complexity { unmet: Vec<UnmetRequirement> },
    #[error("Based on a common sequence of characters")]
    TooSimilarToSequence,
    #[error("Based on a dictionary word")]
    TooSimilarToDictionaryWord,
}

impl ValidationFailure {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::TooShort { .. } => FailureKind::TooShort,
            Self::TooLong { .. } => FailureKind::TooLong,
            Self::Complexity { .. } => FailureKind::Complexity,
            Self::TooSimilarToSequence => FailureKind::TooSimilarToSequence,
            Self::TooSimilarToDictionaryWord => FailureKind::TooSimilarToDictionaryWord,
        }
    }

    /// Short machine-readable code: `length`, `complexity`,
    /// `common_sequence` or `dictionary_word`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TooShort { .. } | Self::TooLong { .. } => "length",
            Self::Complexity { .. } => "complexity",
            Self::TooSimilarToSequence => "common_sequence",
            Self::TooSimilarToDictionaryWord => "dictionary_word",
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Outcome of a check or of a whole validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    /// Always holds at least one failure, in the order the checks ran.
    Invalid(Vec<ValidationFailure>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        match self {
            Self::Valid => &[],
            Self::Invalid(failures) => failures,
        }
    }

    /// Converts into a `Result`, yielding the first failure on rejection.
    pub fn into_result(self) -> Result<(), ValidationFailure> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(failures) => match failures.into_iter().next() {
                Some(first) => Err(first),
                None => Ok(()),
            },
        }
    }
}

impl From<Option<ValidationFailure>> for ValidationResult {
    fn from(failure: Option<ValidationFailure>) -> Self {
        match failure {
            Some(failure) => Self::Invalid(vec![failure]),
            None => Self::Valid,
        }
    }
}

impl FromIterator<ValidationFailure> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationFailure>>(iter: I) -> Self {
        let failures: Vec<_> = iter.into_iter().collect();
        if failures.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(failures)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(ValidationFailure::TooShort { min_length: 8 }.code(), "length");
        assert_eq!(ValidationFailure::TooLong { max_length: 8 }.code(), "length");
        assert_eq!(
            ValidationFailure::Complexity { unmet: vec![] }.code(),
            "complexity"
        );
        assert_eq!(ValidationFailure::TooSimilarToSequence.code(), "common_sequence");
        assert_eq!(
            ValidationFailure::TooSimilarToDictionaryWord.code(),
            "dictionary_word"
        );
    }

    #[test]
    fn test_length_messages() {
        assert_eq!(
            ValidationFailure::TooShort { min_length: 8 }.message(),
            "Invalid Length (Must be 8 characters or more)"
        );
        assert_eq!(
            ValidationFailure::TooLong { max_length: 3 }.message(),
            "Invalid Length (Must be 3 characters or less)"
        );
    }

    #[test]
    fn test_complexity_message_joins_every_requirement() {
        let failure = ValidationFailure::Complexity {
            unmet: vec![
                UnmetRequirement { class: ComplexityClass::Upper, required: 1, found: 0 },
                UnmetRequirement { class: ComplexityClass::Digits, required: 2, found: 1 },
            ],
        };
        assert_eq!(
            failure.message(),
            "Must be more complex (must contain 1 or more unique uppercase characters, \
             must contain 2 or more unique digits)"
        );
    }

    #[test]
    fn test_result_helpers() {
        let valid: ValidationResult = None.into();
        assert!(valid.is_valid());
        assert!(valid.failures().is_empty());
        assert_eq!(valid.into_result(), Ok(()));

        let invalid: ValidationResult = vec![
            ValidationFailure::TooSimilarToSequence,
            ValidationFailure::TooSimilarToDictionaryWord,
        ]
        .into_iter()
        .collect();
        assert!(!invalid.is_valid());
        assert_eq!(invalid.failures().len(), 2);
        assert_eq!(invalid.into_result(), Err(ValidationFailure::TooSimilarToSequence));
    }
}
