//! Password policy validation library
//!
//! This library rejects weak passwords before they are accepted: length
//! bounds, per-class complexity requirements, and fuzzy similarity to common
//! keyboard sequences and dictionary words.
//!
//! # Features
//!
//! - `async` (default): Enables cancellable validation and channel delivery
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_policy::{ComplexityClass, ComplexityRequirements, Policy, Validator};
//! use secrecy::SecretString;
//!
//! let policy = Policy::default()
//!     .with_min_length(Some(8))
//!     .with_dictionary_source("/usr/share/dict/words")
//!     .with_complexity(ComplexityRequirements::new().with(ComplexityClass::Digits, 1));
//!
//! // Build once at startup; the dictionary is read here.
//! let validator = Validator::new(&policy).expect("Failed to load dictionary");
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let result = validator.validate(&password);
//!
//! for failure in result.failures() {
//!     println!("{}: {}", failure.code(), failure);
//! }
//! ```

// Internal modules
mod dictionary;
mod failure;
mod policy;
mod validator;

pub mod checks;

// Public API
pub use dictionary::{DictionaryError, load_words};
pub use failure::{FailureKind, UnmetRequirement, ValidationFailure, ValidationResult};
pub use policy::{
    ComplexityClass, ComplexityRequirements, DEFAULT_COMMON_SEQUENCES, DEFAULT_MIN_LENGTH,
    DEFAULT_SIMILARITY_THRESHOLD, Policy, PolicyError,
};
pub use validator::Validator;

#[cfg(feature = "async")]
pub use validator::validate_password_tx;
