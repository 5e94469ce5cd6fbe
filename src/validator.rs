//! Validator engine - runs the checks of a policy in order.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::checks::{Check, CommonSequenceCheck, ComplexityCheck, DictionaryCheck, LengthCheck};
use crate::dictionary::DictionaryError;
use crate::failure::ValidationResult;
use crate::policy::Policy;

/// An ordered pipeline of checks.
///
/// Immutable once built: share it behind an `Arc` (or a plain reference) and
/// call it from as many threads as needed.
pub struct Validator {
    checks: Vec<Box<dyn Check>>,
}

impl Validator {
    /// Builds the standard pipeline for `policy`: length, common sequences,
    /// dictionary words, complexity.
    ///
    /// # Errors
    ///
    /// Returns error if the policy names a dictionary file that cannot be
    /// loaded.
    pub fn new(policy: &Policy) -> Result<Self, DictionaryError> {
        let mut checks: Vec<Box<dyn Check>> = vec![
            Box::new(LengthCheck::new(policy.min_length, policy.max_length)),
            Box::new(CommonSequenceCheck::from_policy(policy)),
            Box::new(DictionaryCheck::from_policy(policy)?),
        ];
        if let Some(requirements) = &policy.complexity {
            checks.push(Box::new(ComplexityCheck::new(requirements.clone())));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Validator built with {} checks", checks.len());

        Ok(Self { checks })
    }

    /// Builds a pipeline from arbitrary checks, run in the given order.
    pub fn from_checks(checks: Vec<Box<dyn Check>>) -> Self {
        Self { checks }
    }

    pub fn checks(&self) -> impl Iterator<Item = &dyn Check> {
        self.checks.iter().map(|c| c.as_ref())
    }

    /// One line per check describing its rule.
    pub fn help_texts(&self) -> Vec<String> {
        self.checks.iter().map(|c| c.help_text()).collect()
    }

    /// Validates a password, stopping at the first failing check.
    ///
    /// # Returns
    /// `Valid`, or `Invalid` holding the failure of the first check that
    /// rejected the password.
    pub fn validate(&self, password: &SecretString) -> ValidationResult {
        for check in &self.checks {
            let result = check.check(password);
            if !result.is_valid() {
                #[cfg(feature = "tracing")]
                tracing::debug!("Password rejected by check: {}", check.name());
                return result;
            }
        }
        ValidationResult::Valid
    }

    /// Validates a password against every check and collects all failures.
    pub fn validate_all(&self, password: &SecretString) -> ValidationResult {
        self.checks
            .iter()
            .flat_map(|check| match check.check(password) {
                ValidationResult::Valid => Vec::new(),
                ValidationResult::Invalid(failures) => failures,
            })
            .collect()
    }

    /// Like [`validate`](Self::validate), checking `token` before each check.
    ///
    /// Returns `None` if cancelled.
    #[cfg(feature = "async")]
    pub fn validate_cancellable(
        &self,
        password: &SecretString,
        token: &CancellationToken,
    ) -> Option<ValidationResult> {
        for check in &self.checks {
            if token.is_cancelled() {
                #[cfg(feature = "tracing")]
                tracing::debug!("Validation cancelled before check: {}", check.name());
                return None;
            }
            let result = check.check(password);
            if !result.is_valid() {
                return Some(result);
            }
        }
        Some(ValidationResult::Valid)
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("checks", &self.checks.iter().map(|c| c.name()).collect::<Vec<_>>())
            .finish()
    }
}

/// Validates a password and sends the result via channel.
///
/// Waits `debounce` first so a UI validating as the user types can cancel
/// stale runs. Nothing is sent if `token` is cancelled.
#[cfg(feature = "async")]
pub async fn validate_password_tx(
    validator: &Validator,
    password: &SecretString,
    debounce: std::time::Duration,
    token: CancellationToken,
    tx: mpsc::Sender<ValidationResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("validation is about to start...");

    if !debounce.is_zero() {
        tokio::time::sleep(debounce).await;
    }

    let Some(result) = validator.validate_cancellable(password, &token) else {
        return;
    };

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
