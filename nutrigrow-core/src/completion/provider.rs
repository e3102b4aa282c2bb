//! Completion capability trait and the always-failing stand-in.

use super::error::CompletionError;

/// Produce free text for a prompt.
///
/// Implementations should apply their own timeout and must not hold locks
/// across the call. Implementations must be `Send + Sync` so one client can
/// serve concurrent requests.
///
/// # Examples
///
/// ```rust
/// use nutrigrow_core::{CompletionError, TextCompletion};
///
/// struct Echo;
///
/// impl TextCompletion for Echo {
///     fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
///         if prompt.is_empty() {
///             return Err(CompletionError::EmptyResponse);
///         }
///         Ok(prompt.to_owned())
///     }
/// }
///
/// assert_eq!(Echo.complete("general")?, "general");
/// # Ok::<(), CompletionError>(())
/// ```
pub trait TextCompletion: Send + Sync {
    /// Return the model's text for `prompt`.
    ///
    /// # Errors
    /// Returns [`CompletionError`] when the backend is unreachable, times
    /// out or answers with something that is not text.
    fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

impl<T: TextCompletion + ?Sized> TextCompletion for Box<T> {
    fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        (**self).complete(prompt)
    }
}

impl<T: TextCompletion + ?Sized> TextCompletion for &T {
    fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        (**self).complete(prompt)
    }
}

/// Completion backend used when no model is configured.
///
/// Every call fails with [`CompletionError::Unavailable`], which drives the
/// assistant onto its deterministic fallbacks.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableCompletion;

impl TextCompletion for UnavailableCompletion {
    fn complete(&self, _prompt: &str) -> Result<String, CompletionError> {
        Err(CompletionError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn unavailable_backend_always_fails() {
        let err = UnavailableCompletion
            .complete("classify this")
            .expect_err("no backend");
        assert_eq!(err, CompletionError::Unavailable);
    }

    #[rstest]
    fn boxed_backend_delegates() {
        let boxed: Box<dyn TextCompletion> = Box::new(UnavailableCompletion);
        assert!(boxed.complete("hello").is_err());
    }
}
