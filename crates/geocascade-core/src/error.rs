//! Error types for the geocascade-core crate.

/// One provider attempt that did not produce coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedAttempt {
    pub provider: String,
    pub reason: String,
}

/// Errors returned by [`crate::Resolver::resolve`].
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Every provider in the attempt sequence failed.
    #[error("All providers failed")]
    Exhausted { attempts: Vec<FailedAttempt> },
}
