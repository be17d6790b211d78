//! Credential lookup.
//!
//! Adapters never read the process environment directly; they receive a
//! [`CredentialSource`] so presence or absence of a key can be controlled
//! in tests.

use std::collections::HashMap;

/// A key-value source of API credentials.
pub trait CredentialSource: Send + Sync {
    /// Look up a credential. Empty values count as absent.
    fn get(&self, var: &str) -> Option<String>;

    /// Whether a non-empty credential is available.
    fn is_set(&self, var: &str) -> bool {
        self.get(var).is_some()
    }
}

/// Reads credentials from the process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvCredentials;

impl CredentialSource for EnvCredentials {
    fn get(&self, var: &str) -> Option<String> {
        std::env::var(var).ok().filter(|value| !value.is_empty())
    }
}

/// Fixed in-memory credentials.
#[derive(Debug, Default, Clone)]
pub struct StaticCredentials {
    values: HashMap<String, String>,
}

impl StaticCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a credential, replacing any previous value.
    pub fn with(mut self, var: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(var.into(), value.into());
        self
    }
}

impl CredentialSource for StaticCredentials {
    fn get(&self, var: &str) -> Option<String> {
        self.values.get(var).filter(|value| !value.is_empty()).cloned()
    }
}
