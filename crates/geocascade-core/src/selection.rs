//! Preferred-provider selection.

use crate::registry::ProviderRegistry;
use geocascade_provider::CredentialSource;
use std::fmt;

/// Non-fatal problem with the requested provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionWarning {
    /// The name matches no registered provider.
    UnknownProvider { requested: String },
    /// The provider exists but its credential is not set. It is still tried
    /// first and will fail on its own.
    MissingCredential { provider: String, var: String },
}

impl fmt::Display for SelectionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownProvider { requested } => write!(
                f,
                "provider '{requested}' not recognized. Falling back to available providers."
            ),
            Self::MissingCredential { provider, var } => write!(
                f,
                "API key for provider '{provider}' not set in environment variable {var}. \
                 Falling back to other providers."
            ),
        }
    }
}

/// Outcome of matching the requested name against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Table index of the preferred provider, if the name matched.
    pub preferred: Option<usize>,
    pub warning: Option<SelectionWarning>,
}

impl Selection {
    /// Match `requested` against the registry (exact, case-sensitive) and
    /// check the credential of the matched provider.
    pub fn resolve(
        registry: &ProviderRegistry,
        requested: &str,
        credentials: &dyn CredentialSource,
    ) -> Self {
        let Some(index) = registry.position(requested) else {
            return Self {
                preferred: None,
                warning: Some(SelectionWarning::UnknownProvider {
                    requested: requested.to_string(),
                }),
            };
        };

        let warning = registry
            .get(requested)
            .and_then(|provider| provider.credential_var())
            .filter(|var| !credentials.is_set(var))
            .map(|var| SelectionWarning::MissingCredential {
                provider: requested.to_string(),
                var: var.to_string(),
            });

        Self {
            preferred: Some(index),
            warning,
        }
    }
}
