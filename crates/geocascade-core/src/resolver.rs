//! Fallback resolution across providers.

use crate::error::{FailedAttempt, ResolveError};
use crate::registry::ProviderRegistry;
use crate::report::{Reporter, ResolveEvent};
use crate::selection::Selection;
use crate::types::GeocodeResult;
use geocascade_provider::CredentialSource;

/// Tries providers one at a time until one resolves the address.
pub struct Resolver<'a> {
    registry: &'a ProviderRegistry,
    credentials: &'a dyn CredentialSource,
    reporter: &'a dyn Reporter,
}

impl<'a> Resolver<'a> {
    pub fn new(
        registry: &'a ProviderRegistry,
        credentials: &'a dyn CredentialSource,
        reporter: &'a dyn Reporter,
    ) -> Self {
        Self {
            registry,
            credentials,
            reporter,
        }
    }

    /// Resolve `address`, trying `preferred` first when it names a known
    /// provider and the rest in table order after it.
    ///
    /// Provider failures are reported and skipped. Only when every provider
    /// has failed is an error returned.
    pub async fn resolve(
        &self,
        preferred: &str,
        address: &str,
    ) -> Result<GeocodeResult, ResolveError> {
        let selection = Selection::resolve(self.registry, preferred, self.credentials);
        if let Some(ref warning) = selection.warning {
            self.reporter.report(&ResolveEvent::Selection(warning));
        }

        let mut attempts = Vec::new();
        for provider in self.registry.attempt_order(selection.preferred) {
            let name = provider.name();
            self.reporter
                .report(&ResolveEvent::Attempting { provider: name });

            match provider.geocode(address, self.credentials).await {
                Ok(coords) => {
                    self.reporter
                        .report(&ResolveEvent::Resolved { provider: name });
                    return Ok(GeocodeResult {
                        provider: name.to_string(),
                        address: address.to_string(),
                        latitude: coords.latitude,
                        longitude: coords.longitude,
                    });
                }
                Err(error) => {
                    self.reporter.report(&ResolveEvent::AttemptFailed {
                        provider: name,
                        error: &error,
                    });
                    attempts.push(FailedAttempt {
                        provider: name.to_string(),
                        reason: error.to_string(),
                    });
                }
            }
        }

        Err(ResolveError::Exhausted { attempts })
    }
}
