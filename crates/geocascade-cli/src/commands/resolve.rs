//! Resolve one address and print the result.

use crate::commands::ExitError;
use crate::report::StreamReporter;
use geocascade_core::{ProviderRegistry, ResolveError, Resolver};
use geocascade_provider::CredentialSource;
use tracing::debug;

/// Resolve `address`, trying `provider` first, and print the result as
/// pretty JSON on stdout.
pub async fn run(
    registry: &ProviderRegistry,
    credentials: &dyn CredentialSource,
    provider: &str,
    address: &str,
) -> anyhow::Result<()> {
    let reporter = StreamReporter::stderr();
    let resolver = Resolver::new(registry, credentials, &reporter);

    match resolver.resolve(provider, address).await {
        Ok(result) => {
            println!("{}", result.to_json_pretty()?);
            Ok(())
        }
        Err(err) => {
            let ResolveError::Exhausted { ref attempts } = err;
            debug!(attempts = attempts.len(), "no provider resolved the address");
            Err(anyhow::Error::new(ExitError {
                code: 1,
                message: err.to_string(),
            }))
        }
    }
}
