//! Side channel for resolution progress.
//!
//! The resolver never prints. It hands every warning and attempt outcome to
//! a [`Reporter`], so the CLI can write them to stderr and tests can record
//! them.

use crate::selection::SelectionWarning;
use geocascade_provider::GeocodeError;
use tracing::{debug, warn};

/// Something that happened while resolving an address.
#[derive(Debug)]
pub enum ResolveEvent<'a> {
    /// The requested provider could not be honored as asked.
    Selection(&'a SelectionWarning),
    /// A provider is about to be invoked.
    Attempting { provider: &'a str },
    /// A provider failed; the next one will be tried.
    AttemptFailed {
        provider: &'a str,
        error: &'a GeocodeError,
    },
    /// A provider returned coordinates. Nothing after it is invoked.
    Resolved { provider: &'a str },
}

/// Receives [`ResolveEvent`]s as they happen.
pub trait Reporter: Send + Sync {
    fn report(&self, event: &ResolveEvent<'_>);
}

/// Logs events through `tracing` only.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, event: &ResolveEvent<'_>) {
        match event {
            ResolveEvent::Selection(warning) => warn!(%warning, "provider selection"),
            ResolveEvent::Attempting { provider } => debug!(provider, "trying provider"),
            ResolveEvent::AttemptFailed { provider, error } => {
                warn!(provider, %error, "provider failed")
            }
            ResolveEvent::Resolved { provider } => debug!(provider, "provider resolved address"),
        }
    }
}
