//! User-facing progress lines.

use geocascade_core::{Reporter, ResolveEvent};
use std::io::Write;
use std::sync::Mutex;
use tracing::debug;

/// Writes warnings and per-provider failures to a stream (stderr in the
/// binary). Attempt/success events go to the debug log only.
pub struct StreamReporter<W: Write + Send> {
    out: Mutex<W>,
}

impl StreamReporter<std::io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(std::io::stderr())
    }
}

impl<W: Write + Send> StreamReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    fn line(&self, text: std::fmt::Arguments<'_>) {
        if let Ok(mut out) = self.out.lock() {
            // Nothing sensible to do if stderr is gone.
            let _ = writeln!(out, "{text}");
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<W: Write + Send> Reporter for StreamReporter<W> {
    fn report(&self, event: &ResolveEvent<'_>) {
        match event {
            ResolveEvent::Selection(warning) => self.line(format_args!("Warning: {warning}")),
            ResolveEvent::AttemptFailed { provider, error } => {
                self.line(format_args!("Provider {provider} failed: {error}"))
            }
            ResolveEvent::Attempting { provider } => debug!(provider, "trying provider"),
            ResolveEvent::Resolved { provider } => debug!(provider, "provider resolved address"),
        }
    }
}
