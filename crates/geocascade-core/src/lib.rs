//! geocascade-core: provider registry and fallback resolution.

mod error;
pub mod registry;
pub mod report;
pub mod resolver;
pub mod selection;
pub mod types;

pub use error::{FailedAttempt, ResolveError};
pub use registry::ProviderRegistry;
pub use report::{Reporter, ResolveEvent, TracingReporter};
pub use resolver::Resolver;
pub use selection::{Selection, SelectionWarning};
pub use types::GeocodeResult;
