//! CLI argument definitions.

use clap::Parser;
use geocascade_provider::DEFAULT_PROVIDER;

pub const USAGE: &str = "Usage: geocode --provider <provider> <address>";

#[derive(Debug, Parser)]
#[command(
    name = "geocode",
    version,
    about = "Resolve an address to coordinates, falling back across geocoding providers"
)]
pub struct Cli {
    /// Geocoding provider to try first.
    #[arg(long, env = "GEOCODE_PROVIDER", default_value = DEFAULT_PROVIDER)]
    pub provider: String,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// List known providers in fallback order and exit.
    #[arg(long)]
    pub list_providers: bool,

    /// Address to geocode. Multiple words are joined with single spaces.
    #[arg(value_name = "ADDRESS")]
    pub address: Vec<String>,
}

impl Cli {
    /// The address to resolve, or `None` if no positional words were given.
    pub fn address(&self) -> Option<String> {
        if self.address.is_empty() {
            None
        } else {
            Some(self.address.join(" "))
        }
    }
}
