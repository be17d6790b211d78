//! geocode — resolve an address to coordinates with provider fallback.

mod cli;
mod commands;
mod report;

use clap::Parser;
use cli::{Cli, USAGE};
use geocascade_core::ProviderRegistry;
use geocascade_provider::EnvCredentials;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging. Stdout is reserved for the JSON result.
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("geocode=debug,geocascade_core=debug,geocascade_provider=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let registry = ProviderRegistry::builtin();
    let credentials = EnvCredentials;

    if cli.list_providers {
        commands::list::run(&registry, &credentials);
        return Ok(());
    }

    let Some(address) = cli.address() else {
        eprintln!("{USAGE}");
        std::process::exit(1);
    };

    if let Err(err) = commands::resolve::run(&registry, &credentials, &cli.provider, &address).await
    {
        if let Some(exit_err) = err.downcast_ref::<commands::ExitError>() {
            eprintln!("{}", exit_err.message);
            std::process::exit(exit_err.code);
        }
        return Err(err);
    }

    Ok(())
}
