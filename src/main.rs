//! `travel-tour-web` binary: serves the site or writes generated artifacts.

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use travel_tour_web::{
    cli::{Cli, Commands},
    commands,
    config::Config,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::from_env();
    tracing::debug!(?config, "configuration loaded");

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
        Commands::Generate(args) => commands::generate::execute(args).await,
    };

    if let Err(err) = result {
        tracing::error!(error = %err, "command failed");
        std::process::exit(1);
    }
}

/// `--verbose` forces debug output; otherwise `RUST_LOG` decides, then `info`
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
