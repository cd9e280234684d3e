//! CLI entry point - the composition root.
//!
//! Command dispatch routes to handlers, which receive the composed
//! `CliContext`.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use trackdl_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

/// Install the tracing subscriber on stderr.
///
/// `RUST_LOG` wins unless `--verbose` is given; the default level is `warn`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli);
    let ctx = bootstrap(config)?;

    match cli.command {
        Commands::Info { url, json } => handlers::info::execute(&ctx, &url, json).await?,
        Commands::Download { url } => handlers::download::execute(&ctx, &url).await?,
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            let cli_err = err.downcast_ref::<CliError>();
            if let Some(hint) = cli_err.and_then(CliError::retry_hint) {
                eprintln!("{hint}");
            }
            let code = cli_err.map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
