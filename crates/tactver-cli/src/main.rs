//! CLI entry point - the composition root.
//!
//! Parses arguments, bootstraps the client and dispatches to a handler.
//! Every failure is reported as `error[<kind>]: <message>` on stderr with a
//! kind-specific exit code.

use std::process::ExitCode;

use clap::Parser;

use tactver_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers, init_logging};

#[tokio::main]
async fn main() -> ExitCode {
    // Optional overrides such as TACTVER_BASE_URL or RUST_LOG
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error[{}]: {err}", err.kind_label());
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = CliConfig::from_cli(&cli);
    let ctx = bootstrap(&config)?;
    let mut stdout = std::io::stdout();

    match cli.command {
        Commands::Versions {
            product,
            region,
            format,
        } => handlers::versions::execute(&ctx, &product, &region, format, &mut stdout).await,
        Commands::Snapshot { products } => {
            handlers::snapshot::execute(&ctx, &products, &mut stdout).await
        }
    }
}
