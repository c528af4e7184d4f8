use anyhow::anyhow;
use clap::Parser;
use pscanner::cli::{self, Args};
use pscanner::output;
use pscanner::scanner::cancel_pair;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let (handle, signal) = cancel_pair();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            debug!("interrupt received, cancelling scan");
            handle.cancel();
        }
    });

    if let Err(e) = cli::execute(&args, signal).await {
        output::print_error(&e.to_string());
        if let Some(hint) = cli::error_hint(&e) {
            eprintln!("{hint}");
        }
        std::process::exit(e.exit_code());
    }

    Ok(())
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
