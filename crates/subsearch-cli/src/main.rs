//! subsearch - discover subdomains by probing a wordlist of candidate labels.
//!
//! This is the entry point for the `subsearch` binary: argument parsing,
//! logging setup, Ctrl-C wiring, and exit codes. The probing itself lives in
//! `subsearch-core`.

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use std::time::Duration;
use subsearch_core::{Prober, ProberConfig, TargetBuilder, wordlist};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

mod cli;
mod logging;
mod report;

use cli::Cli;
use report::Reporter;

#[tokio::main]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit();
            }
            // Missing or malformed arguments exit 1, not clap's default 2.
            let _ = err.print();
            std::process::exit(1);
        },
    };

    if let Err(err) = run(cli).await {
        eprintln!("subsearch: {err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    logging::initialize(&cli)?;

    let targets = TargetBuilder::new(&cli.domain)?;
    let prober = Prober::new(ProberConfig {
        concurrency: cli.concurrency,
        timeout: Duration::from_secs(cli.timeout),
    })?;

    let candidates = wordlist::stream_labels(&cli.wordlist)
        .await
        .with_context(|| format!("cannot read wordlist '{}'", cli.wordlist.display()))?;

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("interrupt received, draining in-flight probes");
                cancel.cancel();
            }
        });
    }

    let reporter = Reporter::new(cli.report);
    let run = prober
        .run(&targets, candidates, cancel, |outcome| {
            reporter.emit(outcome);
        })
        .await;

    info!(
        probed = run.probed,
        valid = run.valid,
        unreachable = run.unreachable,
        cancelled = run.cancelled,
        "probe run complete"
    );

    Ok(())
}
