//! CLI structure and argument parsing.
//!
//! The interface is deliberately small: a required base domain, a required
//! wordlist, and knobs for the concurrency bound, the per-request timeout,
//! and how outcomes are reported.
//!
//! ```bash
//! subsearch --domain https://example.com/ --wordlist subs.txt
//! subsearch -d example.com -w subs.txt --concurrency 50 --report all
//! subsearch -d example.com -w subs.txt --report json | jq .target
//! ```

use crate::report::ReportMode;
use clap::Parser;
use std::path::PathBuf;

/// Probe candidate subdomains of a base domain over HTTP(S).
#[derive(Parser, Debug)]
#[command(name = "subsearch")]
#[command(version)]
#[command(about = "Discover subdomains by probing a wordlist of candidate labels", long_about = None)]
pub struct Cli {
    /// Base domain or full URL to probe (e.g. https://example.com/)
    #[arg(short = 'd', long)]
    pub domain: String,

    /// Path to a newline-delimited wordlist of candidate labels
    #[arg(short = 'w', long)]
    pub wordlist: PathBuf,

    /// Maximum number of in-flight probes
    #[arg(short = 'c', long, default_value_t = subsearch_core::prober::DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(short = 't', long, value_name = "SECS", default_value_t = subsearch_core::prober::DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// What to print for each completed probe
    #[arg(long, value_enum, default_value_t = ReportMode::Quiet)]
    pub report: ReportMode,

    /// Enable verbose logging output
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Suppress everything but errors on stderr
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn required_arguments_are_enforced() {
        assert!(Cli::try_parse_from(["subsearch"]).is_err());
        assert!(Cli::try_parse_from(["subsearch", "-d", "example.com"]).is_err());
        assert!(Cli::try_parse_from(["subsearch", "-w", "subs.txt"]).is_err());
    }

    #[test]
    fn defaults_are_applied() {
        let cli = Cli::try_parse_from(["subsearch", "-d", "example.com", "-w", "subs.txt"])
            .expect("minimal invocation parses");
        assert_eq!(cli.concurrency, subsearch_core::prober::DEFAULT_CONCURRENCY);
        assert_eq!(cli.timeout, subsearch_core::prober::DEFAULT_TIMEOUT.as_secs());
        assert_eq!(cli.timeout, 5);
        assert_eq!(cli.report, ReportMode::Quiet);
        assert!(!cli.verbose);
    }

    #[test]
    fn long_and_short_flags_agree() {
        let short = Cli::try_parse_from(["subsearch", "-d", "example.com", "-w", "subs.txt"])
            .expect("short flags parse");
        let long = Cli::try_parse_from([
            "subsearch",
            "--domain",
            "example.com",
            "--wordlist",
            "subs.txt",
        ])
        .expect("long flags parse");
        assert_eq!(short.domain, long.domain);
        assert_eq!(short.wordlist, long.wordlist);
    }

    #[test]
    fn report_mode_is_parsed() {
        let cli = Cli::try_parse_from([
            "subsearch",
            "-d",
            "example.com",
            "-w",
            "subs.txt",
            "--report",
            "json",
        ])
        .expect("report flag parses");
        assert_eq!(cli.report, ReportMode::Json);
    }
}
