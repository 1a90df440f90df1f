// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (stderr, so JSON on stdout stays clean)
// 3. Run the sweep, racing it against Ctrl-C
// 4. Print results and exit with a proper code:
//      0 = no broken links, 1 = broken links, 2 = error, 130 = interrupted
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use cli::Cli;
use link_sweep::{render_json, render_table, CrawlReport, OutputFormat, Target};

const EXIT_INTERRUPTED: i32 = 130;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    // Dropping the run future on Ctrl-C drops the session and its client
    let exit_code = tokio::select! {
        result = run(&cli) => match result {
            Ok(code) => code,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                2
            }
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nProcess interrupted by user");
            EXIT_INTERRUPTED
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = no broken links
//   Ok(1) = broken links found
//   Err = the run could not start (bad target, client build failure)
async fn run(cli: &Cli) -> Result<i32> {
    let target = Target::parse(&cli.target)?;
    let report = link_sweep::run(&target, cli.checker_config()).await?;

    print_report(&report, cli.format)?;

    Ok(if report.all_ok() { 0 } else { 1 })
}

// Seed failures were already logged as they happened; only the mapping is printed
fn print_report(report: &CrawlReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = render_json(&report.results).context("serializing results")?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            let color = std::io::stdout().is_terminal();
            print!("{}", render_table(&report.results, color));
        }
    }
    Ok(())
}

/// Sets up the tracing subscriber; RUST_LOG wins over the flags when set
fn setup_logging(verbose: u8, quiet: bool) {
    let fallback = if quiet {
        "error"
    } else {
        match verbose {
            0 => "link_sweep=info,warn",
            1 => "link_sweep=debug,info",
            _ => "link_sweep=trace,debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
