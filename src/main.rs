//! eggnog2gbk - GenBank builder CLI tool
//!
//! Combines a nucleotide FASTA, a protein FASTA and an eggNOG-mapper
//! annotation table into a GenBank file carrying GO and EC annotations.

use clap::Parser;
use eggnog2gbk::cli::CliArgs;
use eggnog2gbk::logging::{self, Verbosity};
use eggnog2gbk::orchestrator::Orchestrator;
use eggnog2gbk::output::{create_formatter, OutputConfig};
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    args.validate()?;

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        species = %args.species,
        output = %args.output.display(),
        "starting"
    );

    let orchestrator = Orchestrator::new(args.clone())?;
    let summary = orchestrator.run().await?;

    let output_config =
        OutputConfig::from_cli(args.json, args.verbose, args.quiet, args.no_color);
    let formatter = create_formatter(output_config);

    let mut stdout = io::stdout().lock();
    formatter.format(&summary, &mut stdout)?;
    stdout.flush()?;

    if summary.has_warnings() {
        // Output written, but some genes were incomplete
        Ok(ExitCode::from(2))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
