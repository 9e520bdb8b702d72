//! syllog CLI: line-oriented boolean knowledge engine.

use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;

use clap::Parser;
use miette::{IntoDiagnostic, Result};

use syllog::dispatch::Session;

#[derive(Parser)]
#[command(name = "syllog", version, about = "Tiny boolean knowledge engine")]
struct Cli {
    /// Command script to run; reads stdin when omitted.
    script: Option<PathBuf>,

    /// Write a JSON snapshot of the knowledge base here after the input
    /// is exhausted.
    #[arg(long)]
    dump: Option<PathBuf>,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let input: Box<dyn Read> = match &cli.script {
        Some(path) => Box::new(std::fs::File::open(path).into_diagnostic()?),
        None => Box::new(std::io::stdin()),
    };

    let mut session = Session::new();
    for line in BufReader::new(input).lines() {
        let line = line.into_diagnostic()?;
        match session.run_line(&line) {
            Ok(output) => {
                for out in output {
                    println!("{out}");
                }
            }
            // A bad command is reported and skipped; the session survives.
            Err(error) => eprintln!("{:?}", miette::Report::new(error)),
        }
    }

    if let Some(path) = cli.dump {
        let json = session.snapshot_json()?;
        std::fs::write(&path, json).into_diagnostic()?;
        tracing::info!(path = %path.display(), "wrote knowledge-base snapshot");
    }

    Ok(())
}
