// src/main.rs
use anyhow::Result;
use clap::Parser;
use notepad::cli::args::Args;
use notepad::ports::TerminalPresenter;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) -> Result<()> {
    let filter = match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("notepad={}", filter).parse()?),
        )
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("Error: Failed to set up logging: {e}");
        return ExitCode::FAILURE;
    }

    match notepad::run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", TerminalPresenter::plain().render_error(&format!("{e:#}")));
            ExitCode::FAILURE
        }
    }
}
