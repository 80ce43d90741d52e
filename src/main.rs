use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use textsheet::config::Config;
use textsheet::logging::init_tracing;
use textsheet::ui::runtime;

/// Edit a line of text in a modal sheet.
#[derive(Debug, Parser)]
#[command(name = "textsheet", version, about)]
struct Cli {
    /// Load configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Initial text shown on the root screen
    #[arg(long, value_name = "TEXT")]
    text: Option<String>,

    /// Event poll and redraw interval in milliseconds
    #[arg(long, value_name = "MS")]
    tick_rate_ms: Option<u64>,

    /// Print the final text to stdout on exit
    #[arg(long)]
    print: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(text) = cli.text {
        config.defaults.text = text;
    }
    if let Some(tick_rate_ms) = cli.tick_rate_ms {
        config.defaults.tick_rate_ms = tick_rate_ms;
    }
    config.validate()?;

    let final_text = runtime::run(&config).context("terminal UI failed")?;
    if cli.print {
        println!("{}", final_text);
    }
    Ok(())
}
