use std::io;

use clap::Parser;
use cli_dictionary::cli::Args;
use cli_dictionary::io_utils::dictionary_cli_error;
use cli_dictionary::{lookup_word, Config, USAGE};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let Some(word) = args.word.as_deref() else {
        println!("{USAGE}");
        return Ok(());
    };

    if !args.extra.is_empty() {
        tracing::debug!(extra = ?args.extra, "ignoring arguments after the word");
    }
    let config = Config::from(&args);
    let stdout = io::stdout();
    lookup_word(&config, word, &mut stdout.lock()).map_err(dictionary_cli_error)?;
    Ok(())
}
