//! Terminal Bee - CLI
//!
//! Play the seven-letter word puzzle in a TUI, or print the answers for a letter set.

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::{Path, PathBuf};
use terminal_bee::{
    commands::list_answers,
    core::LetterSet,
    dictionary::{WordSource, load_once},
    game::Session,
    interactive::{App, run_tui},
    output::print_answers,
    puzzle::ScorebookBuilder,
};

#[derive(Parser)]
#[command(
    name = "terminal_bee",
    about = "How many words can you make with 7 letters?",
    version,
    author
)]
struct Cli {
    /// The letters to use for the board; the first is the center. Leave blank to generate randomly
    #[arg(long, value_parser = parse_letters)]
    letters: Option<LetterSet>,

    /// Don't run the game, just print the answers for the letters given by --letters
    #[arg(long)]
    answers: bool,

    /// Run with simplified graphics (plain borders, no colour)
    #[arg(long)]
    simplified: bool,

    /// Wordlist: 'url' (default, downloads the word list) or path to a .json or one-word-per-line file
    #[arg(short = 'w', long, default_value = "url")]
    wordlist: String,

    /// Write debug logs to --log-file
    #[arg(long)]
    debug: bool,

    /// Log destination when --debug is set
    #[arg(long, default_value = "debug.log")]
    log_file: PathBuf,
}

fn parse_letters(value: &str) -> Result<LetterSet, String> {
    value.parse().map_err(|e| format!("{e}"))
}

/// Send logs to a file so they never draw over the TUI
fn setup_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    WriteLogger::init(
        LevelFilter::Debug,
        ConfigBuilder::new()
            .set_target_level(LevelFilter::Error)
            .build(),
        file,
    )
    .context("failed to initialise logger")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.answers && cli.letters.is_none() {
        bail!("Answers must include --letters as well.");
    }

    if cli.debug {
        setup_logging(&cli.log_file)?;
    }

    let source = WordSource::from_arg(&cli.wordlist);
    let dictionary = load_once(&source).context("failed to load the word list")?;
    let mut builder = ScorebookBuilder::new(dictionary);

    match cli.letters {
        Some(letters) if cli.answers => {
            let result = list_answers(&letters, &mut builder);
            print_answers(&result);
            Ok(())
        }
        letters => run_play_command(builder, letters, cli.simplified),
    }
}

fn run_play_command(
    builder: ScorebookBuilder<'_>,
    letters: Option<LetterSet>,
    simplified: bool,
) -> Result<()> {
    let session = Session::new(builder, StdRng::from_os_rng(), letters);
    run_tui(App::new(session, simplified))
}
