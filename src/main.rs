//! Wordy - CLI
//!
//! Play Wordy from the terminal. Each command acts on one user's record in a
//! JSON user database.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordy::{
    commands::{
        execute, handle_colorblind, handle_guess, handle_help, handle_show, handle_stats,
        handle_surrender, parse_line,
    },
    game::{SeededPicker, SessionManager, UserId},
    output::print_reply,
    stats::TracingReporter,
    store::{JsonStore, SessionStore},
    wordlists::{Dictionary, LANGUAGES, WordSource, language, language_for_command},
};

#[derive(Parser)]
#[command(
    name = "wordy",
    about = "Wordle-like word game in several languages",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding <lang>/solution_words.txt and <lang>/accepted_words.txt
    #[arg(short, long, global = true, env = "WORDY_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// JSON user database
    #[arg(short, long, global = true, env = "WORDY_STORE", default_value = "wordy.json")]
    store: PathBuf,

    /// Player id
    #[arg(short, long, global = true, env = "WORDY_USER", default_value = "0")]
    user: UserId,

    /// Language code or command name (en, fr, moty, ...)
    #[arg(short, long, global = true, default_value = "en")]
    lang: String,

    /// Seed answer selection for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Play,

    /// Submit one guess, starting a game if needed
    Guess {
        /// The word to guess
        word: String,
    },

    /// Give up and reveal the word
    Surrender,

    /// Show the current board
    Show,

    /// Show lifetime stats
    Stats,

    /// How to play
    Help,

    /// Switch the colorblind palette
    Colorblind {
        #[arg(value_enum)]
        mode: Toggle,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Toggle {
    On,
    Off,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let lang = resolve_language(&cli.lang)?;

    // Help needs no word lists or database
    if matches!(cli.command, Some(Commands::Help)) {
        print_reply(&handle_help(LANGUAGES));
        return Ok(());
    }

    let words = Dictionary::load_available(&cli.data_dir)
        .with_context(|| format!("Failed to load word lists from {}", cli.data_dir.display()))?;
    if words.solution_words(lang).is_none() {
        bail!(
            "No word lists for '{lang}' under {} (expected {lang}/solution_words.txt)",
            cli.data_dir.display()
        );
    }

    let store = JsonStore::open(&cli.store)
        .with_context(|| format!("Failed to open user database {}", cli.store.display()))?;

    let mut sessions = SessionManager::new(store, words).with_reporter(TracingReporter);
    if let Some(seed) = cli.seed {
        sessions = sessions.with_picker(SeededPicker::new(seed));
    }

    let user = cli.user;
    let reply = match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => return run_play(&sessions, user, lang),
        Commands::Guess { word } => handle_guess(&sessions, user, lang, &word),
        Commands::Surrender => handle_surrender(&sessions, user),
        Commands::Show => handle_show(&sessions, user),
        Commands::Stats => handle_stats(&sessions, user),
        Commands::Help => handle_help(LANGUAGES),
        Commands::Colorblind { mode } => {
            handle_colorblind(&sessions, user, matches!(mode, Toggle::On))
        }
    };

    print_reply(&reply);
    flush(&sessions)
}

fn flush(sessions: &SessionManager<JsonStore, Dictionary>) -> Result<()> {
    let store = sessions.store();
    store
        .flush()
        .with_context(|| format!("Failed to save user database {}", store.path().display()))
}

/// Accept either a language code or its chat command
fn resolve_language(name: &str) -> Result<&'static str> {
    language(name)
        .or_else(|| language_for_command(name))
        .map(|lang| lang.code)
        .with_context(|| {
            let codes: Vec<&str> = LANGUAGES.iter().map(|lang| lang.code).collect();
            format!("Unknown language '{name}', expected one of {}", codes.join(", "))
        })
}

fn run_play(
    sessions: &SessionManager<JsonStore, Dictionary>,
    user: UserId,
    lang: &str,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                      Wordy - Interactive                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Type a word to guess in '{lang}', or a command:");
    println!("  /surrender  /show  /stats  /help  /colorblind on|off  /quit\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Guess: ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = parse_line(&line, lang);
        let Some(reply) = execute(sessions, user, command) else {
            break;
        };
        print_reply(&reply);
        flush(sessions)?;
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}
