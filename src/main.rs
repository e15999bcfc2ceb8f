use clap::Parser;
use quizdeck::Deck;
use quizdeck::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "quizdeck", about = "Flashcard quiz for the terminal")]
struct Args {
    /// Deck file (JSON: category -> [{question, answer}])
    #[arg(short, long)]
    deck: Option<PathBuf>,

    /// Start straight into this category
    #[arg(short, long)]
    category: Option<String>,

    /// Print the deck's categories and exit
    #[arg(long)]
    list: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config problems are not fatal: fall back to defaults.
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::QuizConfig::default(), Some(e)),
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            deck_path: args.deck,
            category: args.category,
        },
    );

    // Initialize file logger
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("{}; using defaults", e);
    }
    log::info!("quizdeck starting with deck {}", resolved.deck_path.display());

    let deck = match Deck::load(&resolved.deck_path) {
        Ok(deck) => deck,
        Err(e) => {
            log::error!("Failed to load deck {}: {}", resolved.deck_path.display(), e);
            eprintln!(
                "quizdeck: cannot load deck {}: {e}",
                resolved.deck_path.display()
            );
            return ExitCode::FAILURE;
        }
    };

    if args.list {
        for category in deck.categories() {
            println!("{} ({} cards)", category.name, category.cards.len());
        }
        return ExitCode::SUCCESS;
    }

    if let Some(category) = &resolved.category
        && deck.cards(category).is_none()
    {
        eprintln!("quizdeck: no category named {category:?} in the deck");
        return ExitCode::FAILURE;
    }

    match quizdeck::tui::run(&resolved, deck) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal error: {}", e);
            eprintln!("quizdeck: {e}");
            ExitCode::FAILURE
        }
    }
}
