//! ludex CLI
//!
//! Faceted search over a game catalog CSV: an interactive menu by default,
//! plus one-shot `search` and `terms` subcommands for scripting.

mod menu;
mod settings;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use ludex_core::{GameCatalog, SearchQuery};
use ludex_import::{ImportError, LoadProgress, load_records_with_progress};

#[derive(Parser)]
#[command(name = "ludex")]
#[command(about = "Faceted search over a game catalog", long_about = None)]
struct Cli {
    /// Catalog CSV path (defaults to the configured catalog)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a one-shot combined search (every given term must match)
    Search {
        /// Earliest release date (yyyy-mm-dd)
        #[arg(long)]
        from: Option<String>,

        /// Latest release date (yyyy-mm-dd)
        #[arg(long)]
        to: Option<String>,

        /// Exact developer name
        #[arg(long)]
        developer: Option<String>,

        /// Exact publisher name
        #[arg(long)]
        publisher: Option<String>,

        /// Exact genre/tag name
        #[arg(long)]
        genre: Option<String>,

        /// Minimum positive review count
        #[arg(long)]
        min_reviews: Option<String>,

        /// Print the matching names as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show available search terms
    Terms {
        #[command(subcommand)]
        what: TermsAction,
    },

    /// Manage the configured catalog path
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum TermsAction {
    /// Show the earliest and latest release dates
    Dates,

    /// List all developers
    Developers,

    /// List all publishers
    Publishers,

    /// List all genres
    Genres,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the settings file and the resolved catalog path
    Show,

    /// Save a catalog path as the default
    Set { path: PathBuf },

    /// Remove the saved catalog path
    Clear,

    /// Print the settings file path
    Path,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    // Config management works without loading a catalog.
    if let Some(Commands::Config { action }) = &cli.command {
        return run_config(action);
    }

    let data_path = settings::resolve_data_path(cli.data);
    let catalog = match load_catalog(&data_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!(
                "{} Failed to load {}: {}",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                data_path.display(),
                e,
            );
            eprintln!();
            eprintln!("Point ludex at a catalog CSV with --data <path>,");
            eprintln!("or save a default with 'ludex config set <path>'.");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        None => menu::run(&catalog),
        Some(Commands::Search {
            from,
            to,
            developer,
            publisher,
            genre,
            min_reviews,
            json,
        }) => run_search(&catalog, from, to, developer, publisher, genre, min_reviews, json),
        Some(Commands::Terms { what }) => run_terms(&catalog, what),
        Some(Commands::Config { .. }) => {} // handled above
    }

    ExitCode::SUCCESS
}

/// Spinner fed by the import progress callbacks.
struct SpinnerProgress {
    bar: ProgressBar,
}

impl LoadProgress for SpinnerProgress {
    fn on_record(&self, loaded: usize) {
        self.bar.set_message(format!("{loaded} games loaded"));
        self.bar.tick();
    }

    fn on_complete(&self, _total: usize) {
        self.bar.finish_and_clear();
    }
}

/// Read the catalog CSV and build every facet index.
fn load_catalog(path: &Path) -> Result<GameCatalog, ImportError> {
    println!(
        "Loading catalog: {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );

    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("  {spinner:.cyan} {msg}")
            .unwrap()
            .tick_chars("/-\\|"),
    );

    let records = load_records_with_progress(path, &SpinnerProgress { bar })?;
    let catalog = GameCatalog::new(records);

    println!(
        "{} {} games indexed",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        catalog.len(),
    );
    println!();
    Ok(catalog)
}

/// Run the search subcommand.
#[allow(clippy::too_many_arguments)]
fn run_search(
    catalog: &GameCatalog,
    from: Option<String>,
    to: Option<String>,
    developer: Option<String>,
    publisher: Option<String>,
    genre: Option<String>,
    min_reviews: Option<String>,
    json: bool,
) {
    let date_range = match (from, to) {
        (None, None) => None,
        // A missing half of the range falls back to the catalog bound.
        (from, to) => Some((from.unwrap_or_default(), to.unwrap_or_default())),
    };

    let query = SearchQuery {
        date_range,
        developer,
        publisher,
        genre,
        min_reviews,
    };

    if query.is_blank() {
        eprintln!(
            "{}",
            "No search terms given; nothing to match.".if_supports_color(Stdout, |t| t.yellow()),
        );
        return;
    }

    let names = catalog.combine_and_resolve(&query);

    if json {
        println!("{}", serde_json::to_string_pretty(&names).unwrap());
        return;
    }

    if names.is_empty() {
        println!(
            "{}",
            "No games matched every term.".if_supports_color(Stdout, |t| t.dimmed()),
        );
        return;
    }
    for name in &names {
        println!("{name}");
    }
    println!(
        "{} {} games matched",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        names.len(),
    );
}

/// Run the terms subcommand.
fn run_terms(catalog: &GameCatalog, what: TermsAction) {
    match what {
        TermsAction::Dates => match catalog.date_bounds() {
            Some((min, max)) => println!("{min} and {max}"),
            None => println!(
                "{}",
                "No dated games in the catalog.".if_supports_color(Stdout, |t| t.dimmed()),
            ),
        },
        TermsAction::Developers => print_term_list("Developers", catalog.developer_names()),
        TermsAction::Publishers => print_term_list("Publishers", catalog.publisher_names()),
        TermsAction::Genres => print_term_list("Genres", catalog.genre_names()),
    }
}

fn print_term_list(label: &str, names: &[String]) {
    println!(
        "{} ({} items):",
        label.if_supports_color(Stdout, |t| t.bold()),
        names.len(),
    );
    for name in names {
        println!("  {name}");
    }
}

/// Run the config subcommand.
fn run_config(action: &ConfigAction) -> ExitCode {
    match action {
        ConfigAction::Show => {
            let path = settings::settings_path();
            let status = if path.exists() {
                "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
            } else {
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()).to_string()
            };
            println!(
                "Settings file: {} {}",
                path.display().if_supports_color(Stdout, |t| t.cyan()),
                status,
            );
            match settings::load_data_path() {
                Some(data) => println!("Catalog: {}", data.display()),
                None => println!(
                    "Catalog: {} (default)",
                    settings::DEFAULT_DATA_FILE.if_supports_color(Stdout, |t| t.dimmed()),
                ),
            }
            ExitCode::SUCCESS
        }
        ConfigAction::Set { path } => match settings::save_data_path(Some(path)) {
            Ok(file) => {
                println!(
                    "{} Catalog path saved to {}",
                    "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                    file.display(),
                );
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!(
                    "{} Failed to save settings: {}",
                    "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                    e,
                );
                ExitCode::FAILURE
            }
        },
        ConfigAction::Clear => match settings::save_data_path(None) {
            Ok(_) => {
                println!(
                    "{} Saved catalog path removed",
                    "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                );
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!(
                    "{} Failed to update settings: {}",
                    "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                    e,
                );
                ExitCode::FAILURE
            }
        },
        ConfigAction::Path => {
            println!("{}", settings::settings_path().display());
            ExitCode::SUCCESS
        }
    }
}
