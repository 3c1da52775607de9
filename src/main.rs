//! DexGrid CLI
//!
//! Command-line interface for the DexGrid Pokédex browser.
//! Provides one-shot fetch/search/export commands and the interactive
//! terminal grid.

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use dexgrid::api::DEFAULT_BASE_URL;
use dexgrid::{cards_to_csv, filter_cards, generation_label, LoadConfig, PokedexLoader, PokemonCard};
use indicatif::ProgressBar;
use std::io::Write;
use std::time::{Duration, Instant};

/// DexGrid - Searchable Pokédex card grid
///
/// Fetches one page of Pokémon from PokéAPI, enriches every entry with a
/// concurrent detail request, and shows the cards in a filterable grid.
#[derive(Parser)]
#[command(name = "dexgrid")]
#[command(author = "DexGrid Contributors")]
#[command(version)]
#[command(about = "Searchable Pokédex card grid for the terminal", long_about = None)]
struct Cli {
    /// Page size requested from the collection endpoint
    #[arg(long, global = true, default_value = "20")]
    limit: usize,

    /// Collection API base URL
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the cards interactively (default)
    Browse,

    /// Fetch the cards once and print them
    List {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        output: String,
    },

    /// Fetch the cards once and print those matching a query
    Search {
        /// Query (case-insensitive substring of the name)
        #[arg(allow_hyphen_values = true)]
        query: String,
    },

    /// Fetch the cards once and write them to a file
    Export {
        /// Output file path
        #[arg(short, long)]
        output: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Json,
    Csv,
}

fn main() {
    let cli = Cli::parse();

    let config = LoadConfig {
        limit: cli.limit,
        base_url: cli.base_url.trim_end_matches('/').to_string(),
    };

    let command = cli.command.unwrap_or(Commands::Browse);

    // The TUI owns the terminal, so its log lines go to a file; one-shot
    // commands log to stderr. The guard must outlive the session.
    let _log_guard = match command {
        Commands::Browse => dexgrid::logging::init_file(),
        _ => {
            dexgrid::logging::init_stderr();
            None
        }
    };

    let result = match command {
        Commands::Browse => dexgrid::tui::run(config),
        Commands::List { output } => cmd_list(config, &output),
        Commands::Search { query } => cmd_search(config, &query),
        Commands::Export { output, format } => cmd_export(config, &output, format),
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

/// Fetch one page of cards, with a spinner on the terminal
fn fetch_cards(config: LoadConfig) -> dexgrid::Result<Vec<PokemonCard>> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Fetching Pokémon...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let loader = PokedexLoader::new().with_config(config);
    let result = loader.load_blocking();
    spinner.finish_and_clear();
    result
}

/// List command implementation
fn cmd_list(config: LoadConfig, output_format: &str) -> dexgrid::Result<()> {
    let start = Instant::now();
    let limit = config.limit;
    let cards = fetch_cards(config)?;

    if output_format == "json" {
        println!("{}", serde_json::to_string_pretty(&cards)?);
        return Ok(());
    }

    println!(
        "{} Fetched {} Pokémon in {:.2}s",
        style("\u{2713}").green().bold(),
        style(cards.len()).yellow(),
        start.elapsed().as_secs_f64()
    );
    if cards.len() == limit {
        println!("  (first page only, limit {})", limit);
    }
    println!();

    print_cards(&cards);
    Ok(())
}

/// Search command implementation
fn cmd_search(config: LoadConfig, query: &str) -> dexgrid::Result<()> {
    println!(
        "{} Searching for '{}':",
        style("\u{2192}").cyan().bold(),
        style(query).yellow()
    );

    let cards = fetch_cards(config)?;
    let visible = filter_cards(&cards, query);

    println!();
    if visible.is_empty() {
        println!("  {}", style("No Pokémon found!").red().bold());
        return Ok(());
    }

    println!("Found {} of {}:", style(visible.len()).green(), cards.len());
    println!();
    print_cards(&visible);
    Ok(())
}

fn print_cards(cards: &[PokemonCard]) {
    for (i, card) in cards.iter().enumerate() {
        let sprite = match &card.image_url {
            Some(url) => style(url.as_str()).dim(),
            None => style("(no sprite)").dim(),
        };
        println!(
            "  {} {} {:12} {}",
            style(format!("{:3}.", i + 1)).dim(),
            style(format!("#{:04} {}", card.id, card.display_name())).cyan(),
            generation_label(card.id),
            sprite
        );
    }
}

/// Export command implementation
fn cmd_export(config: LoadConfig, output: &str, format: ExportFormat) -> dexgrid::Result<()> {
    println!(
        "{} Exporting cards to {}",
        style("\u{2192}").cyan().bold(),
        style(output).yellow()
    );

    let cards = fetch_cards(config)?;
    let mut file = std::fs::File::create(output)?;

    match format {
        ExportFormat::Csv => {
            file.write_all(cards_to_csv(&cards).as_bytes())?;
        }
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut file, &cards)?;
            writeln!(file)?;
        }
    }

    println!(
        "{} Exported {} cards to {}",
        style("\u{2713}").green().bold(),
        cards.len(),
        output
    );

    Ok(())
}
