use clap::{ArgAction, Parser, Subcommand};
use dialoguer::{Input, Select};
use show_finder::{
    Config, DEFAULT_BASE_URL, Episode, MISSING_IMAGE_URL, Page, ProgressEvent, Show,
    ShowFinderError, TvMazeCatalog, search_for_shows_and_display, show_episodes_and_display,
};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root of the TVMaze API
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Image shown for shows without artwork
    #[arg(long, global = true, default_value = MISSING_IMAGE_URL)]
    missing_image_url: String,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for shows matching a term
    Search {
        /// Search term (may be empty)
        #[arg(default_value = "")]
        term: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the episodes of a show
    Episodes {
        /// Show id as printed by `search`
        show_id: u64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Alternate searches and episode lookups on one page
    Interactive {
        /// Rewrite this HTML file after every action
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Print results as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Write the rendered page to this HTML file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("show_finder={}", level)))
        .with_writer(io::stderr)
        .init();
}

/// Handles progress events and prints formatted output to stdout
fn handle_progress_event(event: ProgressEvent) {
    match event {
        ProgressEvent::Searching { term } => {
            println!("Searching for shows matching '{}'...", term);
        }
        ProgressEvent::ShowsFound { count } => {
            if count == 0 {
                println!("No shows found.\n");
            } else {
                println!("Found {} show(s)\n", count);
            }
        }
        ProgressEvent::FetchingEpisodes { show_id } => {
            println!("Retrieving episodes for show {}...", show_id);
        }
        ProgressEvent::EpisodesFound { show_id, count } => {
            println!("Found {} episode(s) for show {}\n", count, show_id);
        }
    }
}

fn print_shows(shows: &[Show], missing_image_url: &str) {
    for show in shows {
        println!("[{}] {}", show.id, show.name);
        println!(
            "  Image: {}",
            show.image.as_deref().unwrap_or(missing_image_url)
        );
        let summary = nanohtml2text::html2text(&show.summary);
        let summary = summary.trim();
        if !summary.is_empty() {
            println!("  Summary: {}", summary);
        }
        println!();
    }
}

fn print_episodes(episodes: &[Episode]) {
    for episode in episodes {
        println!(
            "S{:02}E{:02} - {} (id {})",
            episode.season, episode.number, episode.name, episode.id
        );
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), ShowFinderError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

fn write_page(path: &Path, page: &Page) -> Result<(), ShowFinderError> {
    fs::write(path, page.to_html())?;
    debug!(path = %path.display(), "page written");
    Ok(())
}

fn run_search(
    catalog: &TvMazeCatalog,
    page: &mut Page,
    term: &str,
    output: &OutputArgs,
) -> Result<(), ShowFinderError> {
    if output.json {
        let shows = search_for_shows_and_display(catalog, term, page, |_| {})?;
        print_json(&shows)?;
    } else {
        let shows = search_for_shows_and_display(catalog, term, page, handle_progress_event)?;
        print_shows(&shows, &page.missing_image_url);
    }

    if let Some(path) = &output.output {
        write_page(path, page)?;
    }
    Ok(())
}

fn run_episodes(
    catalog: &TvMazeCatalog,
    page: &mut Page,
    show_id: u64,
    output: &OutputArgs,
) -> Result<(), ShowFinderError> {
    if output.json {
        let episodes = show_episodes_and_display(catalog, show_id, page, |_| {})?;
        print_json(&episodes)?;
    } else {
        let episodes = show_episodes_and_display(catalog, show_id, page, handle_progress_event)?;
        print_episodes(&episodes);
    }

    if let Some(path) = &output.output {
        write_page(path, page)?;
    }
    Ok(())
}

/// Prompt loop standing in for the search page
///
/// A failed action is reported and the page keeps its previous contents.
fn run_interactive(
    catalog: &TvMazeCatalog,
    page: &mut Page,
    output: Option<&Path>,
) -> Result<(), ShowFinderError> {
    let actions = ["Search shows", "Show episodes", "Quit"];

    loop {
        let choice = Select::new()
            .with_prompt("What next?")
            .items(&actions)
            .default(0)
            .interact()
            .map_err(io::Error::other)?;

        let result = match choice {
            0 => {
                let term = Input::<String>::new()
                    .with_prompt("Search term")
                    .allow_empty(true)
                    .interact_text()
                    .map_err(io::Error::other)?;
                search_for_shows_and_display(catalog, &term, page, handle_progress_event)
                    .map(|shows| print_shows(&shows, &page.missing_image_url))
            }
            1 => {
                let show_id = Input::<u64>::new()
                    .with_prompt("Show id")
                    .interact_text()
                    .map_err(io::Error::other)?;
                show_episodes_and_display(catalog, show_id, page, handle_progress_event)
                    .map(|episodes| print_episodes(&episodes))
            }
            _ => return Ok(()),
        };

        if let Err(e) = result {
            eprintln!("Error: {}", e);
            continue;
        }

        if let Some(path) = output {
            write_page(path, page)?;
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::default()
        .with_base_url(cli.base_url)
        .with_missing_image_url(cli.missing_image_url);
    debug!(?config, "starting");

    let catalog = TvMazeCatalog::from_config(&config);
    let mut page = Page::new(config.missing_image_url.as_str());

    let result = match &cli.command {
        Command::Search { term, output } => run_search(&catalog, &mut page, term, output),
        Command::Episodes { show_id, output } => {
            run_episodes(&catalog, &mut page, *show_id, output)
        }
        Command::Interactive { output } => {
            run_interactive(&catalog, &mut page, output.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("\nError: {}", e);
        process::exit(1);
    }
}
