//! show_finder - Search a tv show catalog and render the results
//!
//! This library looks up shows in the TVMaze catalog, normalizes the results
//! into small display records, and renders them as show cards. Episode lists
//! of a selected show can be fetched and rendered the same way.

mod catalog;
mod config;
mod page;
mod render;

pub use catalog::{CatalogError, Episode, Show, ShowCatalog, TvMazeCatalog};
pub use config::{Config, DEFAULT_BASE_URL, MISSING_IMAGE_URL};
pub use page::Page;
pub use render::{Container, EpisodesArea, populate_episodes, populate_shows};

use std::io;
use thiserror::Error;
use tracing::info;

/// Progress event emitted while a flow runs
///
/// These events allow library users to print status lines or stay silent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    /// Searching the catalog
    Searching { term: String },

    /// Search results were rendered
    ShowsFound { count: usize },

    /// Fetching the episode list of a show
    FetchingEpisodes { show_id: u64 },

    /// Episode list was rendered
    EpisodesFound { show_id: u64, count: usize },
}

/// Top-level error type for show_finder operations
#[derive(Debug, Error)]
pub enum ShowFinderError {
    /// Error during a catalog lookup
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Failed to serialize results as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Searches the catalog and renders the matching shows into the page
///
/// The episodes area is hidden because it belonged to the previous result
/// set. The page is only touched once the lookup succeeded, so a failed
/// search leaves whatever was rendered before.
///
/// # Arguments
///
/// * `catalog` - The catalog to search
/// * `term` - Free-text search term, passed through as-is
/// * `page` - The page to render into
/// * `progress_callback` - Closure called with progress events
///
/// # Returns
///
/// The normalized shows, in the order the catalog returned them
///
/// # Examples
///
/// ```no_run
/// use show_finder::{Page, TvMazeCatalog, MISSING_IMAGE_URL, search_for_shows_and_display};
///
/// let catalog = TvMazeCatalog::new();
/// let mut page = Page::new(MISSING_IMAGE_URL);
/// let shows = search_for_shows_and_display(&catalog, "batman", &mut page, |_| {}).unwrap();
/// assert_eq!(shows.len(), page.shows_list.len());
/// ```
pub fn search_for_shows_and_display<C, F>(
    catalog: &C,
    term: &str,
    page: &mut Page,
    mut progress_callback: F,
) -> Result<Vec<Show>, ShowFinderError>
where
    C: ShowCatalog + ?Sized,
    F: FnMut(ProgressEvent),
{
    progress_callback(ProgressEvent::Searching {
        term: term.to_string(),
    });

    let shows = catalog.search_shows(term)?;
    info!(term, count = shows.len(), "search finished");

    page.search_term = term.to_string();
    populate_shows(
        &shows,
        &mut page.shows_list,
        &mut page.episodes_area,
        &page.missing_image_url,
    );

    progress_callback(ProgressEvent::ShowsFound { count: shows.len() });

    Ok(shows)
}

/// Fetches the episodes of a show and renders them into the episodes area
///
/// On failure the page is left as it was.
///
/// # Arguments
///
/// * `catalog` - The catalog to query
/// * `show_id` - Identifier of the show, usually taken from a rendered card
/// * `page` - The page to render into
/// * `progress_callback` - Closure called with progress events
pub fn show_episodes_and_display<C, F>(
    catalog: &C,
    show_id: u64,
    page: &mut Page,
    mut progress_callback: F,
) -> Result<Vec<Episode>, ShowFinderError>
where
    C: ShowCatalog + ?Sized,
    F: FnMut(ProgressEvent),
{
    progress_callback(ProgressEvent::FetchingEpisodes { show_id });

    let episodes = catalog.episodes_of_show(show_id)?;
    info!(show_id, count = episodes.len(), "episode lookup finished");

    populate_episodes(&episodes, &mut page.episodes_area);

    progress_callback(ProgressEvent::EpisodesFound {
        show_id,
        count: episodes.len(),
    });

    Ok(episodes)
}
