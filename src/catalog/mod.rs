/// Data structures and traits for tv show catalog lookups.
///
/// This module provides the normalized show and episode records the rest of
/// the crate renders, as well as the trait catalog backends implement.
mod tvmaze;
mod tvmaze_types;

pub use tvmaze::TvMazeCatalog;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during catalog lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a response (connection, DNS, TLS, ...)
    #[error("Request failed: {0}")]
    Request(String),

    /// The catalog answered with a non-success status
    #[error("Catalog returned HTTP {status} {reason}")]
    Status { status: u16, reason: String },

    /// The response body did not have the expected shape
    #[error("Failed to decode API response: {0}")]
    Decode(String),
}

/// A show as returned by a search, reduced to what a show card displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Show {
    /// Identifier assigned by the catalog
    pub id: u64,
    /// Display name
    pub name: String,
    /// Summary as delivered by the catalog, markup included
    pub summary: String,
    /// URL of the original-resolution image, if the catalog has one
    pub image: Option<String>,
}

/// A single episode of a show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Episode {
    /// Identifier assigned by the catalog
    pub id: u64,
    /// The episode title
    pub name: String,
    /// The season number this episode belongs to
    pub season: u32,
    /// The episode number within the season
    pub number: u32,
}

/// Trait for catalogs that can search shows and list their episodes.
///
/// Both lookups return fresh batches in the order the catalog delivered them.
/// Nothing is cached, retried or re-sorted.
pub trait ShowCatalog {
    /// Searches the catalog for shows matching a free-text term.
    ///
    /// # Arguments
    ///
    /// * `term` - The search term, passed through unvalidated (may be empty)
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, CatalogError>;

    /// Fetches the episode list of a show.
    ///
    /// # Arguments
    ///
    /// * `show_id` - Identifier of a show, usually taken from a search result
    fn episodes_of_show(&self, show_id: u64) -> Result<Vec<Episode>, CatalogError>;
}
