/// TVMaze API response types for deserialization.
///
/// These structures mirror the JSON response format from the TVMaze API.
/// Fields the crate does not use are ignored by serde.
use serde::Deserialize;

/// One entry of the `/search/shows` response.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeSearchResult {
    /// The matching show
    pub show: TvMazeShow,
}

/// A show record nested in a search result.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeShow {
    pub id: u64,
    pub name: String,
    /// Summary in HTML format (may be null)
    pub summary: Option<String>,
    /// Image links, null when the show has no artwork
    pub image: Option<TvMazeImage>,
}

/// Image links of a show.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeImage {
    /// URL of the full resolution image
    pub original: String,
}

/// A single episode from the `/shows/{id}/episodes` response.
#[derive(Debug, Deserialize)]
pub(super) struct TvMazeEpisode {
    pub id: u64,
    /// Episode title (may be null for episodes without a title)
    pub name: Option<String>,
    /// Season number
    pub season: u32,
    /// Episode number within the season
    pub number: u32,
}
