//! In-memory page holding the search form state and the display containers

use crate::render::{Container, EpisodesArea};
use html_escape::encode_double_quoted_attribute;

/// The document the flows render into
///
/// Mirrors the layout of the search page: a search form, the list of show
/// cards, and an episodes area that stays hidden until episodes are requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Last submitted search term
    pub search_term: String,
    /// Show cards
    pub shows_list: Container,
    /// Episodes of the selected show
    pub episodes_area: EpisodesArea,
    /// Image used for shows without artwork
    pub missing_image_url: String,
}

impl Page {
    /// Creates an empty page with no shows and a hidden episodes area
    pub fn new(missing_image_url: impl Into<String>) -> Self {
        Self {
            search_term: String::new(),
            shows_list: Container::new("showsList"),
            episodes_area: EpisodesArea::new("episodesList"),
            missing_image_url: missing_image_url.into(),
        }
    }

    /// Serializes the whole page as a standalone HTML document
    pub fn to_html(&self) -> String {
        let episodes_style = if self.episodes_area.is_hidden() {
            r#" style="display: none""#
        } else {
            ""
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>TV Show Search</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
</head>
<body class="bg-dark text-light">
<main class="container">
<h1>TV Show Search</h1>
<form id="searchForm" class="d-flex mb-4">
  <input id="searchForm-term" class="form-control me-2" placeholder="Show title" value="{term}">
  <button class="btn btn-primary">Go!</button>
</form>
{shows}
<section id="episodesArea"{episodes_style}>
<h2>Episodes</h2>
{episodes}
</section>
</main>
</body>
</html>
"#,
            term = encode_double_quoted_attribute(&self.search_term),
            shows = self.shows_list.to_html("div", r#"class="row""#),
            episodes_style = episodes_style,
            episodes = self.episodes_area.list().to_html("ul", ""),
        )
    }
}
