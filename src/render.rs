//! Markup rendering for shows and episodes
//!
//! Render steps never touch global state: the containers they write into are
//! passed in explicitly. Every render is a full rebuild of its container.

use crate::catalog::{Episode, Show};
use html_escape::{encode_double_quoted_attribute, encode_text};

/// An element whose children are rendered HTML fragments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    id: String,
    children: Vec<String>,
}

impl Container {
    /// Creates an empty container with the given element id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    /// Element id of this container
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Removes all children
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Appends a rendered fragment as the last child
    pub fn append(&mut self, fragment: String) {
        self.children.push(fragment);
    }

    /// Rendered children in document order
    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Serializes the container as an element with the given tag and attributes
    pub fn to_html(&self, tag: &str, attributes: &str) -> String {
        let mut html = format!("<{} id=\"{}\"", tag, encode_double_quoted_attribute(&self.id));
        if !attributes.is_empty() {
            html.push(' ');
            html.push_str(attributes);
        }
        html.push('>');
        for child in &self.children {
            html.push('\n');
            html.push_str(child);
        }
        html.push_str(&format!("\n</{}>", tag));
        html
    }
}

/// The region listing a show's episodes. Hidden until episodes are requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodesArea {
    hidden: bool,
    list: Container,
}

impl EpisodesArea {
    /// Creates a hidden, empty episodes area
    pub fn new(list_id: impl Into<String>) -> Self {
        Self {
            hidden: true,
            list: Container::new(list_id),
        }
    }

    pub fn hide(&mut self) {
        self.hidden = true;
    }

    pub fn show(&mut self) {
        self.hidden = false;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// The list holding one entry per episode
    pub fn list(&self) -> &Container {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut Container {
        &mut self.list
    }
}

/// Replaces the contents of `shows_list` with one card per show
///
/// Any episode listing belongs to the previously selected show, so the
/// episodes area is hidden as part of the rebuild. Shows without an image get
/// `missing_image_url` as their image source.
pub fn populate_shows(
    shows: &[Show],
    shows_list: &mut Container,
    episodes_area: &mut EpisodesArea,
    missing_image_url: &str,
) {
    episodes_area.hide();
    shows_list.clear();

    for show in shows {
        shows_list.append(show_card(show, missing_image_url));
    }
}

/// Replaces the episode list with one entry per episode and reveals the area
pub fn populate_episodes(episodes: &[Episode], episodes_area: &mut EpisodesArea) {
    let list = episodes_area.list_mut();
    list.clear();

    for episode in episodes {
        list.append(episode_entry(episode));
    }

    episodes_area.show();
}

/// Builds the card markup for a single show
///
/// The summary is inserted as-is since the catalog delivers it as markup.
fn show_card(show: &Show, missing_image_url: &str) -> String {
    let image = show.image.as_deref().unwrap_or(missing_image_url);

    format!(
        r#"<div data-show-id="{id}" class="Show col-md-12 col-lg-6 mb-4">
  <div class="media">
    <img src="{image}" alt="{alt}" class="w-25 me-3">
    <div class="media-body">
      <h5 class="text-primary">{name}</h5>
      <div><small>{summary}</small></div>
      <button class="btn btn-outline-light btn-sm Show-getEpisodes">
        Episodes
      </button>
    </div>
  </div>
</div>"#,
        id = show.id,
        image = encode_double_quoted_attribute(image),
        alt = encode_double_quoted_attribute(&show.name),
        name = encode_text(&show.name),
        summary = show.summary,
    )
}

fn episode_entry(episode: &Episode) -> String {
    format!(
        r#"<li data-episode-id="{}">{} (season {}, number {})</li>"#,
        episode.id,
        encode_text(&episode.name),
        episode.season,
        episode.number
    )
}
