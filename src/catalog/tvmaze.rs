/// TVMaze catalog implementation.
use super::tvmaze_types::{TvMazeEpisode, TvMazeSearchResult};
use super::{CatalogError, Episode, Show, ShowCatalog};
use crate::config::{Config, DEFAULT_BASE_URL};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Catalog backed by the TVMaze REST API.
///
/// This catalog talks to https://api.tvmaze.com (or any base URL with the same
/// shape) using the `/search/shows` and `/shows/{id}/episodes` endpoints.
pub struct TvMazeCatalog {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl TvMazeCatalog {
    /// Creates a new catalog talking to the public TVMaze API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a catalog talking to the given API root.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::blocking::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a catalog from the runtime configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_base_url(config.base_url.as_str())
    }

    /// Converts one TVMaze search hit to our internal Show structure.
    fn convert_show(result: TvMazeSearchResult) -> Show {
        let show = result.show;
        Show {
            id: show.id,
            name: show.name,
            summary: show.summary.unwrap_or_default(),
            image: show.image.map(|image| image.original),
        }
    }

    /// Converts a TVMaze episode to our internal Episode structure.
    fn convert_episode(episode: TvMazeEpisode) -> Episode {
        Episode {
            id: episode.id,
            name: episode.name.unwrap_or_default(),
            season: episode.season,
            number: episode.number,
        }
    }

    /// Issues a GET request and decodes the JSON body.
    fn get_json<T>(&self, url: &str, query: &[(&str, &str)]) -> Result<T, CatalogError>
    where
        T: DeserializeOwned,
    {
        debug!(url, ?query, "requesting catalog");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), url, "catalog request failed");
            return Err(CatalogError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response
            .text()
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

impl Default for TvMazeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ShowCatalog for TvMazeCatalog {
    fn search_shows(&self, term: &str) -> Result<Vec<Show>, CatalogError> {
        let url = format!("{}/search/shows", self.base_url);
        let results: Vec<TvMazeSearchResult> = self.get_json(&url, &[("q", term)])?;

        Ok(results.into_iter().map(Self::convert_show).collect())
    }

    fn episodes_of_show(&self, show_id: u64) -> Result<Vec<Episode>, CatalogError> {
        let url = format!("{}/shows/{}/episodes", self.base_url, show_id);
        let episodes: Vec<TvMazeEpisode> = self.get_json(&url, &[])?;

        Ok(episodes.into_iter().map(Self::convert_episode).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn search_payload() -> serde_json::Value {
        json!([
            {
                "score": 0.9,
                "show": {
                    "id": 1,
                    "name": "Batman",
                    "summary": "<p>s</p>",
                    "image": null,
                    "language": "English"
                }
            },
            {
                "score": 0.7,
                "show": {
                    "id": 975,
                    "name": "Batman: The Animated Series",
                    "summary": "<p>Gotham</p>",
                    "image": {
                        "medium": "https://static.tvmaze.com/medium/975.jpg",
                        "original": "https://static.tvmaze.com/original/975.jpg"
                    },
                    "genres": ["Action"]
                }
            }
        ])
    }

    fn episodes_payload() -> serde_json::Value {
        json!([
            { "id": 10, "name": "Pilot", "season": 1, "number": 1, "airdate": "2001-01-01" },
            { "id": 12, "name": "Second", "season": 1, "number": 2, "runtime": 30 },
            { "id": 11, "name": "Return", "season": 2, "number": 1 }
        ])
    }

    fn normalize_search(payload: serde_json::Value) -> Vec<Show> {
        let raw: Vec<TvMazeSearchResult> = serde_json::from_value(payload).unwrap();
        raw.into_iter().map(TvMazeCatalog::convert_show).collect()
    }

    #[test]
    fn test_convert_show_without_image_leaves_image_absent() {
        let shows = normalize_search(search_payload());

        assert_eq!(
            shows[0],
            Show {
                id: 1,
                name: "Batman".to_string(),
                summary: "<p>s</p>".to_string(),
                image: None,
            }
        );
    }

    #[test]
    fn test_convert_show_uses_original_image() {
        let shows = normalize_search(search_payload());

        assert_eq!(
            shows[1].image.as_deref(),
            Some("https://static.tvmaze.com/original/975.jpg")
        );
    }

    #[test]
    fn test_convert_show_preserves_length_and_order() {
        let shows = normalize_search(search_payload());
        let ids: Vec<u64> = shows.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 975]);
    }

    #[test]
    fn test_normalized_show_has_exactly_four_fields() {
        let shows = normalize_search(search_payload());

        for show in shows {
            let value = serde_json::to_value(&show).unwrap();
            let mut keys: Vec<&String> = value.as_object().unwrap().keys().collect();
            keys.sort();
            assert_eq!(keys, vec!["id", "image", "name", "summary"]);
        }
    }

    #[test]
    fn test_convert_show_null_summary() {
        let shows = normalize_search(json!([
            { "show": { "id": 5, "name": "Quiet", "summary": null, "image": null } }
        ]));
        assert_eq!(shows[0].summary, "");
    }

    #[test]
    fn test_convert_episode_keeps_remote_order() {
        let raw: Vec<TvMazeEpisode> = serde_json::from_value(episodes_payload()).unwrap();
        let episodes: Vec<Episode> = raw.into_iter().map(TvMazeCatalog::convert_episode).collect();

        let numbering: Vec<(u64, u32, u32)> =
            episodes.iter().map(|e| (e.id, e.season, e.number)).collect();
        assert_eq!(numbering, vec![(10, 1, 1), (12, 1, 2), (11, 2, 1)]);
        assert_eq!(episodes[1].name, "Second");

        let value = serde_json::to_value(&episodes[0]).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 4);
    }

    #[test]
    fn test_convert_episode_null_name() {
        let raw: Vec<TvMazeEpisode> = serde_json::from_value(json!([
            { "id": 10, "name": "Pilot", "season": 1, "number": 1 },
            { "id": 11, "name": null, "season": 1, "number": 2 }
        ]))
        .unwrap();
        let episodes: Vec<Episode> = raw.into_iter().map(TvMazeCatalog::convert_episode).collect();

        assert_eq!(episodes.len(), 2);
        assert_eq!(episodes[0].name, "Pilot");
        assert_eq!(episodes[1].name, "");
        assert_eq!(episodes[1].number, 2);
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let catalog = TvMazeCatalog::with_base_url("https://api.tvmaze.com/");
        assert_eq!(catalog.base_url, "https://api.tvmaze.com");
    }

    #[tokio::test]
    async fn test_search_shows_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/shows"))
            .and(query_param("q", "batman"))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_payload()))
            .expect(1)
            .mount(&server)
            .await;

        let base_url = server.uri();
        let shows = tokio::task::spawn_blocking(move || {
            TvMazeCatalog::with_base_url(base_url).search_shows("batman")
        })
        .await
        .unwrap()
        .unwrap();

        assert_eq!(shows.len(), 2);
        assert_eq!(shows[0].name, "Batman");
        assert_eq!(shows[0].image, None);
    }

    #[tokio::test]
    async fn test_search_shows_passes_term_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/shows"))
            .and(query_param("q", "law & order"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let base_url = server.uri();
        let shows = tokio::task::spawn_blocking(move || {
            TvMazeCatalog::with_base_url(base_url).search_shows("law & order")
        })
        .await
        .unwrap()
        .unwrap();

        assert!(shows.is_empty());
    }

    #[tokio::test]
    async fn test_search_shows_sends_empty_term() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/shows"))
            .and(query_param("q", ""))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_payload()))
            .expect(1)
            .mount(&server)
            .await;

        let base_url = server.uri();
        let shows = tokio::task::spawn_blocking(move || {
            TvMazeCatalog::with_base_url(base_url).search_shows("")
        })
        .await
        .unwrap()
        .unwrap();

        assert_eq!(shows.len(), 2);
    }

    #[tokio::test]
    async fn test_episodes_of_show_over_http() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shows/975/episodes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(episodes_payload()))
            .mount(&server)
            .await;

        let base_url = server.uri();
        let episodes = tokio::task::spawn_blocking(move || {
            TvMazeCatalog::with_base_url(base_url).episodes_of_show(975)
        })
        .await
        .unwrap()
        .unwrap();

        assert_eq!(episodes.len(), 3);
        assert_eq!(episodes[2].name, "Return");
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/shows/404/episodes"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let base_url = server.uri();
        let result = tokio::task::spawn_blocking(move || {
            TvMazeCatalog::with_base_url(base_url).episodes_of_show(404)
        })
        .await
        .unwrap();

        match result {
            Err(CatalogError::Status { status, reason }) => {
                assert_eq!(status, 404);
                assert_eq!(reason, "Not Found");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/shows"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{ "show": { "id": "x" } }])),
            )
            .mount(&server)
            .await;

        let base_url = server.uri();
        let result = tokio::task::spawn_blocking(move || {
            TvMazeCatalog::with_base_url(base_url).search_shows("anything")
        })
        .await
        .unwrap();

        assert!(matches!(result, Err(CatalogError::Decode(_))));
    }
}
