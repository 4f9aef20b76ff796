// Modrinth v2 API endpoints and response types

use crate::constants::API_BASE;
use crate::error::FetchError;
use crate::modrinth::http;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
}

/// One published release of a mod, newest first in the API's ordering.
#[derive(Debug, Clone, Deserialize)]
pub struct Version {
    pub version_number: String,
    pub game_versions: Vec<String>,
    pub loaders: Vec<String>,
    pub files: Vec<VersionFile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VersionFile {
    pub url: String,
    pub filename: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub struct SearchHit {
    pub project_id: String,
    pub title: String,
    pub project_type: String,
    pub author: String,
    pub description: String,
    pub versions: Vec<String>,
}

pub fn versions_url(mod_id: &str) -> String {
    format!("{}/project/{}/version", API_BASE, mod_id)
}

/// List all published versions of a project, in the API's order.
pub async fn fetch_versions(mod_id: &str) -> Result<Vec<Version>, FetchError> {
    http::fetch_json(&versions_url(mod_id)).await
}

/// Project metadata, used to fill the title/description cache.
pub async fn fetch_project(mod_id: &str) -> Result<Project, FetchError> {
    http::fetch_json(&format!("{}/project/{}", API_BASE, mod_id)).await
}

/// Free-text project search.
pub async fn search(query: &str) -> Result<SearchResponse, FetchError> {
    let escaped = urlencoding::encode(query);
    http::fetch_json(&format!("{}/search?query={}", API_BASE, escaped)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versions_url() {
        assert_eq!(
            versions_url("P7dR8mSH"),
            "https://api.modrinth.com/v2/project/P7dR8mSH/version"
        );
    }

    #[test]
    fn test_version_deserializes_from_api_shape() {
        let text = r#"{
          "version_number": "0.42.0+1.17",
          "game_versions": ["1.17", "1.17.1"],
          "loaders": ["fabric"],
          "files": [
            {"url": "https://cdn.modrinth.com/data/P7dR8mSH/versions/0.42.0/fabric-api-0.42.0.jar",
             "filename": "fabric-api-0.42.0.jar",
             "primary": true}
          ],
          "id": "ignored-extra-field"
        }"#;
        let v: Version = serde_json::from_str(text).unwrap();
        assert_eq!(v.version_number, "0.42.0+1.17");
        assert_eq!(v.files[0].filename, "fabric-api-0.42.0.jar");
    }

    #[test]
    fn test_search_response_deserializes() {
        let text = r#"{
          "hits": [{
            "project_id": "AANobbMI",
            "title": "Sodium",
            "project_type": "mod",
            "author": "jellysquid3",
            "description": "A modern rendering engine",
            "versions": ["1.16.5", "1.17.1"]
          }],
          "offset": 0,
          "limit": 10,
          "total_hits": 1
        }"#;
        let r: SearchResponse = serde_json::from_str(text).unwrap();
        assert_eq!(r.hits.len(), 1);
        assert_eq!(r.hits[0].project_id, "AANobbMI");
    }
}
