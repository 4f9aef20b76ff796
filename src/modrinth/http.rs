// Shared HTTP client utilities

use crate::constants;
use crate::error::FetchError;
use anyhow::anyhow;
use log::debug;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

lazy_static::lazy_static! {
    /// Shared client. The browser-like User-Agent is load-bearing: the
    /// CDN answers 403 to requests without one.
    static ref CLIENT: Client = Client::builder()
        .user_agent(constants::USER_AGENT)
        .build()
        .expect("Failed to create HTTP client");
}

/// Fetch JSON from a URL and deserialize it, classifying 404 separately
/// so callers can tell "unknown project ID" from everything else.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    debug!("GET {}", url);
    let response = CLIENT.get(url).send().await?;

    if response.status() == StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound);
    }
    if !response.status().is_success() {
        return Err(FetchError::Other(anyhow!(
            "HTTP request failed: {} ({})",
            url,
            response.status()
        )));
    }

    Ok(response.json().await?)
}

/// Download a file from the CDN and return its bytes.
pub async fn download(url: &str) -> Result<Vec<u8>, FetchError> {
    let url = normalize_download_url(url);
    debug!("GET {}", url);
    let response = CLIENT.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(FetchError::Other(anyhow!(
            "download failed: {} ({})",
            url,
            response.status()
        )));
    }

    Ok(response.bytes().await?.to_vec())
}

/// Rewrite a CDN file URL before requesting it. The server rejects an
/// escaped plus with 403, so a literal `%2B` is restored to `+` and the
/// whole URL is then re-escaped with `:`, `/` and `+` kept verbatim.
pub fn normalize_download_url(url: &str) -> String {
    quote(&url.replace("%2B", "+"))
}

fn quote(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for &b in url.as_bytes() {
        let c = b as char;
        if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | ':' | '/' | '+') {
            out.push(c);
        } else {
            out.push_str(&format!("%{:02X}", b));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_restores_plus() {
        assert_eq!(
            normalize_download_url("https://cdn.modrinth.com/data/x/sodium%2B1.17.jar"),
            "https://cdn.modrinth.com/data/x/sodium+1.17.jar"
        );
    }

    #[test]
    fn test_normalize_escapes_spaces() {
        assert_eq!(
            normalize_download_url("https://cdn.modrinth.com/data/x/my mod.jar"),
            "https://cdn.modrinth.com/data/x/my%20mod.jar"
        );
    }

    #[test]
    fn test_normalize_keeps_plain_urls() {
        let url = "https://cdn.modrinth.com/data/P7dR8mSH/versions/1.0/fabric-api.jar";
        assert_eq!(normalize_download_url(url), url);
    }
}
