//! Request plumbing shared by the georef and Nominatim clients.

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::GeoError;

/// Builds a client with the given `User-Agent` and no request timeout.
pub(crate) fn build_client(user_agent: &str) -> Result<Client, GeoError> {
    Ok(Client::builder().user_agent(user_agent).build()?)
}

/// Parses `raw` and ensures it ends with exactly one slash so that
/// [`Url::join`] appends path segments instead of replacing the last one.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, GeoError> {
    let normalised = format!("{}/", raw.trim_end_matches('/'));
    Url::parse(&normalised).map_err(|e| GeoError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Joins `path` onto `base` and appends the query pairs, percent-encoded.
pub(crate) fn endpoint(base: &Url, path: &str, query: &[(&str, &str)]) -> Url {
    // `base` always ends with '/', and `path` is a fixed relative segment.
    let mut url = base.join(path).unwrap_or_else(|_| base.clone());
    {
        let mut pairs = url.query_pairs_mut();
        for (k, v) in query {
            pairs.append_pair(k, v);
        }
    }
    url
}

/// Sends a GET request, asserts a 2xx status, and decodes the JSON body.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &Url,
) -> Result<T, GeoError> {
    tracing::debug!(%url, "geo request");
    let response = client.get(url.clone()).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(GeoError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| GeoError::Deserialize {
        context: url.path().to_string(),
        source: e,
    })
}
