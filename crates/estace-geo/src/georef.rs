//! Client for the Argentine georef reference API.
//!
//! Both enumerations degrade to an empty list on failure: an empty
//! province or locality selector is an acceptable state for the form, so
//! errors are logged and swallowed here rather than propagated.

use reqwest::{Client, Url};

use crate::error::GeoError;
use crate::http::{build_client, endpoint, get_json, parse_base_url};
use crate::types::{GeoPlace, GeorefResponse};

const DEFAULT_BASE_URL: &str = "https://apis.datos.gob.ar/georef/api";

/// Page size covering all 24 provinces (plus headroom).
const MAX_PROVINCES: &str = "27";

/// Page size large enough for the province with the most localities.
const MAX_LOCALITIES: &str = "5000";

pub struct GeorefClient {
    client: Client,
    base_url: Url,
}

impl GeorefClient {
    /// Creates a client pointed at the public georef API.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(user_agent: &str) -> Result<Self, GeoError> {
        Self::with_base_url(DEFAULT_BASE_URL, user_agent)
    }

    /// Creates a client with a custom base URL (configuration or wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::InvalidBaseUrl`] if `base_url` does not parse, or
    /// [`GeoError::Http`] if the client cannot be constructed.
    pub fn with_base_url(base_url: &str, user_agent: &str) -> Result<Self, GeoError> {
        Ok(Self {
            client: build_client(user_agent)?,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// All provinces, sorted by name. Empty on any failure.
    pub async fn list_provinces(&self) -> Vec<GeoPlace> {
        let url = endpoint(&self.base_url, "provincias", &[("max", MAX_PROVINCES)]);
        match get_json::<GeorefResponse>(&self.client, &url).await {
            Ok(body) => sorted(body.provincias.unwrap_or_default()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch provinces");
                Vec::new()
            }
        }
    }

    /// Localities of `province`, sorted by name. Empty when `province` is
    /// blank (no request is made) or on any failure.
    pub async fn list_localities(&self, province: &str) -> Vec<GeoPlace> {
        if province.trim().is_empty() {
            return Vec::new();
        }
        let url = endpoint(
            &self.base_url,
            "localidades",
            &[("provincia", province), ("max", MAX_LOCALITIES)],
        );
        match get_json::<GeorefResponse>(&self.client, &url).await {
            Ok(body) => sorted(body.localidades.unwrap_or_default()),
            Err(e) => {
                tracing::warn!(province, error = %e, "failed to fetch localities");
                Vec::new()
            }
        }
    }
}

fn sorted(places: Vec<crate::types::GeorefPlace>) -> Vec<GeoPlace> {
    let mut places: Vec<GeoPlace> = places.into_iter().map(GeoPlace::from).collect();
    places.sort_by_cached_key(|p| (collation_key(&p.name), p.name.clone()));
    places
}

/// Case- and accent-insensitive key so `Córdoba` sorts next to `Corrientes`
/// instead of after `Tucumán`.
pub(crate) fn collation_key(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}
