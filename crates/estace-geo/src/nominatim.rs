//! Forward and reverse geocoding against OpenStreetMap's Nominatim.
//!
//! "Not found" is an expected outcome for both directions and is returned
//! as `None`, the same value used for transport and parse failures. Callers
//! decide how to present it; nothing here retries.

use estace_core::Coordinates;
use reqwest::{Client, Url};

use crate::error::GeoError;
use crate::http::{build_client, endpoint, get_json, parse_base_url};
use crate::types::{GeocodeMatch, NominatimPlace, NominatimReverse, ReverseGeocodeResult};

const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Appended to every forward query to keep matches inside the country.
const COUNTRY: &str = "Argentina";

/// Building-level precision, needed to get a house number at all.
const REVERSE_ZOOM: &str = "18";

pub struct NominatimClient {
    client: Client,
    base_url: Url,
}

impl NominatimClient {
    /// Creates a client pointed at the public Nominatim instance.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(user_agent: &str) -> Result<Self, GeoError> {
        Self::with_base_url(DEFAULT_BASE_URL, user_agent)
    }

    /// Creates a client with a custom base URL (self-hosted Nominatim or wiremock).
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

    /// Resolves a free-text address to its most likely coordinates.
    ///
    /// Returns `None` when nothing matches or the lookup fails.
    pub async fn forward_geocode(
        &self,
        address: &str,
        locality: &str,
        province: &str,
    ) -> Option<GeocodeMatch> {
        let query = forward_query(address, locality, province);
        let url = endpoint(
            &self.base_url,
            "search",
            &[("q", &query), ("format", "json"), ("limit", "1")],
        );

        let places = match get_json::<Vec<NominatimPlace>>(&self.client, &url).await {
            Ok(places) => places,
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "forward geocode failed");
                return None;
            }
        };

        let Some(best) = places.into_iter().next() else {
            tracing::info!(query = %query, "forward geocode returned no matches");
            return None;
        };

        match parse_coordinates(&best) {
            Ok(coordinates) => Some(GeocodeMatch {
                coordinates,
                display_name: best.display_name,
            }),
            Err(reason) => {
                tracing::warn!(
                    query = %query,
                    reason,
                    "forward geocode returned unusable coordinates"
                );
                None
            }
        }
    }

    /// Describes the street address nearest to `coordinates`.
    ///
    /// Returns `None` only when the lookup itself fails; a successful lookup
    /// with no usable address yields a result with empty fields.
    pub async fn reverse_geocode(&self, coordinates: Coordinates) -> Option<ReverseGeocodeResult> {
        let lat = coordinates.latitude.to_string();
        let lon = coordinates.longitude.to_string();
        let url = endpoint(
            &self.base_url,
            "reverse",
            &[
                ("lat", &lat),
                ("lon", &lon),
                ("format", "json"),
                ("zoom", REVERSE_ZOOM),
                ("addressdetails", "1"),
            ],
        );

        match get_json::<NominatimReverse>(&self.client, &url).await {
            Ok(body) => Some(body.address.into()),
            Err(e) => {
                tracing::warn!(%lat, %lon, error = %e, "reverse geocode failed");
                None
            }
        }
    }
}

/// `"{address}, {locality}, {province}, Argentina"`.
pub(crate) fn forward_query(address: &str, locality: &str, province: &str) -> String {
    format!("{address}, {locality}, {province}, {COUNTRY}")
}

fn parse_coordinates(place: &NominatimPlace) -> Result<Coordinates, &'static str> {
    let latitude = place.lat.trim().parse::<f64>().map_err(|_| "bad latitude")?;
    let longitude = place.lon.trim().parse::<f64>().map_err(|_| "bad longitude")?;
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err("non-finite coordinate");
    }
    Ok(Coordinates::new(latitude, longitude))
}
