//! Public results and upstream response shapes for the geo clients.

use estace_core::Coordinates;
use serde::Deserialize;

/// A province or locality from the georef reference API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoPlace {
    pub id: String,
    pub name: String,
}

/// Best match for a forward geocode query.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeMatch {
    pub coordinates: Coordinates,
    pub display_name: String,
}

/// Address components recovered from a coordinate pair.
///
/// `house_number` is frequently empty: OpenStreetMap rarely maps door
/// numbers outside city centres.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReverseGeocodeResult {
    pub street: String,
    pub house_number: String,
    pub locality: String,
    pub province: String,
}

impl ReverseGeocodeResult {
    /// `"{street} {house_number}"`, or just the street when the number is
    /// unknown. `None` when no street could be resolved.
    #[must_use]
    pub fn address_line(&self) -> Option<String> {
        if self.street.is_empty() {
            return None;
        }
        if self.house_number.is_empty() {
            Some(self.street.clone())
        } else {
            Some(format!("{} {}", self.street, self.house_number))
        }
    }
}

// ---------------------------------------------------------------------------
// georef
// ---------------------------------------------------------------------------

/// Envelope for `/provincias` and `/localidades`; only one list is present.
#[derive(Debug, Deserialize)]
pub(crate) struct GeorefResponse {
    #[serde(default)]
    pub provincias: Option<Vec<GeorefPlace>>,
    #[serde(default)]
    pub localidades: Option<Vec<GeorefPlace>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeorefPlace {
    pub id: String,
    pub nombre: String,
}

impl From<GeorefPlace> for GeoPlace {
    fn from(place: GeorefPlace) -> Self {
        Self {
            id: place.id,
            name: place.nombre,
        }
    }
}

// ---------------------------------------------------------------------------
// Nominatim
// ---------------------------------------------------------------------------

/// One element of the `/search?format=json` array. Coordinates arrive as
/// decimal strings.
#[derive(Debug, Deserialize)]
pub(crate) struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: String,
}

/// `/reverse?format=json` body. `address` is absent when Nominatim answers
/// with `{"error": "Unable to geocode"}`.
#[derive(Debug, Deserialize)]
pub(crate) struct NominatimReverse {
    #[serde(default)]
    pub address: NominatimAddress,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct NominatimAddress {
    pub road: Option<String>,
    pub pedestrian: Option<String>,
    pub street: Option<String>,
    pub residential: Option<String>,
    pub suburb: Option<String>,
    pub house_number: Option<String>,
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub city_district: Option<String>,
    pub municipality: Option<String>,
    pub state: Option<String>,
    pub province: Option<String>,
}

impl From<NominatimAddress> for ReverseGeocodeResult {
    fn from(addr: NominatimAddress) -> Self {
        Self {
            street: first_non_empty([
                addr.road,
                addr.pedestrian,
                addr.street,
                addr.residential,
                addr.suburb,
            ]),
            house_number: first_non_empty([addr.house_number]),
            locality: first_non_empty([
                addr.city,
                addr.town,
                addr.village,
                addr.city_district,
                addr.municipality,
            ]),
            province: first_non_empty([addr.state, addr.province]),
        }
    }
}

fn first_non_empty<const N: usize>(candidates: [Option<String>; N]) -> String {
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reverse(json: serde_json::Value) -> ReverseGeocodeResult {
        let body: NominatimReverse = serde_json::from_value(json).unwrap();
        body.address.into()
    }

    #[test]
    fn street_prefers_road() {
        let result = reverse(serde_json::json!({
            "address": { "road": "Avenida 9 de Julio", "pedestrian": "Peatonal", "house_number": "100" }
        }));
        assert_eq!(result.street, "Avenida 9 de Julio");
        assert_eq!(result.house_number, "100");
    }

    #[test]
    fn street_falls_back_through_alternatives() {
        let result = reverse(serde_json::json!({
            "address": { "road": "", "residential": "Barrio Norte", "suburb": "Recoleta" }
        }));
        assert_eq!(result.street, "Barrio Norte");

        let result = reverse(serde_json::json!({ "address": { "suburb": "Recoleta" } }));
        assert_eq!(result.street, "Recoleta");
    }

    #[test]
    fn locality_and_province_fallbacks() {
        let result = reverse(serde_json::json!({
            "address": { "village": "Tafí del Valle", "province": "Tucumán" }
        }));
        assert_eq!(result.locality, "Tafí del Valle");
        assert_eq!(result.province, "Tucumán");
    }

    #[test]
    fn missing_address_yields_empty_result() {
        let result = reverse(serde_json::json!({ "error": "Unable to geocode" }));
        assert_eq!(result, ReverseGeocodeResult::default());
        assert!(result.address_line().is_none());
    }

    #[test]
    fn address_line_omits_empty_house_number() {
        let result = ReverseGeocodeResult {
            street: "Calle 50".into(),
            ..ReverseGeocodeResult::default()
        };
        assert_eq!(result.address_line().as_deref(), Some("Calle 50"));

        let result = ReverseGeocodeResult {
            street: "Calle 50".into(),
            house_number: "742".into(),
            ..ReverseGeocodeResult::default()
        };
        assert_eq!(result.address_line().as_deref(), Some("Calle 50 742"));
    }
}
