//! Clients for the public geographic services behind the facility form.
//!
//! [`GeorefClient`] enumerates Argentine provinces and localities;
//! [`NominatimClient`] performs forward and reverse geocoding against
//! OpenStreetMap's Nominatim. Both treat upstream failures as "no data":
//! lookups return empty lists or `None` and log the cause instead of
//! surfacing an error.

pub mod error;
pub mod georef;
mod http;
pub mod nominatim;
pub mod types;

pub use error::GeoError;
pub use georef::GeorefClient;
pub use nominatim::NominatimClient;
pub use types::{GeoPlace, GeocodeMatch, ReverseGeocodeResult};
