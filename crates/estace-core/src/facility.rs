use serde::{Deserialize, Serialize};

/// A WGS84 point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A parking facility as returned by the persistence API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: i64,
    pub nombre: String,
    pub provincia: String,
    pub localidad: String,
    pub direccion: String,
    pub latitud: f64,
    pub longitud: f64,
    /// Display string such as `"Lunes a Viernes"`.
    pub dias_atencion: String,
    /// Display string such as `"08:00 - 20:00"`.
    pub hra_atencion: String,
    pub dias_feriado_atencion: bool,
    pub fin_de_semana_atencion: bool,
    #[serde(default)]
    pub hora_fin_de_semana: Option<String>,
    pub disponibilidad: bool,
    #[serde(default)]
    pub puntaje: f64,
    #[serde(default)]
    pub puntaje_acumulado: f64,
    #[serde(default)]
    pub cantidad_votos: i64,
}

impl Facility {
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitud, self.longitud)
    }
}

/// Create-or-update body for `POST`/`PUT /api/estacionamientos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityRequest {
    pub nombre: String,
    pub provincia: String,
    pub localidad: String,
    pub direccion: String,
    pub latitud: Option<f64>,
    pub longitud: Option<f64>,
    pub dias_atencion: String,
    pub hra_atencion: String,
    pub dias_feriado_atencion: bool,
    pub fin_de_semana_atencion: bool,
    pub hora_fin_de_semana: Option<String>,
    pub disponibilidad: bool,
}
