use estace_api::{ApiClient, Session};
use estace_geo::{GeorefClient, NominatimClient};

pub struct Clients {
    pub api: ApiClient,
    pub georef: GeorefClient,
    pub nominatim: NominatimClient,
}

/// Every client pointed at the same mock server; the paths do not overlap.
pub fn clients(base_url: &str, session: Session) -> Clients {
    Clients {
        api: ApiClient::with_base_url(base_url, session, "estace-test/0.1", Some(5))
            .expect("api client"),
        georef: GeorefClient::with_base_url(base_url, "estace-test/0.1").expect("georef client"),
        nominatim: NominatimClient::with_base_url(base_url, "estace-test/0.1")
            .expect("nominatim client"),
    }
}

#[allow(dead_code)]
pub fn facility_json(id: i64) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "nombre": "Playa Centro",
        "provincia": "Santa Fe",
        "localidad": "Rosario",
        "direccion": "Córdoba 1500",
        "latitud": -32.9468,
        "longitud": -60.6393,
        "diasAtencion": "Martes a Sábado",
        "hraAtencion": "08:00 - 20:00",
        "diasFeriadoAtencion": false,
        "finDeSemanaAtencion": true,
        "horaFinDeSemana": "09:00 - 13:00",
        "disponibilidad": true,
        "puntaje": 0.0,
        "puntajeAcumulado": 0.0,
        "cantidadVotos": 0
    })
}

#[allow(dead_code)]
pub fn profile_json(tipo: &str) -> serde_json::Value {
    serde_json::json!({
        "legajo": 1001,
        "dni": 30111222,
        "nombre": "Lucía",
        "apellido": "Gómez",
        "avatarUrl": null,
        "tipo": tipo
    })
}
