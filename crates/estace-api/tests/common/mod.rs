use estace_api::{ApiClient, Session};

pub fn test_client(base_url: &str, session: Session) -> ApiClient {
    ApiClient::with_base_url(base_url, session, "estace-test/0.1", Some(5))
        .expect("client construction should not fail")
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
        "diasAtencion": "Lunes a Viernes",
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
