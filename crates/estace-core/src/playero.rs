use serde::{Deserialize, Serialize};

/// Role string the API expects on every playero create/update.
pub const PLAYERO_ROLE: &str = "Playero";

/// A parking attendant account, scoped to one facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playero {
    pub legajo: i64,
    pub dni: i64,
    pub nombre: String,
    pub apellido: String,
    #[serde(default)]
    pub nombre_estacionamiento: String,
    #[serde(default)]
    pub estacionamiento_id: Option<i64>,
    pub activo: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayeroRequest {
    pub dni: i64,
    pub nombre: String,
    pub apellido: String,
    /// Omitted on update when the owner leaves the password blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub rol: String,
    pub estacionamiento_id: i64,
    pub activo: bool,
}
