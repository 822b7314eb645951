use serde::{Deserialize, Serialize};

/// Account role as reported in the `tipo` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Facility owner with full administrative access.
    Dueno,
    Playero,
    Other(String),
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Dueño" => Role::Dueno,
            "Playero" => Role::Playero,
            _ => Role::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Dueno => write!(f, "Dueño"),
            Role::Playero => write!(f, "Playero"),
            Role::Other(raw) => write!(f, "{raw}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub legajo: i64,
    pub dni: i64,
    pub nombre: String,
    pub apellido: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub tipo: Role,
}

impl UserProfile {
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub dni: i64,
    pub nombre: String,
    pub apellido: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub legajo: i64,
    pub password: String,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub legajo: i64,
    pub dni: i64,
    pub nombre: String,
    pub apellido: String,
    pub tipo: Role,
    pub token: String,
}

impl std::fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthResponse")
            .field("legajo", &self.legajo)
            .field("dni", &self.dni)
            .field("nombre", &self.nombre)
            .field("apellido", &self.apellido)
            .field("tipo", &self.tipo)
            .field("token", &"[redacted]")
            .finish()
    }
}
