//! HTTP plumbing for the persistence API.
//!
//! [`ApiClient::send_authenticated`] is the single interceptor for session
//! handling: it injects the bearer token, fails fast when there is none, and
//! clears the [`Session`] when the server answers 401 or 403.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::session::Session;

const DEFAULT_BASE_URL: &str = "https://estace-v2.onrender.com";

pub struct ApiClient {
    client: Client,
    base_url: Url,
    session: Session,
}

impl ApiClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(session: Session, user_agent: &str) -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_BASE_URL, session, user_agent, None)
    }

    /// Creates a client with a custom base URL and optional request timeout.
    ///
    /// `timeout_secs = None` leaves requests unbounded.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if `base_url` does not parse, or
    /// [`ApiError::Http`] if the client cannot be constructed.
    pub fn with_base_url(
        base_url: &str,
        session: Session,
        user_agent: &str,
        timeout_secs: Option<u64>,
    ) -> Result<Self, ApiError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            session,
        })
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Resolves `path` (relative, no leading slash) against the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidBaseUrl {
                url: format!("{}{path}", self.base_url),
                reason: e.to_string(),
            })
    }

    /// Sends an authenticated request and decodes the JSON response.
    ///
    /// `default_error` is reported when a failed response carries no usable
    /// message.
    ///
    /// # Errors
    ///
    /// - [`ApiError::NotAuthenticated`] if the session holds no token (no
    ///   request is sent).
    /// - [`ApiError::SessionExpired`] on 401/403; the session is cleared.
    /// - [`ApiError::Server`] on any other non-2xx status.
    /// - [`ApiError::Http`] on network failure.
    /// - [`ApiError::Deserialize`] if the body does not match `T`.
    pub(crate) async fn send_authenticated<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        default_error: &str,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let Some(token) = self.session.token() else {
            tracing::debug!(path, "no session token; refusing authenticated call");
            return Err(ApiError::NotAuthenticated);
        };

        let url = self.endpoint(path)?;
        let mut request = self.client.request(method.clone(), url).bearer_auth(token);
        if let Some(body) = body {
            request = request.json(body);
        }

        match Self::execute(request, &method, path, default_error).await {
            Err(ApiError::Server { status, .. }) if status == 401 || status == 403 => {
                tracing::warn!(path, status, "session rejected by server; clearing token");
                self.session.clear();
                Err(ApiError::SessionExpired)
            }
            other => other,
        }
    }

    /// Sends a request that needs no token (login).
    pub(crate) async fn send_anonymous<T, B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        default_error: &str,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        let request = self.client.request(method.clone(), url).json(body);
        Self::execute(request, &method, path, default_error).await
    }

    async fn execute<T: DeserializeOwned>(
        request: RequestBuilder,
        method: &Method,
        path: &str,
        default_error: &str,
    ) -> Result<T, ApiError> {
        tracing::debug!(%method, path, "api request");
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = extract_error_message(&text, default_error);
            tracing::warn!(
                %method,
                path,
                status = status.as_u16(),
                message = %message,
                "api request failed"
            );
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        // Some endpoints answer 200/204 with an empty body.
        let text = if text.trim().is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(text).map_err(|e| ApiError::Deserialize {
            context: format!("{method} {path}"),
            source: e,
        })
    }
}

/// Best-effort human message from an error body.
///
/// Tries the JSON `error` then `message` fields, then the raw text, and
/// finally `default_error` when the body is empty.
pub(crate) fn extract_error_message(body: &str, default_error: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return default_error.to_string();
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(json) => ["error", "message"]
            .into_iter()
            .filter_map(|key| json.get(key).and_then(serde_json::Value::as_str))
            .find(|s| !s.trim().is_empty())
            .map_or_else(|| trimmed.to_string(), ToString::to_string),
        Err(_) => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_error_field_first() {
        let body = r#"{"error":"DNI duplicado","message":"Bad Request"}"#;
        assert_eq!(extract_error_message(body, "default"), "DNI duplicado");
    }

    #[test]
    fn falls_back_to_message_field() {
        let body = r#"{"message":"Estacionamiento no encontrado"}"#;
        assert_eq!(
            extract_error_message(body, "default"),
            "Estacionamiento no encontrado"
        );
    }

    #[test]
    fn json_without_known_fields_uses_raw_text() {
        let body = r#"{"status":500}"#;
        assert_eq!(extract_error_message(body, "default"), body);
    }

    #[test]
    fn plain_text_body_is_used_verbatim() {
        assert_eq!(
            extract_error_message("El legajo ya existe\n", "default"),
            "El legajo ya existe"
        );
    }

    #[test]
    fn empty_body_uses_default() {
        assert_eq!(
            extract_error_message("   ", "Error al crear el estacionamiento"),
            "Error al crear el estacionamiento"
        );
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let client = ApiClient::with_base_url(
            "http://localhost:8080/backend/",
            Session::anonymous(),
            "test",
            None,
        )
        .unwrap();
        let url = client.endpoint("api/playeros/4").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/backend/api/playeros/4");
    }
}
