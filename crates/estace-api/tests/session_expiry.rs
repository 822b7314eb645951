//! The persistence client's single session interceptor.

mod common;

use common::test_client;
use estace_api::{ApiError, Session};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn missing_token_fails_without_sending_a_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), Session::anonymous());
    let err = client.list_my_facilities().await.unwrap_err();
    assert!(matches!(err, ApiError::NotAuthenticated));
    assert!(err.requires_login());
}

#[tokio::test]
async fn unauthorized_response_clears_shared_session() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/playeros"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token vencido"))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::with_token("stale");
    let client = test_client(&server.uri(), session.clone());

    let err = client.list_playeros().await.unwrap_err();
    assert!(matches!(err, ApiError::SessionExpired));
    assert!(!session.is_authenticated());

    // The next call fails locally; the mock's expect(1) verifies no second request.
    let err = client.list_playeros().await.unwrap_err();
    assert!(matches!(err, ApiError::NotAuthenticated));
}

#[tokio::test]
async fn forbidden_response_also_expires_session() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/usuarios/perfil"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let session = Session::with_token("stale");
    let client = test_client(&server.uri(), session.clone());
    let err = client.get_profile().await.unwrap_err();
    assert!(err.requires_login());
    assert!(session.token().is_none());
}

#[tokio::test]
async fn other_errors_keep_the_session() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/estacionamientos/1"))
        .respond_with(ResponseTemplate::new(404).set_body_string("No encontrado"))
        .mount(&server)
        .await;

    let session = Session::with_token("fine");
    let client = test_client(&server.uri(), session.clone());
    let err = client.get_facility(1).await.unwrap_err();
    assert!(matches!(err, ApiError::Server { status: 404, .. }));
    assert!(session.is_authenticated());
}
