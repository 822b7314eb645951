//! Integration tests for login, profile and playero endpoints.

mod common;

use common::test_client;
use estace_api::{ApiError, Session};
use estace_core::{PlayeroRequest, ProfileUpdate, Role, PLAYERO_ROLE};
use wiremock::matchers::{bearer_token, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn login_stores_token_in_session() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/usuarios/login"))
        .and(body_json(serde_json::json!({ "legajo": 1001, "password": "s3cret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "legajo": 1001,
            "dni": 30111222,
            "nombre": "Lucía",
            "apellido": "Gómez",
            "tipo": "Dueño",
            "token": "fresh-token"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = Session::anonymous();
    let client = test_client(&server.uri(), session.clone());
    let auth = client.login(1001, "s3cret").await.expect("should log in");

    assert_eq!(auth.tipo, Role::Dueno);
    assert_eq!(session.token().as_deref(), Some("fresh-token"));
    assert_eq!(session.user().unwrap().legajo, 1001);

    client.logout();
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn login_with_bad_credentials_reports_default_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/usuarios/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let session = Session::anonymous();
    let client = test_client(&server.uri(), session.clone());
    let err = client.login(1, "wrong").await.unwrap_err();
    assert!(matches!(err, ApiError::Server { status: 401, .. }));
    assert_eq!(err.to_string(), "Error en el login: Credenciales inválidas");
    assert!(!session.is_authenticated());
}

#[tokio::test]
async fn get_and_update_profile() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/usuarios/perfil"))
        .and(bearer_token("tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "legajo": 7,
            "dni": 28999111,
            "nombre": "Raúl",
            "apellido": "Ibáñez",
            "avatarUrl": null,
            "tipo": "Dueño"
        })))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/usuarios/perfil"))
        .and(body_json(serde_json::json!({
            "dni": 28999111,
            "nombre": "Raúl",
            "apellido": "Ibáñez Paz"
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), Session::with_token("tok"));
    let profile = client.get_profile().await.expect("should fetch profile");
    assert_eq!(profile.display_name(), "Raúl Ibáñez");

    client
        .update_profile(&ProfileUpdate {
            dni: profile.dni,
            nombre: profile.nombre.clone(),
            apellido: "Ibáñez Paz".into(),
            avatar_url: None,
            password: None,
        })
        .await
        .expect("empty 204 body should be accepted");
}

#[tokio::test]
async fn playero_crud_round() {
    let server = MockServer::start().await;
    let playero = serde_json::json!({
        "legajo": 55,
        "dni": 40123456,
        "nombre": "Tomás",
        "apellido": "Ruiz",
        "nombreEstacionamiento": "Playa Centro",
        "estacionamientoId": 9,
        "activo": true
    });

    Mock::given(method("GET"))
        .and(path("/api/playeros"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([playero.clone()])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/playeros/55"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&playero))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/playeros"))
        .and(body_json(serde_json::json!({
            "dni": 40123456,
            "nombre": "Tomás",
            "apellido": "Ruiz",
            "password": "inicial",
            "rol": "Playero",
            "estacionamientoId": 9,
            "activo": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(&playero))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/playeros/55"))
        .respond_with(ResponseTemplate::new(409).set_body_string("DNI ya registrado"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri(), Session::with_token("tok"));

    let all = client.list_playeros().await.unwrap();
    assert_eq!(all[0].nombre_estacionamiento, "Playa Centro");
    assert_eq!(client.get_playero(55).await.unwrap().estacionamiento_id, Some(9));

    let mut request = PlayeroRequest {
        dni: 40_123_456,
        nombre: "Tomás".into(),
        apellido: "Ruiz".into(),
        password: Some("inicial".into()),
        rol: PLAYERO_ROLE.into(),
        estacionamiento_id: 9,
        activo: true,
    };
    assert_eq!(client.create_playero(&request).await.unwrap().legajo, 55);

    request.password = None;
    let err = client.update_playero(55, &request).await.unwrap_err();
    assert_eq!(err.to_string(), "DNI ya registrado");
}
