//! End-to-end facility form flows against wiremock.

mod common;

use std::time::Duration;

use common::{clients, facility_json};
use estace_api::Session;
use estace_core::{Coordinates, Hour, HourRange};
use estace_form::{
    routes, CommitState, FacilityFormController, FormError, PinState, ValidationError,
};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn hour(s: &str) -> Hour {
    s.parse().unwrap()
}

async fn mount_localities(server: &MockServer, province: &str) {
    Mock::given(method("GET"))
        .and(path("/localidades"))
        .and(query_param("provincia", province))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "localidades": [ { "id": "1", "nombre": "X" } ]
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn locate_then_confirm_creates_exactly_once() {
    let server = MockServer::start().await;
    mount_localities(&server, "Y").await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Av. 9 de Julio 100, X, Y, Argentina"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "lat": "-34.6", "lon": "-58.4", "display_name": "Av. 9 de Julio" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/estacionamientos"))
        .and(body_partial_json(serde_json::json!({
            "direccion": "Av. 9 de Julio 100",
            "latitud": -34.6,
            "longitud": -58.4,
            "diasAtencion": "Lunes a Viernes",
            "hraAtencion": "08:00 - 20:00",
            "horaFinDeSemana": null
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(facility_json(7)))
        .expect(1)
        .mount(&server)
        .await;

    let c = clients(&server.uri(), Session::with_token("tok"));
    let mut form = FacilityFormController::new();

    form.select_province(&c.georef, "Y").await;
    assert_eq!(form.localities().len(), 1);
    form.set_locality("X");
    form.edit(|d| {
        d.name = "Playa Obelisco".into();
        d.address = "Av. 9 de Julio 100".into();
    });

    form.locate(&c.nominatim).await.expect("locate should succeed");
    assert_eq!(form.draft().coordinates(), Some(Coordinates::new(-34.6, -58.4)));
    assert_eq!(form.map().state(), PinState::Placed(Coordinates::new(-34.6, -58.4)));

    form.request_submit().expect("valid draft");
    assert_eq!(form.state(), CommitState::ConfirmPending);

    let pending = form.confirm().expect("first confirm");
    assert!(matches!(form.confirm(), Err(FormError::SubmitInProgress)));
    let outcome = pending.send(&c.api).await;
    let redirect = form.complete(outcome).expect("save should succeed");

    assert_eq!(redirect.route, routes::FACILITIES);
    assert_eq!(redirect.after, Duration::from_secs(2));
    assert_eq!(form.state(), CommitState::Succeeded);
    assert_eq!(form.facility_id(), Some(7));
}

#[tokio::test]
async fn inverted_hours_are_rejected_without_any_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(facility_json(1)))
        .expect(0)
        .mount(&server)
        .await;

    let c = clients(&server.uri(), Session::with_token("tok"));
    let mut form = FacilityFormController::for_facility(
        &serde_json::from_value(facility_json(3)).unwrap(),
    );
    form.edit(|d| d.weekday_hours = HourRange::new(hour("10:00"), hour("09:00")));

    let err = form.request_submit().unwrap_err();
    assert!(matches!(
        err,
        FormError::Validation(ValidationError::WeekdayHoursOrder)
    ));
    assert_eq!(form.state(), CommitState::Editing);
    assert!(matches!(form.save(&c.api).await, Err(FormError::NotConfirming)));
}

#[tokio::test]
async fn locate_miss_reports_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let c = clients(&server.uri(), Session::anonymous());
    let mut form = FacilityFormController::for_facility(
        &serde_json::from_value(facility_json(3)).unwrap(),
    );
    let before = form.draft().coordinates();

    let err = form.locate(&c.nominatim).await.unwrap_err();
    assert!(matches!(
        err,
        FormError::Validation(ValidationError::LocationNotFound)
    ));
    assert_eq!(form.draft().coordinates(), before);
}

#[tokio::test]
async fn drag_keeps_coordinates_when_reverse_geocode_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let c = clients(&server.uri(), Session::anonymous());
    let mut form = FacilityFormController::for_facility(
        &serde_json::from_value(facility_json(3)).unwrap(),
    );

    form.handle_marker_drag(&c.nominatim, -10.0, -60.0).await;
    assert_eq!(form.draft().coordinates(), Some(Coordinates::new(-10.0, -60.0)));
    assert_eq!(form.draft().address, "Córdoba 1500");
}

#[tokio::test]
async fn drag_rewrites_address_from_reverse_geocode() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/reverse"))
        .and(query_param("lat", "-10"))
        .and(query_param("lon", "-60"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "address": { "road": "Ruta 9", "house_number": "" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let c = clients(&server.uri(), Session::anonymous());
    let mut form = FacilityFormController::for_facility(
        &serde_json::from_value(facility_json(3)).unwrap(),
    );

    form.handle_marker_drag(&c.nominatim, -10.0, -60.0).await;
    assert_eq!(form.draft().address, "Ruta 9");
}

#[tokio::test]
async fn unedited_record_is_saved_back_with_identical_schedule() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/estacionamientos/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(facility_json(42)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/api/estacionamientos/42"))
        .and(body_partial_json(serde_json::json!({
            "diasAtencion": "Martes a Sábado",
            "hraAtencion": "08:00 - 20:00",
            "horaFinDeSemana": "09:00 - 13:00",
            "finDeSemanaAtencion": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(facility_json(42)))
        .expect(1)
        .mount(&server)
        .await;

    let c = clients(&server.uri(), Session::with_token("tok"));
    let mut form = FacilityFormController::open_for_edit(&c.api, 42)
        .await
        .expect("should load");
    assert_eq!(form.map().marker(), Some(Coordinates::new(-32.9468, -60.6393)));

    form.request_submit().expect("loaded record is valid");
    let redirect = form.save(&c.api).await.expect("update should succeed");
    assert_eq!(redirect.route, "/estacionamientos");
}

#[tokio::test]
async fn server_rejection_returns_to_editing_with_message() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/estacionamientos/3"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "error": "Nombre duplicado" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let c = clients(&server.uri(), Session::with_token("tok"));
    let mut form = FacilityFormController::for_facility(
        &serde_json::from_value(facility_json(3)).unwrap(),
    );
    form.request_submit().unwrap();
    let err = form.save(&c.api).await.unwrap_err();

    assert!(matches!(err, FormError::Api(_)));
    assert_eq!(form.state(), CommitState::Editing);
    assert_eq!(form.alert().map(|a| a.text.as_str()), Some("Nombre duplicado"));
    assert!(form.redirect().is_none());
}

#[tokio::test]
async fn init_loads_provinces_and_localities_for_loaded_record() {
    let server = MockServer::start().await;
    mount_localities(&server, "Santa Fe").await;

    Mock::given(method("GET"))
        .and(path("/provincias"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "provincias": [
                { "id": "82", "nombre": "Santa Fe" },
                { "id": "14", "nombre": "Córdoba" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let c = clients(&server.uri(), Session::anonymous());
    let mut form = FacilityFormController::for_facility(
        &serde_json::from_value(facility_json(3)).unwrap(),
    );
    form.init(&c.georef).await;

    let names: Vec<&str> = form.provinces().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Córdoba", "Santa Fe"]);
    assert_eq!(form.localities().len(), 1);
    assert_eq!(form.draft().locality(), "Rosario");
}

#[tokio::test]
async fn hours_inverted_after_confirmation_request_never_reach_the_api() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(facility_json(3)))
        .expect(0)
        .mount(&server)
        .await;

    let c = clients(&server.uri(), Session::with_token("tok"));
    let mut form = FacilityFormController::for_facility(
        &serde_json::from_value(facility_json(3)).unwrap(),
    );
    form.request_submit().expect("loaded record is valid");
    form.edit(|d| d.weekday_hours = HourRange::new(hour("10:00"), hour("09:00")));

    let err = form.save(&c.api).await.unwrap_err();
    assert!(matches!(
        err,
        FormError::Validation(ValidationError::WeekdayHoursOrder)
    ));
    assert_eq!(form.state(), CommitState::Editing);
}

#[tokio::test]
async fn blank_name_after_confirmation_request_never_reaches_the_api() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(facility_json(1)))
        .expect(0)
        .mount(&server)
        .await;

    let c = clients(&server.uri(), Session::with_token("tok"));
    let mut form = FacilityFormController::new();
    form.begin_province_change("Santa Fe");
    form.set_locality("Rosario");
    form.edit(|d| {
        d.name = "Playa Centro".into();
        d.address = "Córdoba 1500".into();
    });
    form.map_mut().place(Coordinates::new(-32.9468, -60.6393));
    form.drag_marker(-32.9468, -60.6393).expect("pin is placed");
    form.request_submit().expect("valid draft");
    form.edit(|d| d.name.clear());

    assert!(matches!(
        form.save(&c.api).await,
        Err(FormError::Validation(ValidationError::MissingRequiredFields))
    ));
}
