//! Controller for the create/edit facility route.
//!
//! Geocoding and persistence are split into a synchronous `apply_*` step and
//! an `async` convenience wrapper. Results are applied in the order they
//! arrive; a slow reverse geocode that lands after a newer one simply
//! overwrites it.

use estace_api::{ApiClient, ApiError};
use estace_core::{Facility, FacilityRequest};
use estace_geo::{GeoPlace, GeocodeMatch, GeorefClient, NominatimClient, ReverseGeocodeResult};

use crate::commit::{CommitGate, CommitState};
use crate::draft::FacilityDraft;
use crate::error::{FormError, ValidationError};
use crate::feedback::{routes, Alert, AlertKind, Redirect};
use crate::map_pin::{MapPin, MarkerMoved};

#[derive(Debug, Default)]
pub struct FacilityFormController {
    facility_id: Option<i64>,
    draft: FacilityDraft,
    map: MapPin,
    gate: CommitGate,
    provinces: Vec<GeoPlace>,
    localities: Vec<GeoPlace>,
    alert: Option<Alert>,
    redirect: Option<Redirect>,
}

/// A create or update that passed the commit gate and must be sent once.
#[derive(Debug, Clone)]
pub struct PendingFacilitySave {
    pub facility_id: Option<i64>,
    pub request: FacilityRequest,
}

impl PendingFacilitySave {
    /// # Errors
    ///
    /// Whatever the persistence call returns.
    pub async fn send(&self, api: &ApiClient) -> Result<Facility, ApiError> {
        match self.facility_id {
            Some(id) => api.update_facility(id, &self.request).await,
            None => api.create_facility(&self.request).await,
        }
    }
}

impl FacilityFormController {
    /// Empty form for a new facility.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from `facility`, with the pin on its stored location.
    #[must_use]
    pub fn for_facility(facility: &Facility) -> Self {
        let draft = FacilityDraft::from_facility(facility);
        let mut map = MapPin::new();
        if let Some(coordinates) = draft.coordinates() {
            map.place(coordinates);
        }
        Self {
            facility_id: Some(facility.id),
            draft,
            map,
            ..Self::default()
        }
    }

    /// Fetches facility `id` and opens it for editing.
    ///
    /// # Errors
    ///
    /// [`FormError::Api`] if the record cannot be fetched.
    pub async fn open_for_edit(api: &ApiClient, id: i64) -> Result<Self, FormError> {
        let facility = api.get_facility(id).await?;
        tracing::debug!(id, "facility loaded for editing");
        Ok(Self::for_facility(&facility))
    }

    /// Loads the province selector, and the locality selector too when the
    /// draft already names a province.
    pub async fn init(&mut self, georef: &GeorefClient) {
        self.provinces = georef.list_provinces().await;
        if !self.draft.province().is_empty() {
            self.localities = georef.list_localities(self.draft.province()).await;
        }
    }

    #[must_use]
    pub fn facility_id(&self) -> Option<i64> {
        self.facility_id
    }

    #[must_use]
    pub fn draft(&self) -> &FacilityDraft {
        &self.draft
    }

    #[must_use]
    pub fn map(&self) -> &MapPin {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut MapPin {
        &mut self.map
    }

    #[must_use]
    pub fn provinces(&self) -> &[GeoPlace] {
        &self.provinces
    }

    #[must_use]
    pub fn localities(&self) -> &[GeoPlace] {
        &self.localities
    }

    #[must_use]
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> CommitState {
        self.gate.state()
    }

    /// Navigation scheduled by a successful save.
    #[must_use]
    pub fn redirect(&self) -> Option<Redirect> {
        self.redirect
    }

    /// Applies a field edit to the draft.
    pub fn edit(&mut self, f: impl FnOnce(&mut FacilityDraft)) {
        f(&mut self.draft);
        self.clear_error();
    }

    pub fn set_locality(&mut self, locality: impl Into<String>) {
        self.draft.set_locality(locality);
        self.clear_error();
    }

    /// Sets the province, empties the locality and the locality list.
    /// The caller is expected to follow with [`Self::apply_localities`].
    pub fn begin_province_change(&mut self, province: impl Into<String>) {
        self.draft.set_province(province);
        self.localities.clear();
        self.clear_error();
    }

    /// Replaces the locality list wholesale.
    pub fn apply_localities(&mut self, localities: Vec<GeoPlace>) {
        self.localities = localities;
    }

    pub async fn select_province(&mut self, georef: &GeorefClient, province: &str) {
        self.begin_province_change(province);
        let localities = georef.list_localities(province).await;
        self.apply_localities(localities);
    }

    /// Checks that address, locality and province are filled in before a
    /// forward geocode.
    ///
    /// # Errors
    ///
    /// [`ValidationError::LocateFieldsIncomplete`] otherwise.
    pub fn begin_locate(&mut self) -> Result<String, FormError> {
        let d = &self.draft;
        let incomplete = [d.address.as_str(), d.locality(), d.province()]
            .iter()
            .any(|f| f.trim().is_empty());
        if incomplete {
            return Err(self.reject(ValidationError::LocateFieldsIncomplete));
        }
        Ok(self.draft.address.clone())
    }

    /// Adopts a forward geocode outcome. A miss leaves the coordinates as
    /// they were.
    ///
    /// # Errors
    ///
    /// [`ValidationError::LocationNotFound`] when `found` is `None`.
    pub fn apply_locate_result(&mut self, found: Option<GeocodeMatch>) -> Result<(), FormError> {
        let Some(found) = found else {
            return Err(self.reject(ValidationError::LocationNotFound));
        };
        tracing::debug!(
            lat = found.coordinates.latitude,
            lon = found.coordinates.longitude,
            "address located"
        );
        self.draft.set_coordinates(found.coordinates);
        self.map.place(found.coordinates);
        self.clear_error();
        Ok(())
    }

    /// Forward geocodes the typed address and places the pin on the match.
    ///
    /// # Errors
    ///
    /// See [`Self::begin_locate`] and [`Self::apply_locate_result`].
    pub async fn locate(&mut self, nominatim: &NominatimClient) -> Result<(), FormError> {
        let address = self.begin_locate()?;
        let found = nominatim
            .forward_geocode(&address, self.draft.locality(), self.draft.province())
            .await;
        self.apply_locate_result(found)
    }

    /// Marker released at (`latitude`, `longitude`). The coordinates are
    /// adopted immediately; `None` means the pin was not placed yet.
    pub fn drag_marker(&mut self, latitude: f64, longitude: f64) -> Option<MarkerMoved> {
        let moved = self.map.drag_end(latitude, longitude)?;
        self.draft.set_coordinates(moved.coordinates);
        self.clear_error();
        Some(moved)
    }

    /// Patches the address from a reverse geocode. Coordinates are never
    /// touched, whatever the outcome.
    pub fn apply_reverse_geocode(&mut self, result: Option<ReverseGeocodeResult>) {
        if let Some(line) = result.as_ref().and_then(ReverseGeocodeResult::address_line) {
            self.draft.address = line;
        }
    }

    pub async fn handle_marker_drag(
        &mut self,
        nominatim: &NominatimClient,
        latitude: f64,
        longitude: f64,
    ) {
        let Some(moved) = self.drag_marker(latitude, longitude) else {
            return;
        };
        let result = nominatim.reverse_geocode(moved.coordinates).await;
        self.apply_reverse_geocode(result);
    }

    /// Validates the draft and, if it passes, asks for confirmation. Never
    /// touches the network.
    ///
    /// # Errors
    ///
    /// The first [`ValidationError`], or a commit gate error.
    pub fn request_submit(&mut self) -> Result<(), FormError> {
        if let Err(e) = self.draft.validate() {
            return Err(self.reject(e));
        }
        self.gate.request_confirmation()
    }

    pub fn cancel_confirmation(&mut self) {
        self.gate.cancel();
    }

    /// Passes the commit gate and hands back the request to send.
    ///
    /// The draft is validated again, since it may have been edited while
    /// the confirmation was pending; a failure returns the form to editing.
    ///
    /// # Errors
    ///
    /// The first [`ValidationError`], [`FormError::NotConfirming`] or
    /// [`FormError::SubmitInProgress`].
    pub fn confirm(&mut self) -> Result<PendingFacilitySave, FormError> {
        if self.gate.state() == CommitState::ConfirmPending {
            if let Err(e) = self.draft.validate() {
                self.gate.cancel();
                return Err(self.reject(e));
            }
        }
        self.gate.confirm()?;
        self.alert = None;
        Ok(PendingFacilitySave {
            facility_id: self.facility_id,
            request: self.draft.to_request(),
        })
    }

    /// Records the outcome of a save started by [`Self::confirm`].
    ///
    /// # Errors
    ///
    /// [`FormError::Api`] when the save failed; the draft is kept and the
    /// form is editable again.
    pub fn complete(&mut self, outcome: Result<Facility, ApiError>) -> Result<Redirect, FormError> {
        match outcome {
            Ok(saved) => {
                tracing::info!(id = saved.id, nombre = %saved.nombre, "facility saved");
                self.gate.succeed();
                let text = if self.facility_id.is_none() {
                    "¡Estacionamiento creado con éxito!"
                } else {
                    "¡Estacionamiento actualizado con éxito!"
                };
                self.facility_id = Some(saved.id);
                self.alert = Some(Alert::success(text));
                let redirect = Redirect::after_success(routes::FACILITIES);
                self.redirect = Some(redirect);
                Ok(redirect)
            }
            Err(e) => {
                tracing::warn!(error = %e, "facility save failed");
                self.gate.fail();
                self.alert = Some(Alert::error(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Confirms and sends in one step.
    ///
    /// # Errors
    ///
    /// See [`Self::confirm`] and [`Self::complete`].
    pub async fn save(&mut self, api: &ApiClient) -> Result<Redirect, FormError> {
        let pending = self.confirm()?;
        let outcome = pending.send(api).await;
        self.complete(outcome)
    }

    fn reject(&mut self, error: ValidationError) -> FormError {
        self.alert = Some(Alert::error(error.to_string()));
        FormError::Validation(error)
    }

    fn clear_error(&mut self) {
        if self
            .alert
            .as_ref()
            .is_some_and(|a| a.kind == AlertKind::Error)
        {
            self.alert = None;
        }
    }
}
