//! Create/edit form for playeros and the list page search.

use estace_api::{ApiClient, ApiError};
use estace_core::{Facility, Playero, PlayeroRequest, PLAYERO_ROLE};

use crate::commit::{CommitGate, CommitState};
use crate::error::{FormError, ValidationError};
use crate::feedback::{routes, Alert, AlertKind, Redirect};

/// Raw field values as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayeroFields {
    pub dni: String,
    pub nombre: String,
    pub apellido: String,
    /// Blank keeps the current password on update.
    pub password: String,
    pub estacionamiento_id: Option<i64>,
    pub activo: bool,
}

impl Default for PlayeroFields {
    fn default() -> Self {
        Self {
            dni: String::new(),
            nombre: String::new(),
            apellido: String::new(),
            password: String::new(),
            estacionamiento_id: None,
            activo: true,
        }
    }
}

impl PlayeroFields {
    #[must_use]
    pub fn from_playero(playero: &Playero) -> Self {
        Self {
            dni: playero.dni.to_string(),
            nombre: playero.nombre.clone(),
            apellido: playero.apellido.clone(),
            password: String::new(),
            estacionamiento_id: playero.estacionamiento_id,
            activo: playero.activo,
        }
    }

    /// Builds the request body, checking required fields first and the
    /// facility assignment second.
    ///
    /// # Errors
    ///
    /// The first [`ValidationError`] found.
    pub fn to_request(&self) -> Result<PlayeroRequest, ValidationError> {
        let dni = self.dni.trim();
        if dni.is_empty() || self.nombre.trim().is_empty() || self.apellido.trim().is_empty() {
            return Err(ValidationError::PlayeroFieldsMissing);
        }
        let Some(estacionamiento_id) = self.estacionamiento_id else {
            return Err(ValidationError::FacilityUnassigned);
        };
        if !dni.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::DniNotNumeric);
        }
        let dni = dni.parse().map_err(|_| ValidationError::DniNotNumeric)?;

        Ok(PlayeroRequest {
            dni,
            nombre: self.nombre.clone(),
            apellido: self.apellido.clone(),
            password: Some(self.password.clone()).filter(|p| !p.is_empty()),
            rol: PLAYERO_ROLE.to_string(),
            estacionamiento_id,
            activo: self.activo,
        })
    }
}

#[derive(Debug, Default)]
pub struct PlayeroFormController {
    legajo: Option<i64>,
    fields: PlayeroFields,
    facilities: Vec<Facility>,
    gate: CommitGate,
    alert: Option<Alert>,
    redirect: Option<Redirect>,
}

impl PlayeroFormController {
    #[must_use]
    pub fn new(facilities: Vec<Facility>) -> Self {
        Self {
            facilities,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn for_playero(playero: &Playero, facilities: Vec<Facility>) -> Self {
        Self {
            legajo: Some(playero.legajo),
            fields: PlayeroFields::from_playero(playero),
            facilities,
            ..Self::default()
        }
    }

    /// Loads the owner's facilities for the selector and, when `legajo` is
    /// given, the playero being edited.
    ///
    /// # Errors
    ///
    /// [`FormError::Api`] if either fetch fails.
    pub async fn load(api: &ApiClient, legajo: Option<i64>) -> Result<Self, FormError> {
        let facilities = api.list_my_facilities().await?;
        match legajo {
            Some(legajo) => {
                let playero = api.get_playero(legajo).await?;
                Ok(Self::for_playero(&playero, facilities))
            }
            None => Ok(Self::new(facilities)),
        }
    }

    #[must_use]
    pub fn legajo(&self) -> Option<i64> {
        self.legajo
    }

    #[must_use]
    pub fn fields(&self) -> &PlayeroFields {
        &self.fields
    }

    #[must_use]
    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    #[must_use]
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> CommitState {
        self.gate.state()
    }

    #[must_use]
    pub fn redirect(&self) -> Option<Redirect> {
        self.redirect
    }

    pub fn edit(&mut self, f: impl FnOnce(&mut PlayeroFields)) {
        f(&mut self.fields);
        self.alert = None;
    }

    /// # Errors
    ///
    /// The first [`ValidationError`], or a commit gate error.
    pub fn request_submit(&mut self) -> Result<(), FormError> {
        if let Err(e) = self.fields.to_request() {
            self.alert = Some(Alert::error(e.to_string()));
            return Err(e.into());
        }
        self.gate.request_confirmation()
    }

    pub fn cancel_confirmation(&mut self) {
        self.gate.cancel();
    }

    /// # Errors
    ///
    /// A commit gate error, or a validation error if the fields were edited
    /// into an invalid state after confirmation was requested.
    pub fn confirm(&mut self) -> Result<PlayeroRequest, FormError> {
        let request = self.fields.to_request()?;
        self.gate.confirm()?;
        Ok(request)
    }

    /// # Errors
    ///
    /// [`FormError::Api`] when the save failed.
    pub fn complete(&mut self, outcome: Result<Playero, ApiError>) -> Result<Redirect, FormError> {
        match outcome {
            Ok(saved) => {
                tracing::info!(legajo = saved.legajo, "playero saved");
                self.gate.succeed();
                let text = if self.legajo.is_some() {
                    "Playero Actualizado correctamente."
                } else {
                    "Playero Creado correctamente."
                };
                self.alert = Some(Alert::success(text));
                let redirect = Redirect::after_success(routes::PLAYEROS);
                self.redirect = Some(redirect);
                Ok(redirect)
            }
            Err(e) => {
                tracing::warn!(error = %e, "playero save failed");
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
        let request = self.confirm()?;
        let outcome = match self.legajo {
            Some(legajo) => api.update_playero(legajo, &request).await,
            None => api.create_playero(&request).await,
        };
        self.complete(outcome)
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.alert.as_ref().is_some_and(|a| a.kind == AlertKind::Error)
    }
}

/// Playeros whose nombre or apellido contains `term` ignoring case, or
/// whose DNI contains it. A blank term keeps everyone.
#[must_use]
pub fn filter_playeros<'a>(playeros: &'a [Playero], term: &str) -> Vec<&'a Playero> {
    let term = term.trim();
    if term.is_empty() {
        return playeros.iter().collect();
    }
    let needle = term.to_lowercase();
    playeros
        .iter()
        .filter(|p| {
            p.nombre.to_lowercase().contains(&needle)
                || p.apellido.to_lowercase().contains(&needle)
                || p.dni.to_string().contains(term)
        })
        .collect()
}
