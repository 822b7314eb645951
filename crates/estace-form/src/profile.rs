//! Owner profile page: view, edit, confirm, save.

use estace_api::{ApiClient, ApiError};
use estace_core::{ProfileUpdate, UserProfile};
use regex::Regex;

use crate::commit::{CommitGate, CommitState};
use crate::error::{FormError, ValidationError};
use crate::feedback::Alert;

const DNI_DIGITS: usize = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub dni: String,
    pub nombre: String,
    pub apellido: String,
    /// Blank keeps the current password.
    pub password: String,
}

impl ProfileFields {
    #[must_use]
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            dni: profile.dni.to_string(),
            nombre: profile.nombre.clone(),
            apellido: profile.apellido.clone(),
            password: String::new(),
        }
    }

    /// DNI first, then blank names, then non-letter characters in names.
    ///
    /// # Errors
    ///
    /// The first [`ValidationError`] found.
    pub fn validate(&self) -> Result<i64, ValidationError> {
        let dni = self.dni.trim();
        if dni.len() != DNI_DIGITS || !dni.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidDni);
        }
        if self.nombre.trim().is_empty() || self.apellido.trim().is_empty() {
            return Err(ValidationError::NamesRequired);
        }
        let letters = Regex::new(r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]+$").expect("valid regex");
        if !letters.is_match(&self.nombre) || !letters.is_match(&self.apellido) {
            return Err(ValidationError::NamesLettersOnly);
        }
        dni.parse().map_err(|_| ValidationError::InvalidDni)
    }
}

#[derive(Debug)]
pub struct ProfileFormController {
    profile: UserProfile,
    fields: ProfileFields,
    editing: bool,
    gate: CommitGate,
    alert: Option<Alert>,
}

impl ProfileFormController {
    #[must_use]
    pub fn new(profile: UserProfile) -> Self {
        Self {
            fields: ProfileFields::from_profile(&profile),
            profile,
            editing: false,
            gate: CommitGate::new(),
            alert: None,
        }
    }

    /// # Errors
    ///
    /// [`FormError::Api`] if the profile cannot be fetched.
    pub async fn load(api: &ApiClient) -> Result<Self, FormError> {
        Ok(Self::new(api.get_profile().await?))
    }

    #[must_use]
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    #[must_use]
    pub fn fields(&self) -> &ProfileFields {
        &self.fields
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    #[must_use]
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> CommitState {
        self.gate.state()
    }

    pub fn begin_edit(&mut self) {
        self.editing = true;
        self.alert = None;
    }

    /// Leaves edit mode and restores the last loaded profile.
    pub fn cancel_edit(&mut self) {
        self.editing = false;
        self.alert = None;
        self.gate.cancel();
        self.fields = ProfileFields::from_profile(&self.profile);
    }

    pub fn edit(&mut self, f: impl FnOnce(&mut ProfileFields)) {
        f(&mut self.fields);
        self.alert = None;
    }

    /// # Errors
    ///
    /// The first [`ValidationError`], or a commit gate error.
    pub fn request_submit(&mut self) -> Result<(), FormError> {
        if let Err(e) = self.fields.validate() {
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
    /// A commit gate error, or a validation error if the fields changed
    /// after confirmation was requested.
    pub fn confirm(&mut self) -> Result<ProfileUpdate, FormError> {
        let dni = self.fields.validate()?;
        self.gate.confirm()?;
        self.alert = None;
        Ok(ProfileUpdate {
            dni,
            nombre: self.fields.nombre.clone(),
            apellido: self.fields.apellido.clone(),
            avatar_url: self.profile.avatar_url.clone(),
            password: Some(self.fields.password.clone()).filter(|p| !p.is_empty()),
        })
    }

    /// Records the update result together with the re-fetched profile.
    ///
    /// # Errors
    ///
    /// [`FormError::Api`] when either call failed.
    pub fn complete(&mut self, outcome: Result<UserProfile, ApiError>) -> Result<(), FormError> {
        match outcome {
            Ok(profile) => {
                tracing::info!(legajo = profile.legajo, "profile updated");
                self.gate.succeed();
                self.gate.reset();
                self.editing = false;
                self.fields = ProfileFields::from_profile(&profile);
                self.profile = profile;
                self.alert = Some(Alert::success("¡Tus datos se actualizaron correctamente!"));
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "profile update failed");
                self.gate.fail();
                self.alert = Some(Alert::error(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Sends the update and re-fetches the profile on success.
    ///
    /// # Errors
    ///
    /// See [`Self::confirm`] and [`Self::complete`].
    pub async fn save(&mut self, api: &ApiClient) -> Result<(), FormError> {
        let update = self.confirm()?;
        let outcome = match api.update_profile(&update).await {
            Ok(()) => api.get_profile().await,
            Err(e) => Err(e),
        };
        self.complete(outcome)
    }
}
