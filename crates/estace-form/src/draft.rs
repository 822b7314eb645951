//! In-memory facility record being edited.

use estace_core::{Coordinates, DayRange, Facility, FacilityRequest, HourRange};

use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq)]
pub struct FacilityDraft {
    pub name: String,
    province: String,
    locality: String,
    pub address: String,
    coordinates: Option<Coordinates>,
    pub weekday_range: DayRange,
    pub weekday_hours: HourRange,
    pub weekend_enabled: bool,
    pub weekend_hours: HourRange,
    pub holidays_enabled: bool,
    pub available: bool,
}

impl Default for FacilityDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            province: String::new(),
            locality: String::new(),
            address: String::new(),
            coordinates: None,
            weekday_range: DayRange::default(),
            weekday_hours: HourRange::WEEKDAY_DEFAULT,
            weekend_enabled: false,
            weekend_hours: HourRange::WEEKEND_DEFAULT,
            holidays_enabled: false,
            available: true,
        }
    }
}

impl FacilityDraft {
    /// Draft pre-filled from a stored record.
    ///
    /// Schedule strings that do not parse fall back to the defaults of a
    /// new draft, field by field.
    #[must_use]
    pub fn from_facility(facility: &Facility) -> Self {
        let defaults = Self::default();
        let weekday_range = facility.dias_atencion.parse().unwrap_or_else(|e| {
            tracing::debug!(id = facility.id, error = %e, "unrecognised day range; using default");
            defaults.weekday_range
        });
        let weekday_hours = facility.hra_atencion.parse().unwrap_or_else(|e| {
            tracing::debug!(id = facility.id, error = %e, "unrecognised hours; using default");
            defaults.weekday_hours
        });
        let weekend_hours = facility
            .hora_fin_de_semana
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.weekend_hours);

        Self {
            name: facility.nombre.clone(),
            province: facility.provincia.clone(),
            locality: facility.localidad.clone(),
            address: facility.direccion.clone(),
            coordinates: Some(facility.coordinates()),
            weekday_range,
            weekday_hours,
            weekend_enabled: facility.fin_de_semana_atencion,
            weekend_hours,
            holidays_enabled: facility.dias_feriado_atencion,
            available: facility.disponibilidad,
        }
    }

    #[must_use]
    pub fn province(&self) -> &str {
        &self.province
    }

    #[must_use]
    pub fn locality(&self) -> &str {
        &self.locality
    }

    #[must_use]
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    /// Changing the province always empties the locality, even when the
    /// new name equals the old one.
    pub(crate) fn set_province(&mut self, province: impl Into<String>) {
        self.province = province.into();
        self.locality.clear();
    }

    pub fn set_locality(&mut self, locality: impl Into<String>) {
        self.locality = locality.into();
    }

    pub fn set_coordinates(&mut self, coordinates: Coordinates) {
        self.coordinates = Some(coordinates);
    }

    /// Checks the draft before confirmation and reports the first problem:
    /// required text fields, then coordinates, then weekday hours, then
    /// weekend hours when the weekend is attended.
    ///
    /// # Errors
    ///
    /// The first [`ValidationError`] found, in the order above.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [&self.name, &self.province, &self.locality, &self.address];
        if required.iter().any(|field| field.trim().is_empty()) {
            return Err(ValidationError::MissingRequiredFields);
        }
        if self.coordinates.is_none() {
            return Err(ValidationError::MissingCoordinates);
        }
        if !self.weekday_hours.is_ordered() {
            return Err(ValidationError::WeekdayHoursOrder);
        }
        if self.weekend_enabled && !self.weekend_hours.is_ordered() {
            return Err(ValidationError::WeekendHoursOrder);
        }
        Ok(())
    }

    /// Body for the create/update call. Weekend hours are sent only when
    /// the weekend is attended.
    #[must_use]
    pub fn to_request(&self) -> FacilityRequest {
        FacilityRequest {
            nombre: self.name.clone(),
            provincia: self.province.clone(),
            localidad: self.locality.clone(),
            direccion: self.address.clone(),
            latitud: self.coordinates.map(|c| c.latitude),
            longitud: self.coordinates.map(|c| c.longitude),
            dias_atencion: self.weekday_range.to_string(),
            hra_atencion: self.weekday_hours.to_string(),
            dias_feriado_atencion: self.holidays_enabled,
            fin_de_semana_atencion: self.weekend_enabled,
            hora_fin_de_semana: self
                .weekend_enabled
                .then(|| self.weekend_hours.to_string()),
            disponibilidad: self.available,
        }
    }
}

#[cfg(test)]
#[path = "draft_test.rs"]
mod tests;
