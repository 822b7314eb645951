use estace_api::ApiError;
use thiserror::Error;

/// Local, field-level problems. Messages are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Por favor completa todos los campos obligatorios.")]
    MissingRequiredFields,

    #[error("Debes validar la dirección usando el botón del mapa o seleccionando una ubicación.")]
    MissingCoordinates,

    #[error("El horario de apertura debe ser anterior al de cierre.")]
    WeekdayHoursOrder,

    #[error("El horario de fin de semana (apertura) debe ser anterior al de cierre.")]
    WeekendHoursOrder,

    #[error("Completa la dirección, localidad y provincia.")]
    LocateFieldsIncomplete,

    #[error("No se encontró la ubicación. Intenta ajustar el texto o usa el mapa.")]
    LocationNotFound,

    #[error("Completa los campos obligatorios.")]
    PlayeroFieldsMissing,

    #[error("El DNI debe contener solo números.")]
    DniNotNumeric,

    #[error("Debes asignar un estacionamiento.")]
    FacilityUnassigned,

    #[error("El DNI es inválido. Debe tener exactamente 8 números.")]
    InvalidDni,

    #[error("El nombre y apellido son obligatorios.")]
    NamesRequired,

    #[error("El nombre y el apellido solo pueden contener letras.")]
    NamesLettersOnly,
}

#[derive(Debug, Error)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A save is already in flight; nothing was sent.
    #[error("a save is already in progress")]
    SubmitInProgress,

    /// `confirm` was called without a pending confirmation.
    #[error("there is no pending confirmation")]
    NotConfirming,

    /// The form was already saved and is navigating away.
    #[error("the form has already been saved")]
    AlreadySaved,

    #[error(transparent)]
    Api(#[from] ApiError),
}
