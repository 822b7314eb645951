//! Form controllers for the estace administration screens.
//!
//! Each controller owns the in-memory draft for one route and exposes its
//! state transitions as plain synchronous methods; the `async` methods are
//! thin wrappers that perform the network call and feed the outcome back in.
//! Responses can therefore be applied in whatever order they arrive.
//!
//! Every mutating save passes through a [`CommitGate`]; a second confirm
//! while a save is in flight is an error and sends nothing.

pub mod commit;
pub mod draft;
pub mod error;
pub mod facility;
pub mod feedback;
pub mod guard;
pub mod map_pin;
pub mod playero;
pub mod profile;

pub use commit::{CommitGate, CommitState};
pub use draft::FacilityDraft;
pub use error::{FormError, ValidationError};
pub use facility::{FacilityFormController, PendingFacilitySave};
pub use feedback::{routes, Alert, AlertKind, Redirect};
pub use guard::{authorize, Access, OWNER_ONLY};
pub use map_pin::{MapPin, MarkerMoved, PinState, Viewport};
pub use playero::{filter_playeros, PlayeroFields, PlayeroFormController};
pub use profile::{ProfileFields, ProfileFormController};
