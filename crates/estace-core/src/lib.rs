//! Domain vocabulary shared by every estace crate.
//!
//! Holds the wire shapes of the persistence API (facilities, playeros, user
//! profiles), the schedule vocabulary used by the facility form, and the
//! environment-driven [`AppConfig`].

pub mod app_config;
pub mod config;
pub mod facility;
pub mod playero;
pub mod schedule;
pub mod user;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use facility::{Coordinates, Facility, FacilityRequest};
pub use playero::{Playero, PlayeroRequest, PLAYERO_ROLE};
pub use schedule::{DayRange, Hour, HourRange, ScheduleError, Weekday};
pub use user::{AuthResponse, LoginRequest, ProfileUpdate, Role, UserProfile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
