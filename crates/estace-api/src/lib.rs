//! Client for the estace persistence API.
//!
//! Every authenticated call goes through [`ApiClient`], which reads the bearer
//! token from an injected [`Session`] and handles expiry in one place: a
//! missing token fails before any request is sent, and a 401/403 response
//! clears the session.

pub mod client;
pub mod error;
pub mod facilities;
pub mod playeros;
pub mod session;
pub mod users;

pub use client::ApiClient;
pub use error::ApiError;
pub use session::{Session, SessionStore};
