//! # forge-api
//!
//! Typed gateways for the thesis-proposal REST backend.
//!
//! Each gateway translates between the wire format (snake_case field names,
//! Mongo-style `_id`) and the in-memory model from `forge-core`. The
//! translation lives in [`wire`] and nowhere else. Gateways hold no cache,
//! never retry, and surface every failure as a typed [`ApiError`].

pub mod error;
pub mod login;
pub mod thesis;
pub mod user;
pub mod wire;

pub use error::ApiError;
pub use thesis::ThesisGateway;
pub use user::UserGateway;
