pub mod auth;
pub mod thesis;
