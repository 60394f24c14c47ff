//! # forge-core
//!
//! Core types for Thesis Forge.
//!
//! This crate provides the domain model shared across all Forge crates:
//! - `Thesis` and `ThesisDraft` (the create/update submission shape)
//! - `User` profile type
//! - The `Rating` newtype, clamped to the 1..=5 scale
//! - Client-side draft validation, run before anything hits the network

pub mod rating;
pub mod thesis;
pub mod user;
pub mod validate;

pub use rating::Rating;
pub use thesis::{Thesis, ThesisDraft};
pub use user::User;
pub use validate::{InvalidDraft, ValidationIssue};
