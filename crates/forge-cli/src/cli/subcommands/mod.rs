pub mod auth;
pub mod thesis;

pub use auth::AuthCommands;
pub use thesis::{ThesisCommands, ThesisNewArgs};
