//! Draft Roast - fantasy draft pick commentary over Discord webhooks
//!
//! This library receives draft-pick events, decides whether and in whose
//! voice to react, has a language model write the take (or picks a canned
//! line), and posts the result as a Discord embed.

pub mod api;
pub mod config;
pub mod constants;
pub mod discord;
pub mod error;
pub mod events;
pub mod llm;
pub mod personas;
pub mod services;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::ServiceError;
pub use events::{DraftPickEvent, LeagueType, PickResponse};
pub use services::pipeline::PickPipeline;
