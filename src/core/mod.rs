//! Core domain models and presentation logic for the LeadPilot landing site

pub mod chat;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod error;
pub mod leads;
pub mod motion;
#[cfg(test)]
mod tests;
pub mod wizard;

pub use chat::{ChatMessage, MessageRole};
pub use error::DemoError;
#[cfg(feature = "ssr")]
pub use error::ServerError;
pub use leads::{LeadSearchResult, Target};
pub use wizard::{FormData, SubmitOutcome, Wizard};
