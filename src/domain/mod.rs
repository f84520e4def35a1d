// Domain module - Shared types and errors
pub mod config;
pub mod error;

pub use config::{GlobalConfig, LinkConfig, MorseComConfig};
pub use error::{MorseComError, MorseComResult};
