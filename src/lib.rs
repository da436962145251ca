//! # imagegen-tui
//!
//! A terminal front-end for text-to-image generation backends: type a prompt,
//! post it to a generation endpoint, see the returned image URL.
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (Generator state machine)
//! - Network Layer (Tokio runtime)

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod ui;
pub mod messages;
pub mod app;
pub mod network;

// Re-export commonly used types
pub use config::{Overrides, Settings};
pub use error::{ConfigError, GenerateError};
pub use models::{GenerationDefaults, GenerationRequest, GenerationResult};
pub use messages::{ActiveView, UiEvent, NetworkCommand, NetworkResponse, RenderState};
pub use app::{GeneratorState, AppActor};
pub use network::NetworkActor;
