//! App layer - generator state and event processing
//!
//! The App actor receives UI events and network responses,
//! updates state, and emits network commands and render state.

pub mod state;
pub mod actor;
pub mod commands;

pub use state::GeneratorState;
pub use actor::AppActor;
