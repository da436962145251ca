//! Network layer - generation request execution
//!
//! The Network actor receives generate commands and sends back responses.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
