//! Network messages - communication between App and Network layers

use crate::models::{GenerationRequest, GenerationResult};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// POST a prompt to the generation endpoint
    Generate {
        id: u64,
        request: GenerationRequest,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// 2xx response with a decodable body
    Generated {
        id: u64,
        status: u16,
        result: GenerationResult,
        time_ms: u64,
    },
    /// Transport error, non-2xx status, or undecodable body
    Failed {
        id: u64,
        status: Option<u16>,
        reason: String,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Generated { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            NetworkResponse::Generated { status, .. } => Some(*status),
            NetworkResponse::Failed { status, .. } => *status,
        }
    }

    pub fn time_ms(&self) -> u64 {
        match self {
            NetworkResponse::Generated { time_ms, .. } => *time_ms,
            NetworkResponse::Failed { time_ms, .. } => *time_ms,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, NetworkResponse::Generated { .. })
    }
}
