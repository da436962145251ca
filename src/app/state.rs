//! Generator state - pure data structure with no I/O logic
//!
//! A submit moves through three transitions: [`GeneratorState::begin_submit`]
//! when the user asks for an image, then either
//! [`GeneratorState::complete_success`] or [`GeneratorState::complete_failure`]
//! once the request settles. Both completions end in `settle`, which clears the
//! loading flag.

use crate::config::Settings;
use crate::error::GenerateError;
use crate::messages::ui_events::InputMode;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState};
use crate::models::{GenerationDefaults, GenerationRequest, GenerationResult, ResponseMeta};

/// Main generator state - pure data, no I/O
#[derive(Debug, Clone)]
pub struct GeneratorState {
    // Prompt form
    pub prompt: String,
    pub cursor_position: usize,
    pub input_mode: InputMode,

    // Generation
    pub image_url: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub meta: ResponseMeta,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,

    // Request target
    pub endpoint: String,
    pub defaults: GenerationDefaults,

    // Popups
    pub show_help: bool,
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl GeneratorState {
    pub fn new(endpoint: impl Into<String>, defaults: GenerationDefaults) -> Self {
        GeneratorState {
            prompt: String::new(),
            cursor_position: 0,
            input_mode: InputMode::Normal,
            image_url: None,
            is_loading: false,
            error: None,
            meta: ResponseMeta::default(),
            next_request_id: 1,
            pending_request_id: None,
            endpoint: endpoint.into(),
            defaults,
            show_help: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.endpoint.clone(), settings.defaults.clone())
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Submit-start transition.
    ///
    /// An empty prompt records the validation message and leaves everything
    /// else untouched. Otherwise the previous error is cleared and loading
    /// begins; the previous image stays until the new result arrives.
    pub fn begin_submit(&mut self) -> Result<GenerationRequest, GenerateError> {
        if self.prompt.is_empty() {
            let err = GenerateError::EmptyPrompt;
            self.error = Some(err.to_string());
            return Err(err);
        }

        self.error = None;
        self.is_loading = true;
        Ok(GenerationRequest::new(self.prompt.clone()).with_params(self.defaults.clone()))
    }

    /// Success transition: the returned URL replaces whatever was displayed
    pub fn complete_success(&mut self, result: GenerationResult) {
        self.image_url = result.resolve_image_url(&self.endpoint);
        self.error = None;
        self.settle();
    }

    /// Failure transition: generic message, image left as it was
    pub fn complete_failure(&mut self) {
        self.error = Some(GenerateError::RequestFailed.to_string());
        self.settle();
    }

    fn settle(&mut self) {
        self.is_loading = false;
        self.pending_request_id = None;
    }

    /// Validate and start a submit, returning the command to dispatch.
    ///
    /// Returns `None` while a request is in flight or when validation fails.
    pub fn prepare_submit(&mut self) -> Option<NetworkCommand> {
        if self.is_loading {
            tracing::debug!("Submit ignored while a request is in flight");
            return None;
        }

        match self.begin_submit() {
            Ok(request) => {
                let id = self.next_id();
                self.pending_request_id = Some(id);
                Some(NetworkCommand::Generate { id, request })
            }
            Err(err) => {
                tracing::debug!(%err, "Submit rejected");
                None
            }
        }
    }

    /// Apply a network response to the state
    pub fn handle_response(&mut self, response: NetworkResponse) {
        if self.pending_request_id != Some(response.id()) {
            tracing::debug!(id = response.id(), "Ignoring response for stale request");
            return;
        }

        self.meta = ResponseMeta {
            status_code: response.status(),
            time_ms: response.time_ms(),
            received_at: Some(chrono::Local::now()),
        };

        match response {
            NetworkResponse::Generated { id, result, .. } => {
                tracing::info!(id, "Image generated");
                self.complete_success(result);
            }
            NetworkResponse::Failed { id, status, reason, .. } => {
                tracing::warn!(id, ?status, %reason, "Image generation failed");
                self.complete_failure();
            }
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            prompt: self.prompt.clone(),
            cursor_position: self.cursor_position,
            input_mode: self.input_mode,
            is_loading: self.is_loading,
            error: self.error.clone(),
            image_url: self.image_url.clone(),
            meta: self.meta.clone(),
            endpoint: self.endpoint.clone(),
            show_help: self.show_help,
        }
    }
}
