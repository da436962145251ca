use serde::{Deserialize, Serialize};
use url::Url;

/// Optional generation parameters understood by Stable Diffusion style backends.
///
/// Every field is skipped when unset, so a request built without defaults
/// carries only the prompt.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negative_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_inference_steps: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_images_per_prompt: Option<u32>,
}

/// Body of `POST /generate`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
    #[serde(flatten)]
    pub params: GenerationDefaults,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        GenerationRequest {
            prompt: prompt.into(),
            params: GenerationDefaults::default(),
        }
    }

    pub fn with_params(mut self, params: GenerationDefaults) -> Self {
        self.params = params;
        self
    }
}

/// Decoded body of a successful generation response
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct GenerationResult {
    #[serde(default)]
    pub image_url: Option<String>,
    /// Some backends answer with a list of saved image paths instead
    #[serde(default)]
    pub paths: Vec<String>,
}

impl GenerationResult {
    pub fn with_url(url: impl Into<String>) -> Self {
        GenerationResult {
            image_url: Some(url.into()),
            paths: Vec::new(),
        }
    }

    /// The image source to display: `image_url` first, then the first path.
    ///
    /// `image_url` is used exactly as returned; an empty one means no image.
    /// Only `paths` entries are resolved against `base` (the endpoint URL),
    /// and a path that cannot be resolved is returned untouched.
    pub fn resolve_image_url(&self, base: &str) -> Option<String> {
        if let Some(url) = &self.image_url {
            return if url.is_empty() { None } else { Some(url.clone()) };
        }

        let raw = self.paths.first().filter(|p| !p.is_empty())?;

        if Url::parse(raw).is_ok() {
            return Some(raw.to_string());
        }

        match Url::parse(base).and_then(|b| b.join(raw)) {
            Ok(joined) => Some(joined.to_string()),
            Err(_) => Some(raw.to_string()),
        }
    }
}

/// Error body the reference backend sends along with HTTP 500
#[derive(Clone, Debug, Deserialize)]
pub struct BackendError {
    pub error: String,
}

/// Metadata of the last completed generation call
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponseMeta {
    pub status_code: Option<u16>,
    pub time_ms: u64,
    pub received_at: Option<chrono::DateTime<chrono::Local>>,
}
