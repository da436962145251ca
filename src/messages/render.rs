//! Render state - data structure sent from App layer to UI for rendering

use crate::constants::DEFAULT_ENDPOINT;
use crate::messages::ui_events::InputMode;
use crate::models::ResponseMeta;

/// The single visual state that currently has the user's attention
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveView<'a> {
    Idle,
    Loading,
    Error(&'a str),
    Image(&'a str),
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    // Prompt form
    pub prompt: String,
    pub cursor_position: usize,
    pub input_mode: InputMode,

    // Generation
    pub is_loading: bool,
    pub error: Option<String>,
    pub image_url: Option<String>,
    pub meta: ResponseMeta,

    // Chrome
    pub endpoint: String,
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            prompt: String::new(),
            cursor_position: 0,
            input_mode: InputMode::Normal,
            is_loading: false,
            error: None,
            image_url: None,
            meta: ResponseMeta::default(),
            endpoint: String::from(DEFAULT_ENDPOINT),
            show_help: false,
        }
    }
}

impl RenderState {
    /// Loading wins over error, error over image.
    pub fn active_view(&self) -> ActiveView<'_> {
        if self.is_loading {
            ActiveView::Loading
        } else if let Some(error) = &self.error {
            ActiveView::Error(error)
        } else if let Some(url) = &self.image_url {
            ActiveView::Image(url)
        } else {
            ActiveView::Idle
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading {
            "Generating..."
        } else {
            "Generate Image"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_view_priority() {
        let mut state = RenderState {
            error: Some("boom".into()),
            image_url: Some("http://x/y.png".into()),
            is_loading: true,
            ..Default::default()
        };
        assert_eq!(state.active_view(), ActiveView::Loading);
        assert_eq!(state.submit_label(), "Generating...");

        state.is_loading = false;
        assert_eq!(state.active_view(), ActiveView::Error("boom"));

        state.error = None;
        assert_eq!(state.active_view(), ActiveView::Image("http://x/y.png"));

        state.image_url = None;
        assert_eq!(state.active_view(), ActiveView::Idle);
        assert_eq!(state.submit_label(), "Generate Image");
    }
}
