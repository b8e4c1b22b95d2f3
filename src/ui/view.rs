//! Screen model: which main view to show and whether an error banner
//! accompanies it, derived from the flow on every render.
use serde::Serialize;

use crate::flow::PromptFlow;

/// The three mutually exclusive main views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    Loading,
    Result { image: String },
    Placeholder,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    pub prompt: String,
    pub submit_enabled: bool,
    pub view: View,
    /// Rendered alongside `view`, never instead of it.
    pub banner: Option<String>,
}

impl Screen {
    pub fn from_flow(flow: &PromptFlow) -> Self {
        let view = if flow.is_loading() {
            View::Loading
        } else {
            match flow.image_reference() {
                Some(image) if !image.is_empty() => View::Result { image: image.to_string() },
                _ => View::Placeholder,
            }
        };
        Screen {
            prompt: flow.prompt().to_string(),
            submit_enabled: flow.can_submit(),
            view,
            banner: flow.error().map(|e| e.message.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn fresh_flow_shows_placeholder() {
        let screen = Screen::from_flow(&PromptFlow::new());
        assert_eq!(screen.view, View::Placeholder);
        assert_eq!(screen.banner, None);
        assert!(!screen.submit_enabled);
    }

    #[test]
    fn loading_hides_previous_image() {
        let mut flow = PromptFlow::new();
        flow.on_text_change("x");
        let t = flow.begin_submit().unwrap();
        flow.settle(&t, Ok("https://x/a.png".into()));
        flow.begin_submit().unwrap();

        let screen = Screen::from_flow(&flow);
        assert_eq!(screen.view, View::Loading);
        assert!(!screen.submit_enabled);
    }

    #[test]
    fn banner_accompanies_result_view() {
        let mut flow = PromptFlow::new();
        flow.on_text_change("x");
        let t = flow.begin_submit().unwrap();
        flow.settle(&t, Ok("https://x/a.png".into()));
        let t = flow.begin_submit().unwrap();
        flow.settle(&t, Err(AppError::UnexpectedResponse));

        let screen = Screen::from_flow(&flow);
        assert_eq!(screen.view, View::Result { image: "https://x/a.png".into() });
        assert_eq!(screen.banner.as_deref(), Some("Unexpected server response"));
        assert!(screen.submit_enabled);
    }

    #[test]
    fn banner_accompanies_placeholder_view() {
        let mut flow = PromptFlow::new();
        flow.on_text_change("x");
        let t = flow.begin_submit().unwrap();
        flow.settle(&t, Err(AppError::GenImg { status: 502, reason: "Bad Gateway".into() }));

        let screen = Screen::from_flow(&flow);
        assert_eq!(screen.view, View::Placeholder);
        assert_eq!(screen.banner.as_deref(), Some("Bad Gateway"));
    }
}
