//! Plain-text rendering for the CLI.
use crate::ui::{Screen, View, LOADING_TEXT, PLACEHOLDER_TEXT, RESULT_TEXT};

pub fn render(screen: &Screen) -> String {
    let mut lines = Vec::new();
    match &screen.view {
        View::Loading => lines.push(LOADING_TEXT.to_string()),
        View::Result { image } => {
            lines.push(RESULT_TEXT.to_string());
            lines.push(format!("  {}", image));
        }
        View::Placeholder => lines.push(PLACEHOLDER_TEXT.to_string()),
    }
    if let Some(message) = &screen.banner {
        lines.push(format!("error: {}", message));
    }
    lines.join("\n")
}
