//! Views derived from a [`PromptFlow`](crate::flow::PromptFlow) and their
//! HTML and plain-text renderings.
pub mod html;
pub mod terminal;
pub mod view;

pub use view::{Screen, View};

pub const TITLE: &str = "PromptPix AI";
pub const BLURB: &str = "Dive into the world of AI-driven creativity with PromptPix AI, \
where your words become vivid visuals. Simply input your idea, and watch as our \
advanced algorithms craft the image you envisioned.";
pub const LOADING_TEXT: &str = "Your image is being generated...";
pub const RESULT_TEXT: &str = "Find your generated image below";
pub const PLACEHOLDER_TEXT: &str = "Your image will appear below";
