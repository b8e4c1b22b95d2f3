//! PromptPix library
//!
//! Modules:
//! - `flow`: Prompt submission flow (prompt text, last image, status).
//! - `genimg`: Thin client for the image-generation endpoint and the
//!   `ImageGenerator` seam the flow is driven through.
//! - `ui`: Views derived from the flow, rendered as HTML or plain text.
//! - `api`: Axum handlers and router setup used by the web binary.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type, alias, and failure taxonomy.
//!
//! Re-exports are provided for common types: `Config`, `GenImgClient`,
//! `ImageGenerator`, and `PromptFlow`.
pub mod api;
pub mod config;
pub mod error;
pub mod flow;
pub mod genimg;
pub mod ui;

pub use config::Config;
pub use flow::PromptFlow;
pub use genimg::client::GenImgClient;
pub use genimg::ImageGenerator;
