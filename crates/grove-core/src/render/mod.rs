pub mod config;
pub mod escape;
pub mod html_render;

pub use config::{EscapePolicy, RenderConfig};
pub use html_render::{render, render_with};
