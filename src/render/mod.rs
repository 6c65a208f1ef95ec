//! Report renderers.

pub mod json;
pub mod text;

pub use json::render_json_report;
pub use text::render_text_report;
