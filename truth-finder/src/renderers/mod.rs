//! Renderers that turn a request state into displayable output
//!
//! Classification stays in [`crate::classify`]; renderers only decide how the
//! tiers, scores and texts are laid out for a given output format.

use crate::controller::RequestState;

/// Simple trait for rendering a request state in different formats
pub trait OutputRenderer {
    /// Render the state to a string in the specific format
    fn render(&self, state: &RequestState) -> String;
}

pub mod cli;
pub mod json;

pub use cli::CliRenderer;
pub use json::JsonRenderer;

/// Format a score without a trailing `.0` for whole numbers
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        format!("{:.1}", score)
    }
}
