mod errors;
mod escape;
mod fragments;
mod renderer;

pub use errors::RenderError;
pub use escape::escape_html;
pub use fragments::Fragments;
pub use renderer::{CardMailContent, CardMailRenderer};
