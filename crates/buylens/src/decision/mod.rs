//! Decision rendering: the deterministic mapping from analysis signals onto
//! discrete presentation states.

pub mod html;
pub mod render;
pub mod state;

pub use render::render;
pub use state::{BadgeCategory, BarState, Bars, Decision, PresentationState, ProductView};
