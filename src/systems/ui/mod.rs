//! Map selection UI.
//!
//! - `selector`: the panel toggler and its capability trait
//! - `map_select_button`: hover-scaled, lock-gated button that drives it
pub mod map_select_button;
pub mod selector;
