//! Pokeguess Game Core
//!
//! Platform-agnostic data for the Pokeguess guessing game: the captured
//! creature record, its display formatting, and the theme flag shared with
//! the web front end. This crate has no UI or browser dependencies.

pub mod creature;
pub mod roster;
pub mod text;
pub mod theme;

pub use creature::{CapturedCreature, CreatureError, Generation, NO_SECOND_TYPE};
pub use roster::load_roster;
pub use text::capitalize;
pub use theme::{Theme, ThemeParseError};
