//! Move rules: which moves a marker has and which one it takes.
//!
//! A marker may move to any other cell of its zone. Each destination yields
//! a family of options (see [`options`]); a move whose total equals the
//! goal wins the game and is always preferred.

pub mod options;

pub use options::{options, select_option, zone_options, MoveOption, Transit};
