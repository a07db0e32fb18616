//! Game rule engines.
//!
//! Each engine is an independently owned object. They share building blocks
//! from `core` and `render` but no state.

pub mod catch;
pub mod minesweeper;
