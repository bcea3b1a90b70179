//! Game rules for Othello
//!
//! This module implements the rule content of the game:
//! - Capture rules (directional sandwich capture over all 8 directions)
//! - Terminal scoring (disc majority)

pub mod capture;
pub mod win;

// Re-exports for convenient access
pub use capture::{captured_positions, captures_in_direction, has_capture, DIRECTIONS};
pub use win::{check_winner, score};
