//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions and tables over occupancy masks. Rules are kept apart from
//! engine state so they can be checked in isolation.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::WinningPatterns;
