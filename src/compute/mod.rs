//! Compute module - Grid storage, transition rule and the universe driver.

mod grid;
mod rules;
mod universe;

pub use grid::*;
pub use rules::*;
pub use universe::*;
