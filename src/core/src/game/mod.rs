mod game;
mod processing;

pub use game::*;
pub use processing::*;
