mod league;
mod team;

pub use league::*;
pub use team::*;
