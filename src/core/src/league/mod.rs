mod league;
mod result;
mod schedule;
mod standing;
mod table;

pub use league::*;
pub use result::*;
pub use schedule::*;
pub use standing::*;
pub use table::*;
