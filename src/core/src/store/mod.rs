mod error;
mod memory;
mod traits;

pub use error::*;
pub use memory::*;
pub use traits::*;
