mod aggregator;
mod analytics;

pub use aggregator::*;
pub use analytics::*;
