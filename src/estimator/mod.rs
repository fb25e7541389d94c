mod estimate;
mod formula;

pub use estimate::{Estimate, estimate};
pub use formula::Formula;
