mod average_speed;
mod derived_record;
mod sample;

pub use average_speed::AverageSpeed;
pub use derived_record::{DerivedRecord, Interval};
pub use sample::Sample;
