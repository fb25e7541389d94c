mod csv_writer;
mod summary;

pub use csv_writer::{OutputError, write_csv};
pub use summary::render_summary;
