pub mod csv_store;
#[cfg(test)]
pub mod memory;
pub mod traits;

pub use csv_store::{CsvListingSource, CsvLogSink};
pub use traits::{ListingSource, LogSink};
