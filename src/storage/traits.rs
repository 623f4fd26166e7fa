use crate::error::StoreError;
use crate::models::{InteractionLogEntry, Listing, VisitBookingEntry};

/// Source of the listings dataset, read once at startup
pub trait ListingSource: Send + Sync {
    /// Load every listing; any missing or malformed row fails the whole load
    fn load_all(&self) -> Result<Vec<Listing>, StoreError>;

    /// Human readable description of where listings come from
    fn source_name(&self) -> String;
}

/// Append-only sink for chat interactions and visit bookings
pub trait LogSink: Send + Sync {
    fn append_interaction(&self, entry: &InteractionLogEntry) -> Result<(), StoreError>;

    fn append_booking(&self, entry: &VisitBookingEntry) -> Result<(), StoreError>;
}
