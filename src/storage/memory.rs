//! In-memory listing source and log sink for exercising the chat core
//! without touching the filesystem.

use crate::error::StoreError;
use crate::models::{InteractionLogEntry, Listing, VisitBookingEntry};
use crate::storage::traits::{ListingSource, LogSink};
use std::sync::Mutex;

pub struct MemoryListingSource {
    listings: Vec<Listing>,
}

impl MemoryListingSource {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }
}

impl ListingSource for MemoryListingSource {
    fn load_all(&self) -> Result<Vec<Listing>, StoreError> {
        Ok(self.listings.clone())
    }

    fn source_name(&self) -> String {
        "memory".to_string()
    }
}

/// Records every append; can be switched to fail all writes
#[derive(Default)]
pub struct MemoryLogSink {
    pub interactions: Mutex<Vec<InteractionLogEntry>>,
    pub bookings: Mutex<Vec<VisitBookingEntry>>,
    pub fail_writes: bool,
}

impl MemoryLogSink {
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn interactions(&self) -> Vec<InteractionLogEntry> {
        self.interactions.lock().unwrap().clone()
    }

    pub fn bookings(&self) -> Vec<VisitBookingEntry> {
        self.bookings.lock().unwrap().clone()
    }
}

impl LogSink for MemoryLogSink {
    fn append_interaction(&self, entry: &InteractionLogEntry) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Append("disk full".to_string()));
        }
        self.interactions.lock().unwrap().push(entry.clone());
        Ok(())
    }

    fn append_booking(&self, entry: &VisitBookingEntry) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Append("disk full".to_string()));
        }
        self.bookings.lock().unwrap().push(entry.clone());
        Ok(())
    }
}
