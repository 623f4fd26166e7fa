use crate::error::StoreError;
use crate::models::{InteractionLogEntry, Listing, VisitBookingEntry, TIMESTAMP_FORMAT};
use crate::storage::traits::{ListingSource, LogSink};
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Columns the listings file must carry, in order
const LISTING_COLUMNS: [&str; 10] = [
    "listing_id",
    "property_name",
    "city",
    "bedrooms",
    "area_sqft",
    "price",
    "price_currency",
    "availability",
    "short_description",
    "agent_email",
];

/// Listings read from a CSV file with a header row
pub struct CsvListingSource {
    path: PathBuf,
}

impl CsvListingSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ListingSource for CsvListingSource {
    fn load_all(&self) -> Result<Vec<Listing>, StoreError> {
        if !self.path.exists() {
            return Err(StoreError::SourceMissing(self.path.display().to_string()));
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)?;

        let headers = reader.headers()?;
        if headers.is_empty() || headers.iter().ne(LISTING_COLUMNS.iter().copied()) {
            return Err(StoreError::Malformed(format!(
                "{}: expected columns [{}], found [{}]",
                self.path.display(),
                LISTING_COLUMNS.join(","),
                headers.iter().collect::<Vec<_>>().join(",")
            )));
        }

        let mut listings = Vec::new();
        for (idx, result) in reader.deserialize::<Listing>().enumerate() {
            // Header is line 1, so data rows start at line 2
            let listing = result
                .map_err(|e| StoreError::Malformed(format!("row {}: {}", idx + 2, e)))?;
            if !crate::chat::catalog::is_listing_id(&listing.id) {
                warn!("Listing id {:?} does not follow the P000 pattern", listing.id);
            }
            listings.push(listing);
        }

        info!("Loaded {} listings from {}", listings.len(), self.path.display());
        Ok(listings)
    }

    fn source_name(&self) -> String {
        self.path.display().to_string()
    }
}

#[derive(Serialize)]
struct InteractionRow<'a> {
    timestamp: String,
    listing_id: &'a str,
    property_name: &'a str,
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    user_query: &'a str,
    bot_response: &'a str,
}

#[derive(Serialize)]
struct VisitRow<'a> {
    timestamp: String,
    listing_id: &'a str,
    property_name: &'a str,
    name: &'a str,
    phone: &'a str,
    user_message: &'a str,
}

/// Appends interactions and visit bookings to two CSV files
pub struct CsvLogSink {
    interactions_path: PathBuf,
    visits_path: PathBuf,
}

impl CsvLogSink {
    pub fn new(interactions_path: impl Into<PathBuf>, visits_path: impl Into<PathBuf>) -> Self {
        Self {
            interactions_path: interactions_path.into(),
            visits_path: visits_path.into(),
        }
    }

    /// Append one record, writing the header first when the file is new or empty
    fn append_row<T: Serialize>(path: &Path, row: &T) -> Result<(), StoreError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let needs_header = file.metadata()?.len() == 0;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        writer
            .serialize(row)
            .map_err(|e| StoreError::Append(format!("{}: {}", path.display(), e)))?;
        writer.flush()?;

        debug!("Appended record to {}", path.display());
        Ok(())
    }
}

impl LogSink for CsvLogSink {
    fn append_interaction(&self, entry: &InteractionLogEntry) -> Result<(), StoreError> {
        let row = InteractionRow {
            timestamp: entry.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            listing_id: &entry.listing.id,
            property_name: &entry.listing.name,
            name: &entry.user.name,
            email: &entry.user.email,
            phone: &entry.user.phone,
            user_query: &entry.query,
            bot_response: &entry.response,
        };
        Self::append_row(&self.interactions_path, &row)
    }

    fn append_booking(&self, entry: &VisitBookingEntry) -> Result<(), StoreError> {
        let row = VisitRow {
            timestamp: entry.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            listing_id: &entry.listing.id,
            property_name: &entry.listing.name,
            name: &entry.requester_name,
            phone: &entry.requester_phone,
            user_message: &entry.message,
        };
        Self::append_row(&self.visits_path, &row)
    }
}
