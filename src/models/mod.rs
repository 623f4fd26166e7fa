use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp layout used in every log file
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Availability status of a listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum Availability {
    Available,
    UnderOffer,
    Rented,
    Sold,
    /// Any status the dataset uses that has no dedicated variant
    Other(String),
}

impl From<String> for Availability {
    fn from(raw: String) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "available" => Availability::Available,
            "under offer" | "under_offer" => Availability::UnderOffer,
            "rented" => Availability::Rented,
            "sold" => Availability::Sold,
            _ => Availability::Other(raw.trim().to_string()),
        }
    }
}

impl From<Availability> for String {
    fn from(status: Availability) -> Self {
        status.to_string()
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Available => f.write_str("Available"),
            Availability::UnderOffer => f.write_str("Under Offer"),
            Availability::Rented => f.write_str("Rented"),
            Availability::Sold => f.write_str("Sold"),
            Availability::Other(raw) => f.write_str(raw),
        }
    }
}

/// One row of the listings dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    #[serde(rename = "listing_id")]
    pub id: String,
    #[serde(rename = "property_name")]
    pub name: String,
    pub city: String,
    pub bedrooms: u32,
    #[serde(rename = "area_sqft")]
    pub area: f64,
    pub price: f64,
    #[serde(rename = "price_currency")]
    pub currency: String,
    pub availability: Availability,
    #[serde(rename = "short_description")]
    pub description: String,
    #[serde(rename = "agent_email")]
    pub contact: String,
}

/// Id and name of a listing a turn resolved to; both empty when nothing resolved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingRef {
    pub id: String,
    pub name: String,
}

impl ListingRef {
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.name.is_empty()
    }
}

impl From<&Listing> for ListingRef {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id.clone(),
            name: listing.name.clone(),
        }
    }
}

/// Keyword and canned answer for general questions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub keyword: String,
    pub answer: String,
}

/// Identity collected at login
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserIdentity {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Record of a single chat turn
#[derive(Debug, Clone)]
pub struct InteractionLogEntry {
    pub timestamp: DateTime<Local>,
    pub listing: ListingRef,
    pub user: UserIdentity,
    pub query: String,
    pub response: String,
}

/// Record of a completed visit request
#[derive(Debug, Clone)]
pub struct VisitBookingEntry {
    pub timestamp: DateTime<Local>,
    pub listing: ListingRef,
    pub requester_name: String,
    pub requester_phone: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_parses_known_statuses() {
        assert_eq!(Availability::from("Available".to_string()), Availability::Available);
        assert_eq!(Availability::from(" sold ".to_string()), Availability::Sold);
        assert_eq!(
            Availability::from("Under Offer".to_string()),
            Availability::UnderOffer
        );
    }

    #[test]
    fn test_availability_keeps_unknown_text() {
        let status = Availability::from("Coming Soon".to_string());
        assert_eq!(status, Availability::Other("Coming Soon".to_string()));
        assert_eq!(status.to_string(), "Coming Soon");
    }

    #[test]
    fn test_listing_ref_from_listing() {
        let listing = Listing {
            id: "P001".to_string(),
            name: "Sunrise Apartments".to_string(),
            city: "Mumbai".to_string(),
            bedrooms: 2,
            area: 950.0,
            price: 8_500_000.0,
            currency: "INR".to_string(),
            availability: Availability::Available,
            description: "Sea-facing flat".to_string(),
            contact: "agent@zorever.com".to_string(),
        };
        let reference = ListingRef::from(&listing);
        assert_eq!(reference.id, "P001");
        assert_eq!(reference.name, "Sunrise Apartments");
        assert!(!reference.is_empty());
        assert!(ListingRef::default().is_empty());
    }
}
