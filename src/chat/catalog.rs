use crate::error::StoreError;
use crate::models::Listing;
use crate::storage::ListingSource;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Listing id anywhere in free text: `P` followed by three digits
pub static LISTING_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)p\d{3}").expect("listing id pattern"));

static EXACT_LISTING_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^p\d{3}$").expect("exact listing id pattern"));

/// Phrases that introduce a listing name, tried in this order. The name runs
/// up to a question mark or the end of the message.
static NAME_TRIGGERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)price of ([^?\n]+)",
        r"(?i)details for ([^?\n]+)",
        r"(?i)information about ([^?\n]+)",
        r"(?i)tell me about ([^?\n]+)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("name trigger pattern"))
    .collect()
});

/// True when the whole text is a listing id such as `P003`
pub fn is_listing_id(text: &str) -> bool {
    EXACT_LISTING_ID.is_match(text.trim())
}

/// Every listing id mentioned in the text, upper-cased, in order of appearance
pub fn extract_listing_ids(text: &str) -> Vec<String> {
    LISTING_ID_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_uppercase())
        .collect()
}

/// Name fragments captured by the trigger phrases, in trigger order
pub fn extract_name_fragments(text: &str) -> Vec<String> {
    NAME_TRIGGERS
        .iter()
        .filter_map(|trigger| trigger.captures(text))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

/// Read-only set of listings loaded once at startup
#[derive(Debug, Clone)]
pub struct PropertyCatalog {
    listings: Vec<Listing>,
}

impl PropertyCatalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// Load the complete catalog from a source. A failed load yields no catalog at all.
    pub fn load(source: &dyn ListingSource) -> Result<Self, StoreError> {
        Ok(Self::new(source.load_all()?))
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Exact id match, ignoring case and surrounding whitespace
    pub fn lookup_by_id(&self, id: &str) -> Option<&Listing> {
        let wanted = id.trim().to_uppercase();
        let found = self
            .listings
            .iter()
            .find(|listing| listing.id.to_uppercase() == wanted);
        debug!("lookup_by_id({}) -> {}", wanted, found.is_some());
        found
    }

    /// First listing, in catalog order, whose name contains the fragment
    pub fn lookup_by_name(&self, fragment: &str) -> Option<&Listing> {
        let wanted = fragment.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        let found = self
            .listings
            .iter()
            .find(|listing| listing.name.to_lowercase().contains(&wanted));
        debug!("lookup_by_name({}) -> {}", wanted, found.is_some());
        found
    }

    /// Resolve a free-text property question: mentioned ids first, then
    /// name fragments after the trigger phrases
    pub fn resolve_query(&self, text: &str) -> Option<&Listing> {
        extract_listing_ids(text)
            .iter()
            .find_map(|id| self.lookup_by_id(id))
            .or_else(|| {
                extract_name_fragments(text)
                    .iter()
                    .find_map(|fragment| self.lookup_by_name(fragment))
            })
    }

    /// Resolve a single answer naming a listing: an id when it looks like one,
    /// otherwise a name fragment
    pub fn resolve_choice(&self, text: &str) -> Option<&Listing> {
        if is_listing_id(text) {
            self.lookup_by_id(text)
        } else {
            self.lookup_by_name(text)
        }
    }
}
