use crate::chat::catalog::LISTING_ID_PATTERN;

/// Coarse category of a user message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Booking,
    PropertyQuery,
    Faq,
}

const BOOKING_PHRASES: &[&str] = &[
    "book visit",
    "schedule visit",
    "visit booking",
    "book a visit",
    "schedule a visit",
];

/// Lower-cased prefix of every listing id
const LISTING_ID_MARKER: &str = "p0";

const PROPERTY_NOUNS: &[&str] = &["apartment", "villa", "studio", "office", "cottage", "house"];

/// Keyword based intent classifier. Booking wins over property queries,
/// property queries win over FAQ.
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn classify(text: &str) -> Intent {
        let lowered = text.to_lowercase();

        if BOOKING_PHRASES.iter().any(|phrase| lowered.contains(phrase)) {
            Intent::Booking
        } else if lowered.contains(LISTING_ID_MARKER)
            || LISTING_ID_PATTERN.is_match(text)
            || PROPERTY_NOUNS.iter().any(|noun| lowered.contains(noun))
        {
            Intent::PropertyQuery
        } else {
            Intent::Faq
        }
    }
}
