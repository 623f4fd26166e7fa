//! Multi-turn dialogue collecting a visit request.
//!
//! The dialogue walks `Idle -> AwaitingName -> AwaitingPhone -> AwaitingProperty -> Idle`.
//! Collected values live inside the state variants, so resetting the state
//! clears the stage and every collected field in one assignment.

use crate::chat::catalog::PropertyCatalog;
use crate::models::{ListingRef, VisitBookingEntry};
use chrono::Local;
use std::mem;
use tracing::{debug, info};

pub const NAME_PROMPT: &str = "I'll help you book a property visit! Please share your full name:";
pub const PHONE_PROMPT: &str = "Please share your phone number:";
pub const PROPERTY_PROMPT: &str = "Which property would you like to visit? (You can provide listing ID like P001 or property name, or say 'any' to skip):";

/// Answer that skips choosing a property
const ANY_PROPERTY: &str = "any";

/// Where the dialogue currently is, without the collected data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStage {
    None,
    AwaitingName,
    AwaitingPhone,
    AwaitingProperty,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum BookingState {
    #[default]
    Idle,
    AwaitingName,
    AwaitingPhone {
        name: String,
    },
    AwaitingProperty {
        name: String,
        phone: String,
    },
}

/// Result of feeding one message to the dialogue
#[derive(Debug, Clone)]
pub struct DialogueTurn {
    pub reply: String,
    /// Listing bound by this turn; empty unless the booking completed with a match
    pub listing: ListingRef,
    /// Present only on the turn that completes the booking
    pub booking: Option<VisitBookingEntry>,
}

impl DialogueTurn {
    fn prompt(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            listing: ListingRef::default(),
            booking: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BookingDialogue {
    state: BookingState,
}

impl BookingDialogue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.state != BookingState::Idle
    }

    pub fn stage(&self) -> BookingStage {
        match self.state {
            BookingState::Idle => BookingStage::None,
            BookingState::AwaitingName => BookingStage::AwaitingName,
            BookingState::AwaitingPhone { .. } => BookingStage::AwaitingPhone,
            BookingState::AwaitingProperty { .. } => BookingStage::AwaitingProperty,
        }
    }

    pub fn collected_name(&self) -> Option<&str> {
        match &self.state {
            BookingState::AwaitingPhone { name } | BookingState::AwaitingProperty { name, .. } => {
                Some(name)
            }
            _ => None,
        }
    }

    pub fn collected_phone(&self) -> Option<&str> {
        match &self.state {
            BookingState::AwaitingProperty { phone, .. } => Some(phone),
            _ => None,
        }
    }

    /// Begin a new booking, discarding anything collected so far
    pub fn start(&mut self) -> DialogueTurn {
        self.state = BookingState::AwaitingName;
        info!("Booking dialogue started");
        DialogueTurn::prompt(NAME_PROMPT)
    }

    /// Abandon the booking, clearing the stage and all collected fields together
    pub fn reset(&mut self) {
        self.state = BookingState::Idle;
    }

    /// Consume one message. Any text is accepted at every stage.
    pub fn advance(&mut self, text: &str, catalog: &PropertyCatalog) -> DialogueTurn {
        let answer = text.trim();
        match mem::take(&mut self.state) {
            BookingState::Idle => self.start(),
            BookingState::AwaitingName => {
                debug!("Booking dialogue collected name");
                self.state = BookingState::AwaitingPhone {
                    name: answer.to_string(),
                };
                DialogueTurn::prompt(PHONE_PROMPT)
            }
            BookingState::AwaitingPhone { name } => {
                debug!("Booking dialogue collected phone");
                self.state = BookingState::AwaitingProperty {
                    name,
                    phone: answer.to_string(),
                };
                DialogueTurn::prompt(PROPERTY_PROMPT)
            }
            // State is already Idle after the take
            BookingState::AwaitingProperty { name, phone } => {
                Self::complete(name, phone, answer, catalog)
            }
        }
    }

    fn complete(name: String, phone: String, answer: &str, catalog: &PropertyCatalog) -> DialogueTurn {
        let listing = if answer.eq_ignore_ascii_case(ANY_PROPERTY) {
            ListingRef::default()
        } else {
            catalog
                .resolve_choice(answer)
                .map(ListingRef::from)
                .unwrap_or_default()
        };

        if listing.is_empty() {
            info!("Booking completed without a resolved property");
        } else {
            info!("Booking completed for {}", listing.id);
        }

        let chosen = (!listing.name.is_empty()).then_some(listing.name.as_str());
        let message = format!("Visit booking for {}", chosen.unwrap_or("any property"));
        let reply = format!(
            "Visit booking confirmed!\n\nBooking Details:\n- Name: {}\n- Phone: {}\n- Property: {}\n\nOur agent will contact you shortly to schedule the visit.",
            name,
            phone,
            chosen.unwrap_or("Any property")
        );

        let booking = VisitBookingEntry {
            timestamp: Local::now(),
            listing: listing.clone(),
            requester_name: name,
            requester_phone: phone,
            message,
        };

        DialogueTurn {
            reply,
            listing,
            booking: Some(booking),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::fixtures::sample_catalog;

    fn run(dialogue: &mut BookingDialogue, inputs: &[&str]) -> Vec<DialogueTurn> {
        let catalog = sample_catalog();
        inputs
            .iter()
            .map(|input| dialogue.advance(input, &catalog))
            .collect()
    }

    #[test]
    fn test_stages_progress_in_order() {
        let catalog = sample_catalog();
        let mut dialogue = BookingDialogue::new();
        assert_eq!(dialogue.stage(), BookingStage::None);
        assert!(!dialogue.is_active());

        assert_eq!(dialogue.start().reply, NAME_PROMPT);
        assert_eq!(dialogue.stage(), BookingStage::AwaitingName);

        assert_eq!(dialogue.advance("John Doe", &catalog).reply, PHONE_PROMPT);
        assert_eq!(dialogue.stage(), BookingStage::AwaitingPhone);
        assert_eq!(dialogue.collected_name(), Some("John Doe"));

        assert_eq!(dialogue.advance("555-1234", &catalog).reply, PROPERTY_PROMPT);
        assert_eq!(dialogue.stage(), BookingStage::AwaitingProperty);
        assert_eq!(dialogue.collected_phone(), Some("555-1234"));
    }

    #[test]
    fn test_any_skips_property() {
        let mut dialogue = BookingDialogue::new();
        dialogue.start();
        let turns = run(&mut dialogue, &["John Doe", "555-1234", "ANY"]);

        let last = turns.last().unwrap();
        let booking = last.booking.as_ref().unwrap();
        assert_eq!(booking.requester_name, "John Doe");
        assert_eq!(booking.requester_phone, "555-1234");
        assert!(booking.listing.is_empty());
        assert_eq!(booking.message, "Visit booking for any property");
        assert!(last.reply.contains("- Property: Any property"));
        assert_eq!(dialogue.stage(), BookingStage::None);
        assert_eq!(dialogue.collected_name(), None);
    }

    #[test]
    fn test_property_by_name_is_bound() {
        let mut dialogue = BookingDialogue::new();
        dialogue.start();
        let turns = run(&mut dialogue, &["Asha", "98200 00000", "Marina Studio"]);

        let last = turns.last().unwrap();
        assert_eq!(last.listing.id, "P003");
        let booking = last.booking.as_ref().unwrap();
        assert_eq!(booking.listing.id, "P003");
        assert_eq!(booking.listing.name, "Marina Studio");
        assert_eq!(booking.message, "Visit booking for Marina Studio");
    }

    #[test]
    fn test_property_by_id_and_palm_name() {
        let mut dialogue = BookingDialogue::new();
        dialogue.start();
        let turns = run(&mut dialogue, &["Ravi", "123", "p004"]);
        assert_eq!(turns[2].listing.id, "P004");

        dialogue.start();
        let turns = run(&mut dialogue, &["Ravi", "123", "palm"]);
        assert_eq!(turns[2].listing.name, "Palm Villa");
    }

    #[test]
    fn test_unknown_property_still_books() {
        let mut dialogue = BookingDialogue::new();
        dialogue.start();
        let turns = run(&mut dialogue, &["Ravi", "123", "Buckingham Palace"]);

        let booking = turns[2].booking.as_ref().unwrap();
        assert!(booking.listing.is_empty());
        assert_eq!(dialogue.stage(), BookingStage::None);
    }

    #[test]
    fn test_reset_clears_everything() {
        let catalog = sample_catalog();
        let mut dialogue = BookingDialogue::new();
        dialogue.start();
        dialogue.advance("John Doe", &catalog);
        dialogue.advance("555-1234", &catalog);

        dialogue.reset();
        assert_eq!(dialogue.stage(), BookingStage::None);
        assert_eq!(dialogue.collected_name(), None);
        assert_eq!(dialogue.collected_phone(), None);
    }

    #[test]
    fn test_only_completing_turn_emits_booking() {
        let mut dialogue = BookingDialogue::new();
        dialogue.start();
        let turns = run(&mut dialogue, &["John Doe", "555-1234", "any"]);
        let emitted: Vec<_> = turns.iter().filter(|t| t.booking.is_some()).collect();
        assert_eq!(emitted.len(), 1);
    }
}
