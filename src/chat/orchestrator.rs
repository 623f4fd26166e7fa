//! Per-message coordinator: routes each turn to the booking dialogue,
//! the catalog or the FAQ table, then records the interaction.

use crate::chat::booking::BookingStage;
use crate::chat::catalog::PropertyCatalog;
use crate::chat::faq::{FaqTable, HELP_MESSAGE};
use crate::chat::formatter::ResponseFormatter;
use crate::chat::intent::{Intent, IntentClassifier};
use crate::chat::session::{Role, Session};
use crate::error::ChatError;
use crate::models::{InteractionLogEntry, ListingRef};
use crate::storage::LogSink;
use chrono::Local;
use std::sync::Arc;
use tracing::{debug, error, info};

pub const NOT_FOUND_MESSAGE: &str = "Sorry, I couldn't find that property. Please check the listing ID (like P001) or property name and try again.";

/// Outcome of one turn
#[derive(Debug, Clone)]
pub struct TurnReply {
    pub text: String,
    /// Classified intent; `None` when an active booking consumed the message
    pub intent: Option<Intent>,
    pub listing: ListingRef,
    pub booking_stage: BookingStage,
}

pub struct ConversationOrchestrator {
    catalog: Arc<PropertyCatalog>,
    faq: FaqTable,
    formatter: ResponseFormatter,
    sink: Arc<dyn LogSink>,
    max_message_chars: usize,
}

impl ConversationOrchestrator {
    pub fn new(
        catalog: Arc<PropertyCatalog>,
        faq: FaqTable,
        formatter: ResponseFormatter,
        sink: Arc<dyn LogSink>,
        max_message_chars: usize,
    ) -> Self {
        Self {
            catalog,
            faq,
            formatter,
            sink,
            max_message_chars,
        }
    }

    pub fn catalog(&self) -> &PropertyCatalog {
        &self.catalog
    }

    /// Handle one user message for the given session.
    ///
    /// Only input validation fails the turn. Lookup misses become user-facing
    /// text, polish failures fall back to the template and log write failures
    /// are reported without withholding the reply.
    pub async fn handle_message(
        &self,
        session: &mut Session,
        text: &str,
    ) -> Result<TurnReply, ChatError> {
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if text.chars().count() > self.max_message_chars {
            return Err(ChatError::TooLong(self.max_message_chars));
        }

        session.record(Role::User, text);

        let (reply, intent, listing) = if session.booking.is_active() {
            debug!("Routing message to booking dialogue at {:?}", session.booking.stage());
            let turn = session.booking.advance(text, &self.catalog);
            if let Some(booking) = &turn.booking {
                if let Err(e) = self.sink.append_booking(booking) {
                    error!("Failed to record visit booking: {}", e);
                }
            }
            (turn.reply, None, turn.listing)
        } else {
            let intent = IntentClassifier::classify(text);
            info!("Classified message as {:?}", intent);
            let (reply, listing) = self.dispatch(intent, session, text).await;
            (reply, Some(intent), listing)
        };

        session.record(Role::Assistant, &reply);

        let entry = InteractionLogEntry {
            timestamp: Local::now(),
            listing: listing.clone(),
            user: session.user().clone(),
            query: text.to_string(),
            response: reply.clone(),
        };
        if let Err(e) = self.sink.append_interaction(&entry) {
            error!("Failed to record interaction: {}", e);
        }

        Ok(TurnReply {
            text: reply,
            intent,
            listing,
            booking_stage: session.booking.stage(),
        })
    }

    async fn dispatch(
        &self,
        intent: Intent,
        session: &mut Session,
        text: &str,
    ) -> (String, ListingRef) {
        match intent {
            Intent::Booking => (session.booking.start().reply, ListingRef::default()),
            Intent::PropertyQuery => match self.catalog.resolve_query(text) {
                Some(listing) => (self.formatter.format(listing).await, ListingRef::from(listing)),
                None => {
                    debug!("No listing matched the property query");
                    (NOT_FOUND_MESSAGE.to_string(), ListingRef::default())
                }
            },
            Intent::Faq => {
                let answer = self.faq.answer(text).unwrap_or(HELP_MESSAGE);
                (answer.to_string(), ListingRef::default())
            }
        }
    }
}
