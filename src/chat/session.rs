use crate::chat::booking::BookingDialogue;
use crate::models::UserIdentity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Per-conversation state owned by the host and passed into every turn
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: UserIdentity,
    pub(crate) booking: BookingDialogue,
    transcript: Vec<ChatMessage>,
}

impl Session {
    pub fn new(user: UserIdentity) -> Self {
        Self {
            user,
            ..Self::default()
        }
    }

    pub fn user(&self) -> &UserIdentity {
        &self.user
    }

    pub fn booking(&self) -> &BookingDialogue {
        &self.booking
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Replay of the conversation so far, oldest first
    pub fn render_history(&self) -> String {
        if self.transcript.is_empty() {
            return "No messages yet.\n".to_string();
        }
        self.transcript
            .iter()
            .map(|message| {
                let speaker = match message.role {
                    Role::User => "You",
                    Role::Assistant => "Assistant",
                };
                format!("{}: {}\n", speaker, message.content)
            })
            .collect()
    }

    pub fn is_logged_in(&self) -> bool {
        !self.user.name.is_empty()
    }

    pub(crate) fn record(&mut self, role: Role, content: &str) {
        self.transcript.push(ChatMessage {
            role,
            content: content.to_string(),
        });
    }

    /// Forget the identity, transcript and any in-progress booking at once
    pub fn logout(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::booking::BookingStage;

    #[test]
    fn test_render_history_replays_in_order() {
        let mut session = Session::new(UserIdentity::default());
        assert_eq!(session.render_history(), "No messages yet.\n");

        session.record(Role::User, "What are your working hours?");
        session.record(Role::Assistant, "We are open Monday to Friday.");
        assert_eq!(
            session.render_history(),
            "You: What are your working hours?\nAssistant: We are open Monday to Friday.\n"
        );
    }

    #[test]
    fn test_logout_clears_booking_and_identity() {
        let mut session = Session::new(UserIdentity {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: "555-0100".to_string(),
        });
        session.booking.start();
        session.record(Role::User, "I want to book a visit");
        assert!(session.is_logged_in());

        session.logout();
        assert!(!session.is_logged_in());
        assert_eq!(session.booking().stage(), BookingStage::None);
        assert!(session.transcript().is_empty());
    }
}
