use crate::models::FaqEntry;

/// Reply when no FAQ keyword matches
pub const HELP_MESSAGE: &str = "I can help you with:\n\
- Property information (try 'What is the price of P001?')\n\
- Booking visits (say 'I want to book a visit')\n\
- General FAQs about office location, working hours, contact info";

const DEFAULT_ENTRIES: &[(&str, &str)] = &[
    (
        "office location",
        "Our office is located at 123 Business District, Mumbai, India.",
    ),
    (
        "working hours",
        "We are open Monday to Friday, 9:00 AM to 6:00 PM IST.",
    ),
    (
        "contact",
        "You can reach us at info@zorever.com or call +91-123-456-7890.",
    ),
    (
        "about",
        "Zorever EcomTech Pvt Ltd is a leading real estate technology company helping people find their dream properties.",
    ),
    (
        "services",
        "We offer property buying, selling, renting, and consultation services across major Indian cities.",
    ),
];

/// Ordered keyword table. The first keyword contained in the question wins.
#[derive(Debug, Clone)]
pub struct FaqTable {
    entries: Vec<FaqEntry>,
}

impl FaqTable {
    pub fn new(entries: Vec<FaqEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn answer(&self, question: &str) -> Option<&str> {
        let lowered = question.to_lowercase();
        self.entries
            .iter()
            .find(|entry| lowered.contains(&entry.keyword.to_lowercase()))
            .map(|entry| entry.answer.as_str())
    }
}

impl Default for FaqTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_ENTRIES
                .iter()
                .map(|(keyword, answer)| FaqEntry {
                    keyword: keyword.to_string(),
                    answer: answer.to_string(),
                })
                .collect(),
        )
    }
}
