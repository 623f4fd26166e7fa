pub mod booking;
pub mod catalog;
pub mod faq;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod formatter;
pub mod intent;
pub mod orchestrator;
pub mod session;

pub use catalog::PropertyCatalog;
pub use faq::FaqTable;
pub use formatter::ResponseFormatter;
pub use orchestrator::ConversationOrchestrator;
pub use session::Session;
