pub mod groq;
pub mod plain;
pub mod traits;

pub use groq::{GroqPolisher, PolishSettings};
pub use plain::PlainPolisher;
pub use traits::Polisher;
