//! Conversational front-end over a small catalog of real-estate listings.
//!
//! Messages are classified by keyword into booking, property and FAQ intents,
//! resolved against an in-memory catalog or a canned answer table, and every
//! turn is appended to a CSV log.

pub mod chat;
pub mod config;
pub mod error;
pub mod models;
pub mod polish;
pub mod storage;
