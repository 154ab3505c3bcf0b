//! # Strings Module
//!
//! Centralizes user-facing strings and log text.
//! Keeps the assistant's wording in one place so it can be updated without touching logic.

pub mod logs;
pub mod messages;
