//! # Domain Layer
//!
//! Core definitions, types, and traits that define the layout assistant.
//! Independent of the HTTP framework, serving as the contract for other layers.

pub mod config;
pub mod error;
pub mod paths;
pub mod traits;
pub mod types;
