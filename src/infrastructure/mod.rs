//! # Infrastructure Layer
//!
//! Handles interactions with the outside world.
//! Exposes the domain's `LayoutAssistant` over HTTP.

pub mod http;
