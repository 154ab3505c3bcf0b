//! # Application Layer
//!
//! Contains the core logic of the service: the keyword classifier, the
//! assistant that wraps it into responses, and logging setup.

pub mod assistant;
pub mod classifier;
pub mod logging;
