//! # Domain Traits
//!
//! Abstract interface for the component that turns an instruction into layout actions.
//! Only the keyword backend exists today; a model-backed one would implement the same trait.

use async_trait::async_trait;

use crate::domain::error::AssistError;
use crate::domain::types::{AssistRequest, AssistResponse};

/// Abstract interface for a layout assistant backend
#[async_trait]
pub trait LayoutAssistant: Send + Sync {
    /// Classify the request and compose a response
    async fn assist(&self, request: &AssistRequest) -> Result<AssistResponse, AssistError>;

    /// Short backend name, used in logs
    fn name(&self) -> &'static str;
}
