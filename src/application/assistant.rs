//! # Keyword Assistant
//!
//! The deterministic `LayoutAssistant` backend. Validates the request, runs the
//! keyword classifier, and wraps the result in the response envelope.

use async_trait::async_trait;
use std::time::Duration;

use crate::application::classifier::{self, Classification};
use crate::domain::error::AssistError;
use crate::domain::traits::LayoutAssistant;
use crate::domain::types::{AssistRequest, AssistResponse, LayoutChanges, Screenshot};
use crate::strings::logs;

pub struct KeywordAssistant {
    latency: Duration,
}

impl KeywordAssistant {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for KeywordAssistant {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

/// Build the response for a classification. The envelope is only attached when
/// there is something to apply.
pub fn compose(classification: Classification, timestamp: i64) -> AssistResponse {
    let Classification { actions, message } = classification;
    let layout_changes = (!actions.is_empty()).then(|| LayoutChanges {
        timestamp,
        changes: actions.clone(),
    });
    AssistResponse {
        success: true,
        message,
        actions,
        layout_changes,
        error: None,
    }
}

#[async_trait]
impl LayoutAssistant for KeywordAssistant {
    async fn assist(&self, request: &AssistRequest) -> Result<AssistResponse, AssistError> {
        let instruction = request.instruction().ok_or_else(AssistError::missing_prompt)?;

        tracing::info!(
            context = %request.context,
            prompt_len = instruction.len(),
            capabilities = ?request.capabilities,
            "Processing layout instruction"
        );
        if let Some(raw) = &request.screenshot {
            let shot = Screenshot::parse(raw);
            tracing::debug!(
                media_type = shot.media_type.as_deref().unwrap_or("unknown"),
                payload_len = shot.payload_len,
                "Screenshot attached (not used by keyword backend)"
            );
        }

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let classification = classifier::classify(instruction);
        let kinds: Vec<&str> = classification.actions.iter().map(|a| a.kind.as_str()).collect();
        tracing::info!("{}", logs::classified(kinds.len(), &kinds.join(", ")));

        Ok(compose(
            classification,
            chrono::Utc::now().timestamp_millis(),
        ))
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}
