//! # Domain Types
//!
//! Request, action, and response shapes exchanged with the layout editor.
//! Field names follow the editor's JSON (camelCase, `type` for the action kind).

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::sync::OnceLock;

/// Incoming instruction from the visual editor panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistRequest {
    /// Free-text instruction. `None` when the caller omitted it.
    #[serde(default)]
    pub prompt: Option<String>,
    /// Prior screenshot, usually a `data:image/png;base64,...` URL.
    #[serde(default)]
    pub screenshot: Option<String>,
    /// Opaque label of the calling surface. Not interpreted.
    #[serde(default, deserialize_with = "null_as_default")]
    pub context: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub capabilities: Vec<String>,
}

/// Treats an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl AssistRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: Some(prompt.into()),
            ..Default::default()
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn with_screenshot(mut self, screenshot: impl Into<String>) -> Self {
        self.screenshot = Some(screenshot.into());
        self
    }

    /// The prompt, if present and non-empty.
    pub fn instruction(&self) -> Option<&str> {
        self.prompt.as_deref().filter(|p| !p.is_empty())
    }
}

/// The fixed set of layout changes the assistant can suggest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    LayoutOptimization,
    ComponentResize,
    ColorOptimization,
    ResponsiveOptimization,
    LayoutReorder,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::LayoutOptimization => "layout-optimization",
            ActionKind::ComponentResize => "component-resize",
            ActionKind::ColorOptimization => "color-optimization",
            ActionKind::ResponsiveOptimization => "responsive-optimization",
            ActionKind::LayoutReorder => "layout-reorder",
        }
    }
}

/// One layout change the caller should apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutAction {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default)]
    pub changes: Map<String, Value>,
}

/// Envelope the editor applies in one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutChanges {
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub changes: Vec<LayoutAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistResponse {
    pub success: bool,
    pub message: String,
    pub actions: Vec<LayoutAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_changes: Option<LayoutChanges>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// What we can tell about a screenshot without decoding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screenshot {
    pub media_type: Option<String>,
    pub payload_len: usize,
}

fn data_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)^data:([A-Za-z0-9.+/-]+);base64,(.*)$").expect("Invalid data URL regex")
    })
}

impl Screenshot {
    /// Accepts either a data URL or a bare base64 payload.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match data_url_regex().captures(raw) {
            Some(caps) => Self {
                media_type: caps.get(1).map(|m| m.as_str().to_string()),
                payload_len: caps.get(2).map_or(0, |m| m.as_str().len()),
            },
            None => Self {
                media_type: None,
                payload_len: raw.len(),
            },
        }
    }
}
