//! # Intent Classifier
//!
//! Maps a free-text instruction to layout actions with a fixed keyword table.
//!
//! Every rule is checked independently and in table order, so one instruction can
//! trigger several actions. The resulting order follows the table, not the position
//! of the keywords in the instruction; it carries no notion of priority.

use serde_json::{Map, Value};

use crate::domain::types::{ActionKind, LayoutAction};
use crate::strings::messages;

/// How a rule's keywords must appear in the lower-cased instruction.
#[derive(Debug, Clone, Copy)]
enum Trigger {
    Any(&'static [&'static str]),
    All(&'static [&'static str]),
}

impl Trigger {
    fn matches(&self, instruction: &str) -> bool {
        match self {
            Trigger::Any(words) => words.iter().any(|w| instruction.contains(w)),
            Trigger::All(words) => words.iter().all(|w| instruction.contains(w)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum ChangeValue {
    Text(&'static str),
    List(&'static [&'static str]),
}

impl ChangeValue {
    fn to_json(self) -> Value {
        match self {
            ChangeValue::Text(s) => Value::String(s.to_string()),
            ChangeValue::List(items) => {
                Value::Array(items.iter().map(|s| Value::String(s.to_string())).collect())
            }
        }
    }
}

#[derive(Debug)]
struct IntentRule {
    trigger: Trigger,
    kind: ActionKind,
    target: Option<&'static str>,
    changes: &'static [(&'static str, ChangeValue)],
    summary: &'static str,
}

impl IntentRule {
    fn action(&self) -> LayoutAction {
        let changes: Map<String, Value> = self
            .changes
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_json()))
            .collect();
        LayoutAction {
            kind: self.kind,
            target: self.target.map(str::to_string),
            changes,
        }
    }
}

static RULES: [IntentRule; 5] = [
    IntentRule {
        trigger: Trigger::Any(&["optimize", "improve"]),
        kind: ActionKind::LayoutOptimization,
        target: None,
        changes: &[
            ("spacing", ChangeValue::Text("increased")),
            ("hierarchy", ChangeValue::Text("improved")),
            ("mobile", ChangeValue::Text("optimized")),
        ],
        summary: messages::LAYOUT_OPTIMIZED,
    },
    IntentRule {
        trigger: Trigger::All(&["newsletter", "prominent"]),
        kind: ActionKind::ComponentResize,
        target: Some("newsletter"),
        changes: &[
            ("size", ChangeValue::Text("large")),
            ("position", ChangeValue::Text("top-right")),
        ],
        summary: messages::NEWSLETTER_PROMINENT,
    },
    IntentRule {
        trigger: Trigger::Any(&["color"]),
        kind: ActionKind::ColorOptimization,
        target: None,
        changes: &[
            ("primary", ChangeValue::Text("#3B82F6")),
            ("accent", ChangeValue::Text("#8B5CF6")),
            ("background", ChangeValue::Text("#F8FAFC")),
        ],
        summary: messages::COLORS_SUGGESTED,
    },
    IntentRule {
        trigger: Trigger::Any(&["mobile"]),
        kind: ActionKind::ResponsiveOptimization,
        target: None,
        changes: &[
            ("stackOrder", ChangeValue::Text("optimized")),
            ("touchTargets", ChangeValue::Text("enlarged")),
            ("spacing", ChangeValue::Text("mobile-friendly")),
        ],
        summary: messages::MOBILE_OPTIMIZED,
    },
    IntentRule {
        trigger: Trigger::Any(&["rearrange", "flow"]),
        kind: ActionKind::LayoutReorder,
        target: None,
        changes: &[(
            "order",
            ChangeValue::List(&[
                "hero",
                "featured-post",
                "stats",
                "about",
                "newsletter",
                "activity",
            ]),
        )],
        summary: messages::COMPONENTS_REARRANGED,
    },
];

/// Actions plus the summary the editor shows next to them.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub actions: Vec<LayoutAction>,
    pub message: String,
}

pub fn classify(instruction: &str) -> Classification {
    let lowered = instruction.to_lowercase();

    let mut actions = Vec::new();
    let mut message = String::from(messages::ANALYZED_PREFIX);

    for rule in RULES.iter().filter(|r| r.trigger.matches(&lowered)) {
        actions.push(rule.action());
        message.push_str(rule.summary);
        message.push(' ');
    }

    if actions.is_empty() {
        message = messages::CLARIFY.to_string();
    }

    Classification {
        actions,
        message: message.trim().to_string(),
    }
}
