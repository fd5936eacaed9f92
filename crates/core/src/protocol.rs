use crate::types::{Action, ActionType};
use regex::Regex;
use serde::Deserialize;
use std::sync::OnceLock;

/// Result of scanning raw assistant output for embedded action regions.
#[derive(Debug, Clone, Default)]
pub struct ParsedReply {
    pub clean_text: String,
    pub actions: Vec<Action>,
}

/// Wire shape of one delimited region. Only `type` is required; the model
/// never supplies ids.
#[derive(Debug, Deserialize)]
struct ActionWire {
    #[serde(rename = "type")]
    action_type: ActionType,
    #[serde(default)]
    label: Option<String>,
    #[serde(default)]
    payload: serde_json::Map<String, serde_json::Value>,
}

fn action_region() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\[ACTION\](.*?)\[/ACTION\]").unwrap())
}

/// Extract every well-formed `[ACTION] ... [/ACTION]` region from `raw`,
/// in document order, and strip the matched regions from the visible text.
///
/// Malformed regions (invalid JSON, unknown `type`) are dropped without
/// failing the scan. An opening marker with no matching close marker is
/// not a region; its markup stays in the visible text.
pub fn extract_actions(raw: &str) -> ParsedReply {
    let mut actions = Vec::new();
    let mut clean = String::with_capacity(raw.len());
    let mut last_end = 0;

    for caps in action_region().captures_iter(raw) {
        let Some(whole) = caps.get(0) else { continue };
        let body = caps.get(1).map_or("", |m| m.as_str());

        clean.push_str(&raw[last_end..whole.start()]);
        last_end = whole.end();

        match serde_json::from_str::<ActionWire>(body.trim()) {
            Ok(wire) => {
                let label = wire
                    .label
                    .unwrap_or_else(|| wire.action_type.default_label().to_string());
                actions.push(Action::new(wire.action_type, label, wire.payload));
            }
            Err(e) => {
                tracing::debug!("Dropping malformed action region: {}", e);
            }
        }
    }
    clean.push_str(&raw[last_end..]);

    ParsedReply {
        clean_text: clean.trim().to_string(),
        actions,
    }
}
