use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// Closed set of dashboard operations an assistant reply may propose.
/// The core never executes these; the calling UI does, on explicit click.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    CreateProject,
    CreateContent,
    CreateBrand,
    CreateExperiment,
    GeneratePlan,
    SchedulePost,
    AddBrandVoice,
}

impl ActionType {
    pub fn default_label(&self) -> &'static str {
        match self {
            ActionType::CreateProject => "Create a new project",
            ActionType::CreateContent => "Draft new content",
            ActionType::CreateBrand => "Create a brand",
            ActionType::CreateExperiment => "Set up an experiment",
            ActionType::GeneratePlan => "Generate a plan",
            ActionType::SchedulePost => "Schedule a post",
            ActionType::AddBrandVoice => "Add a brand voice",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub label: String,
    #[serde(default)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

impl Action {
    pub fn new(
        action_type: ActionType,
        label: impl Into<String>,
        payload: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            action_type,
            label: label.into(),
            payload,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<Action>,
}

impl ConversationMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::build(Role::User, content.into(), Vec::new())
    }

    /// Only assistant messages carry actions.
    pub fn assistant(content: impl Into<String>, actions: Vec<Action>) -> Self {
        Self::build(Role::Assistant, content.into(), actions)
    }

    fn build(role: Role, content: String, actions: Vec<Action>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content,
            timestamp: chrono::Utc::now().to_rfc3339(),
            actions,
        }
    }
}

/// The only shape the orchestration layer returns, identical across the
/// remote and local resolution paths.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AssistantReply {
    pub content: String,
    pub actions: Vec<Action>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_type_wire_names() {
        let json = serde_json::to_string(&ActionType::CreateProject).unwrap();
        assert_eq!(json, "\"create_project\"");

        let parsed: ActionType = serde_json::from_str("\"generate_plan\"").unwrap();
        assert_eq!(parsed, ActionType::GeneratePlan);
    }

    #[test]
    fn test_unknown_action_type_rejected() {
        let result: Result<ActionType, _> = serde_json::from_str("\"launch_rocket\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_user_message_has_no_actions() {
        let msg = ConversationMessage::user("hello");
        assert_eq!(msg.role, Role::User);
        assert!(msg.actions.is_empty());
        assert!(!msg.id.is_empty());
    }
}
