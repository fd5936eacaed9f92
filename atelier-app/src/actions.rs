//! Application-side interpretation of assistant actions. The core only
//! proposes actions; this module executes one against the persisted
//! dashboard state, on an explicit user command.

use atelier_core::{Action, ActionType};
use atelier_store::{
    Brand, ContentItem, ContentStatus, DashboardState, Experiment, ExperimentStatus, Project,
    ProjectStatus,
};

/// Apply one action to the in-memory state and describe what changed.
/// Payload keys are optional hints; every branch has a sensible default.
pub fn apply_action(action: &Action, state: &mut DashboardState) -> String {
    let now = chrono::Utc::now().timestamp();

    match action.action_type {
        ActionType::CreateProject => {
            let name = payload_str(action, "name").unwrap_or("New project");
            state.projects.push(Project {
                id: new_id(),
                name: name.to_string(),
                status: ProjectStatus::Active,
                created_at: now,
            });
            format!("Created project '{}'", name)
        }
        ActionType::CreateContent => {
            let title = payload_str(action, "title").unwrap_or("Untitled draft");
            state.content.push(ContentItem {
                id: new_id(),
                title: title.to_string(),
                format: payload_str(action, "format").map(str::to_string),
                status: ContentStatus::Draft,
                created_at: now,
            });
            format!("Created content draft '{}'", title)
        }
        ActionType::CreateBrand => {
            let name = payload_str(action, "name").unwrap_or("New brand");
            state.brands.push(Brand {
                id: new_id(),
                name: name.to_string(),
                voice: payload_str(action, "voice").map(str::to_string),
                created_at: now,
            });
            format!("Created brand '{}'", name)
        }
        ActionType::CreateExperiment => {
            let name = payload_str(action, "name").unwrap_or("New experiment");
            state.experiments.push(Experiment {
                id: new_id(),
                name: name.to_string(),
                hypothesis: payload_str(action, "hypothesis").map(str::to_string),
                status: ExperimentStatus::Planned,
                created_at: now,
            });
            format!("Created experiment '{}'", name)
        }
        ActionType::GeneratePlan => {
            let horizon = payload_str(action, "horizon").unwrap_or("quarter");
            let title = format!("Plan draft ({})", horizon);
            state.content.push(ContentItem {
                id: new_id(),
                title: title.clone(),
                format: Some("plan".to_string()),
                status: ContentStatus::Draft,
                created_at: now,
            });
            format!("Created '{}' — open it to flesh the plan out", title)
        }
        ActionType::SchedulePost => {
            if let Some(draft) = state
                .content
                .iter_mut()
                .find(|item| item.status == ContentStatus::Draft)
            {
                draft.status = ContentStatus::Scheduled;
                format!("Scheduled '{}'", draft.title)
            } else {
                let title = payload_str(action, "title").unwrap_or("Untitled post");
                state.content.push(ContentItem {
                    id: new_id(),
                    title: title.to_string(),
                    format: None,
                    status: ContentStatus::Scheduled,
                    created_at: now,
                });
                format!("No draft to schedule — created scheduled post '{}'", title)
            }
        }
        ActionType::AddBrandVoice => {
            let voice = payload_str(action, "voice").unwrap_or("warm, direct, confident");
            if let Some(brand) = state.brands.first_mut() {
                brand.voice = Some(voice.to_string());
                format!("Set voice for brand '{}'", brand.name)
            } else {
                state.brands.push(Brand {
                    id: new_id(),
                    name: "New brand".to_string(),
                    voice: Some(voice.to_string()),
                    created_at: now,
                });
                "No brand yet — created one with that voice".to_string()
            }
        }
    }
}

fn payload_str<'a>(action: &'a Action, key: &str) -> Option<&'a str> {
    action.payload.get(key).and_then(|value| value.as_str())
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    fn action(action_type: ActionType, payload: &[(&str, &str)]) -> Action {
        let payload: Map<String, serde_json::Value> = payload
            .iter()
            .map(|(k, v)| (k.to_string(), json!(v)))
            .collect();
        Action::new(action_type, action_type.default_label(), payload)
    }

    #[test]
    fn test_create_project_uses_payload_name() {
        let mut state = DashboardState::default();
        let msg = apply_action(
            &action(ActionType::CreateProject, &[("name", "Zine relaunch")]),
            &mut state,
        );

        assert_eq!(state.projects.len(), 1);
        assert_eq!(state.projects[0].name, "Zine relaunch");
        assert!(msg.contains("Zine relaunch"));
    }

    #[test]
    fn test_schedule_post_promotes_existing_draft() {
        let mut state = DashboardState::default();
        apply_action(&action(ActionType::CreateContent, &[]), &mut state);

        apply_action(&action(ActionType::SchedulePost, &[]), &mut state);

        assert_eq!(state.content.len(), 1);
        assert_eq!(state.content[0].status, ContentStatus::Scheduled);
    }

    #[test]
    fn test_add_brand_voice_without_brand_creates_one() {
        let mut state = DashboardState::default();
        apply_action(
            &action(ActionType::AddBrandVoice, &[("voice", "playful")]),
            &mut state,
        );

        assert_eq!(state.brands.len(), 1);
        assert_eq!(state.brands[0].voice.as_deref(), Some("playful"));
    }
}
