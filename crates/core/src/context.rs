use atelier_store::DashboardState;
use serde::{Deserialize, Serialize};

const RECENT_TITLES_CAP: usize = 3;

/// Bounded projection of the live dashboard state, safe to embed in a
/// prompt. Counts and names only, never full record bodies.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DashboardSummary {
    pub project_count: usize,
    pub brand_count: usize,
    pub content_count: usize,
    pub experiment_count: usize,
    pub project_names: Vec<String>,
    pub brand_names: Vec<String>,
    pub recent_content_titles: Vec<String>,
}

impl DashboardSummary {
    pub fn from_state(state: &DashboardState) -> Self {
        let mut recent: Vec<_> = state.content.iter().collect();
        recent.sort_by_key(|item| std::cmp::Reverse(item.created_at));

        Self {
            project_count: state.projects.len(),
            brand_count: state.brands.len(),
            content_count: state.content.len(),
            experiment_count: state.experiments.len(),
            project_names: state.projects.iter().map(|p| p.name.clone()).collect(),
            brand_names: state.brands.iter().map(|b| b.name.clone()).collect(),
            recent_content_titles: recent
                .iter()
                .take(RECENT_TITLES_CAP)
                .map(|item| item.title.clone())
                .collect(),
        }
    }

    /// Compact text block appended to the system persona.
    pub fn prompt_block(&self) -> String {
        format!(
            "Current workspace:\n\
             - Projects ({}): {}\n\
             - Brands ({}): {}\n\
             - Content pieces ({}), most recent: {}\n\
             - Experiments ({})",
            self.project_count,
            join_or_none(&self.project_names),
            self.brand_count,
            join_or_none(&self.brand_names),
            self.content_count,
            join_or_none(&self.recent_content_titles),
            self.experiment_count,
        )
    }
}

fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_store::{ContentItem, ContentStatus, DashboardState, Project, ProjectStatus};

    fn content(title: &str, created_at: i64) -> ContentItem {
        ContentItem {
            id: title.to_string(),
            title: title.to_string(),
            format: None,
            status: ContentStatus::Draft,
            created_at,
        }
    }

    #[test]
    fn test_empty_state_summarizes_to_zeroes() {
        let summary = DashboardSummary::from_state(&DashboardState::default());
        assert_eq!(summary.project_count, 0);
        assert_eq!(summary.experiment_count, 0);
        assert!(summary.project_names.is_empty());

        let block = summary.prompt_block();
        assert!(block.contains("Projects (0): none"));
    }

    #[test]
    fn test_recent_titles_capped_and_ordered() {
        let state = DashboardState {
            content: vec![
                content("oldest", 1),
                content("newest", 4),
                content("older", 2),
                content("newer", 3),
            ],
            ..Default::default()
        };

        let summary = DashboardSummary::from_state(&state);
        assert_eq!(summary.content_count, 4);
        assert_eq!(
            summary.recent_content_titles,
            vec!["newest", "newer", "older"]
        );
    }

    #[test]
    fn test_prompt_block_lists_names() {
        let state = DashboardState {
            projects: vec![Project {
                id: "p1".to_string(),
                name: "Spring campaign".to_string(),
                status: ProjectStatus::Active,
                created_at: 0,
            }],
            ..Default::default()
        };

        let block = DashboardSummary::from_state(&state).prompt_block();
        assert!(block.contains("Projects (1): Spring campaign"));
    }
}
