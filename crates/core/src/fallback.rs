use crate::context::DashboardSummary;
use crate::types::{Action, ActionType, AssistantReply};
use serde_json::{json, Map, Value};

struct FallbackRule {
    keywords: &'static [&'static str],
    respond: fn(&DashboardSummary) -> (String, Option<Action>),
}

/// Branch table for the deterministic responder. Order is the priority:
/// the first rule with any keyword contained in the lowercased input wins.
const RULES: &[FallbackRule] = &[
    FallbackRule {
        keywords: &["project", "new"],
        respond: project_reply,
    },
    FallbackRule {
        keywords: &["content", "post", "write"],
        respond: content_reply,
    },
    FallbackRule {
        keywords: &["brand", "voice", "visual"],
        respond: brand_reply,
    },
    FallbackRule {
        keywords: &["launch", "experiment", "test"],
        respond: experiment_reply,
    },
    FallbackRule {
        keywords: &["plan", "strategy"],
        respond: plan_reply,
    },
    FallbackRule {
        keywords: &["idea", "suggest", "recommend"],
        respond: ideas_reply,
    },
];

/// Deterministic, network-free responder. Total: always returns non-empty
/// content, and at most one statically associated action.
pub fn fallback_reply(user_text: &str, summary: &DashboardSummary) -> AssistantReply {
    let lowered = user_text.to_lowercase();

    for rule in RULES {
        if rule.keywords.iter().any(|k| lowered.contains(k)) {
            let (content, action) = (rule.respond)(summary);
            return AssistantReply {
                content,
                actions: action.into_iter().collect(),
            };
        }
    }

    AssistantReply {
        content: overview_reply(summary),
        actions: Vec::new(),
    }
}

fn payload(entries: &[(&str, Value)]) -> Map<String, Value> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn project_reply(summary: &DashboardSummary) -> (String, Option<Action>) {
    let content = format!(
        "Let's get a project moving. You have {} projects on the board right now.\n\n\
         A good project needs a clear goal, an owner and a first milestone. \
         I can set up the record for you — use the button below and fill in the details.",
        summary.project_count
    );
    let action = Action::new(
        ActionType::CreateProject,
        "Create a new project",
        payload(&[("name", json!("New project")), ("status", json!("active"))]),
    );
    (content, Some(action))
}

fn content_reply(summary: &DashboardSummary) -> (String, Option<Action>) {
    let recent = if summary.recent_content_titles.is_empty() {
        "nothing published yet".to_string()
    } else {
        summary.recent_content_titles.join(", ")
    };
    let content = format!(
        "Here's where your content pipeline stands: {} pieces tracked, most recent: {}.\n\n\
         Tell me the format and the audience and I'll help you shape the piece. \
         Or start a draft straight away:",
        summary.content_count, recent
    );
    let action = Action::new(
        ActionType::CreateContent,
        "Draft new content",
        payload(&[("status", json!("draft"))]),
    );
    (content, Some(action))
}

fn brand_reply(summary: &DashboardSummary) -> (String, Option<Action>) {
    let content = format!(
        "Brand work pays off across everything else you ship. You have {} brands defined.\n\n\
         A brand record holds the voice and visual direction your content leans on. \
         Create one and we can refine the voice together.",
        summary.brand_count
    );
    let action = Action::new(ActionType::CreateBrand, "Create a brand", Map::new());
    (content, Some(action))
}

fn experiment_reply(summary: &DashboardSummary) -> (String, Option<Action>) {
    let content = format!(
        "Launches go smoother when you treat them as experiments. \
         You're tracking {} experiments right now.\n\n\
         Pick one metric you want to move, write the hypothesis down, and give it \
         a deadline. I can set up the record:",
        summary.experiment_count
    );
    let action = Action::new(
        ActionType::CreateExperiment,
        "Set up an experiment",
        payload(&[("status", json!("planned"))]),
    );
    (content, Some(action))
}

fn plan_reply(summary: &DashboardSummary) -> (String, Option<Action>) {
    let content = format!(
        "Here's the picture I'm working from: {} projects, {} brands, \
         {} content pieces and {} experiments.\n\n\
         A solid plan is three commitments per project and one experiment per launch — \
         small enough to finish, big enough to matter. I can generate a first draft \
         from your current workspace:",
        summary.project_count,
        summary.brand_count,
        summary.content_count,
        summary.experiment_count
    );
    let action = Action::new(
        ActionType::GeneratePlan,
        "Generate a plan",
        payload(&[("horizon", json!("quarter"))]),
    );
    (content, Some(action))
}

fn ideas_reply(summary: &DashboardSummary) -> (String, Option<Action>) {
    let content = format!(
        "A few directions worth exploring:\n\
         - Repurpose your best-performing piece into a second format\n\
         - Pair each project with one small experiment\n\
         - Revisit a paused project with a fresh angle\n\n\
         Tell me which of your {} projects you want ideas for and I'll go deeper.",
        summary.project_count
    );
    (content, None)
}

fn overview_reply(summary: &DashboardSummary) -> String {
    format!(
        "I'm your creative-operations assistant. I can help you:\n\
         - plan projects and keep them moving\n\
         - draft and schedule content\n\
         - define brand voice and visual direction\n\
         - set up launch experiments\n\n\
         Your workspace holds {} projects, {} content pieces, {} brands and \
         {} experiments. Ask me about any of them.",
        summary.project_count, summary.content_count, summary.brand_count, summary.experiment_count
    )
}
