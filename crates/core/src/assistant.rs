use crate::context::DashboardSummary;
use crate::fallback::fallback_reply;
use crate::protocol::extract_actions;
use crate::types::{AssistantReply, ConversationMessage, Role};
use atelier_providers::{ChatMessage, ChatProvider, ProviderError};
use atelier_store::DashboardState;
use std::sync::Arc;

const SYSTEM_PERSONA: &str = "\
You are Atelier, a creative-operations assistant. You help independent creators \
run projects, content, brands and launch experiments from one dashboard.

Be concise and practical. When a concrete next step exists, attach it as an \
action the dashboard can execute. Embed each action in your reply exactly as:

[ACTION]
{ \"type\": \"<action_type>\", \"label\": \"<button text>\", \"payload\": { } }
[/ACTION]

Valid action types: create_project, create_content, create_brand, \
create_experiment, generate_plan, schedule_post, add_brand_voice. \
Keep the rest of the reply plain prose.";

/// Orchestration entry point. Resolves each turn remotely when a provider
/// is configured and degrades to the deterministic local responder on any
/// failure; never returns an error to the caller.
pub struct Assistant {
    provider: Option<Arc<dyn ChatProvider>>,
}

impl Assistant {
    /// The provider is injected at construction; the core never reads
    /// ambient environment state to decide the resolution path.
    pub fn new(provider: Option<Arc<dyn ChatProvider>>) -> Self {
        Self { provider }
    }

    pub fn offline() -> Self {
        Self { provider: None }
    }

    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn respond(
        &self,
        user_text: &str,
        history: &[ConversationMessage],
        state: &DashboardState,
    ) -> AssistantReply {
        let summary = DashboardSummary::from_state(state);

        if let Some(provider) = &self.provider {
            match resolve_remote(provider.as_ref(), user_text, history, &summary).await {
                Ok(reply) => return reply,
                Err(e) => {
                    tracing::warn!("Remote resolution failed, using local fallback: {}", e);
                }
            }
        }

        fallback_reply(user_text, &summary)
    }
}

async fn resolve_remote(
    provider: &dyn ChatProvider,
    user_text: &str,
    history: &[ConversationMessage],
    summary: &DashboardSummary,
) -> Result<AssistantReply, ProviderError> {
    let messages = build_messages(user_text, history, summary);

    tracing::debug!("Resolving turn via {}", provider.name());
    let raw = provider.complete(&messages).await?;

    let parsed = extract_actions(&raw);
    Ok(AssistantReply {
        content: parsed.clean_text,
        actions: parsed.actions,
    })
}

/// Instruction sequence: persona + workspace summary, prior turns in
/// original order, then the new user turn.
fn build_messages(
    user_text: &str,
    history: &[ConversationMessage],
    summary: &DashboardSummary,
) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(format!(
        "{}\n\n{}",
        SYSTEM_PERSONA,
        summary.prompt_block()
    )));

    for turn in history {
        match turn.role {
            Role::User => messages.push(ChatMessage::user(turn.content.clone())),
            Role::Assistant => messages.push(ChatMessage::assistant(turn.content.clone())),
        }
    }

    messages.push(ChatMessage::user(user_text));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActionType;
    use async_trait::async_trait;

    struct CannedProvider(String);

    #[async_trait]
    impl ChatProvider for CannedProvider {
        async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, ProviderError> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &str {
            "canned"
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl ChatProvider for FailingProvider {
        async fn complete(&self, _messages: &[ChatMessage]) -> Result<String, ProviderError> {
            Err(ProviderError::Http("connection refused".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[tokio::test]
    async fn test_offline_uses_fallback() {
        let assistant = Assistant::offline();
        let reply = assistant
            .respond("help me plan", &[], &DashboardState::default())
            .await;

        assert!(!reply.content.is_empty());
        assert_eq!(reply.actions.len(), 1);
        assert_eq!(reply.actions[0].action_type, ActionType::GeneratePlan);
    }

    #[tokio::test]
    async fn test_remote_reply_is_parsed() {
        let raw = "On it.[ACTION]{\"type\":\"create_content\",\"label\":\"Draft it\"}[/ACTION]";
        let assistant = Assistant::new(Some(Arc::new(CannedProvider(raw.to_string()))));

        let reply = assistant
            .respond("write something", &[], &DashboardState::default())
            .await;

        assert_eq!(reply.content, "On it.");
        assert_eq!(reply.actions.len(), 1);
        assert_eq!(reply.actions[0].label, "Draft it");
    }

    #[tokio::test]
    async fn test_remote_failure_matches_direct_fallback() {
        let assistant = Assistant::new(Some(Arc::new(FailingProvider)));
        let state = DashboardState::default();

        let reply = assistant.respond("write a post", &[], &state).await;
        let direct = fallback_reply("write a post", &DashboardSummary::from_state(&state));

        assert_eq!(reply.content, direct.content);
        assert_eq!(reply.actions.len(), direct.actions.len());
        assert_eq!(reply.actions[0].action_type, direct.actions[0].action_type);
        assert_eq!(reply.actions[0].label, direct.actions[0].label);
        assert_eq!(reply.actions[0].payload, direct.actions[0].payload);
    }

    #[tokio::test]
    async fn test_history_and_context_reach_the_provider() {
        use std::sync::Mutex;

        struct RecordingProvider(Mutex<Vec<ChatMessage>>);

        #[async_trait]
        impl ChatProvider for RecordingProvider {
            async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
                *self.0.lock().unwrap() = messages.to_vec();
                Ok("ok".to_string())
            }

            fn name(&self) -> &str {
                "recording"
            }
        }

        let recorder = Arc::new(RecordingProvider(Mutex::new(Vec::new())));
        let provider: Arc<dyn ChatProvider> = recorder.clone();
        let assistant = Assistant::new(Some(provider));

        let history = vec![
            ConversationMessage::user("first question"),
            ConversationMessage::assistant("first answer", Vec::new()),
        ];
        assistant
            .respond("second question", &history, &DashboardState::default())
            .await;

        let seen = recorder.0.lock().unwrap().clone();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0].role, "system");
        assert!(seen[0].content.contains("Current workspace:"));
        assert_eq!(seen[1].content, "first question");
        assert_eq!(seen[2].role, "assistant");
        assert_eq!(seen[3].content, "second question");
    }
}
