use atelier_app::actions::apply_action;
use atelier_app::config::Config;
use atelier_core::{Action, Assistant, ConversationMessage, DashboardSummary};
use atelier_providers::{ChatProvider, OpenAiCompatibleProvider};
use atelier_store::{DashboardState, StateStore};
use std::io::{self, Write};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║              Atelier — creative-operations assistant             ║");
    println!("║  Commands: help, status, apply <n>, exit                         ║");
    println!("╚══════════════════════════════════════════════════════════════════╝");
    println!();

    let config = Config::load_or_default("atelier.toml")?;

    let store = StateStore::new(config.state_path());
    store.initialize().await?;
    let mut state = store.load().await?;

    // Credential resolution happens here, at the application boundary;
    // the assistant only sees the injected provider.
    let api_key = std::env::var("ATELIER_API_KEY").ok();
    let provider: Option<Arc<dyn ChatProvider>> = match (&config.provider, api_key) {
        (Some(cfg), Some(key)) => {
            println!("Using provider: {} ({})", cfg.endpoint, cfg.model);
            Some(Arc::new(OpenAiCompatibleProvider::new(
                cfg.endpoint.clone(),
                key,
                cfg.model.clone(),
            )))
        }
        (Some(_), None) => {
            println!("ℹ️  ATELIER_API_KEY not set — assistant answers locally.");
            None
        }
        (None, _) => {
            println!("ℹ️  No provider configured — assistant answers locally.");
            None
        }
    };
    let assistant = Assistant::new(provider);
    println!();

    let mut history: Vec<ConversationMessage> = Vec::new();
    let mut pending_actions: Vec<Action> = Vec::new();

    loop {
        print!("atelier> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        match input {
            "exit" | "quit" => {
                println!("👋 Goodbye!");
                break;
            }
            "help" => {
                print_help();
                continue;
            }
            "status" => {
                print_status(&state, assistant.has_provider());
                continue;
            }
            "clear" => {
                print!("\x1B[2J\x1B[1;1H");
                continue;
            }
            "apply" => {
                println!("Usage: apply <n>  (after a reply that offers actions)");
                continue;
            }
            _ => {}
        }

        if let Some(arg) = input.strip_prefix("apply ").map(str::trim) {
            if pending_actions.is_empty() {
                println!("No pending actions. Ask me something first.");
                continue;
            }
            match arg.parse::<usize>() {
                Ok(n) if (1..=pending_actions.len()).contains(&n) => {
                    let outcome = apply_action(&pending_actions[n - 1], &mut state);
                    store.save(&state).await?;
                    println!("✅ {}", outcome);
                }
                _ => println!("Usage: apply <1..{}>", pending_actions.len()),
            }
            continue;
        }

        // Chat turn
        let reply = assistant.respond(input, &history, &state).await;

        println!("\n{}\n", reply.content);
        if !reply.actions.is_empty() {
            for (i, action) in reply.actions.iter().enumerate() {
                println!("  [{}] {}", i + 1, action.label);
            }
            println!("  Use 'apply <n>' to run one.\n");
        }

        pending_actions = reply.actions.clone();
        history.push(ConversationMessage::user(input));
        history.push(ConversationMessage::assistant(
            reply.content.clone(),
            reply.actions,
        ));
    }

    store.save(&state).await?;
    Ok(())
}

fn print_help() {
    println!("\n📖 Commands:");
    println!("  help        - Show this help message");
    println!("  status      - Show workspace summary");
    println!("  apply <n>   - Execute action <n> from the last reply");
    println!("  clear       - Clear screen");
    println!("  exit, quit  - Leave");
    println!("\n💡 Anything else is sent to the assistant.\n");
}

fn print_status(state: &DashboardState, remote: bool) {
    let summary = DashboardSummary::from_state(state);
    println!("\n📊 Workspace:");
    println!("  Projects:    {}", summary.project_count);
    println!("  Brands:      {}", summary.brand_count);
    println!("  Content:     {}", summary.content_count);
    println!("  Experiments: {}", summary.experiment_count);
    println!(
        "  Assistant:   {}",
        if remote { "remote + local fallback" } else { "local only" }
    );
    println!();
}
