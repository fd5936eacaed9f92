pub mod assistant;
pub mod context;
pub mod fallback;
pub mod protocol;
pub mod types;

pub use assistant::Assistant;
pub use context::DashboardSummary;
pub use fallback::fallback_reply;
pub use protocol::{extract_actions, ParsedReply};
pub use types::*;
