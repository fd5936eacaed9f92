use crate::types::DashboardState;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub async fn initialize(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        tracing::info!("State store initialized at {:?}", self.path);
        Ok(())
    }

    pub async fn load(&self) -> Result<DashboardState, StoreError> {
        if !self.path.exists() {
            tracing::info!("No dashboard state on disk, starting empty");
            return Ok(DashboardState::default());
        }

        let content = fs::read_to_string(&self.path).await?;
        let state: DashboardState = serde_json::from_str(&content)?;

        tracing::debug!(
            "Loaded dashboard state: {} projects, {} brands, {} content, {} experiments",
            state.projects.len(),
            state.brands.len(),
            state.content.len(),
            state.experiments.len()
        );
        Ok(state)
    }

    pub async fn save(&self, state: &DashboardState) -> Result<(), StoreError> {
        // Atomic write: write to temp file, then rename
        let temp_path = self.path.with_extension("tmp");
        let content = serde_json::to_string_pretty(state)?;

        fs::write(&temp_path, content).await?;
        fs::rename(&temp_path, &self.path).await?;

        tracing::debug!("Saved dashboard state to {:?}", self.path);
        Ok(())
    }
}
