//! Tmux-window presenter: stage the response in a temp file, open a pager.

use crate::error::PresentError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

use super::Presenter;

const RESPONSE_FILE_NAME: &str = "parrot-response.txt";

/// Displays responses by writing them to a staging file and opening a pager
/// in a new tmux window.
pub struct TmuxPresenter {
    window_name: String,
    viewer: String,
    response_path: PathBuf,
}

impl TmuxPresenter {
    /// Presenter staging to `parrot-response.txt` under the system temp dir.
    pub fn new(window_name: impl Into<String>, viewer: impl Into<String>) -> Self {
        Self {
            window_name: window_name.into(),
            viewer: viewer.into(),
            response_path: std::env::temp_dir().join(RESPONSE_FILE_NAME),
        }
    }

    /// Override the staging file location.
    pub fn with_response_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.response_path = path.into();
        self
    }
}

#[async_trait]
impl Presenter for TmuxPresenter {
    async fn display(&self, text: &str) -> Result<(), PresentError> {
        tokio::fs::write(&self.response_path, text).await?;
        debug!(path = %self.response_path.display(), "staged response for tmux display");

        let args = new_window_args(&self.window_name, &self.viewer, &self.response_path);
        let status = Command::new("tmux").args(&args).status().await?;
        if !status.success() {
            return Err(PresentError::Tmux(format!(
                "tmux new-window exited with {status}"
            )));
        }
        Ok(())
    }
}

/// Argument list for the `tmux new-window` invocation.
///
/// Kept as a pure function so tests can verify the exact command line
/// without spawning tmux.
pub(crate) fn new_window_args(window_name: &str, viewer: &str, path: &Path) -> Vec<String> {
    vec![
        "new-window".to_string(),
        "-n".to_string(),
        window_name.to_string(),
        format!("{viewer} {}", shell_quote(&path.to_string_lossy())),
    ]
}

/// Shell-safe single-quote escaping.
fn shell_quote(s: &str) -> String {
    if s.is_empty() {
        "''".into()
    } else {
        format!("'{}'", s.replace('\'', "'\\''"))
    }
}
