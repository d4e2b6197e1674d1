//! Response presentation: stdout by default, a tmux window on request.
//!
//! The display side effect sits behind a single-operation trait so the
//! tmux-backed implementation can be swapped or mocked without spawning
//! real processes.

pub mod tmux;

use crate::error::PresentError;
use async_trait::async_trait;
use std::io::Write;

pub use tmux::TmuxPresenter;

/// Capability that shows response text to the user.
#[async_trait]
pub trait Presenter: Send + Sync {
    async fn display(&self, text: &str) -> Result<(), PresentError>;
}

/// Writes the text to standard output, ensuring a trailing newline.
pub struct StdoutPresenter;

#[async_trait]
impl Presenter for StdoutPresenter {
    async fn display(&self, text: &str) -> Result<(), PresentError> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        out.write_all(text.as_bytes())?;
        if !text.ends_with('\n') {
            out.write_all(b"\n")?;
        }
        out.flush()?;
        Ok(())
    }
}
