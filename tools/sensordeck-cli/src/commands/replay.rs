//! Replay Command - Offline Panel Rendering
//!
//! Feeds newline-delimited payloads from a file (or stdin) through the
//! same reducer and projection the live watch uses.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use sensordeck_core::{PanelState, Render};

use crate::error::{CliError, CliResult};
use crate::output::live::{self, TermRenderer};

/// Replay recorded payloads through the panel
#[derive(Debug, Args)]
pub struct ReplayCommand {
    /// File of newline-delimited payloads; reads stdin when omitted
    pub file: Option<PathBuf>,

    /// Retained log entries (0 disables the log region)
    #[arg(long, default_value = "256")]
    pub log_capacity: usize,
}

impl ReplayCommand {
    pub async fn execute(self) -> CliResult<()> {
        let input = match &self.file {
            Some(path) => tokio::fs::read_to_string(path)
                .await
                .map_err(|e| CliError::replay_input(path.display().to_string(), e))?,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        let (state, frames) = run_replay(&input, self.log_capacity);

        tracing::info!("Replayed {} frames", frames);

        live::print_replay_summary(&state);

        Ok(())
    }
}

/// Push every non-blank input line through the panel, rendering as the
/// live watch would. Returns the final state and the frame count.
fn run_replay(input: &str, log_capacity: usize) -> (PanelState, usize) {
    let mut state = PanelState::with_log_capacity(log_capacity);
    let renderer = TermRenderer;
    let mut frames = 0usize;

    for payload in input.lines().filter(|line| !line.trim().is_empty()) {
        let applied = state.apply(payload);
        renderer.render(&state, &applied);
        frames += 1;
    }

    (state, frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensordeck_core::Status;

    #[test]
    fn replay_counts_frames_and_reaches_final_state() {
        let input = concat!(
            r#"{"deviceParameter":"Temperature","deviceValue":30}"#,
            "\n\n",
            "{nonsense\n",
            r#"{"deviceParameter":"Temperature","deviceValue":25}"#,
            "\n",
        );

        let (state, frames) = run_replay(input, 16);

        // Blank lines are skipped; the malformed frame still counts.
        assert_eq!(frames, 3);
        assert_eq!(state.status(), Some(Status::Normal));
        assert_eq!(state.temperature_text().unwrap(), "Temperature 25°C");
    }

    #[test]
    fn replay_of_empty_input_leaves_the_panel_untouched() {
        let (state, frames) = run_replay("\n\n", 16);
        assert_eq!(frames, 0);
        assert_eq!(state.temperature(), None);
        assert_eq!(state.log().count(), 0);
    }
}
