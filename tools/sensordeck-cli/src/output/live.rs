//! Live Output Formatting (terminal projection of the panel)
//!
//! Stateless rendering of [`PanelState`] onto stdout: the three panel
//! regions become a scrolling log (newest line printed last, as terminals
//! scroll), a temperature readout line, and a colored status marker.

use chrono::{DateTime, Local};
use colored::Colorize;
use sensordeck_core::{Applied, LogEntry, LogEntryKind, PanelState, Render, Status};
use sensordeck_ws_client::ConnectionStatus;

/// Terminal projection of the panel. One `render` call per applied frame.
pub struct TermRenderer;

impl Render for TermRenderer {
    fn render(&self, state: &PanelState, applied: &Applied) {
        if let Some(entry) = state.latest_entry() {
            println!("{}", format_log_line(Local::now(), entry));
        }
        if matches!(applied, Applied::Temperature { .. }) {
            println!("{}", format_status_line(state));
        }
    }
}

/// Format one log entry with a receive timestamp.
pub fn format_log_line(time: DateTime<Local>, entry: &LogEntry) -> String {
    let time_str = time.format("%H:%M:%S%.3f").to_string().dimmed();
    match entry.kind {
        LogEntryKind::Payload => format!("{} | {}", time_str, entry.raw),
        LogEntryKind::Malformed => format!(
            "{} | {} {}",
            time_str,
            "✖ malformed payload:".yellow(),
            entry.raw.dimmed()
        ),
    }
}

/// Format the temperature readout with its status marker.
///
/// Red marker above the alert threshold, green at or below it.
pub fn format_status_line(state: &PanelState) -> String {
    let text = state
        .temperature_text()
        .unwrap_or_else(|| "Temperature —".to_string());
    match state.status() {
        Some(Status::Alert) => format!("{} {}", "●".red(), text.bold()),
        Some(Status::Normal) => format!("{} {}", "●".green(), text.bold()),
        None => format!("{} {}", "○".dimmed(), text.dimmed()),
    }
}

/// Print the watch start banner.
pub fn print_panel_start(url: &str) {
    println!("📡 Watching sensor feed at {}", url.bold());
    println!("{}", "Press Ctrl+C to stop".dimmed());
    println!();
}

/// Print the watch stop message.
pub fn print_panel_stop() {
    println!();
    println!("{}", "✅ Stopped watching".green());
}

/// Print a connection status transition.
pub fn print_connection_status(status: ConnectionStatus) {
    let line = match status {
        ConnectionStatus::Connected => "✔ connected".green(),
        ConnectionStatus::Connecting => "… connecting".dimmed(),
        ConnectionStatus::Reconnecting => "↻ reconnecting".yellow(),
        ConnectionStatus::Disconnected => "✖ disconnected".red(),
    };
    println!("{}", line);
}

/// Print the final panel state after a replay.
pub fn print_replay_summary(state: &PanelState) {
    println!();
    if state.temperature().is_some() {
        println!("{}", format_status_line(state));
    } else {
        println!("{}", "No temperature readings".dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_with(payloads: &[&str]) -> PanelState {
        let mut state = PanelState::new();
        for p in payloads {
            state.apply(p);
        }
        state
    }

    #[test]
    fn test_format_log_line() {
        let state = panel_with(&[r#"{"deviceParameter":"Humidity","deviceValue":40}"#]);
        let line = format_log_line(Local::now(), state.latest_entry().unwrap());
        assert!(line.contains(r#""deviceParameter":"Humidity""#));
    }

    #[test]
    fn test_format_log_line_malformed() {
        let state = panel_with(&["{nonsense"]);
        let line = format_log_line(Local::now(), state.latest_entry().unwrap());
        assert!(line.contains("malformed payload"));
        assert!(line.contains("{nonsense"));
    }

    #[test]
    fn test_format_status_line_alert() {
        let state = panel_with(&[r#"{"deviceParameter":"Temperature","deviceValue":30}"#]);
        let line = format_status_line(&state);
        assert!(line.contains("Temperature 30°C"));
    }

    #[test]
    fn test_format_status_line_boundary_normal() {
        let state = panel_with(&[r#"{"deviceParameter":"Temperature","deviceValue":25}"#]);
        assert_eq!(state.status(), Some(Status::Normal));
        assert!(format_status_line(&state).contains("Temperature 25°C"));
    }

    #[test]
    fn test_format_status_line_before_first_reading() {
        let state = PanelState::new();
        assert!(format_status_line(&state).contains("Temperature —"));
    }
}
