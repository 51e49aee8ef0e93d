//! # sensordeck-core
//!
//! The panel state machine: every inbound frame from the backend runs
//! through a single reducer that maintains the three UI regions — a
//! bounded newest-first log, the current temperature readout, and a
//! binary alert/normal status indicator.
//!
//! The crate is pure: no sockets, no terminal, no clocks. Transports feed
//! payloads into [`PanelState::apply`]; presentation layers implement
//! [`Render`] and project the resulting state however they like. That
//! split is what lets the panel logic be tested without any I/O.
//!
//! ```rust
//! use sensordeck_core::{Applied, PanelState, Status};
//!
//! let mut state = PanelState::new();
//! let applied = state.apply(r#"{"deviceParameter":"Temperature","deviceValue":30}"#);
//! assert!(matches!(applied, Applied::Temperature { status: Status::Alert, .. }));
//! assert_eq!(state.temperature_text().unwrap(), "Temperature 30°C");
//! ```

mod state;
mod status;

pub use state::{Applied, LogEntry, LogEntryKind, PanelState};
pub use status::{Status, ALERT_THRESHOLD_CELSIUS};

/// Stateless projection of panel state onto some display surface.
///
/// Called once per applied frame with the post-reduction state and a
/// summary of what the frame changed, so implementations only redraw the
/// regions that moved.
pub trait Render {
    fn render(&self, state: &PanelState, applied: &Applied);
}
