//! Panel state and the per-frame reducer.

use std::collections::VecDeque;

use sensordeck_protocol::parse_reading;

use crate::status::Status;

/// Default number of retained log entries.
pub(crate) const DEFAULT_LOG_CAPACITY: usize = 256;

// ════════════════════════════════════════════════════════════════════
// Log entries
// ════════════════════════════════════════════════════════════════════

/// How a frame entered the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogEntryKind {
    /// Frame parsed as a sensor reading.
    Payload,
    /// Frame could not be parsed; kept in the log as a visible error.
    Malformed,
}

/// One retained log line: the raw frame text plus how it was classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub kind: LogEntryKind,
    pub raw: String,
}

// ════════════════════════════════════════════════════════════════════
// Reducer result
// ════════════════════════════════════════════════════════════════════

/// Summary of what one applied frame changed, for selective redraw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Applied {
    /// A temperature reading: readout and status were updated.
    Temperature { value: f64, status: Status },
    /// A valid reading for some other parameter: log only.
    Logged,
    /// Unparseable frame: an error entry was logged, nothing else moved.
    Malformed,
}

// ════════════════════════════════════════════════════════════════════
// Panel state
// ════════════════════════════════════════════════════════════════════

/// The three UI regions as explicit state.
///
/// Mutated only through [`PanelState::apply`], once per inbound frame, on
/// whatever single task owns the panel — there is no concurrent mutator,
/// so no interior locking lives here.
#[derive(Debug, Clone)]
pub struct PanelState {
    /// Retained log, newest entry first.
    log: VecDeque<LogEntry>,
    log_capacity: usize,
    /// Most recent temperature value, once any reading has arrived.
    temperature: Option<f64>,
    /// Status of the most recent temperature evaluation.
    status: Option<Status>,
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

impl PanelState {
    /// Empty panel with the default log capacity.
    pub fn new() -> Self {
        Self::with_log_capacity(DEFAULT_LOG_CAPACITY)
    }

    /// Empty panel retaining at most `capacity` log entries.
    ///
    /// A capacity of 0 disables the log entirely.
    pub fn with_log_capacity(capacity: usize) -> Self {
        Self {
            log: VecDeque::with_capacity(capacity.min(DEFAULT_LOG_CAPACITY)),
            log_capacity: capacity,
            temperature: None,
            status: None,
        }
    }

    /// Apply one inbound frame payload.
    ///
    /// The raw text is always logged (newest-first); temperature frames
    /// additionally update the readout and re-evaluate the status
    /// indicator. Malformed payloads become visible error entries and are
    /// otherwise skipped — the panel keeps processing later frames.
    pub fn apply(&mut self, payload: &str) -> Applied {
        match parse_reading(payload) {
            Ok(reading) => {
                self.push_entry(LogEntryKind::Payload, payload);

                if reading.is_temperature() {
                    let status = Status::for_value(reading.device_value);
                    self.temperature = Some(reading.device_value);
                    self.status = Some(status);
                    Applied::Temperature {
                        value: reading.device_value,
                        status,
                    }
                } else {
                    Applied::Logged
                }
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("panel: malformed payload dropped from readout: {}", _e);

                self.push_entry(LogEntryKind::Malformed, payload);
                Applied::Malformed
            }
        }
    }

    fn push_entry(&mut self, kind: LogEntryKind, raw: &str) {
        if self.log_capacity == 0 {
            return;
        }
        if self.log.len() == self.log_capacity {
            self.log.pop_back();
        }
        self.log.push_front(LogEntry {
            kind,
            raw: raw.to_string(),
        });
    }

    /// Log entries, newest first.
    pub fn log(&self) -> impl Iterator<Item = &LogEntry> {
        self.log.iter()
    }

    /// Most recent log entry, if any.
    pub fn latest_entry(&self) -> Option<&LogEntry> {
        self.log.front()
    }

    /// Most recent temperature value.
    pub fn temperature(&self) -> Option<f64> {
        self.temperature
    }

    /// Readout text for the temperature region, e.g. `"Temperature 30°C"`.
    pub fn temperature_text(&self) -> Option<String> {
        self.temperature.map(|v| format!("Temperature {v}°C"))
    }

    /// Current status indicator; `None` until the first temperature
    /// reading has been evaluated.
    pub fn status(&self) -> Option<Status> {
        self.status
    }
}

// ════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════
