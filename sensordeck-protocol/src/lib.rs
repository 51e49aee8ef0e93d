//! # sensordeck-protocol
//!
//! Wire contract types shared between the sensordeck panel and its
//! sensor-reporting backend.
//!
//! # Wire Format
//!
//! The backend pushes one JSON object per WebSocket text frame:
//!
//! ```json
//! { "deviceParameter": "Temperature", "deviceValue": 27.5 }
//! ```
//!
//! Only `deviceParameter` and `deviceValue` are read; any additional fields
//! the backend attaches (device ids, timestamps, battery levels) are
//! ignored on deserialization.

use serde::{Deserialize, Serialize};

/// Parameter name the backend uses for temperature readings.
pub const TEMPERATURE_PARAMETER: &str = "Temperature";

// ════════════════════════════════════════════════════════════════════
// Sensor reading
// ════════════════════════════════════════════════════════════════════

/// One reported measurement: a parameter name and its numeric value.
///
/// Transient by design — parsed from a single inbound frame, consumed by
/// the panel reducer, then discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorReading {
    /// Which physical quantity was measured (e.g. `"Temperature"`).
    pub device_parameter: String,
    /// The measured value.
    pub device_value: f64,
}

impl SensorReading {
    /// `true` when this reading reports a temperature.
    pub fn is_temperature(&self) -> bool {
        self.device_parameter == TEMPERATURE_PARAMETER
    }
}

/// Parse one raw frame payload into a [`SensorReading`].
pub fn parse_reading(payload: &str) -> Result<SensorReading, serde_json::Error> {
    serde_json::from_str(payload)
}

// ════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════
