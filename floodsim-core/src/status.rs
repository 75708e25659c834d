//! Flood-risk status classification
//!
//! Each sensor maps its latest reading (or, for the level, flow and rain
//! sensors, its current set-point) onto three bands. The label and the
//! numeric severity go to the UI; the detail string carries the value that
//! drove the decision.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::status::{PH_ALERT_RANGE, PH_SAFE_RANGE, TEMP_SAFE_RANGE_C};

/// Severity band
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum StatusLevel {
    /// Normal conditions
    Safe = 0,
    /// Elevated, watch closely
    Alert = 1,
    /// Act now
    Danger = 2,
}

impl StatusLevel {
    /// Human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            StatusLevel::Safe => "SAFE",
            StatusLevel::Alert => "ALERT",
            StatusLevel::Danger => "DANGER",
        }
    }

    /// Numeric severity, 0 = safe
    pub const fn severity(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for StatusLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classification result for one sensor
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorStatus {
    /// Severity band
    pub level: StatusLevel,
    /// Value that drove the decision, formatted with its unit
    pub detail: String,
}

impl SensorStatus {
    /// Build a status
    pub fn new(level: StatusLevel, detail: impl Into<String>) -> Self {
        Self { level, detail: detail.into() }
    }

    /// Label of the severity band
    pub fn label(&self) -> &'static str {
        self.level.label()
    }

    /// Numeric severity of the band
    pub fn severity(&self) -> u8 {
        self.level.severity()
    }
}

impl fmt::Display for SensorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status: {} ({})", self.level, self.detail)
    }
}

/// Classify a value where larger is safer (distance to the water surface)
pub fn classify_descending(value: f64, safe_above: f64, alert_from: f64) -> StatusLevel {
    if value > safe_above {
        StatusLevel::Safe
    } else if value >= alert_from {
        StatusLevel::Alert
    } else {
        StatusLevel::Danger
    }
}

/// Classify a value where larger is worse, with inclusive band tops
pub fn classify_ascending(value: f64, safe_max: f64, alert_max: f64) -> StatusLevel {
    if value <= safe_max {
        StatusLevel::Safe
    } else if value <= alert_max {
        StatusLevel::Alert
    } else {
        StatusLevel::Danger
    }
}

/// pH: neutral band is safe, mildly acidic or alkaline is an alert
pub fn classify_ph(ph: f64) -> StatusLevel {
    let (safe_lo, safe_hi) = PH_SAFE_RANGE;
    let (alert_lo, alert_hi) = PH_ALERT_RANGE;

    if (safe_lo..=safe_hi).contains(&ph) {
        StatusLevel::Safe
    } else if (alert_lo..safe_lo).contains(&ph) || (ph > safe_hi && ph <= alert_hi) {
        StatusLevel::Alert
    } else {
        StatusLevel::Danger
    }
}

/// Water temperature never escalates past an alert
pub fn classify_temperature(temp_c: f64) -> StatusLevel {
    let (lo, hi) = TEMP_SAFE_RANGE_C;
    if (lo..=hi).contains(&temp_c) {
        StatusLevel::Safe
    } else {
        StatusLevel::Alert
    }
}
