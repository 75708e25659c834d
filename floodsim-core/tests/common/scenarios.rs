//! Named flood scenarios
//!
//! Each scenario writes a set of parameters through the shared stores and
//! states which status every sensor should report afterwards.

use floodsim_core::{ParamHandles, SensorKind, StatusLevel};

/// A parameter preset and its expected statuses
pub struct Scenario {
    pub name: &'static str,
    pub apply: fn(&ParamHandles),
    pub expected: [(SensorKind, StatusLevel); 3],
}

/// Everything calm: water far below the sensor, light flow, dry plate
pub fn calm() -> Scenario {
    Scenario {
        name: "calm",
        apply: |p| {
            p.ultrasonic.update(|u| u.distance_cm = 150.0);
            p.flow.update(|f| f.flow_lpm = 4.0);
            p.rain.update(|r| r.wetness = 0.05);
        },
        expected: [
            (SensorKind::Ultrasonic, StatusLevel::Safe),
            (SensorKind::Flow, StatusLevel::Safe),
            (SensorKind::Rain, StatusLevel::Safe),
        ],
    }
}

/// Steady rain with rising water
pub fn rising() -> Scenario {
    Scenario {
        name: "rising",
        apply: |p| {
            p.ultrasonic.update(|u| u.distance_cm = 35.0);
            p.flow.update(|f| f.flow_lpm = 15.0);
            p.rain.update(|r| r.wetness = 0.4);
        },
        expected: [
            (SensorKind::Ultrasonic, StatusLevel::Alert),
            (SensorKind::Flow, StatusLevel::Alert),
            (SensorKind::Rain, StatusLevel::Alert),
        ],
    }
}

/// Water at the sensor, torrential flow and rain
pub fn flash_flood() -> Scenario {
    Scenario {
        name: "flash flood",
        apply: |p| {
            p.ultrasonic.update(|u| u.distance_cm = 12.0);
            p.flow.update(|f| f.flow_lpm = 28.0);
            p.rain.update(|r| r.wetness = 0.95);
        },
        expected: [
            (SensorKind::Ultrasonic, StatusLevel::Danger),
            (SensorKind::Flow, StatusLevel::Danger),
            (SensorKind::Rain, StatusLevel::Danger),
        ],
    }
}

/// All scenarios in escalating order
pub fn all() -> Vec<Scenario> {
    vec![calm(), rising(), flash_flood()]
}
