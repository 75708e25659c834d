//! Engine configuration
//!
//! Code-first configuration with dashboard presets. Everything has a
//! default, so a host only overrides what it cares about:
//!
//! ```rust
//! use floodsim_core::{ChannelConfig, EngineConfig, SensorKind};
//!
//! let config = EngineConfig::default()
//!     .with_seed(7)
//!     .with_tick_interval(0.1)
//!     .with_channel(SensorKind::Flow, ChannelConfig::new(800.0, 5.0));
//!
//! config.validate()?;
//! assert_eq!(config.channel(SensorKind::Flow).sample_rate_hz, 800.0);
//! # Ok::<(), floodsim_core::ConfigError>(())
//! ```
//!
//! With the `serde` feature the same structs load from JSON (or any other
//! serde format); missing fields fall back to the defaults. A channel with
//! no `window_sec` of its own keeps the engine's common window.
//!
//! ```text
//! EngineConfig.window_sec ──► flow, rain, ph, temperature   (window_sec: None)
//! ChannelConfig.window_sec ─► ultrasonic                    (Some(0.025))
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        spectral::ULTRASONIC_DISPLAY_MAX_HZ,
        time::{
            DEFAULT_TICK_INTERVAL_S, DEFAULT_WINDOW_S, FLOW_SAMPLE_RATE_HZ, PH_SAMPLE_RATE_HZ,
            RAIN_SAMPLE_RATE_HZ, TEMP_SAMPLE_RATE_HZ, ULTRASONIC_MAX_CHUNK_LEN,
            ULTRASONIC_SAMPLE_RATE_HZ, ULTRASONIC_WINDOW_S,
        },
    },
    errors::{ConfigError, ConfigResult},
    traits::SensorKind,
};

/// Sampling and display settings for one sensor channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChannelConfig {
    /// Samples per simulated second (Hz)
    pub sample_rate_hz: f64,
    /// Length of history kept (s), `None` follows the engine's common window
    #[cfg_attr(feature = "serde", serde(default))]
    pub window_sec: Option<f64>,
    /// Most samples generated per tick
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_chunk_len: Option<usize>,
    /// Highest spectral bin shown (Hz)
    #[cfg_attr(feature = "serde", serde(default))]
    pub display_max_hz: Option<f64>,
}

impl ChannelConfig {
    /// Channel with its own window, no chunk cap and no display limit
    pub const fn new(sample_rate_hz: f64, window_sec: f64) -> Self {
        Self::shared_window(sample_rate_hz).with_window(window_sec)
    }

    /// Channel that keeps the engine's common window
    pub const fn shared_window(sample_rate_hz: f64) -> Self {
        Self {
            sample_rate_hz,
            window_sec: None,
            max_chunk_len: None,
            display_max_hz: None,
        }
    }

    /// Give the channel its own window
    pub const fn with_window(mut self, seconds: f64) -> Self {
        self.window_sec = Some(seconds);
        self
    }

    /// Window in seconds, `common` when the channel has none of its own
    pub fn window_or(&self, common: f64) -> f64 {
        self.window_sec.unwrap_or(common)
    }

    /// Copy with the window filled in from `common` if unset
    pub fn resolve(mut self, common: f64) -> Self {
        self.window_sec = Some(self.window_or(common));
        self
    }

    /// Cap the per-tick chunk
    pub const fn with_max_chunk_len(mut self, len: usize) -> Self {
        self.max_chunk_len = Some(len);
        self
    }

    /// Limit the displayed spectrum
    pub const fn with_display_max_hz(mut self, hz: f64) -> Self {
        self.display_max_hz = Some(hz);
        self
    }

    /// 100 kHz echo capture, 25 ms window, 2000 samples per tick
    pub const fn ultrasonic() -> Self {
        Self::new(ULTRASONIC_SAMPLE_RATE_HZ, ULTRASONIC_WINDOW_S)
            .with_max_chunk_len(ULTRASONIC_MAX_CHUNK_LEN)
            .with_display_max_hz(ULTRASONIC_DISPLAY_MAX_HZ)
    }

    /// 400 Hz pulse train
    pub const fn flow() -> Self {
        Self::shared_window(FLOW_SAMPLE_RATE_HZ)
    }

    /// 20 Hz rain board
    pub const fn rain() -> Self {
        Self::shared_window(RAIN_SAMPLE_RATE_HZ)
    }

    /// 10 Hz pH probe
    pub const fn ph() -> Self {
        Self::shared_window(PH_SAMPLE_RATE_HZ)
    }

    /// 5 Hz thermometer
    pub const fn temperature() -> Self {
        Self::shared_window(TEMP_SAMPLE_RATE_HZ)
    }

    /// Dashboard preset for a sensor kind
    pub const fn preset(kind: SensorKind) -> Self {
        match kind {
            SensorKind::Ultrasonic => Self::ultrasonic(),
            SensorKind::Flow => Self::flow(),
            SensorKind::Rain => Self::rain(),
            SensorKind::Ph => Self::ph(),
            SensorKind::Temperature => Self::temperature(),
        }
    }

    /// Spectrum cut-off: the Nyquist frequency, lowered by `display_max_hz`
    pub fn spectrum_limit_hz(&self) -> f64 {
        let nyquist = self.sample_rate_hz / 2.0;
        match self.display_max_hz {
            Some(max) => nyquist.min(max),
            None => nyquist,
        }
    }

    /// Samples the history holds once full, unset windows count as the default
    pub fn capacity_hint(&self) -> usize {
        let n = (self.sample_rate_hz * self.window_or(DEFAULT_WINDOW_S)).round();
        if n.is_finite() && n > 0.0 {
            n as usize + 1
        } else {
            0
        }
    }

    /// Check one channel
    pub fn validate(&self, channel: &'static str) -> ConfigResult<()> {
        if !(self.sample_rate_hz.is_finite() && self.sample_rate_hz > 0.0) {
            return Err(ConfigError::InvalidSampleRate {
                channel,
                rate: self.sample_rate_hz,
            });
        }
        if let Some(seconds) = self.window_sec {
            if !(seconds.is_finite() && seconds > 0.0) {
                return Err(ConfigError::InvalidWindow { channel, seconds });
            }
        }
        if self.max_chunk_len == Some(0) {
            return Err(ConfigError::ZeroChunkCap { channel });
        }
        Ok(())
    }
}

/// Top-level engine settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Simulated seconds per tick
    pub tick_interval_sec: f64,
    /// Window for every channel without one of its own (s)
    pub window_sec: f64,
    /// Noise seed, `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Ultrasonic channel
    pub ultrasonic: ChannelConfig,
    /// Flow channel
    pub flow: ChannelConfig,
    /// Rain channel
    pub rain: ChannelConfig,
    /// pH channel
    pub ph: ChannelConfig,
    /// Temperature channel
    pub temperature: ChannelConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval_sec: DEFAULT_TICK_INTERVAL_S,
            window_sec: DEFAULT_WINDOW_S,
            seed: None,
            ultrasonic: ChannelConfig::ultrasonic(),
            flow: ChannelConfig::flow(),
            rain: ChannelConfig::rain(),
            ph: ChannelConfig::ph(),
            temperature: ChannelConfig::temperature(),
        }
    }
}

impl EngineConfig {
    /// Dashboard defaults with a fixed noise seed
    pub fn deterministic(seed: u64) -> Self {
        Self::default().with_seed(seed)
    }

    /// Set the noise seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the tick interval
    pub fn with_tick_interval(mut self, seconds: f64) -> Self {
        self.tick_interval_sec = seconds;
        self
    }

    /// Set the common window and put every slow channel back on it
    pub fn with_window(mut self, seconds: f64) -> Self {
        self.window_sec = seconds;
        for kind in [SensorKind::Flow, SensorKind::Rain, SensorKind::Ph, SensorKind::Temperature] {
            self.channel_mut(kind).window_sec = None;
        }
        self
    }

    /// Replace one channel
    pub fn with_channel(mut self, kind: SensorKind, channel: ChannelConfig) -> Self {
        *self.channel_mut(kind) = channel;
        self
    }

    /// Channel settings for a sensor kind
    pub fn channel(&self, kind: SensorKind) -> &ChannelConfig {
        match kind {
            SensorKind::Ultrasonic => &self.ultrasonic,
            SensorKind::Flow => &self.flow,
            SensorKind::Rain => &self.rain,
            SensorKind::Ph => &self.ph,
            SensorKind::Temperature => &self.temperature,
        }
    }

    /// Channel settings with the common window filled in
    pub fn resolved_channel(&self, kind: SensorKind) -> ChannelConfig {
        self.channel(kind).resolve(self.window_sec)
    }

    /// Mutable channel settings for a sensor kind
    pub fn channel_mut(&mut self, kind: SensorKind) -> &mut ChannelConfig {
        match kind {
            SensorKind::Ultrasonic => &mut self.ultrasonic,
            SensorKind::Flow => &mut self.flow,
            SensorKind::Rain => &mut self.rain,
            SensorKind::Ph => &mut self.ph,
            SensorKind::Temperature => &mut self.temperature,
        }
    }

    /// Reject settings that would stall the engine or grow without bound
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.tick_interval_sec.is_finite() && self.tick_interval_sec > 0.0) {
            return Err(ConfigError::InvalidTickInterval {
                seconds: self.tick_interval_sec,
            });
        }
        if !(self.window_sec.is_finite() && self.window_sec > 0.0) {
            return Err(ConfigError::InvalidWindow {
                channel: "engine",
                seconds: self.window_sec,
            });
        }
        for kind in SensorKind::ALL {
            self.channel(kind).validate(kind.name())?;
        }
        Ok(())
    }
}
