//! Tick Orchestrator
//!
//! ## Overview
//!
//! The [`Engine`] owns one [`Channel`] per sensor and advances all of them
//! together, one fixed interval per call to [`Engine::tick`]. The host (a GUI
//! timer, a test loop, a headless example) decides when to call it.
//!
//! ```text
//!                     ┌──────── tick() ────────┐
//!  ParamHandles ──►   │ for each channel:      │
//!  (UI writes)        │   timestamps → generate│
//!                     │   append → trim        │
//!                     │   spectrum → status    │
//!                     │ pole/zero snapshot     │
//!                     │ global_time += Δ       │
//!                     └────────────────────────┘
//! ```
//!
//! ## States
//!
//! | State     | `tick()`      | `start()`           | `stop()` |
//! |-----------|---------------|---------------------|----------|
//! | `Idle`    | no-op         | reset, → `Running`  | no-op    |
//! | `Running` | advances time | no-op               | → `Idle` |
//!
//! Stopping freezes buffers and time where they are, so the last frames stay
//! on screen. Starting again always begins from an empty history at `t = 0`.
//!
//! ## Failure Behaviour
//!
//! Bad sensor parameters never fail a tick; the models clamp them. A tick
//! only fails if a model breaks its contract (a chunk of the wrong length).
//! In that case the clock does not advance, and channels processed earlier in
//! the same tick keep their new samples.

use core::fmt;

use crate::{
    config::{ChannelConfig, EngineConfig},
    constants::{spectral::TIME_PLOT_MAX_POINTS, time::DEFAULT_WINDOW_S},
    errors::{EngineResult, SpectralError},
    history::StreamingHistory,
    params::SharedParams,
    poles::{PoleZeroInputs, PoleZeroModel, PoleZeroSnapshot},
    random::RandomGaussian,
    sensors::{
        FlowParams, FlowSensor, PhParams, PhSensor, RainParams, RainSensor, TemperatureParams,
        TemperatureSensor, UltrasonicParams, UltrasonicSensor,
    },
    spectral::{SpectralAnalyzer, SpectralFrame},
    status::SensorStatus,
    time::{self, SimClock},
    traits::{SensorKind, SensorModel},
};

/// Odd constant used to spread one seed over the five noise sources
const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Orchestrator state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EngineState {
    /// Not advancing; buffers frozen
    #[default]
    Idle,
    /// Advancing one interval per tick
    Running,
}

/// Shared parameter stores for all five sensors
///
/// Clone a handle and write to it from the UI; the engine picks the change
/// up at its next `generate` call.
#[derive(Debug, Clone, Default)]
pub struct ParamHandles {
    /// Water-level echo
    pub ultrasonic: SharedParams<UltrasonicParams>,
    /// Pulse train
    pub flow: SharedParams<FlowParams>,
    /// Rain board
    pub rain: SharedParams<RainParams>,
    /// pH probe
    pub ph: SharedParams<PhParams>,
    /// Thermometer
    pub temperature: SharedParams<TemperatureParams>,
}

impl ParamHandles {
    /// Fresh stores holding the dashboard start-up values
    pub fn testbed() -> Self {
        Self {
            ultrasonic: SharedParams::new(UltrasonicParams::testbed()),
            flow: SharedParams::new(FlowParams::testbed()),
            rain: SharedParams::new(RainParams::testbed()),
            ph: SharedParams::new(PhParams::testbed()),
            temperature: SharedParams::new(TemperatureParams::testbed()),
        }
    }

    /// The three values the pole/zero model reads
    pub fn pole_zero_inputs(&self) -> PoleZeroInputs {
        PoleZeroInputs::from_params(&self.ultrasonic.read(), &self.rain.read(), &self.ph.read())
    }
}

/// Counters for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineMetrics {
    /// Ticks that advanced time
    pub ticks: u64,
    /// Samples produced across all channels
    pub samples_generated: u64,
    /// Spectral frames computed
    pub frames_computed: u64,
    /// Spectral frames skipped for lack of data
    pub frames_skipped: u64,
}

/// One sensor with its buffers and latest derived results
pub struct Channel {
    model: Box<dyn SensorModel>,
    config: ChannelConfig,
    window_sec: f64,
    history: StreamingHistory,
    spectrum: Option<SpectralFrame>,
    status: Option<SensorStatus>,
}

impl Channel {
    /// Wrap a model with its channel settings
    ///
    /// A config without a window of its own gets the default 10 s window;
    /// [`Engine`] passes configs already resolved against its common window.
    pub fn new(model: Box<dyn SensorModel>, config: ChannelConfig) -> Self {
        let config = config.resolve(DEFAULT_WINDOW_S);
        Self {
            model,
            window_sec: config.window_or(DEFAULT_WINDOW_S),
            history: StreamingHistory::with_capacity(config.capacity_hint()),
            config,
            spectrum: None,
            status: None,
        }
    }

    /// Sensor kind of the wrapped model
    pub fn kind(&self) -> SensorKind {
        self.model.kind()
    }

    /// The wrapped model
    pub fn model(&self) -> &dyn SensorModel {
        self.model.as_ref()
    }

    /// Sampling and display settings
    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }

    /// Seconds of history kept
    pub fn window_sec(&self) -> f64 {
        self.window_sec
    }

    /// Samples inside the window
    pub fn history(&self) -> &StreamingHistory {
        &self.history
    }

    /// History thinned for a time plot, time relative to the oldest sample
    pub fn plot_points(&self) -> Vec<(f64, f64)> {
        self.history.decimated(TIME_PLOT_MAX_POINTS)
    }

    /// Latest spectrum, `None` until enough samples have arrived
    pub fn spectrum(&self) -> Option<&SpectralFrame> {
        self.spectrum.as_ref()
    }

    /// Latest status, `None` before the first tick
    pub fn status(&self) -> Option<&SensorStatus> {
        self.status.as_ref()
    }

    fn reset(&mut self) {
        self.history.reset();
        self.spectrum = None;
        self.status = None;
        self.model.rewind();
    }

    fn step(
        &mut self,
        t_new: f64,
        dt: f64,
        analyzer: &mut SpectralAnalyzer,
        metrics: &mut EngineMetrics,
    ) -> EngineResult<()> {
        let kind = self.kind();
        let fs = self.config.sample_rate_hz;

        let n = time::chunk_len(fs, dt, self.config.max_chunk_len);
        let times = time::chunk_timestamps(t_new, n, fs);
        let values = self.model.generate(&times);

        if let Err(e) = self.history.append(&times, &values) {
            log_warn!("{}: chunk rejected: {}", kind, e);
            return Err(e.into());
        }
        self.history.trim(t_new, self.window_sec);
        metrics.samples_generated += n as u64;

        let tail = self.history.tail_values(analyzer.max_len());
        match analyzer.analyze(&tail, fs) {
            Ok(frame) => {
                self.spectrum = Some(frame.limited_to(self.config.spectrum_limit_hz()));
                metrics.frames_computed += 1;
            }
            Err(SpectralError::InsufficientData { required, available }) => {
                log_debug!("{}: spectrum skipped, {} of {} samples", kind, available, required);
                metrics.frames_skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }

        if let Some((_, latest)) = self.history.latest() {
            self.status = Some(self.model.describe_status(latest));
        }
        Ok(())
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("kind", &self.kind())
            .field("config", &self.config)
            .field("samples", &self.history.len())
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Owns every channel and the simulation clock
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    state: EngineState,
    clock: SimClock,
    params: ParamHandles,
    channels: Vec<Channel>,
    analyzer: SpectralAnalyzer,
    pole_model: PoleZeroModel,
    pole_zero: PoleZeroSnapshot,
    metrics: EngineMetrics,
}

impl Engine {
    /// Engine with the dashboard's start-up parameters
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        Self::with_params(config, ParamHandles::testbed())
    }

    /// Engine driven by caller-owned parameter stores
    pub fn with_params(config: EngineConfig, params: ParamHandles) -> EngineResult<Self> {
        config.validate()?;

        let noise = |kind: SensorKind| match config.seed {
            Some(seed) => {
                RandomGaussian::seeded(seed ^ SEED_STRIDE.wrapping_mul(kind.index() as u64 + 1))
            }
            None => RandomGaussian::from_entropy(),
        };

        let models: [Box<dyn SensorModel>; 5] = [
            Box::new(UltrasonicSensor::with_noise(
                params.ultrasonic.clone(),
                noise(SensorKind::Ultrasonic),
            )),
            Box::new(FlowSensor::with_noise(params.flow.clone(), noise(SensorKind::Flow))),
            Box::new(RainSensor::with_noise(params.rain.clone(), noise(SensorKind::Rain))),
            Box::new(PhSensor::with_noise(params.ph.clone(), noise(SensorKind::Ph))),
            Box::new(TemperatureSensor::with_noise(
                params.temperature.clone(),
                noise(SensorKind::Temperature),
            )),
        ];
        let channels = models
            .into_iter()
            .map(|model| {
                let channel_config = config.resolved_channel(model.kind());
                Channel::new(model, channel_config)
            })
            .collect();

        let pole_model = PoleZeroModel::new();
        let pole_zero = pole_model.compute(&params.pole_zero_inputs());

        log_info!(
            "engine created: tick {} s, seed {:?}",
            config.tick_interval_sec,
            config.seed
        );

        Ok(Self {
            config,
            state: EngineState::Idle,
            clock: SimClock::new(),
            params,
            channels,
            analyzer: SpectralAnalyzer::new(),
            pole_model,
            pole_zero,
            metrics: EngineMetrics::default(),
        })
    }

    /// Begin a fresh run; ignored while already running
    pub fn start(&mut self) {
        if self.state == EngineState::Running {
            return;
        }
        self.reset();
        self.state = EngineState::Running;
        log_info!("engine started");
    }

    /// Freeze time and buffers
    pub fn stop(&mut self) {
        if self.state == EngineState::Running {
            self.state = EngineState::Idle;
            log_info!("engine stopped at t = {:.3} s", self.clock.now());
        }
    }

    /// Clear every buffer and derived result and return to `t = 0`
    ///
    /// Does not change the state; a running engine keeps running from zero.
    pub fn reset(&mut self) {
        for channel in &mut self.channels {
            channel.reset();
        }
        self.clock.reset();
        self.pole_zero = self.pole_model.compute(&self.params.pole_zero_inputs());
        log_info!("engine reset");
    }

    /// Advance one interval; does nothing while idle
    pub fn tick(&mut self) -> EngineResult<()> {
        if self.state != EngineState::Running {
            return Ok(());
        }

        let dt = self.config.tick_interval_sec;
        let t_new = self.clock.peek(dt);

        for channel in &mut self.channels {
            channel.step(t_new, dt, &mut self.analyzer, &mut self.metrics)?;
        }

        self.pole_zero = self.pole_model.compute(&self.params.pole_zero_inputs());
        self.clock.set(t_new);
        self.metrics.ticks += 1;

        log_debug!("tick {} at t = {:.3} s", self.metrics.ticks, t_new);
        Ok(())
    }

    /// Run `count` ticks
    pub fn run_ticks(&mut self, count: usize) -> EngineResult<()> {
        for _ in 0..count {
            self.tick()?;
        }
        Ok(())
    }

    /// Current state
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Whether ticks advance time
    pub fn is_running(&self) -> bool {
        self.state == EngineState::Running
    }

    /// Seconds simulated since the last start or reset
    pub fn global_time(&self) -> f64 {
        self.clock.now()
    }

    /// Configuration the engine was built with
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Parameter stores shared with the UI
    pub fn params(&self) -> &ParamHandles {
        &self.params
    }

    /// All channels in [`SensorKind::ALL`] order
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// The channel for one sensor
    pub fn channel(&self, kind: SensorKind) -> &Channel {
        &self.channels[kind.index()]
    }

    /// Samples inside one sensor's window
    pub fn history(&self, kind: SensorKind) -> &StreamingHistory {
        self.channel(kind).history()
    }

    /// Latest spectrum for one sensor
    pub fn spectrum(&self, kind: SensorKind) -> Option<&SpectralFrame> {
        self.channel(kind).spectrum()
    }

    /// Latest status for one sensor
    pub fn status(&self, kind: SensorKind) -> Option<&SensorStatus> {
        self.channel(kind).status()
    }

    /// Pole/zero sets from the current parameters
    pub fn pole_zero(&self) -> &PoleZeroSnapshot {
        &self.pole_zero
    }

    /// Monitoring counters, kept across resets
    pub fn metrics(&self) -> &EngineMetrics {
        &self.metrics
    }
}
