//! Control loop — the hexagonal core.
//!
//! [`ControlLoop`] owns the FSM, the proximity aggregator, the volume
//! ramp, the idle animator and the latest audio levels.  Nothing else
//! holds cross-tick state.  All I/O flows through port traits injected
//! at call sites.
//!
//! ```text
//!  DiscoveryPort ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!  SensorPort    ──▶ │       ControlLoop         │
//!  HostPort      ──▶ │ FSM · Ramp · Fade · Hue   │ ──▶ RenderPort
//!                    └──────────────────────────┘
//! ```

use log::{error, info};

use crate::config::SystemConfig;
use crate::error::{Error, Result};
use crate::control::activity;
use crate::control::interval::IntervalGate;
use crate::control::ramp::VolumeRamp;
use crate::fsm::context::FsmContext;
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, StateId};
use crate::host::HostCommand;
use crate::lighting::colour::CHANNELS;
use crate::lighting::{ColourOutput, IdleAnimator, map_colours};
use crate::proximity::aggregator::ProximityAggregator;

use super::events::{AppEvent, TelemetryRecord};
use super::ports::{DiscoveryPort, EventSink, HostPort, RenderPort, SensorPort};

// ───────────────────────────────────────────────────────────────
// Boot
// ───────────────────────────────────────────────────────────────

/// Bring up the discovery transport.
///
/// Failure is fatal: the reason is reported through `sink` as
/// [`AppEvent::Halted`] and returned, and the caller must not start the
/// control loop.
pub fn start_discovery(
    scanner: &mut impl DiscoveryPort,
    sink: &mut impl EventSink,
) -> Result<()> {
    scanner.begin().map_err(|e| {
        let e = Error::from(e);
        error!("discovery init failed: {}", e);
        sink.emit(&AppEvent::Halted(e));
        e
    })
}

// ───────────────────────────────────────────────────────────────
// ControlLoop
// ───────────────────────────────────────────────────────────────

/// Per-tick orchestrator for the seat.
pub struct ControlLoop {
    fsm: Fsm,
    ctx: FsmContext,
    proximity: ProximityAggregator,
    ramp: VolumeRamp,
    fade: IdleAnimator,
    telemetry_gate: IntervalGate,
    /// Latest host audio levels; both replaced together.
    audio_levels: [i16; CHANNELS],
    activity: bool,
    colours: ColourOutput,
    tick_count: u64,
}

impl ControlLoop {
    /// Construct the loop from configuration.
    ///
    /// Does **not** start the FSM; call [`start`](Self::start) next.
    pub fn new(config: SystemConfig) -> Self {
        let proximity = ProximityAggregator::new(&config);
        let fade = IdleAnimator::new(&config);
        let telemetry_gate = IntervalGate::new(config.telemetry_interval_ms);
        let ctx = FsmContext::new(config);
        let fsm = Fsm::new(build_state_table(), StateId::Dormant);

        Self {
            fsm,
            ctx,
            proximity,
            ramp: VolumeRamp::new(0),
            fade,
            telemetry_gate,
            audio_levels: [0; CHANNELS],
            activity: false,
            colours: ColourOutput::default(),
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Start the FSM in its initial state (Dormant).
    pub fn start(&mut self, sink: &mut impl EventSink) {
        self.fsm.start(&mut self.ctx);
        sink.emit(&AppEvent::Started(self.fsm.current_state()));
        info!("ControlLoop started in {:?}", self.fsm.current_state());
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle at monotonic time `now_ms`.
    ///
    /// `hw` owns all the seat's local peripherals, so it satisfies the
    /// sensor, render and host ports at once.
    pub fn tick(
        &mut self,
        now_ms: u64,
        hw: &mut (impl SensorPort + RenderPort + HostPort),
        scanner: &mut impl DiscoveryPort,
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;
        let prev_state = self.fsm.current_state();

        // 0. Host audio levels (fixed slot, latest wins)
        if let Some(cmd) = hw.poll_command() {
            self.handle_command(cmd);
        }

        // 1. Proximity scan, rate-limited
        self.proximity.refresh(now_ms, scanner, sink);

        // 2. Sensors
        self.ctx.sensors = hw.read_sample();

        // 3. Activity
        self.activity =
            activity::classify(self.ctx.sensors.force_signal, self.proximity.peers_found());

        // 4. State machine
        self.fsm.tick(&mut self.ctx);
        let state = self.fsm.current_state();

        // 5. Volume ramp
        self.ramp.step(self.ctx.target_volume);

        // 6. Idle fade, frozen while occupied
        if state != StateId::Occupied {
            self.fade.advance();
        }

        // 7–8. Colours → LEDs
        self.colours = map_colours(
            self.activity,
            state,
            self.fade.brightness(),
            self.audio_levels,
            self.ctx.config.audio_full_scale,
        );
        for (channel, colour) in self.colours.iter().enumerate() {
            hw.set_channel(channel, *colour);
        }

        if state != prev_state {
            sink.emit(&AppEvent::StateChanged {
                from: prev_state,
                to: state,
            });
        }

        // 9. Telemetry, rate-limited
        if self.telemetry_gate.ready(now_ms) {
            sink.emit(&AppEvent::Telemetry(self.build_telemetry()));
        }
    }

    // ── Command handling ──────────────────────────────────────

    /// Apply a host command.  Takes effect on the next colour computation.
    pub fn handle_command(&mut self, cmd: HostCommand) {
        match cmd {
            HostCommand::SetAudioLevels(levels) => self.audio_levels = levels,
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Snapshot for the host telemetry line.
    pub fn build_telemetry(&self) -> TelemetryRecord {
        TelemetryRecord {
            activity: self.activity,
            state: self.fsm.current_state(),
            volume: self.ramp.current(),
        }
    }

    /// Current FSM state.
    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    /// Current output volume (0–100).
    pub fn volume(&self) -> u8 {
        self.ramp.current()
    }

    /// Volume the ramp is heading toward.
    pub fn target_volume(&self) -> u8 {
        self.ctx.target_volume
    }

    /// Activity flag computed on the last tick.
    pub fn activity(&self) -> bool {
        self.activity
    }

    /// Colours pushed on the last tick.
    pub fn colours(&self) -> ColourOutput {
        self.colours
    }

    /// Latest audio levels received from the host.
    pub fn audio_levels(&self) -> [i16; CHANNELS] {
        self.audio_levels
    }

    /// Current idle fade phase.
    pub fn fade_phase(&self) -> i32 {
        self.fade.phase()
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Force the FSM into `state`, running its enter/exit actions.
    /// Used for bench testing; nothing in the loop itself calls this.
    pub fn force_state(&mut self, state: StateId, sink: &mut impl EventSink) {
        let prev = self.fsm.current_state();
        self.fsm.force_transition(state, &mut self.ctx);
        if prev != state {
            sink.emit(&AppEvent::StateChanged {
                from: prev,
                to: state,
            });
        }
    }
}
