//! Tick and spawn cadence
//!
//! Two periodic triggers (the 60 Hz frame tick and the pair spawn) run on one
//! timeline and are applied to the state through a single entry point, so an
//! update never interleaves with another. Both clocks start and stop together.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::consts::{MAX_FRAME_DT, SPAWN_PERIOD, TICK_PERIOD};
use crate::difficulty::Difficulty;
use crate::sim::{GameState, InputEvent, RenderSnapshot, handle_input, spawn_pair, tick};

const MIN_PERIOD: Duration = Duration::from_nanos(1);

/// A scheduled update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    Tick,
    SpawnPair,
}

/// Two independent periodic clocks sharing one timeline
#[derive(Debug, Clone)]
pub struct Cadence {
    tick_period: Duration,
    spawn_period: Duration,
    running: bool,
    now: Duration,
    next_tick: Duration,
    next_spawn: Duration,
}

impl Default for Cadence {
    fn default() -> Self {
        Self::new(TICK_PERIOD, SPAWN_PERIOD)
    }
}

impl Cadence {
    /// Periods shorter than 1 ns are raised to 1 ns
    pub fn new(tick_period: Duration, spawn_period: Duration) -> Self {
        let tick_period = tick_period.max(MIN_PERIOD);
        let spawn_period = spawn_period.max(MIN_PERIOD);
        Self {
            tick_period,
            spawn_period,
            running: false,
            now: Duration::ZERO,
            next_tick: tick_period,
            next_spawn: spawn_period,
        }
    }

    /// Start both clocks from zero; first events fire one full period later
    pub fn start(&mut self) {
        self.running = true;
        self.now = Duration::ZERO;
        self.next_tick = self.tick_period;
        self.next_spawn = self.spawn_period;
    }

    /// Stop both clocks
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance wall-clock time and return due events in time order.
    ///
    /// A tick and a spawn due at the same instant yield the tick first.
    /// `dt` is clamped to [`MAX_FRAME_DT`].
    pub fn advance(&mut self, dt: Duration) -> Vec<SimEvent> {
        let mut events = Vec::new();
        if !self.running {
            return events;
        }

        let target = self.now + dt.min(MAX_FRAME_DT);
        loop {
            let due = self.next_tick.min(self.next_spawn);
            if due > target {
                break;
            }
            self.now = due;
            if self.next_tick <= self.next_spawn {
                events.push(SimEvent::Tick);
                self.next_tick += self.tick_period;
            } else {
                events.push(SimEvent::SpawnPair);
                self.next_spawn += self.spawn_period;
            }
        }
        self.now = target;
        events
    }
}

/// Game state plus its cadence; the only place either trigger mutates the state
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    cadence: Cadence,
}

impl Session {
    pub fn new(state: GameState) -> Self {
        Self::with_cadence(state, Cadence::default())
    }

    pub fn with_cadence(state: GameState, cadence: Cadence) -> Self {
        let mut session = Self { state, cadence };
        session.sync_cadence();
        session
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn cadence(&self) -> &Cadence {
        &self.cadence
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        self.state.snapshot()
    }

    /// Clocks run exactly while the run does
    fn sync_cadence(&mut self) {
        let running = self.state.phase.is_running();
        if running && !self.cadence.is_running() {
            self.cadence.start();
        } else if !running && self.cadence.is_running() {
            self.cadence.stop();
        }
    }

    /// Choose the difficulty and start playing
    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> bool {
        let started = self.state.select_difficulty(difficulty);
        self.sync_cadence();
        started
    }

    pub fn input(&mut self, input: InputEvent) {
        handle_input(&mut self.state, input);
        self.sync_cadence();
    }

    /// Apply one scheduled event
    pub fn apply(&mut self, event: SimEvent) {
        match event {
            SimEvent::Tick => tick(&mut self.state),
            SimEvent::SpawnPair => {
                spawn_pair(&mut self.state);
            }
        }
        self.sync_cadence();
    }

    /// Advance by a frame of wall-clock time. Returns the number of events applied.
    ///
    /// If the run ends partway, the remaining events of the frame are dropped.
    pub fn advance(&mut self, dt: Duration) -> usize {
        let mut applied = 0;
        for event in self.cadence.advance(dt) {
            if !self.state.phase.is_running() {
                break;
            }
            self.apply(event);
            applied += 1;
        }
        self.sync_cadence();
        applied
    }
}

/// Thread-safe handle; every call is one serialized update
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        // Keep serving after a panicked update
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn post(&self, event: SimEvent) {
        self.lock().apply(event);
    }

    pub fn input(&self, input: InputEvent) {
        self.lock().input(input);
    }

    pub fn select_difficulty(&self, difficulty: Difficulty) -> bool {
        self.lock().select_difficulty(difficulty)
    }

    pub fn advance(&self, dt: Duration) -> usize {
        self.lock().advance(dt)
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        self.lock().snapshot()
    }
}
