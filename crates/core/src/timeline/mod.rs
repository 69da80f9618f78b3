use crate::{DriverConfig, SetHandle, SetMember, TimerSet};

/// Counts driven frames and converts them to seconds for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameClock {
    frame: u64,
    frame_rate: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(60)
    }
}

impl FrameClock {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            frame: 0,
            frame_rate: frame_rate.max(1),
        }
    }

    pub fn reset(&mut self) {
        self.frame = 0;
    }

    pub fn advance(&mut self) {
        self.frame += 1;
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn seconds(&self) -> f64 {
        self.frame as f64 / f64::from(self.frame_rate)
    }
}

/// Outcome of [`Driver::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub steps: u64,
    /// `true` if the set drained before hitting the step limit.
    pub finished: bool,
    pub elapsed_seconds: f64,
}

/// External per-frame loop that steps a [`TimerSet`].
#[derive(Debug)]
pub struct Driver {
    config: DriverConfig,
    clock: FrameClock,
    set: TimerSet,
}

impl Driver {
    pub fn new(config: DriverConfig) -> Self {
        Self {
            clock: FrameClock::new(config.frame_rate),
            config,
            set: TimerSet::new(),
        }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn set(&self) -> &TimerSet {
        &self.set
    }

    pub fn handle(&self) -> SetHandle {
        self.set.handle()
    }

    pub fn add(&mut self, member: impl Into<SetMember>) {
        self.set.add(member);
    }

    /// Steps the set once and advances the clock.
    pub fn tick(&mut self) {
        self.set.step();
        self.clock.advance();
    }

    /// Ticks until the set is empty or the configured step limit is reached.
    pub fn run(&mut self) -> RunReport {
        let start = self.clock.frame();
        let mut steps = 0;
        while !self.set.is_empty() && steps < self.config.max_steps {
            self.tick();
            steps += 1;
        }

        let finished = self.set.is_empty();
        if !finished {
            tracing::warn!(steps, remaining = self.set.len(), "step limit reached before all components completed");
        }

        RunReport {
            steps,
            finished,
            elapsed_seconds: (self.clock.frame() - start) as f64 / f64::from(self.config.frame_rate.max(1)),
        }
    }

    /// Drops every member and rewinds the clock.
    pub fn clear(&mut self) {
        self.set.clear();
        self.clock.reset();
    }
}
