use std::fmt;

use crate::{
    component::{lifecycle_methods, Lifecycle},
    Progress,
};

/// Listener invoked on every step of a timer with its current progress.
pub type ProgressListener = Box<dyn FnMut(&Progress)>;

/// Leaf component counting a fixed number of steps.
///
/// A timer of duration `d >= 1` completes on its `d`-th call to
/// [`Timer::step`]. Progress listeners observe the ratio before each step
/// advances it; the completing call reports a ratio of exactly `1.0`.
pub struct Timer {
    lifecycle: Lifecycle,
    progress: Progress,
    on_progress: Vec<ProgressListener>,
}

lifecycle_methods!(Timer);

impl Timer {
    pub fn new(duration: u32) -> Self {
        Self {
            lifecycle: Lifecycle::new("timer"),
            progress: Progress::new(duration),
            on_progress: Vec::new(),
        }
    }

    /// Zero-duration placeholder that is already started and completed.
    ///
    /// Each call yields a fresh instance. Resetting it makes it behave like
    /// any other zero-duration timer.
    pub fn dummy() -> Self {
        let mut timer = Self::new(0);
        timer.lifecycle.force_completed();
        timer
    }

    /// Adds a listener invoked on every step, including the completing one.
    pub fn with_on_progress(mut self, listener: impl FnMut(&Progress) + 'static) -> Self {
        self.on_progress.push(Box::new(listener));
        self
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn step(&mut self) -> bool {
        if self.lifecycle.is_completed() {
            return true;
        }

        self.lifecycle.try_start();

        if self.progress.is_final_step() {
            self.progress.finish();
            self.notify_progress();
            return self.lifecycle.complete();
        }

        self.notify_progress();
        self.progress.update();
        false
    }

    pub fn reset(&mut self) -> &mut Self {
        self.progress.reset();
        self.lifecycle.clear();
        self
    }

    fn notify_progress(&mut self) {
        for listener in &mut self.on_progress {
            listener(&self.progress);
        }
    }
}

impl fmt::Debug for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timer")
            .field("lifecycle", &self.lifecycle)
            .field("progress", &self.progress)
            .field("on_progress", &self.on_progress.len())
            .finish()
    }
}
