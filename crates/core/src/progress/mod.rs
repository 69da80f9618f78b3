/// Counter of executed steps measured against a fixed duration.
///
/// Owned by exactly one [`Timer`](crate::Timer) and mutated only through its
/// `step`/`reset`.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    duration: u32,
    ratio_change_rate: f64,
    count: u32,
    ratio: f64,
}

impl Progress {
    /// Creates a progress record for `duration` steps.
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            ratio_change_rate: 1.0 / f64::from(duration.max(1)),
            count: 0,
            ratio: 0.0,
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Ratio in `[0, 1]`, exactly `1.0` once the owning timer completes.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn ratio_change_rate(&self) -> f64 {
        self.ratio_change_rate
    }

    /// Advances by one step.
    pub fn update(&mut self) {
        self.count += 1;
        self.ratio += self.ratio_change_rate;
    }

    pub fn reset(&mut self) {
        self.count = 0;
        self.ratio = 0.0;
    }

    /// Returns `true` if the next step is the one that completes the duration.
    pub fn is_final_step(&self) -> bool {
        self.count.saturating_add(1) >= self.duration
    }

    /// Clamps the counter to the duration and pins the ratio to `1.0`.
    pub fn finish(&mut self) {
        self.count = self.duration;
        self.ratio = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration_avoids_division_by_zero() {
        let progress = Progress::new(0);
        assert_eq!(progress.ratio_change_rate(), 1.0);
        assert!(progress.is_final_step());
    }

    #[test]
    fn update_accumulates_ratio() {
        let mut progress = Progress::new(4);
        progress.update();
        progress.update();

        assert_eq!(progress.count(), 2);
        assert!((progress.ratio() - 0.5).abs() < 1e-9);
        assert!(!progress.is_final_step());
        progress.update();
        assert!(progress.is_final_step());
    }

    #[test]
    fn finish_then_reset_restores_initial_state() {
        let mut progress = Progress::new(3);
        progress.update();
        progress.finish();
        assert_eq!(progress.count(), 3);
        assert_eq!(progress.ratio(), 1.0);

        progress.reset();
        assert_eq!(progress, Progress::new(3));
    }
}
