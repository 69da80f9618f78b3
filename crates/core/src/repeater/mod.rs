/// Runs a callback a fractional number of times per frame.
///
/// A frequency of `0.5` fires every other frame, `3.0` fires three times per
/// frame. The remainder carries over between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct Repeater {
    frequency: f64,
    accumulation: f64,
}

impl Default for Repeater {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Repeater {
    pub fn new(frequency: f64) -> Self {
        Self {
            frequency,
            accumulation: 0.0,
        }
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Accumulates one frame and fires `callback` once per whole unit.
    /// Returns how many times it fired.
    pub fn run(&mut self, mut callback: impl FnMut()) -> u32 {
        self.accumulation += self.frequency;

        let mut fired = 0;
        while self.accumulation >= 1.0 {
            self.accumulation -= 1.0;
            callback();
            fired += 1;
        }
        fired
    }

    pub fn reset(&mut self) {
        self.accumulation = 0.0;
    }

    /// Wraps the repeater and `callback` into a never-ending set callback.
    pub fn into_step_callback(mut self, mut callback: impl FnMut() + 'static) -> impl FnMut() -> bool + 'static {
        move || {
            self.run(&mut callback);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::TimerSet;

    #[test]
    fn fractional_frequency_carries_remainder() {
        let mut repeater = Repeater::new(0.5);
        let mut count = 0;
        let fired: Vec<u32> = (0..4).map(|_| repeater.run(|| count += 1)).collect();

        assert_eq!(fired, vec![0, 1, 0, 1]);
        assert_eq!(count, 2);
    }

    #[test]
    fn high_frequency_fires_multiple_times() {
        let mut repeater = Repeater::new(2.5);
        assert_eq!(repeater.run(|| {}), 2);
        assert_eq!(repeater.run(|| {}), 3);
    }

    #[test]
    fn reset_drops_accumulation() {
        let mut repeater = Repeater::new(0.75);
        repeater.run(|| {});
        repeater.reset();
        assert_eq!(repeater.run(|| {}), 0);
    }

    #[test]
    fn runs_inside_a_set() {
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        let mut set = TimerSet::new();
        set.add_fn(Repeater::new(2.0).into_step_callback(move || *sink.borrow_mut() += 1));

        for _ in 0..4 {
            set.step();
        }
        assert_eq!(*count.borrow(), 6);
        assert_eq!(set.running_len(), 1);
    }
}
