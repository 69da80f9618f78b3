use crate::{
    component::{lifecycle_methods, Lifecycle},
    Component,
};

/// Steps all of its children on every tick and completes once each of them
/// has completed.
///
/// An empty parallel starts and completes on its first step.
#[derive(Debug)]
pub struct Parallel {
    lifecycle: Lifecycle,
    components: Vec<Component>,
    /// Indices into `components` that have not completed this cycle.
    running: Vec<usize>,
}

lifecycle_methods!(Parallel);

impl Parallel {
    pub fn new(components: Vec<Component>) -> Self {
        let running = (0..components.len()).collect();
        Self {
            lifecycle: Lifecycle::new("parallel"),
            components,
            running,
        }
    }

    pub fn from_parts<I, C>(components: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Component>,
    {
        Self::new(components.into_iter().map(Into::into).collect())
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Number of children still running in the current cycle.
    pub fn running_len(&self) -> usize {
        self.running.len()
    }

    pub fn step(&mut self) -> bool {
        if self.lifecycle.is_completed() {
            return true;
        }

        self.lifecycle.try_start();

        let components = &mut self.components;
        self.running.retain(|&index| !components[index].step());

        if !self.running.is_empty() {
            return false;
        }

        self.lifecycle.complete()
    }

    pub fn reset(&mut self) -> &mut Self {
        self.running.clear();
        self.running.extend(0..self.components.len());
        for component in &mut self.components {
            component.reset();
        }
        self.lifecycle.clear();
        self
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::Timer;

    fn steps_to_complete(parallel: &mut Parallel) -> usize {
        let mut steps = 1;
        while !parallel.step() {
            steps += 1;
        }
        steps
    }

    #[test]
    fn completes_after_longest_child() {
        let mut parallel = Parallel::from_parts([Timer::new(3), Timer::new(5), Timer::new(1)]);
        assert_eq!(steps_to_complete(&mut parallel), 5);
        assert!(parallel.components().iter().all(Component::is_completed));
    }

    #[test]
    fn empty_parallel_completes_immediately() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let start_sink = events.clone();
        let complete_sink = events.clone();
        let mut parallel = Parallel::new(Vec::new())
            .with_on_start(move |_| start_sink.borrow_mut().push("start"))
            .with_on_complete(move |_| complete_sink.borrow_mut().push("complete"));

        assert!(parallel.step());
        assert_eq!(*events.borrow(), vec!["start", "complete"]);
    }

    #[test]
    fn each_child_is_stepped_once_per_tick() {
        let counts = Rc::new(RefCell::new([0_u32; 3]));
        let children = (0..3).map(|slot| {
            let sink = counts.clone();
            Timer::new(2 + slot as u32).with_on_progress(move |_| sink.borrow_mut()[slot] += 1)
        });
        let mut parallel = Parallel::from_parts(children);

        assert!(!parallel.step());
        assert_eq!(*counts.borrow(), [1, 1, 1]);
        assert!(!parallel.step());
        assert_eq!(*counts.borrow(), [2, 2, 2]);
        assert_eq!(parallel.running_len(), 2);
        assert!(!parallel.step());
        assert_eq!(*counts.borrow(), [2, 3, 3]);
        assert!(parallel.step());
        assert_eq!(*counts.borrow(), [2, 3, 4]);
    }

    #[test]
    fn never_completes_while_a_child_runs_forever() {
        let mut parallel = Parallel::from_parts([
            Component::from(Timer::new(1)),
            Component::from(crate::Loop::new(Timer::new(1), crate::LoopCount::Infinite)),
        ]);

        for _ in 0..1_000 {
            assert!(!parallel.step());
        }
        assert_eq!(parallel.running_len(), 1);
    }

    #[test]
    fn stepping_after_completion_is_silent() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let child_sink = events.clone();
        let complete_sink = events.clone();
        let child = Timer::new(2).with_on_progress(move |p| child_sink.borrow_mut().push(format!("child:{}", p.count())));
        let mut parallel = Parallel::from_parts([child])
            .with_on_complete(move |_| complete_sink.borrow_mut().push("parallel:done".to_string()));

        assert_eq!(steps_to_complete(&mut parallel), 2);
        let trace = events.borrow().clone();
        for _ in 0..5 {
            assert!(parallel.step());
        }

        assert_eq!(*events.borrow(), trace);
        assert_eq!(parallel.running_len(), 0);
        assert!(parallel.is_completed());
    }

    #[test]
    fn reset_refills_running_list() {
        let mut parallel = Parallel::from_parts([Timer::new(2), Timer::new(4)]);
        assert_eq!(steps_to_complete(&mut parallel), 4);

        parallel.reset();
        assert_eq!(parallel.running_len(), 2);
        assert!(!parallel.is_started());
        assert!(!parallel.is_completed());
        assert_eq!(steps_to_complete(&mut parallel), 4);
    }
}
