//! Dynamic pool of independent components driven by one external tick.

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use crate::{Chain, Component, Loop, Parallel, Timer};

/// Callback stepped by a [`TimerSet`]; returns `true` once it is done.
pub type StepCallback = Box<dyn FnMut() -> bool>;

/// Anything a [`TimerSet`] can own and step.
pub enum SetMember {
    Component(Component),
    Callback(StepCallback),
}

impl SetMember {
    fn step(&mut self) -> bool {
        match self {
            SetMember::Component(component) => component.step(),
            SetMember::Callback(callback) => callback(),
        }
    }
}

macro_rules! member_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for SetMember {
                fn from(value: $ty) -> Self {
                    SetMember::Component(value.into())
                }
            }
        )*
    };
}

member_from!(Component, Timer, Chain, Parallel, Loop);

impl fmt::Debug for SetMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetMember::Component(component) => f.debug_tuple("Component").field(component).finish(),
            SetMember::Callback(_) => f.write_str("Callback"),
        }
    }
}

type PendingBuffer = Rc<RefCell<Vec<SetMember>>>;

/// Unordered collection of running members plus a buffer of newly added ones.
///
/// Members added at any point, including from listeners fired inside
/// [`TimerSet::step`], are first stepped on the call after they were added.
#[derive(Debug, Default)]
pub struct TimerSet {
    running: Vec<SetMember>,
    pending: PendingBuffer,
}

impl TimerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            running: Vec::with_capacity(capacity),
            pending: Rc::new(RefCell::new(Vec::with_capacity(capacity))),
        }
    }

    /// Returns a handle that enqueues members into this set's pending buffer.
    pub fn handle(&self) -> SetHandle {
        SetHandle {
            pending: Rc::downgrade(&self.pending),
        }
    }

    pub fn add(&mut self, member: impl Into<SetMember>) {
        self.pending.borrow_mut().push(member.into());
    }

    /// Adds a bare step callback.
    pub fn add_fn(&mut self, callback: impl FnMut() -> bool + 'static) {
        self.add(SetMember::Callback(Box::new(callback)));
    }

    /// Steps every running member once, drops the ones that completed, then
    /// admits everything that was pending.
    pub fn step(&mut self) {
        self.running.retain_mut(|member| !member.step());

        let mut pending = self.pending.borrow_mut();
        if !pending.is_empty() {
            tracing::debug!(admitted = pending.len(), running = self.running.len(), "admitting pending members");
            self.running.append(&mut pending);
        }
    }

    /// Drops every running and pending member without notifying any listener.
    pub fn clear(&mut self) {
        self.running.clear();
        self.pending.borrow_mut().clear();
    }

    pub fn running_len(&self) -> usize {
        self.running.len()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn len(&self) -> usize {
        self.running_len() + self.pending_len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Clonable handle for adding members to a [`TimerSet`] from listeners.
///
/// The handle does not keep the set's buffer alive, so a member may hold a
/// handle to its own set. Once the set is dropped, adds are discarded.
#[derive(Clone)]
pub struct SetHandle {
    pending: Weak<RefCell<Vec<SetMember>>>,
}

impl SetHandle {
    /// Enqueues `member`, returning `false` if the set no longer exists.
    pub fn add(&self, member: impl Into<SetMember>) -> bool {
        let Some(pending) = self.pending.upgrade() else {
            tracing::trace!("set dropped, discarding member");
            return false;
        };
        pending.borrow_mut().push(member.into());
        true
    }

    pub fn add_fn(&self, callback: impl FnMut() -> bool + 'static) -> bool {
        self.add(SetMember::Callback(Box::new(callback)))
    }
}

impl fmt::Debug for SetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SetHandle").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn added_members_wait_for_next_step() {
        let stepped = Rc::new(RefCell::new(0));
        let sink = stepped.clone();
        let mut set = TimerSet::with_capacity(4);
        set.add(Timer::new(3).with_on_progress(move |_| *sink.borrow_mut() += 1));

        assert_eq!(set.pending_len(), 1);
        set.step();
        assert_eq!(*stepped.borrow(), 0);
        assert_eq!(set.running_len(), 1);

        set.step();
        assert_eq!(*stepped.borrow(), 1);
    }

    #[test]
    fn member_added_mid_step_is_deferred() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut set = TimerSet::new();
        let handle = set.handle();

        let spawned_log = log.clone();
        let spawner_log = log.clone();
        let spawner = Timer::new(1).with_on_complete(move |_| {
            spawner_log.borrow_mut().push("spawner done");
            let sink = spawned_log.clone();
            handle.add(Timer::new(1).with_on_progress(move |_| sink.borrow_mut().push("spawned step")));
        });
        set.add(spawner);

        set.step();
        set.step();
        assert_eq!(*log.borrow(), vec!["spawner done"]);
        assert_eq!(set.running_len(), 1);

        set.step();
        assert_eq!(*log.borrow(), vec!["spawner done", "spawned step"]);
        assert!(set.is_empty());
    }

    #[test]
    fn completed_members_are_pruned_in_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut set = TimerSet::new();
        for (label, duration) in [("a", 1), ("b", 3), ("c", 2)] {
            let sink = order.clone();
            set.add(Timer::new(duration).with_on_complete(move |_| sink.borrow_mut().push(label)));
        }
        set.step();

        set.step();
        assert_eq!(set.running_len(), 2);
        set.step();
        assert_eq!(set.running_len(), 1);
        set.step();
        assert!(set.is_empty());
        assert_eq!(*order.borrow(), vec!["a", "c", "b"]);
    }

    #[test]
    fn callbacks_run_until_they_report_done() {
        let mut set = TimerSet::new();
        let mut remaining = 3;
        set.add_fn(move || {
            remaining -= 1;
            remaining == 0
        });

        set.step();
        set.step();
        set.step();
        assert_eq!(set.running_len(), 1);
        set.step();
        assert!(set.is_empty());
    }

    #[test]
    fn clear_skips_completion_listeners() {
        let completed = Rc::new(RefCell::new(false));
        let sink = completed.clone();
        let mut set = TimerSet::new();
        let chain = Chain::from_parts([Timer::new(5)])
            .unwrap()
            .with_on_complete(move |_| *sink.borrow_mut() = true);
        set.add(chain);
        set.step();
        set.add(Timer::new(1));

        set.clear();
        assert!(set.is_empty());
        set.step();
        assert!(!*completed.borrow());
    }

    #[test]
    fn handle_held_by_member_does_not_outlive_set() {
        let resource = Rc::new(());
        let mut set = TimerSet::new();
        let handle = set.handle();

        let own_handle = handle.clone();
        let held = resource.clone();
        set.add(Timer::new(1).with_on_complete(move |_| {
            assert!(Rc::strong_count(&held) > 1);
            own_handle.add_fn(|| true);
        }));
        assert_eq!(Rc::strong_count(&resource), 2);

        drop(set);
        assert_eq!(Rc::strong_count(&resource), 1);
        assert!(!handle.add(Timer::new(1)));
        assert!(!handle.add_fn(|| true));
    }
}
