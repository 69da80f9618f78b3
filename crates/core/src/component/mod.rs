//! Shared lifecycle contract for every timer-like unit.
//!
//! A component advances by one logical tick per [`Component::step`] call and
//! reports whether it has completed. Start and completion listeners fire
//! exactly once per active lifecycle; [`Component::reset`] starts a new one.

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::{Chain, Loop, Parallel, Timer};

/// Label given to components that were never named.
pub const DEFAULT_NAME: &str = "no name";

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Process-unique identifier, diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u64);

impl ComponentId {
    pub(crate) fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Listener invoked on start or completion with the component's id.
pub type LifecycleListener = Box<dyn FnMut(ComponentId)>;

/// Identity, flags and start/complete listeners shared by all component kinds.
pub struct Lifecycle {
    id: ComponentId,
    kind: &'static str,
    name: String,
    is_started: bool,
    is_completed: bool,
    on_start: Vec<LifecycleListener>,
    on_complete: Vec<LifecycleListener>,
}

impl Lifecycle {
    pub(crate) fn new(kind: &'static str) -> Self {
        let id = ComponentId::next();
        tracing::trace!(id = id.get(), kind, "component created");
        Self {
            id,
            kind,
            name: DEFAULT_NAME.to_string(),
            is_started: false,
            is_completed: false,
            on_start: Vec::new(),
            on_complete: Vec::new(),
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_started(&self) -> bool {
        self.is_started
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub(crate) fn push_on_start(&mut self, listener: LifecycleListener) {
        self.on_start.push(listener);
    }

    pub(crate) fn push_on_complete(&mut self, listener: LifecycleListener) {
        self.on_complete.push(listener);
    }

    /// Fires the start listeners on the first call of a lifecycle.
    pub(crate) fn try_start(&mut self) -> bool {
        if self.is_started {
            return false;
        }

        tracing::debug!(id = self.id.get(), kind = self.kind, name = %self.name, "starting");
        for listener in &mut self.on_start {
            listener(self.id);
        }
        self.is_started = true;
        true
    }

    /// Fires the completion listeners and marks the lifecycle as terminal.
    pub(crate) fn complete(&mut self) -> bool {
        for listener in &mut self.on_complete {
            listener(self.id);
        }
        self.is_completed = true;
        tracing::debug!(id = self.id.get(), kind = self.kind, name = %self.name, "completed");
        true
    }

    /// Marks the lifecycle as started and completed without notifying anyone.
    pub(crate) fn force_completed(&mut self) {
        self.is_started = true;
        self.is_completed = true;
    }

    pub(crate) fn clear(&mut self) {
        self.is_started = false;
        self.is_completed = false;
    }
}

impl fmt::Debug for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lifecycle")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("is_started", &self.is_started)
            .field("is_completed", &self.is_completed)
            .field("on_start", &self.on_start.len())
            .field("on_complete", &self.on_complete.len())
            .finish()
    }
}

/// Generates the accessors and construction-time builders every component
/// kind exposes on top of its `lifecycle` field.
macro_rules! lifecycle_methods {
    ($ty:ty) => {
        impl $ty {
            pub fn id(&self) -> $crate::ComponentId {
                self.lifecycle.id()
            }

            pub fn name(&self) -> &str {
                self.lifecycle.name()
            }

            pub fn is_started(&self) -> bool {
                self.lifecycle.is_started()
            }

            pub fn is_completed(&self) -> bool {
                self.lifecycle.is_completed()
            }

            /// Changes the debug label. Has no effect on stepping.
            pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
                self.lifecycle.set_name(name);
                self
            }

            pub fn with_name(mut self, name: impl Into<String>) -> Self {
                self.lifecycle.set_name(name);
                self
            }

            /// Adds a listener fired once when the component starts.
            pub fn with_on_start(
                mut self,
                listener: impl FnMut($crate::ComponentId) + 'static,
            ) -> Self {
                self.lifecycle.push_on_start(Box::new(listener));
                self
            }

            /// Adds a listener fired once when the component completes.
            pub fn with_on_complete(
                mut self,
                listener: impl FnMut($crate::ComponentId) + 'static,
            ) -> Self {
                self.lifecycle.push_on_complete(Box::new(listener));
                self
            }
        }
    };
}

pub(crate) use lifecycle_methods;

/// Closed set of component kinds that composites and sets can own.
#[derive(Debug)]
pub enum Component {
    Timer(Timer),
    Chain(Chain),
    Parallel(Parallel),
    Loop(Loop),
}

macro_rules! dispatch {
    ($self:expr, $inner:ident => $body:expr) => {
        match $self {
            Component::Timer($inner) => $body,
            Component::Chain($inner) => $body,
            Component::Parallel($inner) => $body,
            Component::Loop($inner) => $body,
        }
    };
}

impl Component {
    /// Advances by one tick and returns `true` if the component is completed.
    pub fn step(&mut self) -> bool {
        dispatch!(self, inner => inner.step())
    }

    /// Restores the component and its subtree to a pristine state.
    pub fn reset(&mut self) -> &mut Self {
        dispatch!(self, inner => {
            inner.reset();
        });
        self
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        dispatch!(self, inner => {
            inner.set_name(name);
        });
        self
    }

    pub fn id(&self) -> ComponentId {
        dispatch!(self, inner => inner.id())
    }

    pub fn name(&self) -> &str {
        dispatch!(self, inner => inner.name())
    }

    pub fn is_started(&self) -> bool {
        dispatch!(self, inner => inner.is_started())
    }

    pub fn is_completed(&self) -> bool {
        dispatch!(self, inner => inner.is_completed())
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        dispatch!(self, inner => inner.with_name(name).into())
    }

    pub fn with_on_start(self, listener: impl FnMut(ComponentId) + 'static) -> Self {
        dispatch!(self, inner => inner.with_on_start(listener).into())
    }

    pub fn with_on_complete(self, listener: impl FnMut(ComponentId) + 'static) -> Self {
        dispatch!(self, inner => inner.with_on_complete(listener).into())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Component::Timer(_) => "timer",
            Component::Chain(_) => "chain",
            Component::Parallel(_) => "parallel",
            Component::Loop(_) => "loop",
        }
    }
}

impl From<Timer> for Component {
    fn from(value: Timer) -> Self {
        Self::Timer(value)
    }
}

impl From<Chain> for Component {
    fn from(value: Chain) -> Self {
        Self::Chain(value)
    }
}

impl From<Parallel> for Component {
    fn from(value: Parallel) -> Self {
        Self::Parallel(value)
    }
}

impl From<Loop> for Component {
    fn from(value: Loop) -> Self {
        Self::Loop(value)
    }
}
