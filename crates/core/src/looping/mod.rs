use crate::{
    component::{lifecycle_methods, Lifecycle},
    Component,
};

/// How many times a [`Loop`] runs its child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopCount {
    Times(u32),
    #[default]
    Infinite,
}

impl LoopCount {
    fn is_empty(self) -> bool {
        matches!(self, LoopCount::Times(0))
    }
}

impl From<u32> for LoopCount {
    fn from(value: u32) -> Self {
        LoopCount::Times(value)
    }
}

impl From<Option<u32>> for LoopCount {
    fn from(value: Option<u32>) -> Self {
        value.map_or(LoopCount::Infinite, LoopCount::Times)
    }
}

/// Repeats one child, resetting it after every completed iteration.
///
/// `LoopCount::Times(0)` yields a loop that is already completed and never
/// steps its child.
#[derive(Debug)]
pub struct Loop {
    lifecycle: Lifecycle,
    component: Box<Component>,
    loop_count: LoopCount,
    remaining_count: LoopCount,
}

lifecycle_methods!(Loop);

impl Loop {
    pub fn new(component: impl Into<Component>, loop_count: impl Into<LoopCount>) -> Self {
        let loop_count = loop_count.into();
        let mut lifecycle = Lifecycle::new("loop");
        if loop_count.is_empty() {
            lifecycle.force_completed();
        }

        Self {
            lifecycle,
            component: Box::new(component.into()),
            loop_count,
            remaining_count: loop_count,
        }
    }

    /// Loops `component` forever.
    pub fn forever(component: impl Into<Component>) -> Self {
        Self::new(component, LoopCount::Infinite)
    }

    pub fn component(&self) -> &Component {
        &self.component
    }

    pub fn loop_count(&self) -> LoopCount {
        self.loop_count
    }

    /// Iterations left including the one in progress.
    pub fn remaining_count(&self) -> LoopCount {
        self.remaining_count
    }

    pub fn step(&mut self) -> bool {
        if self.lifecycle.is_completed() {
            return true;
        }

        self.lifecycle.try_start();

        if !self.component.step() {
            return false;
        }

        match &mut self.remaining_count {
            LoopCount::Times(remaining) if *remaining <= 1 => {
                *remaining = 0;
                return self.lifecycle.complete();
            }
            LoopCount::Times(remaining) => *remaining -= 1,
            LoopCount::Infinite => {}
        }

        self.component.reset();
        false
    }

    pub fn reset(&mut self) -> &mut Self {
        self.remaining_count = self.loop_count;
        if self.loop_count.is_empty() {
            self.lifecycle.force_completed();
            return self;
        }

        self.component.reset();
        self.lifecycle.clear();
        self
    }
}
