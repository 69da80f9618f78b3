use crate::{
    component::{lifecycle_methods, Lifecycle},
    CadenceError, Component, Result,
};

/// Runs its children one after another in construction order.
///
/// The step that completes a child only moves the cursor; the next child
/// receives its first step on the following call.
#[derive(Debug)]
pub struct Chain {
    lifecycle: Lifecycle,
    components: Vec<Component>,
    index: usize,
}

lifecycle_methods!(Chain);

impl Chain {
    /// Builds a chain over `components`, which must not be empty.
    pub fn new(components: Vec<Component>) -> Result<Self> {
        if components.is_empty() {
            return Err(CadenceError::EmptyChain);
        }

        Ok(Self {
            lifecycle: Lifecycle::new("chain"),
            components,
            index: 0,
        })
    }

    /// Convenience constructor accepting anything convertible to a component.
    pub fn from_parts<I, C>(components: I) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: Into<Component>,
    {
        Self::new(components.into_iter().map(Into::into).collect())
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Index of the child currently being stepped.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &Component {
        &self.components[self.index]
    }

    pub fn step(&mut self) -> bool {
        if self.lifecycle.is_completed() {
            return true;
        }

        self.lifecycle.try_start();

        if !self.components[self.index].step() {
            return false;
        }

        if self.index + 1 < self.components.len() {
            self.index += 1;
            return false;
        }

        self.lifecycle.complete()
    }

    pub fn reset(&mut self) -> &mut Self {
        for component in &mut self.components {
            component.reset();
        }
        self.index = 0;
        self.lifecycle.clear();
        self
    }
}
