use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    easing, tween, CadenceError, Chain, Component, Loop, LoopCount, Parallel, Result, Timer, TweenParams,
};

/// Settings for the frame driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Upper bound on ticks before a run gives up.
    pub max_steps: u64,
    /// Frames per second, used only to report elapsed time.
    pub frame_rate: u32,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            max_steps: 3600,
            frame_rate: 60,
        }
    }
}

/// Serializable description of a component tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ComponentSpec {
    Timer {
        duration: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Chain {
        components: Vec<ComponentSpec>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Parallel {
        components: Vec<ComponentSpec>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    /// Scalar tween whose values are traced; `easing` names a curve from
    /// [`easing::by_name`] and defaults to linear.
    Tween {
        duration: u32,
        start: f64,
        end: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        easing: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
    Loop {
        component: Box<ComponentSpec>,
        /// Infinite when omitted.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        count: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },
}

impl ComponentSpec {
    pub fn name(&self) -> Option<&str> {
        match self {
            ComponentSpec::Timer { name, .. }
            | ComponentSpec::Chain { name, .. }
            | ComponentSpec::Parallel { name, .. }
            | ComponentSpec::Tween { name, .. }
            | ComponentSpec::Loop { name, .. } => name.as_deref(),
        }
    }

    /// Instantiates the described tree. Fails on empty chains and unknown
    /// easing names.
    pub fn build(&self) -> Result<Component> {
        let mut component = match self {
            ComponentSpec::Timer { duration, .. } => Component::from(Timer::new(*duration)),
            ComponentSpec::Chain { components, .. } => Chain::new(build_all(components)?)?.into(),
            ComponentSpec::Parallel { components, .. } => Parallel::new(build_all(components)?).into(),
            ComponentSpec::Tween {
                duration,
                start,
                end,
                easing,
                name,
            } => build_tween(*duration, *start, *end, easing.as_deref(), name.clone())?.into(),
            ComponentSpec::Loop {
                component, count, ..
            } => Loop::new(component.build()?, LoopCount::from(*count)).into(),
        };

        if let Some(name) = self.name() {
            component.set_name(name);
        }
        Ok(component)
    }
}

fn build_tween(duration: u32, start: f64, end: f64, curve: Option<&str>, name: Option<String>) -> Result<Timer> {
    let easing = match curve {
        Some(curve) => Some(
            easing::by_name(curve).ok_or_else(|| CadenceError::msg(format!("unknown easing curve `{curve}`")))?,
        ),
        None => None,
    };
    let label = name.unwrap_or_else(|| crate::DEFAULT_NAME.to_string());

    Ok(tween::scalar(
        TweenParams {
            start,
            end,
            duration,
            easing,
        },
        move |value| tracing::trace!(tween = %label, value, "tween value"),
    ))
}

fn build_all(specs: &[ComponentSpec]) -> Result<Vec<Component>> {
    specs.iter().map(ComponentSpec::build).collect()
}

/// A driver configuration plus the top-level components it runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub driver: DriverConfig,
    pub components: Vec<ComponentSpec>,
}

impl Scenario {
    pub fn from_json_str(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json_str(&source)
    }

    pub fn build_components(&self) -> Result<Vec<Component>> {
        build_all(&self.components)
    }
}
