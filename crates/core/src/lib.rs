//! Core library for Cadence, a cooperative timer toolkit for frame-driven
//! animation.
//!
//! Components advance by discrete logical steps driven from the outside,
//! typically once per rendered frame. Leaf [`Timer`]s count a fixed number of
//! steps; [`Chain`], [`Parallel`] and [`Loop`] compose them into trees; a
//! [`TimerSet`] runs many independent trees and prunes them as they complete.
//! Everything runs on the caller's thread and no call ever blocks.

pub mod chain;
pub mod component;
pub mod config;
pub mod easing;
pub mod error;
pub mod looping;
pub mod parallel;
pub mod progress;
pub mod repeater;
pub mod set;
pub mod timeline;
pub mod timer;
pub mod tween;

pub use chain::Chain;
pub use component::{Component, ComponentId, Lifecycle, LifecycleListener, DEFAULT_NAME};
pub use config::{ComponentSpec, DriverConfig, Scenario};
pub use easing::Easing;
pub use error::{CadenceError, Result};
pub use looping::{Loop, LoopCount};
pub use parallel::Parallel;
pub use progress::Progress;
pub use repeater::Repeater;
pub use set::{SetHandle, SetMember, StepCallback, TimerSet};
pub use timeline::{Driver, FrameClock, RunReport};
pub use timer::{ProgressListener, Timer};
pub use tween::{Point, TweenParams};
