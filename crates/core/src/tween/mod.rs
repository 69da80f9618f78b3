//! Timers that interpolate values as they progress.

use crate::{
    easing::{self, Easing},
    Timer,
};

/// Parameters for a scalar tween.
#[derive(Debug, Clone, Copy)]
pub struct TweenParams {
    pub start: f64,
    pub end: f64,
    pub duration: u32,
    /// Linear when `None`.
    pub easing: Option<Easing>,
}

/// Builds a timer that feeds the eased value between `start` and `end` to
/// `set_value` on every step.
pub fn scalar(params: TweenParams, mut set_value: impl FnMut(f64) + 'static) -> Timer {
    let TweenParams {
        start,
        end,
        duration,
        easing,
    } = params;
    let ease = easing.unwrap_or(easing::linear);

    Timer::new(duration).with_on_progress(move |progress| set_value(easing::lerp(start, end, ease(progress.ratio()))))
}

/// Cartesian point used by [`point`] tweens.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn lerp(self, target: Point, ratio: f64) -> Point {
        Point {
            x: easing::lerp(self.x, target.x, ratio),
            y: easing::lerp(self.y, target.y, ratio),
        }
    }
}

/// Builds a timer that moves a point from `from` to `to`.
pub fn point(
    from: Point,
    to: Point,
    duration: u32,
    easing: Option<Easing>,
    mut set_point: impl FnMut(Point) + 'static,
) -> Timer {
    let ease = easing.unwrap_or(easing::linear);
    Timer::new(duration).with_on_progress(move |progress| set_point(from.lerp(to, ease(progress.ratio()))))
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[test]
    fn scalar_tween_ends_on_target() {
        let values = Rc::new(RefCell::new(Vec::new()));
        let sink = values.clone();
        let mut timer = scalar(
            TweenParams {
                start: 10.0,
                end: 20.0,
                duration: 4,
                easing: None,
            },
            move |value| sink.borrow_mut().push(value),
        );

        while !timer.step() {}

        let values = values.borrow();
        assert_eq!(values.len(), 4);
        assert_eq!(values[0], 10.0);
        assert!((values[1] - 12.5).abs() < 1e-9);
        assert_eq!(*values.last().unwrap(), 20.0);
    }

    #[test]
    fn eased_tween_uses_curve() {
        let latest = Rc::new(RefCell::new(0.0));
        let sink = latest.clone();
        let mut timer = scalar(
            TweenParams {
                start: 0.0,
                end: 1.0,
                duration: 3,
                easing: Some(easing::in_quad),
            },
            move |value| *sink.borrow_mut() = value,
        );

        timer.step();
        timer.step();
        assert!((*latest.borrow() - 1.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn point_tween_reaches_target() {
        let position = Rc::new(RefCell::new(Point::default()));
        let sink = position.clone();
        let target = Point::new(4.0, -2.0);
        let mut timer = point(Point::default(), target, 2, None, move |p| *sink.borrow_mut() = p);

        assert!(!timer.step());
        assert_eq!(*position.borrow(), Point::default());
        assert!(timer.step());
        assert_eq!(*position.borrow(), target);
    }
}
