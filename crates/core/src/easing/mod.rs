//! Easing curves mapping a ratio to an eased ratio.
//!
//! Every curve maps `0` to `0` and `1` to `1`. Values in between may leave the
//! unit interval for curves that overshoot.

/// Plain easing function.
pub type Easing = fn(f64) -> f64;

pub fn linear(x: f64) -> f64 {
    x
}

pub fn in_quad(x: f64) -> f64 {
    x * x
}

pub fn out_quad(x: f64) -> f64 {
    -(x - 1.0).powi(2) + 1.0
}

pub fn in_out_quad(x: f64) -> f64 {
    integrate(in_quad, out_quad, 0.5, x)
}

pub fn in_cubic(x: f64) -> f64 {
    x * x * x
}

pub fn out_cubic(x: f64) -> f64 {
    (x - 1.0).powi(3) + 1.0
}

pub fn in_out_cubic(x: f64) -> f64 {
    integrate(in_cubic, out_cubic, 0.5, x)
}

pub fn in_quart(x: f64) -> f64 {
    x.powi(4)
}

pub fn out_quart(x: f64) -> f64 {
    -(x - 1.0).powi(4) + 1.0
}

pub fn in_out_quart(x: f64) -> f64 {
    integrate(in_quart, out_quart, 0.5, x)
}

pub fn in_expo(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        2f64.powf(10.0 * (x - 1.0))
    }
}

pub fn out_expo(x: f64) -> f64 {
    if x < 1.0 {
        -(2f64.powf(-10.0 * x)) + 1.0
    } else {
        1.0
    }
}

pub fn in_out_expo(x: f64) -> f64 {
    integrate(in_expo, out_expo, 0.5, x)
}

pub fn out_in_quad(x: f64) -> f64 {
    integrate(out_quad, in_quad, 0.5, x)
}

pub fn out_in_cubic(x: f64) -> f64 {
    integrate(out_cubic, in_cubic, 0.5, x)
}

pub fn out_in_quart(x: f64) -> f64 {
    integrate(out_quart, in_quart, 0.5, x)
}

pub fn out_in_expo(x: f64) -> f64 {
    integrate(out_expo, in_expo, 0.5, x)
}

/// Overshoot used by the fixed `*_back` curves.
pub const BACK_COEFFICIENT: f64 = 1.70158;

/// "Back" curve pulling below `0` before accelerating towards `1`.
pub fn in_back_with(coefficient: f64, x: f64) -> f64 {
    x * x * ((coefficient + 1.0) * x - coefficient)
}

/// "Back" curve overshooting `1` before settling.
pub fn out_back_with(coefficient: f64, x: f64) -> f64 {
    let r = x - 1.0;
    r * r * ((coefficient + 1.0) * r + coefficient) + 1.0
}

pub fn in_out_back_with(coefficient: f64, x: f64) -> f64 {
    if x < 0.5 {
        0.5 * in_back_with(coefficient, 2.0 * x)
    } else {
        0.5 + 0.5 * out_back_with(coefficient, 2.0 * x - 1.0)
    }
}

pub fn in_back(x: f64) -> f64 {
    in_back_with(BACK_COEFFICIENT, x)
}

pub fn out_back(x: f64) -> f64 {
    out_back_with(BACK_COEFFICIENT, x)
}

pub fn in_out_back(x: f64) -> f64 {
    in_out_back_with(BACK_COEFFICIENT, x)
}

/// Runs `first` then `second` over the two halves split at `threshold`,
/// without rescaling their outputs. Each half spans the full `[0, 1]` range,
/// so the result jumps back to `second(0)` at the threshold.
pub fn concatenate(first: Easing, second: Easing, threshold: f64, ratio: f64) -> f64 {
    if ratio < threshold {
        first(ratio / threshold)
    } else {
        second((ratio - threshold) / (1.0 - threshold))
    }
}

/// Evaluates `first` below `threshold` and `second` above it, scaling both so
/// the combined curve stays continuous at the threshold.
pub fn integrate(first: Easing, second: Easing, threshold: f64, ratio: f64) -> f64 {
    if ratio < threshold {
        threshold * first(ratio / threshold)
    } else {
        let rest = 1.0 - threshold;
        threshold + rest * second((ratio - threshold) / rest)
    }
}

/// Linear interpolation between `start` and `end`.
pub fn lerp(start: f64, end: f64, ratio: f64) -> f64 {
    start + (end - start) * ratio
}

/// Looks up a curve by name, as written in the `easing` field of tween
/// scenario entries.
pub fn by_name(name: &str) -> Option<Easing> {
    let easing: Easing = match name {
        "linear" => linear,
        "in_quad" => in_quad,
        "out_quad" => out_quad,
        "in_out_quad" => in_out_quad,
        "in_cubic" => in_cubic,
        "out_cubic" => out_cubic,
        "in_out_cubic" => in_out_cubic,
        "in_quart" => in_quart,
        "out_quart" => out_quart,
        "in_out_quart" => in_out_quart,
        "in_expo" => in_expo,
        "out_expo" => out_expo,
        "in_out_expo" => in_out_expo,
        "out_in_quad" => out_in_quad,
        "out_in_cubic" => out_in_cubic,
        "out_in_quart" => out_in_quart,
        "out_in_expo" => out_in_expo,
        "in_back" => in_back,
        "out_back" => out_back,
        "in_out_back" => in_out_back,
        _ => return None,
    };
    Some(easing)
}
