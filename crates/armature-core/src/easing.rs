//! Robert Penner's easing equations and a time-stepped [`Tween`].
//!
//! Every equation has the signature `(t, b, c, d) -> value`:
//!
//! - `t`: current time
//! - `b`: beginning value
//! - `c`: change in value
//! - `d`: duration
//!
//! `t` and `d` may be in frames, seconds or milliseconds as long as they agree.

use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TweenError;

/// Overshoot used by the back easings when none is given.
pub const DEFAULT_BACK_OVERSHOOT: f32 = 1.701_58;

// ---------------------------------------------------------------------------
// Linear
// ---------------------------------------------------------------------------

pub fn linear(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * t / d + b
}

// ---------------------------------------------------------------------------
// Polynomial
// ---------------------------------------------------------------------------

pub fn ease_in_quad(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    c * t * t + b
}

pub fn ease_out_quad(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    -c * t * (t - 2.0) + b
}

pub fn ease_in_out_quad(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    let t = t - 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
}

pub fn ease_in_cubic(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    c * t * t * t + b
}

pub fn ease_out_cubic(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d - 1.0;
    c * (t * t * t + 1.0) + b
}

pub fn ease_in_out_cubic(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t * t + b;
    }
    let t = t - 2.0;
    c / 2.0 * (t * t * t + 2.0) + b
}

pub fn ease_in_quart(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    c * t.powi(4) + b
}

pub fn ease_out_quart(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d - 1.0;
    -c * (t.powi(4) - 1.0) + b
}

pub fn ease_in_out_quart(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t.powi(4) + b;
    }
    let t = t - 2.0;
    -c / 2.0 * (t.powi(4) - 2.0) + b
}

pub fn ease_in_quint(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    c * t.powi(5) + b
}

pub fn ease_out_quint(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d - 1.0;
    c * (t.powi(5) + 1.0) + b
}

pub fn ease_in_out_quint(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t.powi(5) + b;
    }
    let t = t - 2.0;
    c / 2.0 * (t.powi(5) + 2.0) + b
}

// ---------------------------------------------------------------------------
// Sinusoidal / exponential / circular
// ---------------------------------------------------------------------------

pub fn ease_in_sine(t: f32, b: f32, c: f32, d: f32) -> f32 {
    -c * (t / d * FRAC_PI_2).cos() + c + b
}

pub fn ease_out_sine(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c * (t / d * FRAC_PI_2).sin() + b
}

pub fn ease_in_out_sine(t: f32, b: f32, c: f32, d: f32) -> f32 {
    -c / 2.0 * ((PI * t / d).cos() - 1.0) + b
}

#[allow(clippy::float_cmp)]
pub fn ease_in_expo(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        b
    } else {
        c * 2f32.powf(10.0 * (t / d - 1.0)) + b
    }
}

#[allow(clippy::float_cmp)]
pub fn ease_out_expo(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == d {
        b + c
    } else {
        c * (-(2f32.powf(-10.0 * t / d)) + 1.0) + b
    }
}

#[allow(clippy::float_cmp)]
pub fn ease_in_out_expo(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    if t == d {
        return b + c;
    }
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * 2f32.powf(10.0 * (t - 1.0)) + b;
    }
    let t = t - 1.0;
    c / 2.0 * (-(2f32.powf(-10.0 * t)) + 2.0) + b
}

pub fn ease_in_circ(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    -c * ((1.0 - t * t).sqrt() - 1.0) + b
}

pub fn ease_out_circ(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d - 1.0;
    c * (1.0 - t * t).sqrt() + b
}

pub fn ease_in_out_circ(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / (d / 2.0);
    if t < 1.0 {
        return -c / 2.0 * ((1.0 - t * t).sqrt() - 1.0) + b;
    }
    let t = t - 2.0;
    c / 2.0 * ((1.0 - t * t).sqrt() + 1.0) + b
}

// ---------------------------------------------------------------------------
// Elastic
// ---------------------------------------------------------------------------
//
// With amplitude equal to the change, the phase shift always reduces to a
// quarter period.

#[allow(clippy::float_cmp)]
pub fn ease_in_elastic(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    let t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let p = d * 0.3;
    let s = p / 4.0;
    let t = t - 1.0;
    -(c * 2f32.powf(10.0 * t) * ((t * d - s) * TAU / p).sin()) + b
}

#[allow(clippy::float_cmp)]
pub fn ease_out_elastic(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    let t = t / d;
    if t == 1.0 {
        return b + c;
    }
    let p = d * 0.3;
    let s = p / 4.0;
    c * 2f32.powf(-10.0 * t) * ((t * d - s) * TAU / p).sin() + c + b
}

#[allow(clippy::float_cmp)]
pub fn ease_in_out_elastic(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t == 0.0 {
        return b;
    }
    let t = t / (d / 2.0);
    if t == 2.0 {
        return b + c;
    }
    let p = d * (0.3 * 1.5);
    let s = p / 4.0;
    let t = t - 1.0;
    let wave = ((t * d - s) * TAU / p).sin();
    if t < 0.0 {
        -0.5 * (c * 2f32.powf(10.0 * t) * wave) + b
    } else {
        c * 2f32.powf(-10.0 * t) * wave * 0.5 + c + b
    }
}

// ---------------------------------------------------------------------------
// Back
// ---------------------------------------------------------------------------

/// Back easing in with overshoot `s` ([`DEFAULT_BACK_OVERSHOOT`] is the classic value).
pub fn ease_in_back(t: f32, b: f32, c: f32, d: f32, s: f32) -> f32 {
    let t = t / d;
    c * t * t * ((s + 1.0) * t - s) + b
}

/// Back easing out with overshoot `s`.
pub fn ease_out_back(t: f32, b: f32, c: f32, d: f32, s: f32) -> f32 {
    let t = t / d - 1.0;
    c * (t * t * ((s + 1.0) * t + s) + 1.0) + b
}

/// Back easing in/out with overshoot `s`.
pub fn ease_in_out_back(t: f32, b: f32, c: f32, d: f32, s: f32) -> f32 {
    let s = s * 1.525;
    let t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * (t * t * ((s + 1.0) * t - s)) + b;
    }
    let t = t - 2.0;
    c / 2.0 * (t * t * ((s + 1.0) * t + s) + 2.0) + b
}

// ---------------------------------------------------------------------------
// Bounce
// ---------------------------------------------------------------------------

pub fn ease_in_bounce(t: f32, b: f32, c: f32, d: f32) -> f32 {
    c - ease_out_bounce(d - t, 0.0, c, d) + b
}

pub fn ease_out_bounce(t: f32, b: f32, c: f32, d: f32) -> f32 {
    let t = t / d;
    if t < 1.0 / 2.75 {
        c * (7.5625 * t * t) + b
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        c * (7.5625 * t * t + 0.75) + b
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        c * (7.5625 * t * t + 0.9375) + b
    } else {
        let t = t - 2.625 / 2.75;
        c * (7.5625 * t * t + 0.984_375) + b
    }
}

pub fn ease_in_out_bounce(t: f32, b: f32, c: f32, d: f32) -> f32 {
    if t < d / 2.0 {
        ease_in_bounce(t * 2.0, 0.0, c, d) * 0.5 + b
    } else {
        ease_out_bounce(t * 2.0 - d, 0.0, c, d) * 0.5 + c * 0.5 + b
    }
}

// ---------------------------------------------------------------------------
// Easing
// ---------------------------------------------------------------------------

/// Named easing equation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInCirc,
    EaseOutCirc,
    EaseInOutCirc,
    EaseInElastic,
    EaseOutElastic,
    EaseInOutElastic,
    EaseInBack,
    EaseOutBack,
    EaseInOutBack,
    EaseInBounce,
    EaseOutBounce,
    EaseInOutBounce,
}

impl Easing {
    /// Every easing, in declaration order.
    pub const ALL: [Self; 31] = [
        Self::Linear,
        Self::EaseInQuad,
        Self::EaseOutQuad,
        Self::EaseInOutQuad,
        Self::EaseInCubic,
        Self::EaseOutCubic,
        Self::EaseInOutCubic,
        Self::EaseInQuart,
        Self::EaseOutQuart,
        Self::EaseInOutQuart,
        Self::EaseInQuint,
        Self::EaseOutQuint,
        Self::EaseInOutQuint,
        Self::EaseInSine,
        Self::EaseOutSine,
        Self::EaseInOutSine,
        Self::EaseInExpo,
        Self::EaseOutExpo,
        Self::EaseInOutExpo,
        Self::EaseInCirc,
        Self::EaseOutCirc,
        Self::EaseInOutCirc,
        Self::EaseInElastic,
        Self::EaseOutElastic,
        Self::EaseInOutElastic,
        Self::EaseInBack,
        Self::EaseOutBack,
        Self::EaseInOutBack,
        Self::EaseInBounce,
        Self::EaseOutBounce,
        Self::EaseInOutBounce,
    ];

    /// Evaluate the equation. Back easings use [`DEFAULT_BACK_OVERSHOOT`].
    pub fn apply(self, t: f32, b: f32, c: f32, d: f32) -> f32 {
        let s = DEFAULT_BACK_OVERSHOOT;
        match self {
            Self::Linear => linear(t, b, c, d),
            Self::EaseInQuad => ease_in_quad(t, b, c, d),
            Self::EaseOutQuad => ease_out_quad(t, b, c, d),
            Self::EaseInOutQuad => ease_in_out_quad(t, b, c, d),
            Self::EaseInCubic => ease_in_cubic(t, b, c, d),
            Self::EaseOutCubic => ease_out_cubic(t, b, c, d),
            Self::EaseInOutCubic => ease_in_out_cubic(t, b, c, d),
            Self::EaseInQuart => ease_in_quart(t, b, c, d),
            Self::EaseOutQuart => ease_out_quart(t, b, c, d),
            Self::EaseInOutQuart => ease_in_out_quart(t, b, c, d),
            Self::EaseInQuint => ease_in_quint(t, b, c, d),
            Self::EaseOutQuint => ease_out_quint(t, b, c, d),
            Self::EaseInOutQuint => ease_in_out_quint(t, b, c, d),
            Self::EaseInSine => ease_in_sine(t, b, c, d),
            Self::EaseOutSine => ease_out_sine(t, b, c, d),
            Self::EaseInOutSine => ease_in_out_sine(t, b, c, d),
            Self::EaseInExpo => ease_in_expo(t, b, c, d),
            Self::EaseOutExpo => ease_out_expo(t, b, c, d),
            Self::EaseInOutExpo => ease_in_out_expo(t, b, c, d),
            Self::EaseInCirc => ease_in_circ(t, b, c, d),
            Self::EaseOutCirc => ease_out_circ(t, b, c, d),
            Self::EaseInOutCirc => ease_in_out_circ(t, b, c, d),
            Self::EaseInElastic => ease_in_elastic(t, b, c, d),
            Self::EaseOutElastic => ease_out_elastic(t, b, c, d),
            Self::EaseInOutElastic => ease_in_out_elastic(t, b, c, d),
            Self::EaseInBack => ease_in_back(t, b, c, d, s),
            Self::EaseOutBack => ease_out_back(t, b, c, d, s),
            Self::EaseInOutBack => ease_in_out_back(t, b, c, d, s),
            Self::EaseInBounce => ease_in_bounce(t, b, c, d),
            Self::EaseOutBounce => ease_out_bounce(t, b, c, d),
            Self::EaseInOutBounce => ease_in_out_bounce(t, b, c, d),
        }
    }

    /// Kebab-case name, as accepted by [`FromStr`] and serde.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseInQuad => "ease-in-quad",
            Self::EaseOutQuad => "ease-out-quad",
            Self::EaseInOutQuad => "ease-in-out-quad",
            Self::EaseInCubic => "ease-in-cubic",
            Self::EaseOutCubic => "ease-out-cubic",
            Self::EaseInOutCubic => "ease-in-out-cubic",
            Self::EaseInQuart => "ease-in-quart",
            Self::EaseOutQuart => "ease-out-quart",
            Self::EaseInOutQuart => "ease-in-out-quart",
            Self::EaseInQuint => "ease-in-quint",
            Self::EaseOutQuint => "ease-out-quint",
            Self::EaseInOutQuint => "ease-in-out-quint",
            Self::EaseInSine => "ease-in-sine",
            Self::EaseOutSine => "ease-out-sine",
            Self::EaseInOutSine => "ease-in-out-sine",
            Self::EaseInExpo => "ease-in-expo",
            Self::EaseOutExpo => "ease-out-expo",
            Self::EaseInOutExpo => "ease-in-out-expo",
            Self::EaseInCirc => "ease-in-circ",
            Self::EaseOutCirc => "ease-out-circ",
            Self::EaseInOutCirc => "ease-in-out-circ",
            Self::EaseInElastic => "ease-in-elastic",
            Self::EaseOutElastic => "ease-out-elastic",
            Self::EaseInOutElastic => "ease-in-out-elastic",
            Self::EaseInBack => "ease-in-back",
            Self::EaseOutBack => "ease-out-back",
            Self::EaseInOutBack => "ease-in-out-back",
            Self::EaseInBounce => "ease-in-bounce",
            Self::EaseOutBounce => "ease-out-bounce",
            Self::EaseInOutBounce => "ease-in-out-bounce",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown easing name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown easing: {0}")]
pub struct UnknownEasing(pub String);

impl FromStr for Easing {
    type Err = UnknownEasing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or_else(|| UnknownEasing(s.to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Tween
// ---------------------------------------------------------------------------

/// Outcome of [`Tween::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenStatus {
    Running,
    Complete,
}

/// Eases a set of channels from their start values to their targets.
///
/// The host drives it with [`advance`](Self::advance) once per frame.
#[derive(Debug, Clone)]
pub struct Tween {
    starts: Vec<f32>,
    changes: Vec<f32>,
    values: Vec<f32>,
    duration: f32,
    elapsed: f32,
    easing: Easing,
    complete: bool,
}

impl Tween {
    /// Create a tween over `starts.len()` channels.
    ///
    /// # Errors
    ///
    /// [`TweenError::ChannelMismatch`] if `starts` and `targets` differ in
    /// length, [`TweenError::InvalidDuration`] if `duration` is not positive.
    pub fn new(
        starts: &[f32],
        targets: &[f32],
        duration: f32,
        easing: Easing,
    ) -> Result<Self, TweenError> {
        if starts.len() != targets.len() {
            return Err(TweenError::ChannelMismatch {
                starts: starts.len(),
                targets: targets.len(),
            });
        }
        if !(duration > 0.0 && duration.is_finite()) {
            return Err(TweenError::InvalidDuration(duration));
        }

        Ok(Self {
            starts: starts.to_vec(),
            changes: starts.iter().zip(targets).map(|(s, t)| t - s).collect(),
            values: starts.to_vec(),
            duration,
            elapsed: 0.0,
            easing,
            complete: false,
        })
    }

    /// Advance by `dt` and recompute every channel.
    ///
    /// Once the duration is reached, elapsed time is clamped to it, the final
    /// values are written and every later call is a no-op.
    pub fn advance(&mut self, dt: f32) -> TweenStatus {
        if self.complete {
            return TweenStatus::Complete;
        }

        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.complete = true;
        }

        for ((value, start), change) in self
            .values
            .iter_mut()
            .zip(&self.starts)
            .zip(&self.changes)
        {
            *value = self.easing.apply(self.elapsed, *start, *change, self.duration);
        }

        if self.complete {
            TweenStatus::Complete
        } else {
            TweenStatus::Running
        }
    }

    /// Current channel values.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Fraction of the duration elapsed, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.elapsed / self.duration
    }

    pub const fn is_complete(&self) -> bool {
        self.complete
    }

    pub const fn easing(&self) -> Easing {
        self.easing
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
