// Copyright 2025 the Gapminder Layout Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continuous scales.
//!
//! Each scale is a pure mapping from a data domain into a pixel range. Scales hold no
//! state beyond `(domain, range)` and are rebuilt whenever either changes.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Default approximate tick count, used for ticks and for "nicing" domains.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// A continuous scale instance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScaleContinuous {
    /// Linear scale.
    Linear(ScaleLinear),
    /// Log scale.
    Log(ScaleLog),
    /// Square-root scale.
    Sqrt(ScaleSqrt),
}

impl ScaleContinuous {
    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        match self {
            Self::Linear(s) => s.map(x),
            Self::Log(s) => s.map(x),
            Self::Sqrt(s) => s.map(x),
        }
    }

    /// Maps a value from range space back into domain space.
    pub fn invert(&self, y: f64) -> f64 {
        match self {
            Self::Linear(s) => s.invert(y),
            Self::Log(s) => s.invert(y),
            Self::Sqrt(s) => s.invert(y),
        }
    }

    /// Returns tick values.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match self {
            Self::Linear(s) => s.ticks(count),
            Self::Log(s) => s.ticks(count),
            Self::Sqrt(s) => s.ticks(count),
        }
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        match self {
            Self::Linear(s) => s.domain(),
            Self::Log(s) => s.domain(),
            Self::Sqrt(s) => s.domain(),
        }
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Linear(s) => s.range(),
            Self::Log(s) => s.range(),
            Self::Sqrt(s) => s.range(),
        }
    }
}

impl From<ScaleLinear> for ScaleContinuous {
    fn from(value: ScaleLinear) -> Self {
        Self::Linear(value)
    }
}

impl From<ScaleLog> for ScaleContinuous {
    fn from(value: ScaleLog) -> Self {
        Self::Log(value)
    }
}

impl From<ScaleSqrt> for ScaleContinuous {
    fn from(value: ScaleSqrt) -> Self {
        Self::Sqrt(value)
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Returns a copy of this scale with its domain extended to round tick boundaries.
    pub fn nice(self, count: usize) -> Self {
        Self::new(nice_domain(self.domain, count), self.range)
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        interpolate(self.domain, self.range, x)
    }

    /// Maps a value from range space back into domain space.
    pub fn invert(&self, y: f64) -> f64 {
        interpolate(self.range, self.domain, y)
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns "nice" tick values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

/// A log-scale mapping from a positive domain to a range.
///
/// Inputs are not validated: a non-positive value (or domain bound) maps to a non-finite
/// output, mirroring the undefined logarithm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLog {
    domain: (f64, f64),
    range: (f64, f64),
    base: f64,
}

impl ScaleLog {
    /// Creates a new base-10 log scale.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            base: 10.0,
        }
    }

    /// Sets the log base.
    ///
    /// Invalid bases (non-finite, non-positive, or `1`) fall back to `10`.
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = if base.is_finite() && base > 0.0 && base != 1.0 {
            base
        } else {
            10.0
        };
        self
    }

    /// Returns the log base.
    pub fn base(&self) -> f64 {
        self.base
    }

    /// `k × base^e`, dividing for negative exponents so decimal ticks stay exact.
    fn power_multiple(&self, k: f64, e: i32) -> f64 {
        if e < 0 {
            k / self.base.powi(-e)
        } else {
            k * self.base.powi(e)
        }
    }

    fn log_base(&self, x: f64) -> f64 {
        if self.base == 10.0 {
            x.log10()
        } else {
            x.ln() / self.base.ln()
        }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let log_domain = (self.log_base(d0), self.log_base(d1));
        interpolate(log_domain, self.range, self.log_base(x))
    }

    /// Maps a value from range space back into domain space.
    pub fn invert(&self, y: f64) -> f64 {
        let (d0, d1) = self.domain;
        let log_domain = (self.log_base(d0), self.log_base(d1));
        self.base.powf(interpolate(self.range, log_domain, y))
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns tick values for a log domain.
    ///
    /// When the domain spans fewer decades than `count`, every integer multiple of each
    /// power of `base` inside the domain is returned (`1, 2, … 9, 10, 20, …` for base 10).
    /// Otherwise only powers of `base` are returned, thinned to roughly `count` values.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut min, mut max) = self.domain;
        if min > max {
            core::mem::swap(&mut min, &mut max);
        }
        if count == 0 || min <= 0.0 || !min.is_finite() || !max.is_finite() {
            return Vec::new();
        }
        let min_e = clamp_exponent(self.log_base(min).floor());
        let max_e = clamp_exponent(self.log_base(max).ceil());
        let decades = usize::try_from(max_e.saturating_sub(min_e)).unwrap_or(0);

        let mut out = Vec::new();
        if decades < count {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "bases are small positive numbers in practice"
            )]
            let multiples = (self.base.ceil() as i64).max(2);
            for e in min_e..=max_e {
                for k in 1..multiples {
                    let v = self.power_multiple(k as f64, e);
                    if v < min - 1e-9 * min {
                        continue;
                    }
                    if v > max + 1e-9 * max {
                        break;
                    }
                    out.push(v);
                }
            }
        } else {
            let stride = decades.div_ceil(count).max(1);
            for (i, e) in (min_e..=max_e).enumerate() {
                if i % stride != 0 {
                    continue;
                }
                let v = self.power_multiple(1.0, e);
                if v >= min - 1e-9 * min && v <= max + 1e-9 * max {
                    out.push(v);
                }
            }
        }
        out
    }
}

fn clamp_exponent(e: f64) -> i32 {
    let e = e.clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
    {
        e as i32
    }
}

/// A square-root mapping (a power scale with exponent `0.5`).
///
/// Used for circle radii: with a zero-based domain and range, the circle *area* is
/// proportional to the mapped value. Negative values keep their sign.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleSqrt {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleSqrt {
    /// Creates a new square-root scale.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        interpolate((signed_sqrt(d0), signed_sqrt(d1)), self.range, signed_sqrt(x))
    }

    /// Maps a value from range space back into domain space.
    pub fn invert(&self, y: f64) -> f64 {
        let (d0, d1) = self.domain;
        let t = interpolate(self.range, (signed_sqrt(d0), signed_sqrt(d1)), y);
        t * t.abs()
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Returns "nice" tick values covering the domain (ticks are placed in data space).
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

fn signed_sqrt(x: f64) -> f64 {
    if x < 0.0 { -(-x).sqrt() } else { x.sqrt() }
}

/// Linear interpolation of `x` from `from` into `to`.
///
/// A degenerate `from` interval maps everything to the midpoint of `to`.
fn interpolate(from: (f64, f64), to: (f64, f64), x: f64) -> f64 {
    let (d0, d1) = from;
    let (r0, r1) = to;
    let denom = d1 - d0;
    if denom == 0.0 {
        return 0.5 * (r0 + r1);
    }
    let t = (x - d0) / denom;
    r0 + t * (r1 - r0)
}

/// Extends `domain` outward to round multiples of the tick step.
///
/// The step is recomputed on the widened domain until it stabilizes (at most 10 rounds),
/// so the resulting bounds coincide with the first and last tick. Reversed domains stay
/// reversed.
pub fn nice_domain(domain: (f64, f64), count: usize) -> (f64, f64) {
    let (d0, d1) = domain;
    if !d0.is_finite() || !d1.is_finite() || d0 == d1 || count == 0 {
        return domain;
    }
    let reversed = d1 < d0;
    let (mut start, mut stop) = if reversed { (d1, d0) } else { (d0, d1) };

    let mut previous: Option<TickIncrement> = None;
    for _ in 0..10 {
        let Some(inc) = tick_increment(start, stop, count) else {
            break;
        };
        if previous == Some(inc) {
            break;
        }
        match inc {
            TickIncrement::Step(step) => {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            }
            TickIncrement::Inverse(inv) => {
                start = (start * inv).floor() / inv;
                stop = (stop * inv).ceil() / inv;
            }
        }
        previous = Some(inc);
    }

    if reversed { (stop, start) } else { (start, stop) }
}

/// Returns "nice" tick values in `[min, max]`.
///
/// Ticks are multiples of 1, 2, or 5 times a power of ten, chosen so that roughly `count`
/// ticks cover the interval. Ticks never fall outside the interval.
pub fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    let reversed = min > max;
    if reversed {
        core::mem::swap(&mut min, &mut max);
    }
    let Some(inc) = tick_increment(min, max, count) else {
        return Vec::new();
    };

    let (i0, i1) = match inc {
        TickIncrement::Step(step) => {
            let mut i0 = (min / step).round();
            let mut i1 = (max / step).round();
            if i0 * step < min {
                i0 += 1.0;
            }
            if i1 * step > max {
                i1 -= 1.0;
            }
            (i0, i1)
        }
        TickIncrement::Inverse(inv) => {
            let mut i0 = (min * inv).round();
            let mut i1 = (max * inv).round();
            if i0 / inv < min {
                i0 += 1.0;
            }
            if i1 / inv > max {
                i1 -= 1.0;
            }
            (i0, i1)
        }
    };
    if i1 < i0 {
        return Vec::new();
    }
    let n_f = (i1 - i0).min(10_000.0);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "non-negative (checked above) and capped at 10k"
    )]
    let n = n_f as u64;

    let mut out: Vec<f64> = (0..=n)
        .map(|i| {
            let k = i0 + i as f64;
            match inc {
                TickIncrement::Step(step) => k * step,
                TickIncrement::Inverse(inv) => k / inv,
            }
        })
        .collect();
    if reversed {
        out.reverse();
    }
    out
}

/// A tick step, stored either directly (`>= 1`) or as its inverse to keep fractional steps
/// like `0.1` exact when multiplied out.
#[derive(Clone, Copy, Debug, PartialEq)]
enum TickIncrement {
    Step(f64),
    Inverse(f64),
}

fn tick_increment(start: f64, stop: f64, count: usize) -> Option<TickIncrement> {
    let step = (stop - start) / count.max(1) as f64;
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);
    let factor = if error >= 50_f64.sqrt() {
        10.0
    } else if error >= 10_f64.sqrt() {
        5.0
    } else if error >= 2_f64.sqrt() {
        2.0
    } else {
        1.0
    };
    Some(if power >= 0.0 {
        TickIncrement::Step(10_f64.powf(power) * factor)
    } else {
        TickIncrement::Inverse(10_f64.powf(-power) / factor)
    })
}
