// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic-bezier easing and the stepped smooth-scroll fallback.

use core::time::Duration;

use kurbo::{CubicBez, ParamCurve, Point, Vec2};

/// A CSS-style cubic-bezier easing curve.
///
/// The curve runs from `(0, 0)` to `(1, 1)` with the two inner control points
/// `(x1, y1)` and `(x2, y2)`. The x axis is the fraction of elapsed time and
/// the y axis is the fraction of progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezierEasing {
    /// X of the first control point.
    pub x1: f64,
    /// Y of the first control point.
    pub y1: f64,
    /// X of the second control point.
    pub x2: f64,
    /// Y of the second control point.
    pub y2: f64,
}

impl CubicBezierEasing {
    /// The CSS `ease` curve.
    pub const EASE: Self = Self::new(0.25, 0.1, 0.25, 1.0);

    /// A curve whose progress always equals elapsed time.
    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    /// Creates a curve from its two inner control points.
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Returns the full cubic, including the implicit end points.
    #[must_use]
    pub fn curve(&self) -> CubicBez {
        CubicBez::new(
            Point::ORIGIN,
            Point::new(self.x1, self.y1),
            Point::new(self.x2, self.y2),
            Point::new(1.0, 1.0),
        )
    }

    /// Evaluates the curve at parameter `t` in `[0, 1]`.
    ///
    /// The result's `x` is the time fraction and `y` the value fraction.
    /// Note that `t` is the curve parameter, not the time fraction itself.
    #[must_use]
    pub fn eval(&self, t: f64) -> Point {
        self.curve().eval(t)
    }
}

/// Timing function of a transform transition.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum TimingFunction {
    /// Constant speed.
    #[default]
    Linear,
    /// A cubic-bezier curve.
    CubicBezier(CubicBezierEasing),
}

/// A single scheduled scroll position of a [`SmoothScroll`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollStep {
    /// Delay after the start of the scroll at which to apply `position`.
    pub delay: Duration,
    /// Scroll position to apply.
    pub position: Point,
}

/// Iterator over the steps of an eased scroll from `start` to `target`.
///
/// Step `i` of `n` (starting at `1`) evaluates the easing curve at `i / n`;
/// it is due at `duration * x` and moves to `start + (target - start) * y`.
/// The last step always lands on the curve end point, so the final position
/// is `target`.
///
/// ```rust
/// use core::time::Duration;
/// use kurbo::Point;
/// use understory_zoom::{CubicBezierEasing, SmoothScroll};
///
/// let steps: Vec<_> = SmoothScroll::new(
///     CubicBezierEasing::LINEAR,
///     Point::new(0.0, 0.0),
///     Point::new(100.0, 40.0),
///     Duration::from_millis(800),
///     4,
/// )
/// .collect();
///
/// assert_eq!(steps.len(), 4);
/// assert_eq!(steps[3].delay, Duration::from_millis(800));
/// assert_eq!(steps[3].position, Point::new(100.0, 40.0));
/// ```
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    easing: CubicBezierEasing,
    start: Point,
    delta: Vec2,
    duration: Duration,
    steps: u32,
    next: u32,
}

impl SmoothScroll {
    /// Plans `steps` eased scroll steps spanning `duration`.
    #[must_use]
    pub fn new(
        easing: CubicBezierEasing,
        start: Point,
        target: Point,
        duration: Duration,
        steps: u32,
    ) -> Self {
        Self {
            easing,
            start,
            delta: target - start,
            duration,
            steps,
            next: 0,
        }
    }
}

impl Iterator for SmoothScroll {
    type Item = ScrollStep;

    fn next(&mut self) -> Option<ScrollStep> {
        if self.next >= self.steps {
            return None;
        }
        self.next += 1;
        let t = f64::from(self.next) / f64::from(self.steps);
        let p = self.easing.eval(t);
        // `Duration::mul_f64` panics on negative or non-finite factors.
        let time = if p.x.is_finite() {
            p.x.clamp(0.0, 1.0)
        } else {
            1.0
        };
        Some(ScrollStep {
            delay: self.duration.mul_f64(time),
            position: self.start + self.delta * p.y,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.steps - self.next).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use kurbo::Point;

    use super::{CubicBezierEasing, SmoothScroll};

    #[test]
    fn end_points_are_fixed() {
        let ease = CubicBezierEasing::EASE;
        assert_eq!(ease.eval(0.0), Point::ORIGIN);
        let end = ease.eval(1.0);
        assert!((end.x - 1.0).abs() < 1e-12);
        assert!((end.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn curve_spans_unit_square() {
        let curve = CubicBezierEasing::new(0.42, 0.0, 0.58, 1.0).curve();
        assert_eq!(curve.p0, Point::ORIGIN);
        assert_eq!(curve.p1, Point::new(0.42, 0.0));
        assert_eq!(curve.p2, Point::new(0.58, 1.0));
        assert_eq!(curve.p3, Point::new(1.0, 1.0));
    }

    #[test]
    fn matches_bernstein_form() {
        let curve = CubicBezierEasing::new(0.25, 0.1, 0.25, 1.0);
        let t = 0.3_f64;
        let u = 1.0 - t;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        let expected = Point::new(
            curve.x1 * b1 + curve.x2 * b2 + b3,
            curve.y1 * b1 + curve.y2 * b2 + b3,
        );
        let got = curve.eval(t);
        assert!((got.x - expected.x).abs() < 1e-12);
        assert!((got.y - expected.y).abs() < 1e-12);
    }

    #[test]
    fn ease_leads_time() {
        // `ease` front-loads progress: value runs ahead of time mid-curve.
        let p = CubicBezierEasing::EASE.eval(0.5);
        assert!(p.y > p.x);
    }

    #[test]
    fn linear_curve_keeps_value_equal_to_time() {
        for i in 0..=10 {
            let p = CubicBezierEasing::LINEAR.eval(f64::from(i) / 10.0);
            assert!((p.x - p.y).abs() < 1e-12);
        }
    }

    #[test]
    fn smooth_scroll_is_monotonic_and_lands_on_target() {
        let start = Point::new(10.0, 500.0);
        let target = Point::new(310.0, 100.0);
        let steps = SmoothScroll::new(
            CubicBezierEasing::EASE,
            start,
            target,
            Duration::from_millis(800),
            16,
        );
        assert_eq!(steps.size_hint(), (16, Some(16)));

        let mut last_delay = Duration::ZERO;
        let mut last_x = start.x;
        let mut final_position = start;
        for step in steps {
            assert!(step.delay >= last_delay);
            assert!(step.position.x >= last_x);
            last_delay = step.delay;
            last_x = step.position.x;
            final_position = step.position;
        }
        assert!((last_delay.as_secs_f64() - 0.8).abs() < 1e-9);
        assert!((final_position.x - target.x).abs() < 1e-9);
        assert!((final_position.y - target.y).abs() < 1e-9);
    }

    #[test]
    fn zero_steps_is_empty() {
        let mut steps = SmoothScroll::new(
            CubicBezierEasing::EASE,
            Point::ORIGIN,
            Point::new(1.0, 1.0),
            Duration::from_millis(800),
            0,
        );
        assert!(steps.next().is_none());
    }
}
