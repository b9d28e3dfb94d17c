//! Core line types.
//!
//! - `LineKind`: vertical / horizontal / oblique classification with the data
//!   each kind needs.
//! - `LineEquation`: the value type; exposes the sentinel encoding
//!   (`slope = +inf` vertical, `slope = 0` horizontal, NaN intercepts) through
//!   getters and answers the closed-form queries.
//! - `GeneralForm`: implicit `a·x + b·y + c = 0`, used for distances.

use std::fmt;

use nalgebra::Vector2;

use super::error::LineError;

/// Classification of a line together with its defining numbers.
///
/// Invariants:
/// - `Oblique.slope` is never `0` or infinite (those become `Horizontal` and
///   `Vertical`); it may be NaN only when built via the unchecked
///   `LineEquation::from_slope_point`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineKind {
    /// `x = x`, parallel to the y-axis.
    Vertical { x: f64 },
    /// `y = y`, parallel to the x-axis.
    Horizontal { y: f64 },
    /// `y = slope·x + y_intercept`.
    Oblique { slope: f64, y_intercept: f64 },
}

/// A line in the plane in slope-intercept form.
///
/// Immutable after construction; `shift_to` returns a new line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineEquation {
    kind: LineKind,
}

impl LineEquation {
    /// Line with the given slope through `point`.
    ///
    /// An infinite slope (either sign) gives a vertical line through `point.x`,
    /// a zero slope a horizontal line through `point.y`.
    ///
    /// A NaN slope is not supported: the result is an oblique line whose
    /// queries all return NaN. Use [`LineEquation::try_from_slope_point`] to
    /// reject it instead.
    pub fn from_slope_point(slope: f64, point: Vector2<f64>) -> Self {
        let kind = if slope.is_infinite() {
            LineKind::Vertical { x: point.x }
        } else if slope == 0.0 {
            LineKind::Horizontal { y: point.y }
        } else {
            // y = m x + b  =>  b = y - m x
            LineKind::Oblique {
                slope,
                y_intercept: point.y - slope * point.x,
            }
        };
        Self { kind }
    }

    /// Validating variant of [`LineEquation::from_slope_point`].
    pub fn try_from_slope_point(slope: f64, point: Vector2<f64>) -> Result<Self, LineError> {
        if slope.is_nan() {
            return Err(LineError::NanSlope);
        }
        if !(point.x.is_finite() && point.y.is_finite()) {
            return Err(LineError::NonFinitePoint {
                x: point.x,
                y: point.y,
            });
        }
        Ok(Self::from_slope_point(slope, point))
    }

    /// Line through `p1` and `p2`.
    ///
    /// Uses exact comparisons: equal x gives a vertical line, otherwise equal y
    /// gives a horizontal one. Coincident points hit the vertical branch first,
    /// so a single point yields the vertical line through it. A slope that
    /// underflows to `0` or overflows to infinity is classified the same way
    /// as an exactly horizontal or vertical pair.
    pub fn from_points(p1: Vector2<f64>, p2: Vector2<f64>) -> Self {
        let kind = if p2.x == p1.x {
            LineKind::Vertical { x: p1.x }
        } else if p2.y == p1.y {
            LineKind::Horizontal { y: p1.y }
        } else {
            let slope = (p2.y - p1.y) / (p2.x - p1.x);
            // distinct coordinates can still under/overflow the quotient
            if slope == 0.0 {
                LineKind::Horizontal { y: p1.y }
            } else if slope.is_infinite() {
                LineKind::Vertical { x: p1.x }
            } else {
                LineKind::Oblique {
                    slope,
                    y_intercept: p2.y - slope * p2.x,
                }
            }
        };
        Self { kind }
    }

    #[inline]
    fn from_kind(kind: LineKind) -> Self {
        Self { kind }
    }

    #[inline]
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self.kind, LineKind::Vertical { .. })
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        matches!(self.kind, LineKind::Horizontal { .. })
    }

    /// `+inf` for vertical lines, `0` for horizontal ones.
    #[inline]
    pub fn slope(&self) -> f64 {
        match self.kind {
            LineKind::Vertical { .. } => f64::INFINITY,
            LineKind::Horizontal { .. } => 0.0,
            LineKind::Oblique { slope, .. } => slope,
        }
    }

    /// Crossing with `x = 0`; NaN for vertical lines.
    #[inline]
    pub fn y_intercept(&self) -> f64 {
        match self.kind {
            LineKind::Vertical { .. } => f64::NAN,
            LineKind::Horizontal { y } => y,
            LineKind::Oblique { y_intercept, .. } => y_intercept,
        }
    }

    /// Crossing with `y = 0`; NaN for horizontal lines.
    #[inline]
    pub fn x_intercept(&self) -> f64 {
        match self.kind {
            LineKind::Vertical { x } => x,
            LineKind::Horizontal { .. } => f64::NAN,
            LineKind::Oblique { slope, y_intercept } => -y_intercept / slope,
        }
    }

    /// x on the line at height `y`.
    ///
    /// Vertical lines return their x for every `y`; horizontal lines return NaN
    /// (no single x).
    pub fn x_of_y(&self, y: f64) -> f64 {
        match self.kind {
            LineKind::Vertical { x } => x,
            LineKind::Horizontal { .. } => f64::NAN,
            LineKind::Oblique { slope, y_intercept } => (y - y_intercept) / slope,
        }
    }

    /// y on the line at abscissa `x`.
    ///
    /// Horizontal lines return their y for every `x`; vertical lines return NaN.
    pub fn y_of_x(&self, x: f64) -> f64 {
        match self.kind {
            LineKind::Vertical { .. } => f64::NAN,
            LineKind::Horizontal { y } => y,
            LineKind::Oblique { slope, y_intercept } => slope * x + y_intercept,
        }
    }

    /// [`LineEquation::x_of_y`], with `None` for horizontal lines.
    pub fn checked_x_of_y(&self, y: f64) -> Option<f64> {
        if self.is_horizontal() {
            None
        } else {
            Some(self.x_of_y(y))
        }
    }

    /// [`LineEquation::y_of_x`], with `None` for vertical lines.
    pub fn checked_y_of_x(&self, x: f64) -> Option<f64> {
        if self.is_vertical() {
            None
        } else {
            Some(self.y_of_x(x))
        }
    }

    /// Implicit form `a·x + b·y + c = 0`.
    ///
    /// - vertical: `(1, 0, -x_intercept)`
    /// - horizontal: `(0, 1, -y_intercept)`
    /// - oblique: `(slope, -1, y_intercept)`
    pub fn general_form(&self) -> GeneralForm {
        match self.kind {
            LineKind::Vertical { x } => GeneralForm::new(1.0, 0.0, -x),
            LineKind::Horizontal { y } => GeneralForm::new(0.0, 1.0, -y),
            LineKind::Oblique { slope, y_intercept } => GeneralForm::new(slope, -1.0, y_intercept),
        }
    }

    /// Perpendicular distance from `(x, y)` to the line.
    #[inline]
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        self.general_form().distance(x, y)
    }

    /// [`LineEquation::distance_to`] for a point given as a vector.
    #[inline]
    pub fn distance_to_point(&self, p: Vector2<f64>) -> f64 {
        self.distance_to(p.x, p.y)
    }

    /// Parallel line through `point` (same slope). The receiver is unchanged.
    pub fn shift_to(&self, point: Vector2<f64>) -> LineEquation {
        match self.kind {
            LineKind::Vertical { .. } => Self::from_kind(LineKind::Vertical { x: point.x }),
            LineKind::Horizontal { .. } => Self::from_kind(LineKind::Horizontal { y: point.y }),
            LineKind::Oblique { slope, .. } => Self::from_slope_point(slope, point),
        }
    }
}

impl fmt::Display for LineEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LineKind::Vertical { x } => write!(f, "x = {x}"),
            LineKind::Horizontal { y } => write!(f, "y = {y}"),
            LineKind::Oblique { slope, y_intercept } if y_intercept < 0.0 => {
                write!(f, "y = {slope}·x - {}", -y_intercept)
            }
            LineKind::Oblique { slope, y_intercept } => write!(f, "y = {slope}·x + {y_intercept}"),
        }
    }
}

/// Implicit line `a·x + b·y + c = 0` (no normalization).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneralForm {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl GeneralForm {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Normal vector `(a, b)`.
    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        Vector2::new(self.a, self.b)
    }

    #[inline]
    pub fn eval(&self, x: f64, y: f64) -> f64 {
        self.a * x + self.b * y + self.c
    }

    /// `|a·x + b·y + c| / sqrt(a² + b²)`; NaN when `a` and `b` are both zero.
    pub fn distance(&self, x: f64, y: f64) -> f64 {
        if self.a == 0.0 && self.b == 0.0 {
            return f64::NAN;
        }
        self.eval(x, y).abs() / (self.a * self.a + self.b * self.b).sqrt()
    }
}
