//! 2D line equations in slope-intercept form.
//!
//! A `LineEquation` is a small immutable value: built from a slope and a point
//! or from two points, then queried for x-given-y, y-given-x, point distance,
//! and parallel shifts.
//!
//! Conventions
//! - Queries are total: undefined answers (e.g. x for a given y on a
//!   horizontal line) come back as NaN, so numeric callers can propagate them.
//! - Branch selection uses exact floating-point comparison; there are no
//!   tolerances anywhere in this crate.

pub mod line2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use line2::{GeneralForm, LineEquation, LineError, LineKind};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::line2::rand::{draw_line, draw_lines, ReplayToken, SamplerCfg};
    pub use crate::line2::{GeneralForm, LineEquation, LineError, LineKind};
    pub use nalgebra::Vector2 as Vec2;
}
