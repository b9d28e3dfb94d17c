//! Lines in the plane (slope-intercept form).
//!
//! Purpose
//! - Provide a single value type, `LineEquation`, classified as vertical,
//!   horizontal or oblique, with closed-form queries.
//! - Keep the sentinel view (`slope = +inf` for vertical, `0` for horizontal,
//!   NaN for a missing intercept) available through getters, while the
//!   internal representation is an explicit `LineKind`.
//!
//! Layout
//! - `types`: `LineKind`, `LineEquation`, `GeneralForm`.
//! - `error`: `LineError` for the validating constructor.
//! - `rand`: reproducible line sampler for tests and benchmarks.

mod error;
pub mod rand;
mod types;

pub use error::LineError;
pub use types::{GeneralForm, LineEquation, LineKind};
