//! Float trait

use std::fmt;

use cast::From;
use num_traits::{float, FloatConst};

/// This is an extension of `num_traits::float::Float` that adds safe
/// casting, the float constants, formatting and Sync + Send.
pub trait Float:
    float::Float
    + FloatConst
    + From<usize, Output = Self>
    + From<f32, Output = Self>
    + fmt::Display
    + fmt::Debug
    + Sync
    + Send
{
}

impl Float for f32 {}
impl Float for f64 {}

/// Converts an angle measured in radians into degrees
pub fn radians_to_degrees<A: Float>(rad: A) -> A {
    rad * A::cast(180) / A::PI()
}

/// Widens any supported float to `f64`
pub(crate) fn widen<A: Float>(x: A) -> f64 {
    x.to_f64().unwrap_or(::std::f64::NAN)
}
