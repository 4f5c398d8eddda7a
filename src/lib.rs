//! Least-squares trend lines for small numeric series.
//!
//! A [`RegressionModel`] fits a straight line `f(x) = m * x + b` through a series, either
//! against the implicit time index `1..=n` or against a second, explicitly supplied series,
//! and describes it: slope, intercept, inclination angle, a qualitative trend label, Pearson
//! correlation and the coefficient of determination.
//!
//! ```
//! use trendline::{Behavior, Intensity, RegressionModel};
//!
//! let model = RegressionModel::from_values(vec![1., 2., 3., 4.]).unwrap();
//!
//! assert_eq!(model.slope(), 1.);
//! assert_eq!(model.behavior(), Behavior::Increase);
//! assert_eq!(model.intensity(), Intensity::Drastic);
//! assert_eq!(model.equation().text, "f(x) = 1.000x + 0.000");
//! ```
//!
//! All inputs are validated when a model is built; every accessor afterwards is a pure
//! function of the stored series. Degenerate inputs (a constant series, a single distinct `x`
//! value) are not errors: they surface as IEEE-754 infinities or `NaN`s.

#![warn(missing_docs)]


pub mod bivariate;
pub mod error;
pub mod float;
pub mod model;
pub mod series;
pub mod trend;

mod format;

pub use crate::bivariate::correlation::Correlation;
pub use crate::bivariate::regression::{Predict, StraightLine};
pub use crate::bivariate::Data;
pub use crate::error::{Error, Result};
pub use crate::model::{Axis, Coefficients, Equation, RegressionModel, Summary};
pub use crate::series::Series;
pub use crate::trend::{trend_degrees, Behavior, Intensity, Thresholds, Trend};

use crate::float::Float;

fn dot<A>(xs: &[A], ys: &[A]) -> A
where
    A: Float,
{
    use itertools::Itertools;

    xs.iter()
        .zip_eq(ys)
        .fold(A::cast(0), |acc, (&x, &y)| acc + x * y)
}

fn sum<A>(xs: &[A]) -> A
where
    A: Float,
{
    use std::ops::Add;

    xs.iter().cloned().fold(A::cast(0), Add::add)
}
