//! Linear model of a series, over time or against a second series

use std::fmt;

use log::debug;
use serde_derive::Serialize;
use serde_json::Value;

use crate::bivariate::correlation;
use crate::bivariate::regression::{Predict, StraightLine};
use crate::bivariate::Data;
use crate::error::Result;
use crate::float::{self, Float};
use crate::series::{self, Series};
use crate::trend::{self, Behavior, Intensity, Thresholds, Trend};

/// Where the `X` values of a model come from
#[derive(Clone, Debug, PartialEq)]
pub enum Axis<A> {
    /// The generated time index `1, 2, ..., n`
    TimeIndex(Series<A>),
    /// A series supplied by the caller, paired by position with `Y`
    Explicit(Series<A>),
}

impl<A> Axis<A> {
    /// Returns the `X` values
    pub fn values(&self) -> &Series<A> {
        match self {
            Axis::TimeIndex(x) | Axis::Explicit(x) => x,
        }
    }
}

/// The slope and y-intercept of the fitted line
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Coefficients<A> {
    /// Angular coefficient, the tangent of the inclination
    pub slope: A,
    /// Linear coefficient, the value of the line at `x = 0`
    pub intercept: A,
}

/// The fitted line, both printable and callable
#[derive(Clone, Debug, PartialEq)]
pub struct Equation<A>
where
    A: Float,
{
    /// `f(x) = <slope>x + <intercept>`, coefficients rounded to three decimals
    pub text: String,
    /// The line itself, unrounded
    pub line: StraightLine<A>,
}

impl<A> Equation<A>
where
    A: Float,
{
    /// Returns the line as a plain function
    pub fn function(&self) -> impl Fn(A) -> A {
        let line = self.line;

        move |x| line.predict(x)
    }
}

impl<A> Predict<A> for Equation<A>
where
    A: Float,
{
    fn predict(&self, x: A) -> A {
        self.line.predict(x)
    }
}

impl<A> fmt::Display for Equation<A>
where
    A: Float,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Everything a model derives, widened to `f64`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    /// Number of data points
    pub len: usize,
    /// Whether `X` is the generated time index
    pub time_indexed: bool,
    /// Sum of the `X` values
    pub sum_x: f64,
    /// Sum of the `Y` values
    pub sum_y: f64,
    /// Slope of the fitted line
    pub slope: f64,
    /// Y-intercept of the fitted line
    pub intercept: f64,
    /// Inclination of the fitted line, in radians
    pub angle_radians: f64,
    /// Inclination of the fitted line, in degrees
    pub angle_degrees: f64,
    /// Direction label
    pub behavior: Behavior,
    /// Steepness label
    pub intensity: Intensity,
    /// Printable equation
    pub equation: String,
    /// Pearson correlation of `X` and `Y`
    pub correlation: f64,
    /// Coefficient of determination of the fitted line
    pub r_squared: f64,
}

/// Least squares linear model of a series
///
/// Every input is validated on construction; afterwards the model never changes and each
/// accessor recomputes its value from the stored series.
#[derive(Clone, Debug)]
pub struct RegressionModel<A = f64>
where
    A: Float,
{
    y: Series<A>,
    x: Axis<A>,
    thresholds: Thresholds,
}

impl<A> RegressionModel<A>
where
    A: Float,
{
    /// Models the behavior of `y` over time, `X` being `1, 2, ..., n`
    pub fn over_time(y: Series<A>) -> RegressionModel<A> {
        debug!("Modeling {} points over the time index", y.len());

        RegressionModel {
            x: Axis::TimeIndex(Series::time_index(y.len())),
            y,
            thresholds: Thresholds::default(),
        }
    }

    /// Models `y` against `x`, which must have the same length
    pub fn paired(x: Series<A>, y: Series<A>) -> Result<RegressionModel<A>> {
        Data::new(&x, &y)?;
        debug!("Modeling {} paired points", y.len());

        Ok(RegressionModel {
            x: Axis::Explicit(x),
            y,
            thresholds: Thresholds::default(),
        })
    }

    /// Validates `values` and models them over time
    pub fn from_values(values: Vec<A>) -> Result<RegressionModel<A>> {
        Ok(RegressionModel::over_time(Series::new(values)?))
    }

    /// Validates `x` and `y` and models one against the other
    pub fn from_pairs(x: Vec<A>, y: Vec<A>) -> Result<RegressionModel<A>> {
        let (x, y) = series::paired_from_vecs(x, y)?;

        RegressionModel::paired(x, y)
    }

    /// Coerces a raw JSON dataset and models it over time
    pub fn from_value(value: &Value) -> Result<RegressionModel<A>> {
        Ok(RegressionModel::over_time(Series::from_value(value)?))
    }

    /// Coerces two raw JSON datasets and models one against the other
    pub fn from_json_values(x: &Value, y: &Value) -> Result<RegressionModel<A>> {
        let (x, y) = series::paired_from_values(x, y)?;

        RegressionModel::paired(x, y)
    }

    /// Changes the band edges used to label the trend
    pub fn with_thresholds(mut self, thresholds: Thresholds) -> RegressionModel<A> {
        self.thresholds = thresholds;
        self
    }

    /// Band edges used to label the trend
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Number of data points
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Always false, a model holds at least two points
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// The modeled (`Y`) series
    pub fn dataset(&self) -> &Series<A> {
        &self.y
    }

    /// The `X` series, generated or supplied
    pub fn x_values(&self) -> &Series<A> {
        self.x.values()
    }

    /// Where the `X` series comes from
    pub fn axis(&self) -> &Axis<A> {
        &self.x
    }

    /// Whether `X` is the generated time index
    pub fn is_time_indexed(&self) -> bool {
        match self.x {
            Axis::TimeIndex(_) => true,
            Axis::Explicit(_) => false,
        }
    }

    /// Sum of the `Y` values
    pub fn sum_y(&self) -> A {
        self.y.sum()
    }

    /// Sum of the `X` values
    pub fn sum_x(&self) -> A {
        self.x.values().sum()
    }

    /// The paired `(X, Y)` data
    pub fn data(&self) -> Data<'_, A> {
        Data::new_unchecked(self.x.values(), &self.y)
    }

    /// The least squares line
    pub fn line(&self) -> StraightLine<A> {
        StraightLine::fit(&self.data())
    }

    /// Slope (angular coefficient) of the fitted line
    pub fn slope(&self) -> A {
        self.line().slope
    }

    /// Y-intercept (linear coefficient) of the fitted line
    pub fn intercept(&self) -> A {
        self.line().intercept
    }

    /// Inclination of the fitted line, in radians
    pub fn angle_radians(&self) -> A {
        trend::angle_radians(self.slope())
    }

    /// Inclination of the fitted line, in degrees
    pub fn angle_degrees(&self) -> A {
        trend::angle_degrees(self.slope())
    }

    /// Classification of the inclination
    pub fn trend(&self) -> Trend {
        Trend::classify(float::widen(self.angle_degrees()), &self.thresholds)
    }

    /// Whether the series is constant, increasing or reducing
    pub fn behavior(&self) -> Behavior {
        self.trend().behavior
    }

    /// How steep the trend is
    pub fn intensity(&self) -> Intensity {
        self.trend().intensity
    }

    /// Slope and intercept of the fitted line
    pub fn coefficients(&self) -> Coefficients<A> {
        let line = self.line();

        Coefficients {
            slope: line.slope,
            intercept: line.intercept,
        }
    }

    /// The fitted line as printable text and as a predictor
    pub fn equation(&self) -> Equation<A> {
        let line = self.line();

        Equation {
            text: line.to_string(),
            line,
        }
    }

    /// Value of the fitted line at `x`
    pub fn predict(&self, x: A) -> A {
        self.line().predict(x)
    }

    /// Pearson correlation of `X` and `Y`
    pub fn correlation(&self) -> A {
        correlation::pearson(&self.data())
    }

    /// Coefficient of determination of the fitted line
    pub fn r_squared(&self) -> A {
        let data = self.data();

        StraightLine::fit(&data).r_squared(&data)
    }

    /// Snapshot of everything the model derives
    pub fn summary(&self) -> Summary {
        let data = self.data();
        let line = StraightLine::fit(&data);
        let trend = Trend::of_slope(line.slope, &self.thresholds);

        Summary {
            len: self.len(),
            time_indexed: self.is_time_indexed(),
            sum_x: float::widen(self.sum_x()),
            sum_y: float::widen(self.sum_y()),
            slope: float::widen(line.slope),
            intercept: float::widen(line.intercept),
            angle_radians: float::widen(trend::angle_radians(line.slope)),
            angle_degrees: trend.degrees,
            behavior: trend.behavior,
            intensity: trend.intensity,
            equation: line.to_string(),
            correlation: float::widen(correlation::pearson(&data)),
            r_squared: float::widen(line.r_squared(&data)),
        }
    }
}
