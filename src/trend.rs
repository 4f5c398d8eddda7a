//! Inclination angle and qualitative trend labels

use std::fmt;

use serde::de::{self, Deserializer};
use serde_derive::{Deserialize, Serialize};

use crate::bivariate::regression::StraightLine;
use crate::bivariate::Data;
use crate::float::{self, Float};
use crate::series::Series;

/// Overall direction of a series
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Behavior {
    /// The series is not changing significantly
    Constant,
    /// The series has an increasing pattern
    Increase,
    /// The series has a decreasing pattern
    Reduction,
}

impl Behavior {
    /// Lowercase label
    pub fn as_str(self) -> &'static str {
        match self {
            Behavior::Constant => "constant",
            Behavior::Increase => "increase",
            Behavior::Reduction => "reduction",
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// How steep the trend is, regardless of its direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Nearly flat, the same band as `Behavior::Constant`
    Steady,
    /// Up to 10° of inclination
    Mild,
    /// Up to 25° of inclination
    Moderate,
    /// Up to 40° of inclination
    Significant,
    /// More than 40° of inclination
    Drastic,
}

impl Intensity {
    /// Lowercase label
    pub fn as_str(self) -> &'static str {
        match self {
            Intensity::Steady => "steady",
            Intensity::Mild => "mild",
            Intensity::Moderate => "moderate",
            Intensity::Significant => "significant",
            Intensity::Drastic => "drastic",
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Upper edges, in degrees, of the intensity bands
///
/// Every band includes its upper edge. The steady edge also bounds the constant behavior:
/// angles in `[-steady, steady]` are constant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Thresholds {
    steady: f64,
    mild: f64,
    moderate: f64,
    significant: f64,
}

#[derive(Deserialize)]
struct Edges {
    steady: f64,
    mild: f64,
    moderate: f64,
    significant: f64,
}

impl Default for Thresholds {
    fn default() -> Thresholds {
        Thresholds {
            steady: 1.,
            mild: 10.,
            moderate: 25.,
            significant: 40.,
        }
    }
}

impl Thresholds {
    /// Creates a new set of band edges
    ///
    /// # Panics
    ///
    /// Panics if the edges are not finite, positive and strictly increasing
    pub fn new(steady: f64, mild: f64, moderate: f64, significant: f64) -> Thresholds {
        let edges = Edges {
            steady,
            mild,
            moderate,
            significant,
        };

        match Thresholds::checked(edges) {
            Ok(thresholds) => thresholds,
            Err(e) => panic!("{}", e),
        }
    }

    /// Edge of the steady band (and of the constant behavior)
    pub fn steady(&self) -> f64 {
        self.steady
    }

    /// Edge of the mild band
    pub fn mild(&self) -> f64 {
        self.mild
    }

    /// Edge of the moderate band
    pub fn moderate(&self) -> f64 {
        self.moderate
    }

    /// Edge of the significant band
    pub fn significant(&self) -> f64 {
        self.significant
    }

    /// Direction of a trend inclined `degrees` from the horizontal
    pub fn behavior(&self, degrees: f64) -> Behavior {
        if degrees >= -self.steady && degrees <= self.steady {
            Behavior::Constant
        } else if degrees > self.steady {
            Behavior::Increase
        } else {
            Behavior::Reduction
        }
    }

    /// Steepness of a trend inclined `degrees` from the horizontal
    pub fn intensity(&self, degrees: f64) -> Intensity {
        let degrees = degrees.abs();

        if degrees <= self.steady {
            Intensity::Steady
        } else if degrees <= self.mild {
            Intensity::Mild
        } else if degrees <= self.moderate {
            Intensity::Moderate
        } else if degrees <= self.significant {
            Intensity::Significant
        } else {
            Intensity::Drastic
        }
    }
}

impl Thresholds {
    fn checked(e: Edges) -> Result<Thresholds, String> {
        let edges = [e.steady, e.mild, e.moderate, e.significant];

        if edges.iter().any(|x| !x.is_finite() || *x <= 0.) {
            return Err(format!("Band edges must be finite and positive: {:?}", edges));
        }
        if edges.windows(2).any(|w| w[0] >= w[1]) {
            return Err(format!("Band edges must be strictly increasing: {:?}", edges));
        }

        Ok(Thresholds {
            steady: e.steady,
            mild: e.mild,
            moderate: e.moderate,
            significant: e.significant,
        })
    }
}

impl<'de> de::Deserialize<'de> for Thresholds {
    fn deserialize<D>(deserializer: D) -> Result<Thresholds, D::Error>
    where
        D: Deserializer<'de>,
    {
        let edges: Edges = de::Deserialize::deserialize(deserializer)?;

        Thresholds::checked(edges).map_err(de::Error::custom)
    }
}

/// Classification of an inclination angle
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    /// Inclination in degrees
    pub degrees: f64,
    /// Direction label
    pub behavior: Behavior,
    /// Steepness label
    pub intensity: Intensity,
}

impl Trend {
    /// Classifies an inclination of `degrees`
    ///
    /// Angles that are not finite fall through every band: `reduction`, `drastic`.
    pub fn classify(degrees: f64, thresholds: &Thresholds) -> Trend {
        Trend {
            degrees,
            behavior: thresholds.behavior(degrees),
            intensity: thresholds.intensity(degrees),
        }
    }

    /// Classifies the inclination of a line with the given `slope`
    pub fn of_slope<A: Float>(slope: A, thresholds: &Thresholds) -> Trend {
        Trend::classify(float::widen(angle_degrees(slope)), thresholds)
    }
}

/// Inclination angle, in radians, of a line with the given `slope`
pub fn angle_radians<A: Float>(slope: A) -> A {
    slope.atan()
}

/// Inclination angle, in degrees, of a line with the given `slope`
pub fn angle_degrees<A: Float>(slope: A) -> A {
    float::radians_to_degrees(angle_radians(slope))
}

/// Inclination, in degrees, of the least squares line of `series` over its time index
pub fn trend_degrees<A: Float>(series: &Series<A>) -> A {
    let x = Series::time_index(series.len());
    let line = StraightLine::fit(&Data::new_unchecked(&x, series));

    angle_degrees(line.slope)
}
