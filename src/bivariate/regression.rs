//! Regression analysis

use std::fmt;

use log::warn;

use crate::bivariate::Data;
use crate::float::Float;

/// Something that maps an `x` value to a predicted `y` value
pub trait Predict<A> {
    /// Predicted outcome at `x`
    fn predict(&self, x: A) -> A;
}

/// A straight line `y = m * x + b`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StraightLine<A>
where
    A: Float,
{
    /// The y-intercept of the line
    pub intercept: A,
    /// The slope of the line
    pub slope: A,
}

impl<A> StraightLine<A>
where
    A: Float,
{
    /// Fits the data to a straight line using ordinary least squares
    ///
    /// The coefficients come straight from the sums of the data (no mean centering):
    ///
    /// ```text
    /// m = (n * Σxy - Σx * Σy) / (n * Σx² - (Σx)²)
    /// b = (Σy - m * Σx) / n
    /// ```
    ///
    /// When every `x` is the same the denominator is zero and the coefficients are not finite.
    ///
    /// - Time: `O(length)`
    #[allow(clippy::similar_names)]
    pub fn fit(data: &Data<'_, A>) -> StraightLine<A> {
        let xs = data.x();
        let ys = data.y();

        let n = A::cast(data.len());
        let x_sum = crate::sum(xs);
        let y_sum = crate::sum(ys);

        let sxy = n * crate::dot(xs, ys);
        let sx_sy = x_sum * y_sum;
        let sxx = n * crate::dot(xs, xs);
        let sx2 = x_sum.powi(2);

        let slope = (sxy - sx_sy) / (sxx - sx2);
        let intercept = (y_sum - slope * x_sum) / n;

        if !slope.is_finite() {
            warn!(
                "Degenerate fit over {} points: every x value is {}",
                data.len(),
                xs[0]
            );
        }

        StraightLine { intercept, slope }
    }

    /// Computes the goodness of fit (coefficient of determination) for this data set
    ///
    /// `1` is a perfect fit, negative values mean the line predicts worse than the mean of `Y`.
    /// A constant `Y` makes the total sum of squares zero and the result `NaN`.
    ///
    /// - Time: `O(length)`
    pub fn r_squared(&self, data: &Data<'_, A>) -> A {
        let _0 = A::cast(0);
        let _1 = A::cast(1);

        let n = A::cast(data.len());
        let y_bar = crate::sum(data.y()) / n;

        let mut ss_res = _0;
        let mut ss_tot = _0;
        for (x, y) in data.iter() {
            ss_res = ss_res + (y - self.predict(x)).powi(2);
            ss_tot = ss_tot + (y - y_bar).powi(2);
        }

        _1 - ss_res / ss_tot
    }
}

impl<A> Predict<A> for StraightLine<A>
where
    A: Float,
{
    fn predict(&self, x: A) -> A {
        self.slope * x + self.intercept
    }
}

impl<A> fmt::Display for StraightLine<A>
where
    A: Float,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::equation(self.slope, self.intercept))
    }
}

#[cfg(test)]
macro_rules! test {
    ($ty:ident) => {
        mod $ty {
            use approx::relative_eq;
            use quickcheck::quickcheck;
            use quickcheck::TestResult;

            use crate::bivariate::regression::{Predict, StraightLine};
            use crate::bivariate::Data;
            use crate::series::Series;

            quickcheck! {
                fn r_squared(size: u8, start: u8, offset: u8) -> TestResult {
                    let size = size as usize;
                    let start = start as usize;
                    let offset = offset as usize;
                    if let Some(x) = crate::test::vec::<$ty>(size, start) {
                        let y = crate::test::vec::<$ty>(size + offset, start + offset).unwrap();
                        let x = Series::new(x[start..].to_vec()).unwrap();
                        let y = Series::new(y[start + offset..].to_vec()).unwrap();
                        let data = Data::new(&x, &y).unwrap();

                        let sl = StraightLine::fit(&data);

                        let r_squared = sl.r_squared(&data);

                        TestResult::from_bool(
                            (r_squared > 0. || relative_eq!(r_squared, 0., epsilon = 1e-4)) &&
                                (r_squared < 1. || relative_eq!(r_squared, 1., epsilon = 1e-4))
                        )
                    } else {
                        TestResult::discard()
                    }
                }
            }

            quickcheck! {
                fn passes_through_the_centroid(size: u8, start: u8) -> TestResult {
                    let size = size as usize;
                    let start = start as usize;
                    if let Some(v) = crate::test::vec::<$ty>(size, start) {
                        let y = Series::new(v[start..].to_vec()).unwrap();
                        let x = Series::time_index(y.len());
                        let data = Data::new(&x, &y).unwrap();

                        let sl = StraightLine::fit(&data);

                        TestResult::from_bool(
                            relative_eq!(sl.predict(x.mean()), y.mean(), epsilon = 1e-3)
                        )
                    } else {
                        TestResult::discard()
                    }
                }
            }
        }
    };
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::{Predict, StraightLine};
    use crate::bivariate::Data;
    use crate::series::Series;

    test!(f32);
    test!(f64);

    fn fit(x: Vec<f64>, y: Vec<f64>) -> (StraightLine<f64>, f64) {
        let x = Series::new(x).unwrap();
        let y = Series::new(y).unwrap();
        let data = Data::new(&x, &y).unwrap();
        let line = StraightLine::fit(&data);

        (line, line.r_squared(&data))
    }

    #[test]
    fn identity_line() {
        let (line, r_squared) = fit(vec![1., 2., 3., 4.], vec![1., 2., 3., 4.]);

        assert_eq!(line.slope, 1.);
        assert_eq!(line.intercept, 0.);
        assert_eq!(r_squared, 1.);
    }

    #[test]
    fn exact_points_fit_perfectly() {
        let x = vec![-3., 0.5, 2., 7., 11.];
        let y = x.iter().map(|x| 0.25 * x - 4.).collect();
        let (line, r_squared) = fit(x, y);

        assert_relative_eq!(line.slope, 0.25, epsilon = 1e-12);
        assert_relative_eq!(line.intercept, -4., epsilon = 1e-12);
        assert_relative_eq!(r_squared, 1., epsilon = 1e-12);
    }

    #[test]
    fn noisy_points() {
        let (line, r_squared) = fit(vec![1., 2., 3., 4., 5.], vec![2., 4., 5., 4., 5.]);

        assert_relative_eq!(line.slope, 0.6, epsilon = 1e-12);
        assert_relative_eq!(line.intercept, 2.2, epsilon = 1e-12);
        assert_relative_eq!(r_squared, 0.6, epsilon = 1e-12);
    }

    #[test]
    fn constant_x_is_not_finite() {
        let (line, _) = fit(vec![3., 3., 3.], vec![1., 2., 3.]);

        assert!(!line.slope.is_finite());
        assert!(!line.intercept.is_finite());
    }

    #[test]
    fn constant_y_has_undefined_r_squared() {
        let (line, r_squared) = fit(vec![1., 2., 3.], vec![4., 4., 4.]);

        assert_eq!(line.slope, 0.);
        assert_eq!(line.intercept, 4.);
        assert!(r_squared.is_nan());
    }

    #[test]
    fn worse_than_the_mean_is_negative() {
        let x = Series::new(vec![1., 2., 3., 4.]).unwrap();
        let y = Series::new(vec![1., 2., 3., 4.]).unwrap();
        let data = Data::new(&x, &y).unwrap();
        let line = StraightLine {
            slope: -1.,
            intercept: 5.,
        };

        assert!(line.r_squared(&data) < 0.);
    }

    #[test]
    fn predicts_and_prints() {
        let line = StraightLine {
            slope: 1.5,
            intercept: -2.333333,
        };

        assert_relative_eq!(line.predict(2.), 0.666667, epsilon = 1e-9);
        assert_eq!(line.to_string(), "f(x) = 1.500x + -2.333");
    }
}
