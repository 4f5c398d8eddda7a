//! Correlation analysis

use serde_json::Value;

use crate::bivariate::Data;
use crate::error::Result;
use crate::float::Float;
use crate::series::{self, Series};

/// Computes the Pearson correlation coefficient of the data set
///
/// The deviations from each mean are multiplied and summed, then divided by the square root of
/// the product of the summed squared deviations. A constant series makes the denominator zero
/// and the result `NaN`.
///
/// - Time: `O(length)`
pub fn pearson<A>(data: &Data<'_, A>) -> A
where
    A: Float,
{
    let _0 = A::cast(0);
    let n = A::cast(data.len());
    let x_bar = crate::sum(data.x()) / n;
    let y_bar = crate::sum(data.y()) / n;

    let (mut sxy, mut sxx, mut syy) = (_0, _0, _0);
    for (x, y) in data.iter() {
        let (dx, dy) = (x - x_bar, y - y_bar);

        sxy = sxy + dx * dy;
        sxx = sxx + dx.powi(2);
        syy = syy + dy.powi(2);
    }

    sxy / (sxx * syy).sqrt()
}

/// Standalone correlation between two paired series
#[derive(Clone, Debug)]
pub struct Correlation<A = f64>
where
    A: Float,
{
    x: Series<A>,
    y: Series<A>,
}

impl<A> Correlation<A>
where
    A: Float,
{
    /// Pairs two validated series, which must have the same length
    pub fn new(x: Series<A>, y: Series<A>) -> Result<Correlation<A>> {
        Data::new(&x, &y)?;

        Ok(Correlation { x, y })
    }

    /// Validates and pairs two vectors of numbers
    pub fn from_values(x: Vec<A>, y: Vec<A>) -> Result<Correlation<A>> {
        let (x, y) = series::paired_from_vecs(x, y)?;

        Ok(Correlation { x, y })
    }

    /// Validates and pairs two raw JSON datasets
    pub fn from_json_values(x: &Value, y: &Value) -> Result<Correlation<A>> {
        let (x, y) = series::paired_from_values(x, y)?;

        Ok(Correlation { x, y })
    }

    /// Returns the paired data
    pub fn data(&self) -> Data<'_, A> {
        Data::new_unchecked(&self.x, &self.y)
    }

    /// Returns the Pearson correlation coefficient
    pub fn coefficient(&self) -> A {
        pearson(&self.data())
    }
}

#[cfg(test)]
macro_rules! test {
    ($ty:ident) => {
        mod $ty {
            use approx::relative_eq;
            use quickcheck::quickcheck;
            use quickcheck::TestResult;

            use crate::bivariate::correlation::pearson;
            use crate::bivariate::regression::StraightLine;
            use crate::bivariate::Data;
            use crate::series::Series;

            quickcheck! {
                fn bounded(size: u8, start: u8, offset: u8) -> TestResult {
                    let size = size as usize;
                    let start = start as usize;
                    let offset = offset as usize;
                    if let Some(x) = crate::test::vec::<$ty>(size, start) {
                        let y = crate::test::vec::<$ty>(size + offset, start + offset).unwrap();
                        let x = Series::new(x[start..].to_vec()).unwrap();
                        let y = Series::new(y[start + offset..].to_vec()).unwrap();
                        let r = pearson(&Data::new(&x, &y).unwrap());

                        TestResult::from_bool(
                            (r > -1. || relative_eq!(r, -1., epsilon = 1e-4)) &&
                                (r < 1. || relative_eq!(r, 1., epsilon = 1e-4))
                        )
                    } else {
                        TestResult::discard()
                    }
                }
            }

            // For a least squares line the coefficient of determination is the squared
            // correlation
            quickcheck! {
                fn squares_to_r_squared(size: u8, start: u8, offset: u8) -> TestResult {
                    let size = size as usize;
                    let start = start as usize;
                    let offset = offset as usize;
                    if let Some(x) = crate::test::vec::<$ty>(size, start) {
                        let y = crate::test::vec::<$ty>(size + offset, start + offset).unwrap();
                        let x = Series::new(x[start..].to_vec()).unwrap();
                        let y = Series::new(y[start + offset..].to_vec()).unwrap();
                        let data = Data::new(&x, &y).unwrap();

                        let r = pearson(&data);
                        let r_squared = StraightLine::fit(&data).r_squared(&data);

                        TestResult::from_bool(relative_eq!(r * r, r_squared, epsilon = 1e-3))
                    } else {
                        TestResult::discard()
                    }
                }
            }
        }
    };
}
