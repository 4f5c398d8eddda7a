//! Bivariate analysis

pub mod correlation;
pub mod regression;

use crate::error::{Error, Result};
use crate::float::Float;
use crate::series::Series;

/// Bivariate `(X, Y)` data
///
/// Invariants:
///
/// - No `NaN`s or infinities in the data
/// - At least two data points in the set
/// - `X` and `Y` have the same length, `x[i]` pairs with `y[i]`
pub struct Data<'a, A>(&'a [A], &'a [A]);

impl<'a, A> Copy for Data<'a, A> {}

#[allow(clippy::expl_impl_clone_on_copy)]
impl<'a, A> Clone for Data<'a, A> {
    fn clone(&self) -> Data<'a, A> {
        *self
    }
}

impl<'a, A> Data<'a, A> {
    /// Returns the length of the data set
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks whether the data set is empty (never true for validated data)
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the data set
    pub fn iter(&self) -> Pairs<'a, A> {
        Pairs {
            data: *self,
            state: 0,
        }
    }
}

impl<'a, A> Data<'a, A>
where
    A: Float,
{
    /// Pairs up two validated series
    pub fn new(xs: &'a Series<A>, ys: &'a Series<A>) -> Result<Data<'a, A>> {
        if xs.len() != ys.len() {
            return Err(Error::LengthMismatch {
                x: xs.len(),
                y: ys.len(),
            });
        }

        Ok(Data(xs, ys))
    }

    /// Pairs two slices already known to have the same length
    pub(crate) fn new_unchecked(xs: &'a [A], ys: &'a [A]) -> Data<'a, A> {
        debug_assert_eq!(xs.len(), ys.len());

        Data(xs, ys)
    }

    /// Returns a view into the `X` data
    pub fn x(&self) -> &'a [A] {
        self.0
    }

    /// Returns a view into the `Y` data
    pub fn y(&self) -> &'a [A] {
        self.1
    }
}

/// Iterator over `Data`
pub struct Pairs<'a, A> {
    data: Data<'a, A>,
    state: usize,
}

impl<'a, A> Iterator for Pairs<'a, A>
where
    A: Copy,
{
    type Item = (A, A);

    fn next(&mut self) -> Option<(A, A)> {
        let i = self.state;
        let pair = (*self.data.0.get(i)?, *self.data.1.get(i)?);
        self.state += 1;

        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len() - self.state;

        (remaining, Some(remaining))
    }
}

impl<'a, A> ExactSizeIterator for Pairs<'a, A> where A: Copy {}
