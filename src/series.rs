//! Validated numeric series

use std::convert::TryFrom;
use std::ops::Deref;

use log::debug;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::float::Float;

/// An ordered sequence of real numbers, validated once and never mutated afterwards
///
/// Invariants:
///
/// - The series contains at least 2 data points
/// - Every data point is finite (no `NaN`s, no infinities)
#[derive(Clone, Debug, PartialEq)]
pub struct Series<A>(Box<[A]>);

impl<A> Series<A>
where
    A: Float,
{
    /// Creates a new series from already numeric values
    pub fn new(values: Vec<A>) -> Result<Series<A>> {
        if values.len() < 2 {
            return Err(Error::InsufficientPoints { len: values.len() });
        }

        if let Some(index) = values.iter().position(|x| !x.is_finite()) {
            return Err(Error::NonNumericValue {
                index,
                value: values[index].to_string(),
            });
        }

        Ok(Series(values.into_boxed_slice()))
    }

    /// Creates a new series from a raw JSON value, coercing each element to a number
    ///
    /// Numbers are taken as-is and strings are parsed as decimal numbers; anything else is
    /// rejected.
    pub fn from_value(value: &Value) -> Result<Series<A>> {
        as_sequence(value)
            .and_then(coerce)
            .map_err(|e| {
                debug!("Rejected dataset: {}", e);
                e
            })
    }

    /// Parses `text` as JSON and coerces it like `from_value`
    pub fn from_json(text: &str) -> Result<Series<A>> {
        let value: Value = serde_json::from_str(text)?;

        Series::from_value(&value)
    }

    /// Returns the generated time axis `1, 2, ..., n`
    ///
    /// # Panics
    ///
    /// Panics if `n` is less than two
    pub fn time_index(n: usize) -> Series<A> {
        assert!(n > 1);

        Series((1..=n).map(|i| A::cast(i)).collect())
    }

    /// Returns the arithmetic average of the series
    ///
    /// - Time: `O(length)`
    pub fn mean(&self) -> A {
        self.sum() / A::cast(self.len())
    }

    /// Returns the sum of all the elements of the series
    ///
    /// - Time: `O(length)`
    pub fn sum(&self) -> A {
        crate::sum(self)
    }

    /// Returns the underlying values
    pub fn into_vec(self) -> Vec<A> {
        self.0.into_vec()
    }
}

impl<A> Deref for Series<A> {
    type Target = [A];

    fn deref(&self) -> &[A] {
        &self.0
    }
}

impl<A> TryFrom<Vec<A>> for Series<A>
where
    A: Float,
{
    type Error = Error;

    fn try_from(values: Vec<A>) -> Result<Series<A>> {
        Series::new(values)
    }
}

/// Validates a pair of raw datasets in one go
///
/// Both must be present and be sequences of the same length before any element is coerced.
pub(crate) fn paired_from_values<A>(x: &Value, y: &Value) -> Result<(Series<A>, Series<A>)>
where
    A: Float,
{
    let pair = || {
        if x.is_null() || y.is_null() {
            return Err(Error::MissingInput);
        }

        let (xs, ys) = (as_sequence(x)?, as_sequence(y)?);
        if xs.len() != ys.len() {
            return Err(Error::LengthMismatch {
                x: xs.len(),
                y: ys.len(),
            });
        }

        Ok((coerce(xs)?, coerce(ys)?))
    };

    pair().map_err(|e| {
        debug!("Rejected paired datasets: {}", e);
        e
    })
}

/// Validates a pair of numeric vectors, lengths first
pub(crate) fn paired_from_vecs<A>(x: Vec<A>, y: Vec<A>) -> Result<(Series<A>, Series<A>)>
where
    A: Float,
{
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }

    Ok((Series::new(x)?, Series::new(y)?))
}

fn as_sequence(value: &Value) -> Result<&[Value]> {
    match value {
        Value::Null => Err(Error::MissingInput),
        Value::Array(values) => Ok(values),
        _ => Err(Error::NotASequence),
    }
}

fn coerce<A>(values: &[Value]) -> Result<Series<A>>
where
    A: Float,
{
    if values.len() < 2 {
        return Err(Error::InsufficientPoints { len: values.len() });
    }

    let numbers = values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            to_number(value).ok_or_else(|| Error::NonNumericValue {
                index,
                value: value.to_string(),
            })
        })
        .collect::<Result<Vec<A>>>()?;

    Ok(Series(numbers.into_boxed_slice()))
}

fn to_number<A>(value: &Value) -> Option<A>
where
    A: Float,
{
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    number
        .filter(|x| x.is_finite())
        .and_then(num_traits::cast::<f64, A>)
        .filter(|x| x.is_finite())
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::{paired_from_values, Series};
    use crate::error::Error;

    #[test]
    fn coerces_numbers_and_numeric_strings() {
        let series = Series::<f64>::from_value(&json!([1, "2.5", " 3 ", -4e2])).unwrap();

        assert_eq!(&*series, &[1., 2.5, 3., -400.]);
    }

    #[test]
    fn missing_dataset() {
        match Series::<f64>::from_value(&json!(null)) {
            Err(Error::MissingInput) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn not_a_sequence() {
        for value in &[json!(3), json!("1,2,3"), json!({ "a": 1, "b": 2 }), json!(true)] {
            match Series::<f64>::from_value(value) {
                Err(Error::NotASequence) => {}
                other => panic!("unexpected {:?} for {}", other, value),
            }
        }
    }

    #[test]
    fn insufficient_points() {
        for (value, expected) in &[(json!([]), 0), (json!([7]), 1)] {
            match Series::<f64>::from_value(value) {
                Err(Error::InsufficientPoints { len }) => assert_eq!(len, *expected),
                other => panic!("unexpected {:?}", other),
            }
        }

        match Series::<f64>::new(vec![1.]) {
            Err(Error::InsufficientPoints { len: 1 }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn non_numeric_values() {
        let cases = vec![
            (json!([1, "abc"]), 1),
            (json!([null, 2]), 0),
            (json!([1, 2, { "x": 1 }]), 2),
            (json!([1, 2, [3]]), 2),
            (json!(["NaN", 2]), 0),
            (json!([1, "inf"]), 1),
            (json!([1, ""]), 1),
            (json!([false, 1]), 0),
        ];

        for (value, expected) in cases {
            match Series::<f64>::from_value(&value) {
                Err(Error::NonNumericValue { index, .. }) => assert_eq!(index, expected),
                other => panic!("unexpected {:?} for {}", other, value),
            }
        }
    }

    #[test]
    fn rejects_non_finite_typed_values() {
        match Series::new(vec![1., ::std::f64::NAN, 3.]) {
            Err(Error::NonNumericValue { index: 1, .. }) => {}
            other => panic!("unexpected {:?}", other),
        }

        match Series::new(vec![::std::f32::INFINITY, 1.]) {
            Err(Error::NonNumericValue { index: 0, .. }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn out_of_range_for_f32() {
        match Series::<f32>::from_value(&json!([1, 1e300])) {
            Err(Error::NonNumericValue { index: 1, .. }) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn parses_json_text() {
        let series = Series::<f32>::from_json("[3, \"4\", 5.5]").unwrap();
        assert_eq!(series.into_vec(), vec![3., 4., 5.5]);

        match Series::<f64>::from_json("[1, 2") {
            Err(Error::Json(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn input_is_left_untouched() {
        let raw = json!(["1", "2", "3"]);
        let _ = Series::<f64>::from_value(&raw).unwrap();

        assert_eq!(raw, json!(["1", "2", "3"]));
    }

    #[test]
    fn time_index_counts_from_one() {
        let x = Series::<f64>::time_index(5);

        assert_eq!(&*x, &[1., 2., 3., 4., 5.]);
        assert_eq!(x.sum(), 15.);
        assert_eq!(x.mean(), 3.);
    }

    #[test]
    #[should_panic]
    fn time_index_needs_two_points() {
        let _ = Series::<f64>::time_index(1);
    }

    #[test]
    fn paired_validation_order() {
        match paired_from_values::<f64>(&json!([1, 2]), &json!(null)) {
            Err(Error::MissingInput) => {}
            other => panic!("unexpected {:?}", other),
        }

        match paired_from_values::<f64>(&json!([1, 2]), &json!("12")) {
            Err(Error::NotASequence) => {}
            other => panic!("unexpected {:?}", other),
        }

        match paired_from_values::<f64>(&json!([1]), &json!([1, 2])) {
            Err(Error::LengthMismatch { x: 1, y: 2 }) => {}
            other => panic!("unexpected {:?}", other),
        }

        match paired_from_values::<f64>(&json!([1]), &json!([2])) {
            Err(Error::InsufficientPoints { len: 1 }) => {}
            other => panic!("unexpected {:?}", other),
        }

        match paired_from_values::<f64>(&json!([1, "x"]), &json!([2, "y"])) {
            Err(Error::NonNumericValue { index: 1, value }) => assert_eq!(value, "\"x\""),
            other => panic!("unexpected {:?}", other),
        }

        let (x, y) = paired_from_values::<f64>(&json!([1, 2]), &json!(["3", 4])).unwrap();
        assert_eq!((&*x, &*y), (&[1., 2.][..], &[3., 4.][..]));
    }
}
