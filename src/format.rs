use crate::float::{self, Float};

/// Formats `x` with a fixed number of decimals, rounding halves away from zero
///
/// An exact zero prints without its sign and infinities print as `Infinity`/`-Infinity`.
pub fn fixed<A: Float>(x: A, decimals: usize) -> String {
    let x = float::widen(x);

    if x == 0. {
        return format!("{:.*}", decimals, 0.);
    }
    if x.is_infinite() {
        return if x > 0. { "Infinity" } else { "-Infinity" }.to_owned();
    }

    // NB an exact tie has exactly `decimals + 1` fractional bits, and `{:.*}` rounds ties to
    // even. Scaling by a power of two is exact, so the tie test is too.
    let scale = 2_f64.powi(decimals as i32);
    let x = if (x * scale).fract() != 0. && (x * scale * 2.).fract() == 0. {
        // one ulp further from zero
        f64::from_bits(x.to_bits() + 1)
    } else {
        x
    };

    format!("{:.*}", decimals, x)
}

/// `f(x) = <slope>x + <intercept>`, both coefficients to three decimals
pub fn equation<A: Float>(slope: A, intercept: A) -> String {
    format!("f(x) = {}x + {}", fixed(slope, 3), fixed(intercept, 3))
}

#[cfg(test)]
mod test {
    use super::{equation, fixed};

    #[test]
    fn rounds_instead_of_truncating() {
        assert_eq!(fixed(2.0006_f64, 3), "2.001");
        assert_eq!(fixed(-2.333333_f64, 3), "-2.333");
        assert_eq!(fixed(1.5_f32, 3), "1.500");
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(fixed(0.0625_f64, 3), "0.063");
        assert_eq!(fixed(-0.0625_f64, 3), "-0.063");
        assert_eq!(fixed(1.0625_f64, 3), "1.063");
        assert_eq!(fixed(0.0625_f32, 3), "0.063");
        assert_eq!(fixed(2.5_f64, 0), "3");
        assert_eq!(fixed(0.125_f64, 2), "0.13");
        // not a tie once represented in binary
        assert_eq!(fixed(0.0615_f64, 3), "0.061");
    }

    #[test]
    fn zero_is_unsigned() {
        assert_eq!(fixed(-0.0_f64, 3), "0.000");
        assert_eq!(fixed(-0.0001_f64, 3), "-0.000");
    }

    #[test]
    fn equation_text() {
        assert_eq!(equation(1.5, -2.333333), "f(x) = 1.500x + -2.333");
        assert_eq!(equation(0., 5.), "f(x) = 0.000x + 5.000");
        assert_eq!(
            equation(::std::f64::NAN, ::std::f64::NAN),
            "f(x) = NaNx + NaN"
        );
        assert_eq!(
            equation(::std::f64::INFINITY, ::std::f64::NEG_INFINITY),
            "f(x) = Infinityx + -Infinity"
        );
    }
}
