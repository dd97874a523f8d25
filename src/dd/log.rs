//! Logarithms and the general power function.

use super::ddouble::DDouble;
use super::error::Error;

impl DDouble {
    /// Natural logarithm.
    ///
    /// The Taylor series for log converges far too slowly, so the root
    /// of f(x) = exp(x) - a is located instead: seed x with the native
    /// logarithm of the high limb and apply one Newton step,
    /// x' = x + a exp(-x) - 1. exp's quadratic convergence doubles the
    /// correct digits, which takes the 53-bit seed past 106 bits.
    pub fn ln(self) -> Result<Self, Error> {
        if self.is_one() {
            return Ok(Self::ZERO);
        }
        if self.hi <= 0.0 {
            return Err(Error::NonPositiveLog);
        }

        let x = Self::from(self.hi.ln());
        Ok(x + self * (-x).exp() - 1.0)
    }

    /// Base-10 logarithm.
    pub fn log10(self) -> Result<Self, Error> {
        Ok(self.ln()? / Self::LN_10)
    }

    /// `self` raised to an arbitrary double-double exponent,
    /// exp(b ln a). The base must be positive.
    pub fn pow(self, b: Self) -> Result<Self, Error> {
        Ok((b * self.ln()?).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ln_rejects_non_positive_arguments() {
        assert_eq!(DDouble::ZERO.ln(), Err(Error::NonPositiveLog));
        assert_eq!(DDouble::from(-1.0).ln(), Err(Error::NonPositiveLog));
        assert_eq!(DDouble::from(-1e300).log10(), Err(Error::NonPositiveLog));
    }

    #[test]
    fn ln_of_one_is_zero() {
        assert_eq!(DDouble::ONE.ln().unwrap(), DDouble::ZERO);
    }

    #[test]
    fn ln_of_e_is_one() {
        let l = DDouble::E.ln().unwrap();
        let err = (l - 1.0).abs();
        assert!(err.hi < 32.0 * DDouble::EPSILON, "ln(e) = {} + {}", l.hi, l.lo);
    }

    #[test]
    fn ln_of_two_matches_the_constant() {
        let l = DDouble::from(2.0).ln().unwrap();
        let err = (l - DDouble::LN_2).abs();
        assert!(err.hi < 32.0 * DDouble::EPSILON);
    }

    #[test]
    fn log10_of_powers_of_ten_is_integral() {
        for e in [1, 2, 5, 10, 20] {
            let x = DDouble::from(10.0).powi(e).unwrap();
            let l = x.log10().unwrap();
            let err = (l - e as f64).abs();
            assert!(
                err.hi < 1e2 * DDouble::EPSILON * e as f64,
                "log10(10^{e}) = {} + {}",
                l.hi,
                l.lo
            );
        }
    }

    #[test]
    fn pow_agrees_with_integer_powers() {
        let a = DDouble::from(3.0);
        let p = a.pow(DDouble::from(4.0)).unwrap();
        let err = (p - 81.0).abs();
        assert!(err.hi < 81.0 * 32.0 * DDouble::EPSILON, "3^4 = {} + {}", p.hi, p.lo);
    }

    #[test]
    fn pow_of_half_is_a_square_root() {
        let two = DDouble::from(2.0);
        let r = two.pow(DDouble::from(0.5)).unwrap();
        let sq = r.sqr();
        let err = (sq - 2.0).abs();
        assert!(err.hi < 32.0 * DDouble::EPSILON, "sqrt(2)^2 = {} + {}", sq.hi, sq.lo);
    }

    #[test]
    fn pow_rejects_non_positive_bases() {
        assert_eq!(
            DDouble::from(-2.0).pow(DDouble::from(0.5)),
            Err(Error::NonPositiveLog)
        );
    }
}
