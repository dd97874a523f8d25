//! Exponential in double-double precision.

use super::ddouble::DDouble;

// Reciprocal factorials 1/3! .. 1/17! as double-double pairs, consumed
// by the Taylor evaluation after the quadratic term is formed directly.
const INV_FACT: [(f64, f64); 15] = [
    (1.66666666666666657e-01, 9.25185853854297066e-18),
    (4.16666666666666644e-02, 2.31296463463574266e-18),
    (8.33333333333333322e-03, 1.15648231731787138e-19),
    (1.38888888888888894e-03, -5.30054395437357706e-20),
    (1.98412698412698413e-04, 1.72095582934207053e-22),
    (2.48015873015873016e-05, 2.15119478667758816e-23),
    (2.75573192239858925e-06, -1.85839327404647208e-22),
    (2.75573192239858883e-07, 2.37677146222502973e-23),
    (2.50521083854417202e-08, -1.44881407093591197e-24),
    (2.08767569878681002e-09, -1.20734505911325997e-25),
    (1.60590438368216133e-10, 1.25852945887520981e-26),
    (1.14707455977297245e-11, 2.06555127528307454e-28),
    (7.64716373181981641e-13, 7.03872877733453001e-30),
    (4.77947733238738525e-14, 4.39920548583408126e-31),
    (2.81145725434552060e-15, 1.65088427308614326e-31),
];

impl DDouble {
    /// e raised to `self`.
    ///
    /// The argument is reduced with exp(m ln 2 + 512 r) = 2^m (exp r)^512,
    /// so the Taylor series sees |r| <= ln(2)/1024 and converges within a
    /// handful of terms; the 512th power is reassembled by nine doubling
    /// steps of (1+s)^2 - 1 = 2s + s^2 before the 2^m rescale.
    pub fn exp(self) -> Self {
        const K: f64 = 512.0;
        const INV_K: f64 = 1.0 / K;

        if self.hi <= -709.0 {
            return Self::ZERO;
        }
        if self.hi >= 709.0 {
            return Self::INFINITY;
        }
        if self.is_zero() {
            return Self::ONE;
        }
        if self.is_one() {
            return Self::E;
        }

        let m = (self.hi / Self::LN_2.hi + 0.5).floor();
        let r = (self - Self::LN_2 * m).mul_pow2(INV_K);

        let mut p = r.sqr();
        let mut s = r + p.mul_pow2(0.5);
        p = p * r;
        let mut t = p * Self::new(INV_FACT[0].0, INV_FACT[0].1);
        let mut i = 0;
        loop {
            s = s + t;
            p = p * r;
            i += 1;
            t = p * Self::new(INV_FACT[i].0, INV_FACT[i].1);
            if t.hi.abs() <= INV_K * Self::EPSILON || i >= 5 {
                break;
            }
        }
        s = s + t;

        for _ in 0..9 {
            s = s.mul_pow2(2.0) + s.sqr();
        }
        s = s + 1.0;

        s.ldexp(m as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exp_guards_its_domain() {
        assert_eq!(DDouble::from(-710.0).exp(), DDouble::ZERO);
        assert_eq!(DDouble::from(-709.0).exp(), DDouble::ZERO);
        assert!(DDouble::from(710.0).exp().is_infinite());
        assert!(DDouble::from(709.0).exp().is_infinite());
        assert_eq!(DDouble::ZERO.exp(), DDouble::ONE);
        assert_eq!(DDouble::ONE.exp(), DDouble::E);
    }

    #[test]
    fn exp_matches_native_to_native_precision() {
        for &x in &[-20.0, -2.5, -1.0, -0.1, 0.5, 2.0, 10.0, 100.0, 700.0] {
            let got = DDouble::from(x).exp();
            let want = x.exp();
            let rel = ((got.hi - want) / want).abs();
            assert!(rel < 1e-15, "exp({x}): got {}, want {want}", got.hi);
        }
    }

    #[test]
    fn exp_of_ln2_is_two() {
        let e = DDouble::LN_2.exp();
        let err = (e - 2.0).abs();
        assert!(err.hi < 32.0 * DDouble::EPSILON, "exp(ln 2) = {} + {}", e.hi, e.lo);
    }

    #[test]
    fn exp_sum_rule_holds_to_dd_precision() {
        // exp(a+b) == exp(a)*exp(b) for values with exact dd sums
        let a = DDouble::from(0.75);
        let b = DDouble::from(1.5);
        let lhs = (a + b).exp();
        let rhs = a.exp() * b.exp();
        let rel = ((lhs - rhs) / rhs).abs();
        assert!(rel.hi < 64.0 * DDouble::EPSILON);
    }
}
