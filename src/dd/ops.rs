//! Arithmetic over double-double operands.
//!
//! The `+`, `-` and `/` operators use the sloppy tier (Cray-style error
//! bound, fewer operations); `add_accurate`, `sub_accurate` and
//! `div_accurate` are the IEEE-style alternates. Every result passes
//! through a final quick-two-sum renormalization.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::ddouble::DDouble;
use super::eft::{quick_two_sum, two_diff, two_prod, two_sqr, two_sum};
use super::error::Error;

impl DDouble {
    /// Exact double-double sum of two native doubles.
    #[inline]
    pub fn from_add(a: f64, b: f64) -> Self {
        let (s, e) = two_sum(a, b);
        Self::new(s, e)
    }

    /// Exact double-double difference of two native doubles.
    #[inline]
    pub fn from_sub(a: f64, b: f64) -> Self {
        let (s, e) = two_diff(a, b);
        Self::new(s, e)
    }

    /// Exact double-double product of two native doubles.
    #[inline]
    pub fn from_mul(a: f64, b: f64) -> Self {
        let (p, e) = two_prod(a, b);
        Self::new(p, e)
    }

    /// Double-double quotient of two native doubles, one refinement
    /// step over the native quotient.
    pub fn from_div(a: f64, b: f64) -> Self {
        let q1 = a / b;

        // a - q1 * b
        let (p1, p2) = two_prod(q1, b);
        let (s, e) = two_diff(a, p1);
        let e = e - p2;

        let q2 = (s + e) / b;

        let (s, e) = quick_two_sum(q1, q2);
        Self::new(s, e)
    }

    /// Exact double-double square of a native double.
    #[inline]
    pub fn from_sqr(a: f64) -> Self {
        let (p, e) = two_sqr(a);
        Self::new(p, e)
    }

    /// Sum meeting the IEEE-style error bound (Briggs/Kahan): both limb
    /// pairs go through `two_sum`, with two renormalization passes to
    /// propagate the carries.
    pub fn add_accurate(self, rhs: Self) -> Self {
        let (s1, s2) = two_sum(self.hi, rhs.hi);
        let (t1, t2) = two_sum(self.lo, rhs.lo);
        let s2 = s2 + t1;
        let (s1, s2) = quick_two_sum(s1, s2);
        let s2 = s2 + t2;
        let (s1, s2) = quick_two_sum(s1, s2);
        Self::new(s1, s2)
    }

    /// Difference meeting the IEEE-style error bound.
    #[inline]
    pub fn sub_accurate(self, rhs: Self) -> Self {
        self.add_accurate(-rhs)
    }

    /// Quotient refined by three residual-correction passes instead of
    /// the default one.
    pub fn div_accurate(self, rhs: Self) -> Self {
        let q1 = self.hi / rhs.hi;
        let mut r = self - rhs * q1;

        let q2 = r.hi / rhs.hi;
        r = r - rhs * q2;

        let q3 = r.hi / rhs.hi;

        let (q1, q2) = quick_two_sum(q1, q2);
        Self::new(q1, q2) + q3
    }

    /// Dedicated squaring: one `two_sqr` plus a doubled cross term,
    /// cheaper than general multiplication.
    pub fn sqr(self) -> Self {
        let (p1, mut p2) = two_sqr(self.hi);
        p2 += 2.0 * self.hi * self.lo;
        p2 += self.lo * self.lo;
        let (s1, s2) = quick_two_sum(p1, p2);
        Self::new(s1, s2)
    }

    /// Integer power by binary exponentiation. A negative exponent
    /// inverts the result; `0^0` is rejected, any other base to the
    /// zeroth power is one.
    pub fn powi(self, n: i32) -> Result<Self, Error> {
        if n == 0 {
            if self.is_zero() {
                return Err(Error::ZeroPowZero);
            }
            return Ok(Self::ONE);
        }
        Ok(self.npwr(n))
    }

    /// Binary exponentiation with no zero-base check; `n == 0` yields
    /// one unconditionally.
    pub(crate) fn npwr(self, n: i32) -> Self {
        if n == 0 {
            return Self::ONE;
        }
        let mut r = self;
        let mut s = Self::ONE;
        let mut k = n.unsigned_abs();

        if k > 1 {
            while k > 0 {
                if k % 2 == 1 {
                    s = s * r;
                }
                k /= 2;
                if k > 0 {
                    r = r.sqr();
                }
            }
        } else {
            s = r;
        }

        if n < 0 { 1.0 / s } else { s }
    }
}

fn sloppy_add(a: DDouble, b: DDouble) -> DDouble {
    let (s, e) = two_sum(a.hi, b.hi);
    let e = e + (a.lo + b.lo);
    let (s, e) = quick_two_sum(s, e);
    DDouble::new(s, e)
}

fn sloppy_div(a: DDouble, b: DDouble) -> DDouble {
    let q1 = a.hi / b.hi;

    // a - q1 * b
    let r = b * q1;
    let (s1, mut s2) = two_diff(a.hi, r.hi);
    s2 -= r.lo;
    s2 += a.lo;

    let q2 = (s1 + s2) / b.hi;

    let (hi, lo) = quick_two_sum(q1, q2);
    DDouble::new(hi, lo)
}

impl Neg for DDouble {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.hi, -self.lo)
    }
}

impl Add for DDouble {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        sloppy_add(self, rhs)
    }
}

impl Add<f64> for DDouble {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f64) -> Self {
        let (s1, mut s2) = two_sum(self.hi, rhs);
        s2 += self.lo;
        let (s1, s2) = quick_two_sum(s1, s2);
        Self::new(s1, s2)
    }
}

impl Add<DDouble> for f64 {
    type Output = DDouble;

    #[inline]
    fn add(self, rhs: DDouble) -> DDouble {
        rhs + self
    }
}

impl Sub for DDouble {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        let (s, mut e) = two_diff(self.hi, rhs.hi);
        e += self.lo;
        e -= rhs.lo;
        let (s, e) = quick_two_sum(s, e);
        Self::new(s, e)
    }
}

impl Sub<f64> for DDouble {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f64) -> Self {
        let (s1, mut s2) = two_diff(self.hi, rhs);
        s2 += self.lo;
        let (s1, s2) = quick_two_sum(s1, s2);
        Self::new(s1, s2)
    }
}

impl Sub<DDouble> for f64 {
    type Output = DDouble;

    #[inline]
    fn sub(self, rhs: DDouble) -> DDouble {
        let (s1, mut s2) = two_diff(self, rhs.hi);
        s2 -= rhs.lo;
        let (s1, s2) = quick_two_sum(s1, s2);
        DDouble::new(s1, s2)
    }
}

impl Mul for DDouble {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let (p1, mut p2) = two_prod(self.hi, rhs.hi);
        p2 += self.hi * rhs.lo + self.lo * rhs.hi;
        let (p1, p2) = quick_two_sum(p1, p2);
        Self::new(p1, p2)
    }
}

impl Mul<f64> for DDouble {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self {
        let (p1, mut p2) = two_prod(self.hi, rhs);
        p2 += self.lo * rhs;
        let (p1, p2) = quick_two_sum(p1, p2);
        Self::new(p1, p2)
    }
}

impl Mul<DDouble> for f64 {
    type Output = DDouble;

    #[inline]
    fn mul(self, rhs: DDouble) -> DDouble {
        rhs * self
    }
}

impl Div for DDouble {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        sloppy_div(self, rhs)
    }
}

impl Div<f64> for DDouble {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self {
        sloppy_div(self, rhs.into())
    }
}

impl Div<DDouble> for f64 {
    type Output = DDouble;

    #[inline]
    fn div(self, rhs: DDouble) -> DDouble {
        sloppy_div(self.into(), rhs)
    }
}

impl AddAssign for DDouble {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl AddAssign<f64> for DDouble {
    #[inline]
    fn add_assign(&mut self, rhs: f64) {
        *self = *self + rhs;
    }
}

impl SubAssign for DDouble {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl SubAssign<f64> for DDouble {
    #[inline]
    fn sub_assign(&mut self, rhs: f64) {
        *self = *self - rhs;
    }
}

impl MulAssign for DDouble {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl MulAssign<f64> for DDouble {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl DivAssign for DDouble {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl DivAssign<f64> for DDouble {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}
