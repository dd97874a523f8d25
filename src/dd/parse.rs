//! Decimal literal parsing.

use core::str::FromStr;

use super::ddouble::DDouble;
use super::error::ParseDDoubleError;

impl FromStr for DDouble {
    type Err = ParseDDoubleError;

    /// Parses `[spaces][sign]digits[.digits][e|E exponent]`.
    ///
    /// The mantissa is accumulated digit by digit as a double-double
    /// (multiply by ten, add the digit), then scaled by the power of
    /// ten implied by the decimal point and the explicit exponent, so
    /// round-tripping a formatted value loses nothing beyond the
    /// format's own precision.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_start_matches(' ');

        let mut r = DDouble::ZERO;
        let mut sign = 0i32;
        let mut point: i32 = -1;
        let mut nd: i32 = 0;
        let mut e: i32 = 0;

        let mut iter = s.char_indices();
        while let Some((i, ch)) = iter.next() {
            match ch {
                '0'..='9' => {
                    let d = ch as u32 - '0' as u32;
                    r = r * 10.0;
                    r = r + d as f64;
                    nd += 1;
                }
                '.' => {
                    if point >= 0 {
                        return Err(ParseDDoubleError::DuplicatePoint);
                    }
                    point = nd;
                }
                '+' | '-' => {
                    if sign != 0 || nd > 0 || point >= 0 {
                        return Err(ParseDDoubleError::MisplacedSign);
                    }
                    sign = if ch == '-' { -1 } else { 1 };
                }
                'e' | 'E' => {
                    // The exponent must finish the literal.
                    e = s[i + 1..]
                        .parse()
                        .map_err(|_| ParseDDoubleError::InvalidExponent)?;
                    break;
                }
                _ => return Err(ParseDDoubleError::InvalidCharacter(ch)),
            }
        }

        if nd == 0 {
            return Err(ParseDDoubleError::NoDigits);
        }

        if point >= 0 {
            e -= nd - point;
        }
        if e != 0 {
            r = r * DDouble::from(10.0).npwr(e);
        }

        Ok(if sign == -1 { -r } else { r })
    }
}
