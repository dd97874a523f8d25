//! Decimal rendering: digit-by-digit extraction with carry repair,
//! fixed-point and scientific layouts, and a drift re-check for the
//! fixed-point path.

use core::fmt;

use super::ddouble::DDouble;
use super::error::Error;

/// Rendering options for [`DDouble::format_with`].
///
/// `precision` counts fractional digits in fixed-point mode and digits
/// after the leading one in scientific mode. `fill_zero` pads to the
/// requested precision instead of trimming trailing zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    pub precision: usize,
    pub fill_zero: bool,
    pub fixed_point: bool,
    pub show_positive: bool,
    pub uppercase: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            precision: 5,
            fill_zero: true,
            fixed_point: false,
            show_positive: false,
            uppercase: false,
        }
    }
}

#[inline]
fn digit_char(d: i32) -> char {
    char::from(b'0' + d as u8)
}

/// Rounds a digit string in place at `precision - 1` digits, carrying
/// leftward. A carry out of the leading digit shifts the string right
/// and reports it through `offset`; the decimal exponent is the
/// caller's to adjust.
fn round_string(s: &mut Vec<i32>, precision: usize, offset: &mut i32) {
    if s.len() < precision + 2 {
        s.resize(precision + 2, 0);
    }
    let d = precision;

    if s[d - 1] >= 5 {
        s[d - 2] += 1;

        let mut i = d - 2;
        while i > 0 && s[i] > 9 {
            s[i] -= 10;
            i -= 1;
            s[i] += 1;
        }
    }

    // First digit carried into 10: shift everything right by one.
    if s[0] > 9 {
        for i in (2..=precision).rev() {
            s[i] = s[i - 1];
        }
        s[0] = 1;
        s[1] = 0;
        *offset += 1;
    }
}

fn append_expn(s: &mut String, expn: i32) {
    s.push(if expn < 0 { '-' } else { '+' });
    let mut expn = expn.abs();

    if expn >= 100 {
        let k = expn / 100;
        s.push(digit_char(k));
        expn -= 100 * k;
    }
    let k = expn / 10;
    s.push(digit_char(k));
    expn -= 10 * k;
    s.push(digit_char(expn));
}

impl DDouble {
    /// Extracts `precision` decimal digits of `|self|` together with the
    /// decimal exponent, computing one extra digit to round on.
    fn to_digits(self, precision: usize) -> Result<(Vec<i32>, i32), Error> {
        let d = precision + 1;

        if self.hi == 0.0 {
            return Ok((vec![0; precision], 0));
        }

        let mut r = self.abs();
        let mut e = self.hi.abs().log10().floor() as i32;

        // Scale into [1, 10). Exponents beyond +-300 are peeled in two
        // steps so the power-of-ten factor itself cannot overflow.
        if e < -300 {
            r = r * DDouble::from(10.0).npwr(300);
            r = r / DDouble::from(10.0).npwr(e + 300);
        } else if e > 300 {
            r = r.ldexp(-53);
            r = r / DDouble::from(10.0).npwr(e);
            r = r.ldexp(53);
        } else {
            r = r / DDouble::from(10.0).npwr(e);
        }

        // The native log10 estimate may be off by one.
        if r >= 10.0 {
            r = r / 10.0;
            e += 1;
        } else if r < 1.0 {
            r = r * 10.0;
            e -= 1;
        }
        if r >= 10.0 || r < 1.0 {
            return Err(Error::CannotComputeExponent);
        }

        let mut s = vec![0i32; d + 1];
        for digit in s.iter_mut().take(d) {
            let x = r.hi as i32;
            r = r - x as f64;
            r = r * 10.0;
            *digit = x;
        }

        // Floating drift can leave a digit at -1 or 10; borrow/carry
        // into the neighbor.
        for i in (1..d).rev() {
            if s[i] < 0 {
                s[i - 1] -= 1;
                s[i] += 10;
            } else if s[i] > 9 {
                s[i - 1] += 1;
                s[i] -= 10;
            }
        }
        if s[0] <= 0 {
            return Err(Error::NonPositiveLeadingDigit);
        }

        // Round on the extra digit, carrying leftward.
        if s[d - 1] >= 5 {
            s[d - 2] += 1;

            let mut i = d - 2;
            while i > 0 && s[i] > 9 {
                s[i] -= 10;
                i -= 1;
                s[i] += 1;
            }
        }

        // Rounded up to "10...": shift right and bump the exponent.
        if s[0] > 9 {
            e += 1;
            for i in (2..=precision).rev() {
                s[i] = s[i - 1];
            }
            s[0] = 1;
            s[1] = 0;
        }

        s.truncate(precision);
        Ok((s, e))
    }

    /// Renders to a decimal string under the given options.
    ///
    /// Fixed-point output re-checks itself: the produced string is
    /// reparsed as a native double and its ratio to the high limb must
    /// stay below 3, else the decimal point is shifted once and checked
    /// again; a second failure is [`Error::Rerounding`].
    pub fn format_with(self, opts: FormatOptions) -> Result<String, Error> {
        let FormatOptions {
            precision,
            fill_zero,
            fixed_point,
            show_positive,
            uppercase,
        } = opts;

        if self.is_nan() {
            return Ok(String::from(if uppercase { "NAN" } else { "nan" }));
        }

        let mut s = String::new();
        let mut e = 0i32;

        if self.is_negative() {
            s.push('-');
        } else if show_positive {
            s.push('+');
        }

        if self.is_infinite() {
            s.push_str(if uppercase { "INF" } else { "inf" });
            return Ok(s);
        }

        if self.is_zero() {
            s.push('0');
            if fill_zero && precision > 0 {
                s.push('.');
                for _ in 0..precision {
                    s.push('0');
                }
            }
        } else {
            let abs = self.abs();
            let mut off = if fixed_point {
                1 + abs.log10()?.floor().to_f64() as i32
            } else {
                1
            };
            let d = precision as i32 + off;
            let d_with_extra = if fixed_point {
                // Fixed-point needs digits past the requested precision
                // to round correctly.
                d.max(60) as usize
            } else {
                d as usize
            };

            // Fixed at precision zero below one: plain nearest integer.
            // Without this a value like 0.9 would print as "0".
            if fixed_point && precision == 0 && abs < 1.0 {
                s.push(if abs >= 0.5 { '1' } else { '0' });
                return Ok(s);
            }

            if fixed_point && d <= 0 {
                // Magnitude under the requested precision: all zeros.
                s.push('0');
                if precision > 0 {
                    s.push('.');
                    for _ in 0..precision {
                        s.push('0');
                    }
                }
            } else if fixed_point {
                let (mut t, expn) = self.to_digits(d_with_extra)?;
                e = expn;
                round_string(&mut t, (d + 1) as usize, &mut off);

                if off > 0 {
                    let off = off as usize;
                    for &dig in t.iter().take(off) {
                        s.push(digit_char(dig));
                    }
                    if precision > 0 {
                        s.push('.');
                        for &dig in t.iter().skip(off).take(precision) {
                            s.push(digit_char(dig));
                        }
                    }
                } else {
                    s.push_str("0.");
                    for _ in 0..-off {
                        s.push('0');
                    }
                    for &dig in t.iter().take(d as usize) {
                        s.push(digit_char(dig));
                    }
                }
            } else {
                let dsize = d as usize;
                let (t, expn) = self.to_digits(dsize)?;
                e = expn;

                s.push(digit_char(t[0]));
                if precision > 0 {
                    s.push('.');
                }
                for &dig in t.iter().skip(1).take(precision.min(dsize)) {
                    s.push(digit_char(dig));
                }
            }
        }

        // Values near 10^k - 1 can come out a factor of ten large when
        // the leading-digit estimate and the rounded digit string
        // disagree; reparse and repair by moving the point once.
        if fixed_point && precision > 0 {
            let from_string: f64 = s.parse().unwrap_or(f64::NAN);
            if (from_string / self.hi).abs() > 3.0 {
                let mut chars: Vec<char> = s.chars().collect();
                if let Some(i) = chars.iter().skip(1).position(|&c| c == '.') {
                    let i = i + 1;
                    chars.swap(i, i - 1);
                    s = chars.into_iter().collect();
                }

                let from_string: f64 = s.parse().unwrap_or(f64::NAN);
                if (from_string / self.hi).abs() > 3.0 {
                    return Err(Error::Rerounding);
                }
            }
        }

        if !fill_zero {
            let len = s.trim_end_matches('0').trim_end_matches('.').len();
            s.truncate(len);
        }

        if !fixed_point {
            s.push(if uppercase { 'E' } else { 'e' });
            append_expn(&mut s, e);
        }

        Ok(s)
    }
}

impl fmt::Display for DDouble {
    /// Scientific notation with five fractional digits; `{:.N}` selects
    /// N digits and `{:+}` forces a sign.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opts = FormatOptions {
            precision: f.precision().unwrap_or(5),
            show_positive: f.sign_plus(),
            ..FormatOptions::default()
        };
        match self.format_with(opts) {
            Ok(s) => f.write_str(&s),
            Err(_) => Err(fmt::Error),
        }
    }
}
