//! Fixed-point rendering of metric values.
//!
//! `{:.N}` rounds exact binary ties to even; metric cells round them away
//! from zero instead, and `-0.0` renders without a sign.

const MANTISSA_BITS: u32 = 52;
const EXPONENT_BIAS: i64 = 1075;

/// Render `value` with exactly `places` digits after the decimal point.
///
/// Ties on the exact binary value round away from zero. `-0.0` renders like
/// `0.0`; non-finite values render as `NaN`, `Infinity` or `-Infinity`.
pub(crate) fn to_fixed(value: f64, places: usize) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        let rendered = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return rendered.to_owned();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let digits = if is_exact_tie(magnitude, places) {
        // The expansion has exactly `places + 1` fractional digits, the last a 5.
        let mut exact = format!("{:.*}", places + 1, magnitude);
        exact.pop();
        if exact.ends_with('.') {
            exact.pop();
        }
        increment_last_digit(&exact)
    } else {
        format!("{:.*}", places, magnitude)
    };
    format!("{sign}{digits}")
}

/// Whether `magnitude * 10^places` lies exactly halfway between two integers.
///
/// Writing `magnitude = m * 2^e` with `m` odd, `2 * magnitude * 10^places`
/// equals `m * 5^places * 2^(e + 1 + places)`, which is an odd integer only
/// when `e == -(places + 1)`.
fn is_exact_tie(magnitude: f64, places: usize) -> bool {
    let bits = magnitude.to_bits();
    let biased = ((bits >> MANTISSA_BITS) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << MANTISSA_BITS) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, 1 - EXPONENT_BIAS)
    } else {
        (fraction | (1u64 << MANTISSA_BITS), biased - EXPONENT_BIAS)
    };
    if mantissa == 0 {
        return false;
    }
    let exponent = exponent + i64::from(mantissa.trailing_zeros());
    i64::try_from(places).map_or(false, |places| exponent == -(places + 1))
}

/// Add one unit in the last place to a non-negative decimal string.
fn increment_last_digit(decimal: &str) -> String {
    let mut bytes = decimal.as_bytes().to_vec();
    let mut carry = true;
    for byte in bytes.iter_mut().rev() {
        if !carry {
            break;
        }
        match *byte {
            b'.' => continue,
            b'9' => *byte = b'0',
            _ => {
                *byte += 1;
                carry = false;
            }
        }
    }
    let mut out = String::with_capacity(bytes.len() + 1);
    if carry {
        out.push('1');
    }
    out.extend(bytes.into_iter().map(char::from));
    out
}
