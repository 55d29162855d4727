//! Coordinate formatting for the plain-text exporters.

/// Format a coordinate the way C's `%g` does: six significant digits,
/// scientific notation outside the `1e-4..1e6` magnitude range, trailing
/// zeros trimmed.
///
/// Rust's default `Display` for `f64` prints the shortest round-tripping
/// decimal, which expands extreme magnitudes into hundreds of digits; the
/// text formats (SVG path data, gnuplot lines) want the conventional short
/// form instead.
pub fn compact(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // {:e} carries the exact decimal exponent, unlike log10 at its edges.
    let sci = format!("{:e}", value);
    let exponent = match sci.split_once('e') {
        Some((_, e)) => e.parse::<i32>().unwrap_or(0),
        None => 0,
    };

    if exponent < -4 || exponent >= 6 {
        let sci = format!("{:.5e}", value);
        match sci.split_once('e') {
            Some((mantissa, e)) => {
                let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
                format!("{}e{}", mantissa, e)
            }
            None => sci,
        }
    } else {
        let decimals = (5 - exponent).max(0) as usize;
        let fixed = format!("{:.*}", decimals, value);
        if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            fixed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typical_values_print_plainly() {
        assert_eq!(compact(0.0), "0");
        assert_eq!(compact(2.0), "2");
        assert_eq!(compact(100.0), "100");
        assert_eq!(compact(0.25), "0.25");
        assert_eq!(compact(-1.5), "-1.5");
    }

    #[test]
    fn extreme_magnitudes_use_scientific_notation() {
        assert_eq!(compact(1e300), "1e300");
        assert_eq!(compact(-2.5e-11), "-2.5e-11");
        assert_eq!(compact(1e-5), "1e-5");
    }

    #[test]
    fn six_significant_digits_near_the_switchover() {
        assert_eq!(compact(0.0001), "0.0001");
        assert_eq!(compact(123456.0), "123456");
        assert_eq!(compact(1234567.0), "1.23457e6");
        assert_eq!(compact(0.123456789), "0.123457");
    }
}
