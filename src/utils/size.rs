use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;

// RAM-style sizes: binary multiples, unit letters case-insensitive, optional
// `i` and `b` suffixes ("1k", "1KB", "1KiB" are all 1024 bytes).
static SIZE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)*) ?([kKmMgGtTpP])?[iI]?[bB]?$").expect("size regex is valid")
});

fn multiplier(prefix: &str) -> i64 {
    match prefix.to_ascii_lowercase().as_str() {
        "k" => 1 << 10,
        "m" => 1 << 20,
        "g" => 1 << 30,
        "t" => 1 << 40,
        "p" => 1 << 50,
        _ => 1,
    }
}

fn ram_in_bytes(size: &str) -> Result<i64, ParseError> {
    let invalid = || ParseError::Size {
        input: size.to_string(),
    };
    let caps = SIZE_RE.captures(size).ok_or_else(invalid)?;
    let magnitude: f64 = caps[1].parse().map_err(|_| invalid())?;
    let unit = caps.get(2).map_or(1, |m| multiplier(m.as_str()));
    // Fractions truncate toward zero; out-of-range values saturate.
    Ok((magnitude * unit as f64) as i64)
}

/// Returns the byte count of a human readable size, e.g. `100KB` -> 102400.
///
/// An empty string is zero. Leading `-` signs are stripped before parsing and
/// the result is negated, so `-1GB` is `-1073741824`.
pub fn parse_ram_in_human(ram: &str) -> Result<i64, ParseError> {
    if ram.is_empty() {
        return Ok(0);
    }
    let magnitude = ram.trim_start_matches('-');
    let sign = if magnitude.len() == ram.len() { 1 } else { -1 };
    Ok(ram_in_bytes(magnitude)? * sign)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_are_binary_and_case_insensitive() {
        assert_eq!(parse_ram_in_human("1k").unwrap(), 1024);
        assert_eq!(parse_ram_in_human("1KiB").unwrap(), 1024);
        assert_eq!(parse_ram_in_human("2 mb").unwrap(), 2 * 1024 * 1024);
        assert_eq!(parse_ram_in_human("1g").unwrap(), 1 << 30);
        assert_eq!(parse_ram_in_human("1T").unwrap(), 1 << 40);
        assert_eq!(parse_ram_in_human("1PB").unwrap(), 1 << 50);
    }

    #[test]
    fn plain_numbers_are_bytes() {
        assert_eq!(parse_ram_in_human("100").unwrap(), 100);
        assert_eq!(parse_ram_in_human("100b").unwrap(), 100);
    }

    #[test]
    fn fractions_truncate() {
        assert_eq!(parse_ram_in_human("1.5MB").unwrap(), 1_572_864);
        assert_eq!(parse_ram_in_human("0.5b").unwrap(), 0);
    }

    #[test]
    fn repeated_minus_is_a_single_negation() {
        assert_eq!(parse_ram_in_human("--2k").unwrap(), -2048);
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["-", "1.2.3MB", "1XB", "KB", " 1KB", "1KB "] {
            assert!(
                matches!(parse_ram_in_human(bad), Err(ParseError::Size { .. })),
                "{bad} should be rejected"
            );
        }
    }
}
