//! Compact ISO-8601 duration codes as returned by video APIs (`PT1H2M3S`).

const PREFIX: &str = "PT";

/// Convert a duration code such as `PT1H2M3S` into whole seconds.
///
/// Scans left to right, buffering digits until a non-digit is seen. `H`, `M`
/// and `S` add the buffered value times 3600, 60 and 1. Every non-digit
/// clears the buffer, recognised unit or not, so unknown letters and trailing
/// garbage are ignored. Input without the `PT` prefix yields `0`.
#[must_use]
pub fn parse_duration(code: &str) -> u64 {
    let Some(body) = code.strip_prefix(PREFIX) else {
        return 0;
    };

    let mut total = 0u64;
    let mut digits = 0u64;
    for ch in body.chars() {
        if let Some(d) = ch.to_digit(10) {
            digits = digits.saturating_mul(10).saturating_add(u64::from(d));
            continue;
        }
        let weight = match ch {
            'H' => 3600,
            'M' => 60,
            'S' => 1,
            _ => 0,
        };
        total = total.saturating_add(digits.saturating_mul(weight));
        digits = 0;
    }
    total
}
