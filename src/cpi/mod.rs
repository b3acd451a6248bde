//! Price index derivation and period statistics.
//!
//! Both stages are pure functions over rows already fetched from the store:
//! [`derive_cpi`] normalizes average prices against a base year (base = 100),
//! and [`aggregate`] summarizes the resulting series over a period.

mod deriver;
mod statistics;

pub use deriver::derive_cpi;
pub use statistics::aggregate;

/// Round to two decimal places, half away from zero.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_rounds_half_away_from_zero() {
        assert_eq!(round2(1.005_000_1), 1.01);
        assert_eq!(round2(2.344), 2.34);
        assert_eq!(round2(-2.345_000_1), -2.35);
        assert_eq!(round2(0.125), 0.13);
    }

    #[test]
    fn round2_is_idempotent() {
        for x in [0.0, 1.0, 12.34, 100.0, 2050.0, 987.65, 0.01, 3.3] {
            let once = round2(x * 1.2345);
            assert_eq!(round2(once), once);
        }
    }
}
