//! Utility functions shared by the analyzers

/// Round `value` to `places` decimals, ties to even.
///
/// Matches the rounding used by the reference frequency results, so that
/// e.g. `0.125` rounds to `0.12` and not `0.13`.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_two_places() {
        assert_eq!(round_to(100.0 / 11.0, 2), 9.09);
        assert_eq!(round_to(300.0 / 11.0, 2), 27.27);
        assert_eq!(round_to(40.0, 2), 40.0);
    }

    #[test]
    fn test_round_ties_to_even() {
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(2.5, 0), 2.0);
        assert_eq!(round_to(3.5, 0), 4.0);
    }
}
