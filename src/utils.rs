/// Rounds the exact decimal value of `value` to `decimals` places.
///
/// Goes through the float formatter, which works on the exact binary value,
/// so `3257.965` (stored slightly above) becomes `3257.97`.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::round_to;

    #[test]
    fn rounds_to_the_requested_places() {
        assert_eq!(round_to(1111.9492, 2), 1111.95);
        assert_eq!(round_to(4.44780, 1), 4.4);
        assert_eq!(round_to(0.004, 1), 0.0);
        assert_eq!(round_to(0.0, 2), 0.0);
    }

    #[test]
    fn rounds_the_stored_value_not_the_scaled_one() {
        // 3257.965 is stored as 3257.96500000000014..., scaling by 100 lands on a tie
        assert_eq!(round_to(3257.965, 2), 3257.97);
        // 2.675 is stored as 2.67499999999999982...
        assert_eq!(round_to(2.675, 2), 2.67);
    }
}
