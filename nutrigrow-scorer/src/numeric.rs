//! Small numeric helpers shared by the explainers.

/// Round to one decimal place, half away from zero.
#[expect(
    clippy::float_arithmetic,
    reason = "display rounding scales by ten around an integer round"
)]
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Percentage closeness of a difference to a tolerance, floored at zero.
///
/// A difference of zero scores 100; a difference equal to the tolerance
/// scores 0.
#[expect(
    clippy::float_arithmetic,
    reason = "match percentages are linear in the reading difference"
)]
pub(crate) fn closeness(difference: f64, tolerance: f64) -> f64 {
    (100.0 - difference / tolerance * 100.0).max(0.0)
}

/// Mean of integer sub-scores rounded half to even.
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "banker's rounding of an integer mean"
)]
pub(crate) fn rounded_mean(scores: &[u8]) -> u8 {
    let count = u32::try_from(scores.len()).unwrap_or(u32::MAX).max(1);
    let total: u32 = scores.iter().copied().map(u32::from).sum();
    let quotient = total / count;
    let doubled_remainder = (total % count) * 2;
    let rounded = match doubled_remainder.cmp(&count) {
        std::cmp::Ordering::Less => quotient,
        std::cmp::Ordering::Greater => quotient + 1,
        std::cmp::Ordering::Equal => quotient + (quotient % 2),
    };
    u8::try_from(rounded).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(66.666, 66.7)]
    #[case(50.04, 50.0)]
    #[case(0.0, 0.0)]
    fn rounds_to_one_decimal(#[case] value: f64, #[case] expected: f64) {
        assert!((round1(value) - expected).abs() < 1e-9);
    }

    #[rstest]
    #[case(0.0, 3.0, 100.0)]
    #[case(1.5, 3.0, 50.0)]
    #[case(3.0, 3.0, 0.0)]
    #[case(12.0, 10.0, 0.0)]
    fn closeness_is_floored(#[case] diff: f64, #[case] tol: f64, #[case] expected: f64) {
        assert!((closeness(diff, tol) - expected).abs() < 1e-9);
    }

    #[rstest]
    #[case(&[100, 75, 70, 100], 86)]
    #[case(&[85, 90, 95, 0], 68)]
    #[case(&[100, 100, 100, 90], 98)]
    #[case(&[85, 65, 70, 100], 80)]
    #[case(&[0, 45, 40, 85], 42)]
    #[case(&[100, 80, 75, 75], 82)]
    fn mean_rounds_half_to_even(#[case] scores: &[u8], #[case] expected: u8) {
        assert_eq!(rounded_mean(scores), expected);
    }
}
