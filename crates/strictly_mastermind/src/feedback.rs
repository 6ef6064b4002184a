//! Feedback scoring for Mastermind.

use tracing::instrument;

use crate::error::RoundError;
use crate::types::{Combination, Feedback};

/// Scores `guess` against `secret`.
///
/// Black pegs count positions where both share a color. White pegs count the
/// remaining color matches: per color, the smaller of the guess and secret
/// counts over the non-matching positions, so no peg is counted twice.
///
/// # Errors
///
/// Returns [`RoundError::WrongLength`] if the combinations differ in length
/// and [`RoundError::ColorOutOfRange`] if a peg lies outside
/// `1..=number_of_colors`. Returns [`RoundError::TooManyPegs`] if the
/// combinations are longer than a [`Feedback`] count can hold.
#[instrument(skip(guess, secret), fields(guess = %guess, secret = %secret))]
pub fn compute_feedback(
    guess: &Combination,
    secret: &Combination,
    number_of_colors: u8,
) -> Result<Feedback, RoundError> {
    if guess.len() != secret.len() {
        return Err(RoundError::WrongLength {
            expected: secret.len(),
            actual: guess.len(),
        });
    }

    let too_many = |_| RoundError::TooManyPegs { pegs: guess.len() };
    u8::try_from(guess.len()).map_err(too_many)?;

    let in_range = |color: u8| (1..=number_of_colors).contains(&color);
    if let Some(&color) = guess
        .pegs()
        .iter()
        .chain(secret.pegs())
        .find(|c| !in_range(**c))
    {
        return Err(RoundError::ColorOutOfRange {
            color,
            number_of_colors,
        });
    }

    let slots = usize::from(number_of_colors) + 1;
    let mut guess_counts = vec![0usize; slots];
    let mut secret_counts = vec![0usize; slots];
    let mut black = 0usize;

    for (g, s) in guess.pegs().iter().zip(secret.pegs()) {
        if g == s {
            black += 1;
        } else {
            guess_counts[usize::from(*g)] += 1;
            secret_counts[usize::from(*s)] += 1;
        }
    }

    let white: usize = guess_counts
        .iter()
        .zip(&secret_counts)
        .map(|(g, s)| (*g).min(*s))
        .sum();

    // Both counts are bounded by the length checked above.
    let black = u8::try_from(black).map_err(too_many)?;
    let white = u8::try_from(white).map_err(too_many)?;
    Ok(Feedback::new(black, white))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(guess: [u8; 4], secret: [u8; 4]) -> Feedback {
        compute_feedback(&guess.into(), &secret.into(), 6).unwrap()
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(score([1, 2, 3, 4], [1, 2, 3, 4]), Feedback::new(4, 0));
    }

    #[test]
    fn test_all_misplaced() {
        assert_eq!(score([1, 2, 3, 4], [4, 3, 2, 1]), Feedback::new(0, 4));
    }

    #[test]
    fn test_duplicates_not_double_counted() {
        assert_eq!(score([1, 1, 2, 2], [1, 2, 1, 2]), Feedback::new(2, 2));
        assert_eq!(score([1, 1, 1, 1], [1, 2, 3, 4]), Feedback::new(1, 0));
        assert_eq!(score([2, 2, 1, 1], [1, 3, 3, 3]), Feedback::new(0, 1));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(score([1, 1, 1, 1], [2, 2, 2, 2]), Feedback::new(0, 0));
    }

    #[test]
    fn test_length_mismatch() {
        let result = compute_feedback(&[1, 2, 3].into(), &[1, 2, 3, 4].into(), 6);
        assert_eq!(
            result,
            Err(RoundError::WrongLength {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_color_out_of_range() {
        let result = compute_feedback(&[1, 7].into(), &[1, 2].into(), 6);
        assert!(matches!(
            result,
            Err(RoundError::ColorOutOfRange { color: 7, .. })
        ));
    }

    #[test]
    fn test_longest_code_scores_without_overflow() {
        let secret = Combination::from(vec![1u8; 255]);
        assert_eq!(
            compute_feedback(&secret, &secret, 6),
            Ok(Feedback::new(255, 0))
        );

        let mut guess = vec![1u8; 127];
        guess.extend(vec![2u8; 128]);
        let mut swapped = vec![2u8; 127];
        swapped.extend(vec![1u8; 128]);
        assert_eq!(
            compute_feedback(&guess.into(), &swapped.into(), 6),
            Ok(Feedback::new(0, 254))
        );
    }

    #[test]
    fn test_oversized_code_rejected() {
        let secret = Combination::from(vec![1u8; 256]);
        assert_eq!(
            compute_feedback(&secret, &secret, 6),
            Err(RoundError::TooManyPegs { pegs: 256 })
        );
    }
}
