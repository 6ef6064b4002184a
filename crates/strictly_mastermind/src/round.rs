//! A single recorded round: a guess and the feedback it earned.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::configuration::GameConfiguration;
use crate::error::RoundError;
use crate::types::{Combination, Feedback};

/// One guess/feedback pair.
///
/// Built through [`Round::new`], which checks the pair against the game's
/// configuration, so a malformed round never reaches the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Round {
    guess: Combination,
    feedback: Feedback,
}

impl Round {
    /// Creates a round after validating it against `configuration`.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError`] if the guess has the wrong length or an
    /// out-of-range color, or if the feedback awards more pegs than there are
    /// dots.
    #[instrument(skip(guess, configuration), fields(guess = %guess, feedback = %feedback))]
    pub fn new(
        guess: Combination,
        feedback: Feedback,
        configuration: &GameConfiguration,
    ) -> Result<Self, RoundError> {
        let round = Self { guess, feedback };
        round.validate(configuration)?;
        Ok(round)
    }

    /// Re-checks this round against `configuration`.
    ///
    /// # Errors
    ///
    /// Returns the first [`RoundError`] found.
    pub fn validate(&self, configuration: &GameConfiguration) -> Result<(), RoundError> {
        validate_combination(&self.guess, configuration)?;
        validate_feedback(self.feedback, configuration)
    }

    /// The guess.
    pub fn guess(&self) -> &Combination {
        &self.guess
    }

    /// The feedback.
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }
}

/// Checks that `combination` has one peg per dot, each within the color range.
///
/// Applies to guesses and secret codes alike.
///
/// # Errors
///
/// Returns [`RoundError::WrongLength`] or [`RoundError::ColorOutOfRange`].
pub fn validate_combination(
    combination: &Combination,
    configuration: &GameConfiguration,
) -> Result<(), RoundError> {
    let dots = usize::from(*configuration.number_of_dots());
    let colors = *configuration.number_of_colors();

    if combination.len() != dots {
        return Err(RoundError::WrongLength {
            expected: dots,
            actual: combination.len(),
        });
    }

    if let Some(&color) = combination
        .pegs()
        .iter()
        .find(|c| !(1..=colors).contains(*c))
    {
        return Err(RoundError::ColorOutOfRange {
            color,
            number_of_colors: colors,
        });
    }

    Ok(())
}

/// Checks that `feedback` awards no more pegs than there are dots.
///
/// # Errors
///
/// Returns [`RoundError::FeedbackOverflow`].
pub fn validate_feedback(
    feedback: Feedback,
    configuration: &GameConfiguration,
) -> Result<(), RoundError> {
    let dots = *configuration.number_of_dots();
    if feedback.total() > u16::from(dots) {
        return Err(RoundError::FeedbackOverflow {
            black: feedback.black,
            white: feedback.white,
            number_of_dots: dots,
        });
    }
    Ok(())
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.guess, self.feedback)
    }
}
