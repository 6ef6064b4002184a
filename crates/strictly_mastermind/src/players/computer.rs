//! Computer players that choose uniformly at random.

use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::{debug, instrument};

use super::{CodeBreaker, CodeSetter, PlayerAction};
use crate::configuration::{GameConfiguration, PlayerKind};
use crate::error::{PlayerError, RoundError};
use crate::feedback::compute_feedback;
use crate::round::validate_combination;
use crate::types::{Combination, Feedback};

/// Draws one peg per dot, uniformly over the colors. Duplicates are allowed.
pub fn random_combination<R: Rng>(
    rng: &mut R,
    configuration: &GameConfiguration,
) -> Combination {
    let colors = *configuration.number_of_colors();
    (0..*configuration.number_of_dots())
        .map(|_| rng.random_range(1..=colors))
        .collect::<Vec<_>>()
        .into()
}

/// Computer code setter: random secret, exact feedback.
#[derive(Debug, Clone)]
pub struct ComputerSetter<R = ThreadRng> {
    configuration: GameConfiguration,
    secret: Option<Combination>,
    rng: R,
}

impl ComputerSetter<ThreadRng> {
    /// Creates a setter backed by the thread-local generator.
    pub fn new(configuration: GameConfiguration) -> Self {
        Self::with_rng(configuration, rand::rng())
    }
}

impl<R: Rng> ComputerSetter<R> {
    /// Creates a setter drawing from `rng`.
    pub fn with_rng(configuration: GameConfiguration, rng: R) -> Self {
        Self {
            configuration,
            secret: None,
            rng,
        }
    }

    /// Restores a previously chosen secret, as when resuming a game.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError`] if the secret does not fit the configuration.
    pub fn with_secret(mut self, secret: Combination) -> Result<Self, RoundError> {
        validate_combination(&secret, &self.configuration)?;
        self.secret = Some(secret);
        Ok(self)
    }
}

impl<R: Rng> CodeSetter for ComputerSetter<R> {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }

    #[instrument(skip(self))]
    fn set_secret_code(&mut self) -> Result<PlayerAction<Combination>, PlayerError> {
        let secret = random_combination(&mut self.rng, &self.configuration);
        debug!("Computer picked a secret code");
        self.secret = Some(secret.clone());
        Ok(PlayerAction::Play(secret))
    }

    #[instrument(skip(self), fields(guess = %guess))]
    fn obtain_feedback(
        &mut self,
        guess: &Combination,
    ) -> Result<PlayerAction<Feedback>, PlayerError> {
        let secret = self
            .secret
            .as_ref()
            .ok_or_else(|| PlayerError::new("No secret code has been set"))?;
        let feedback = compute_feedback(guess, secret, *self.configuration.number_of_colors())?;
        Ok(PlayerAction::Play(feedback))
    }

    fn secret_code(&self) -> Option<&Combination> {
        self.secret.as_ref()
    }
}

/// Computer code breaker: uniform random guesses.
#[derive(Debug, Clone)]
pub struct ComputerBreaker<R = ThreadRng> {
    configuration: GameConfiguration,
    rng: R,
}

impl ComputerBreaker<ThreadRng> {
    /// Creates a breaker backed by the thread-local generator.
    pub fn new(configuration: GameConfiguration) -> Self {
        Self::with_rng(configuration, rand::rng())
    }
}

impl<R: Rng> ComputerBreaker<R> {
    /// Creates a breaker drawing from `rng`.
    pub fn with_rng(configuration: GameConfiguration, rng: R) -> Self {
        Self { configuration, rng }
    }
}

impl<R: Rng> CodeBreaker for ComputerBreaker<R> {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Computer
    }

    #[instrument(skip(self))]
    fn obtain_guess(&mut self) -> Result<PlayerAction<Combination>, PlayerError> {
        let guess = random_combination(&mut self.rng, &self.configuration);
        debug!(guess = %guess, "Computer guessed");
        Ok(PlayerAction::Play(guess))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameMode;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn config() -> GameConfiguration {
        GameConfiguration::new(6, 4, 10, GameMode::CVP).unwrap()
    }

    #[test]
    fn test_random_combination_fits_configuration() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let code = random_combination(&mut rng, &config());
            assert!(validate_combination(&code, &config()).is_ok());
        }
    }

    #[test]
    fn test_setter_scores_against_its_secret() {
        let mut setter = ComputerSetter::with_rng(config(), StdRng::seed_from_u64(1));
        let PlayerAction::Play(secret) = setter.set_secret_code().unwrap() else {
            panic!("expected a secret");
        };
        assert_eq!(setter.secret_code(), Some(&secret));

        let feedback = setter.obtain_feedback(&secret).unwrap();
        assert_eq!(feedback, PlayerAction::Play(Feedback::perfect(4)));
    }

    #[test]
    fn test_setter_without_secret_errors() {
        let mut setter = ComputerSetter::with_rng(config(), StdRng::seed_from_u64(1));
        assert!(setter.obtain_feedback(&[1, 2, 3, 4].into()).is_err());
    }

    #[test]
    fn test_restored_secret_is_validated() {
        let setter = ComputerSetter::with_rng(config(), StdRng::seed_from_u64(1));
        assert!(setter.with_secret([7, 7, 7, 7].into()).is_err());
    }

    #[test]
    fn test_seeded_breaker_is_deterministic() {
        let mut a = ComputerBreaker::with_rng(config(), StdRng::seed_from_u64(42));
        let mut b = ComputerBreaker::with_rng(config(), StdRng::seed_from_u64(42));
        for _ in 0..5 {
            assert_eq!(a.obtain_guess().unwrap(), b.obtain_guess().unwrap());
        }
    }
}
