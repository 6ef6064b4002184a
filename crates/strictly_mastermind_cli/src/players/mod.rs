//! Console players and the factory that seats them by game mode.

mod breaker;
mod external;
mod human;
mod prompt;

pub use breaker::PromptBreaker;
pub use external::ExternalSetter;
pub use human::HumanSetter;
pub use prompt::{Prompt, SharedPrompt};

use strictly_mastermind::{
    CodeBreaker, CodeSetter, ComputerBreaker, ComputerSetter, Game, PlayerError, PlayerKind,
};
use tracing::{debug, instrument};

use crate::config::PlaySettings;

/// Builds the setter for `game`, restoring its stored secret if any.
///
/// # Errors
///
/// Returns [`PlayerError`] if a stored secret no longer fits the game.
#[instrument(skip(game, prompt, play))]
pub fn build_setter(
    game: &Game,
    prompt: SharedPrompt,
    play: &PlaySettings,
) -> Result<Box<dyn CodeSetter>, PlayerError> {
    let configuration = *game.configuration();
    let secret = game.entities().secret_code().cloned();
    let kind = game.entities().code_setter();
    debug!(%kind, restored = secret.is_some(), "Seating code setter");

    let setter: Box<dyn CodeSetter> = match kind {
        PlayerKind::Human => {
            let setter = HumanSetter::new(configuration, prompt, *play.confirm_secret());
            Box::new(match secret {
                Some(secret) => setter.with_secret(secret),
                None => setter,
            })
        }
        PlayerKind::Computer => {
            let setter = ComputerSetter::new(configuration);
            Box::new(match secret {
                Some(secret) => setter.with_secret(secret)?,
                None => setter,
            })
        }
        PlayerKind::External => Box::new(ExternalSetter::new(configuration, prompt)),
    };
    Ok(setter)
}

/// Builds the breaker for `game`.
#[instrument(skip(game, prompt))]
pub fn build_breaker(game: &Game, prompt: SharedPrompt) -> Box<dyn CodeBreaker> {
    let configuration = *game.configuration();
    let kind = game.entities().code_breaker();
    debug!(%kind, "Seating code breaker");

    match kind {
        PlayerKind::Computer => Box::new(ComputerBreaker::new(configuration)),
        PlayerKind::Human | PlayerKind::External => {
            Box::new(PromptBreaker::new(kind, configuration, prompt))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use strictly_mastermind::{GameConfiguration, GameMode};
    use strum::IntoEnumIterator;

    #[test]
    fn test_seats_follow_mode() {
        for mode in GameMode::iter() {
            let game = Game::new(GameConfiguration::new(6, 4, 10, mode).unwrap());
            let prompt = Prompt::shared(Cursor::new(""), std::io::sink());
            let setter = build_setter(&game, prompt.clone(), &PlaySettings::default()).unwrap();
            let breaker = build_breaker(&game, prompt);

            assert_eq!((setter.kind(), breaker.kind()), mode.roster());
        }
    }
}
