//! Human code setter typing the secret at the console.

use strictly_mastermind::{
    CodeSetter, Combination, Feedback, GameConfiguration, PlayerAction, PlayerError, PlayerKind,
    compute_feedback, validate_combination,
};
use tracing::{debug, instrument};

use super::prompt::{Command, SharedPrompt, help_text};

const SECRET_COMMANDS: [Command; 2] = [Command::Help, Command::Discard];

/// Human setter: enters the secret once, feedback is then computed.
#[derive(Debug)]
pub struct HumanSetter {
    configuration: GameConfiguration,
    prompt: SharedPrompt,
    confirm: bool,
    secret: Option<Combination>,
}

impl HumanSetter {
    /// Creates a setter reading from `prompt`.
    ///
    /// With `confirm`, the secret must be typed twice.
    pub fn new(configuration: GameConfiguration, prompt: SharedPrompt, confirm: bool) -> Self {
        Self {
            configuration,
            prompt,
            confirm,
            secret: None,
        }
    }

    /// Restores the secret of a resumed game.
    pub fn with_secret(mut self, secret: Combination) -> Self {
        self.secret = Some(secret);
        self
    }

    fn hint(&self) -> String {
        help_text(
            &format!(
                "Enter a {}-digit number with digit ranging from 1 to {}.",
                self.configuration.number_of_dots(),
                self.configuration.number_of_colors()
            ),
            "For example, a 6-digit 4-color code can be 123412, or 1,2,3,4,1,2",
            &SECRET_COMMANDS,
        )
    }
}

impl CodeSetter for HumanSetter {
    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }

    #[instrument(skip(self))]
    fn set_secret_code(&mut self) -> Result<PlayerAction<Combination>, PlayerError> {
        loop {
            let Some(line) = self.prompt.borrow_mut().ask("Enter the secret code: ")? else {
                return Ok(PlayerAction::Quit);
            };
            match Command::parse(&line, &SECRET_COMMANDS) {
                Some(Command::Help) => {
                    let hint = self.hint();
                    self.prompt.borrow_mut().say(&hint)?;
                    continue;
                }
                Some(_) => return Ok(PlayerAction::Discard),
                None => {}
            }

            let secret = match line
                .parse::<Combination>()
                .map_err(|e| e.to_string())
                .and_then(|code| {
                    validate_combination(&code, &self.configuration)
                        .map(|_| code)
                        .map_err(|e| e.to_string())
                }) {
                Ok(secret) => secret,
                Err(message) => {
                    let mut prompt = self.prompt.borrow_mut();
                    prompt.say(&message)?;
                    prompt.say("To get more help, enter '?'")?;
                    continue;
                }
            };

            if self.confirm {
                let confirmed = self.prompt.borrow_mut().ask("Confirm the secret code: ")?;
                let matches = confirmed
                    .as_deref()
                    .and_then(|c| c.parse::<Combination>().ok())
                    .is_some_and(|c| c == secret);
                if !matches {
                    self.prompt
                        .borrow_mut()
                        .say("Code does not match. Try again.")?;
                    continue;
                }
            }

            debug!("Human picked a secret code");
            self.secret = Some(secret.clone());
            return Ok(PlayerAction::Play(secret));
        }
    }

    fn obtain_feedback(
        &mut self,
        guess: &Combination,
    ) -> Result<PlayerAction<Feedback>, PlayerError> {
        let secret = self
            .secret
            .as_ref()
            .ok_or_else(|| PlayerError::new("Secret code not set yet"))?;
        let feedback = compute_feedback(guess, secret, *self.configuration.number_of_colors())?;
        Ok(PlayerAction::Play(feedback))
    }

    fn secret_code(&self) -> Option<&Combination> {
        self.secret.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::Prompt;
    use std::io::Cursor;
    use strictly_mastermind::GameMode;

    fn config() -> GameConfiguration {
        GameConfiguration::new(6, 4, 10, GameMode::PVC).unwrap()
    }

    #[test]
    fn test_secret_needs_matching_confirmation() {
        let input = Cursor::new("?\n1239\n1234\n4321\n1234\n1234\n");
        let prompt = Prompt::shared(input, std::io::sink());
        let mut setter = HumanSetter::new(config(), prompt, true);

        let secret = setter.set_secret_code().unwrap();

        assert_eq!(secret, PlayerAction::Play(Combination::from([1, 2, 3, 4])));
        assert_eq!(
            setter.obtain_feedback(&[4, 3, 2, 1].into()).unwrap(),
            PlayerAction::Play(Feedback::new(0, 4))
        );
    }

    #[test]
    fn test_discard_while_setting() {
        let prompt = Prompt::shared(Cursor::new("d\n"), std::io::sink());
        let mut setter = HumanSetter::new(config(), prompt, false);
        assert_eq!(setter.set_secret_code().unwrap(), PlayerAction::Discard);
        assert!(setter.secret_code().is_none());
    }
}
