//! Code setter whose feedback is typed in from outside, such as a real board.

use strictly_mastermind::{
    CodeSetter, Combination, Feedback, GameConfiguration, PlayerAction, PlayerError, PlayerKind,
    validate_feedback,
};
use tracing::instrument;

use super::prompt::{Command, SharedPrompt, help_text};

const FEEDBACK_COMMANDS: [Command; 4] = [
    Command::Help,
    Command::Discard,
    Command::Quit,
    Command::Undo,
];

/// External setter: there is no secret here, only typed feedback.
#[derive(Debug)]
pub struct ExternalSetter {
    configuration: GameConfiguration,
    prompt: SharedPrompt,
}

impl ExternalSetter {
    /// Creates a setter reading from `prompt`.
    pub fn new(configuration: GameConfiguration, prompt: SharedPrompt) -> Self {
        Self {
            configuration,
            prompt,
        }
    }
}

impl CodeSetter for ExternalSetter {
    fn kind(&self) -> PlayerKind {
        PlayerKind::External
    }

    fn needs_secret(&self) -> bool {
        false
    }

    fn set_secret_code(&mut self) -> Result<PlayerAction<Combination>, PlayerError> {
        Err(PlayerError::new("External setter has no secret code"))
    }

    #[instrument(skip(self), fields(guess = %guess))]
    fn obtain_feedback(
        &mut self,
        guess: &Combination,
    ) -> Result<PlayerAction<Feedback>, PlayerError> {
        loop {
            let Some(line) = self.prompt.borrow_mut().ask("Enter the feedback: ")? else {
                return Ok(PlayerAction::Quit);
            };
            match Command::parse(&line, &FEEDBACK_COMMANDS) {
                Some(Command::Help) => {
                    let hint = help_text(
                        &format!(
                            "Enter a 2 digit number (optionally separated by comma) between 0 and {}.",
                            self.configuration.number_of_dots()
                        ),
                        "For example: 01 or 0,1 -> (0, 1) -> 0 black pegs, 1 white peg.",
                        &FEEDBACK_COMMANDS,
                    );
                    self.prompt.borrow_mut().say(&hint)?;
                    continue;
                }
                Some(Command::Discard) => return Ok(PlayerAction::Discard),
                Some(Command::Quit) => return Ok(PlayerAction::Quit),
                Some(Command::Undo) => return Ok(PlayerAction::Undo),
                Some(Command::Redo) | None => {}
            }

            let parsed = line.parse::<Feedback>().map_err(|e| e.to_string());
            match parsed.and_then(|feedback| {
                validate_feedback(feedback, &self.configuration)
                    .map(|_| feedback)
                    .map_err(|e| e.to_string())
            }) {
                Ok(feedback) => return Ok(PlayerAction::Play(feedback)),
                Err(message) => {
                    let mut prompt = self.prompt.borrow_mut();
                    prompt.say(&message)?;
                    prompt.say("To get more help, enter '?'")?;
                }
            }
        }
    }

    fn secret_code(&self) -> Option<&Combination> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::Prompt;
    use std::io::Cursor;
    use strictly_mastermind::GameMode;

    #[test]
    fn test_reads_feedback_and_commands() {
        let config = GameConfiguration::new(6, 4, 10, GameMode::EVE).unwrap();
        let prompt = Prompt::shared(Cursor::new("5,0\n1\n2,1\nu\n"), std::io::sink());
        let mut setter = ExternalSetter::new(config, prompt);
        let guess = Combination::from([1, 2, 3, 4]);

        assert_eq!(
            setter.obtain_feedback(&guess).unwrap(),
            PlayerAction::Play(Feedback::new(2, 1))
        );
        assert_eq!(setter.obtain_feedback(&guess).unwrap(), PlayerAction::Undo);
        assert!(!setter.needs_secret());
    }
}
