//! Code breaker typing guesses at the console.

use strictly_mastermind::{
    CodeBreaker, Combination, GameConfiguration, PlayerAction, PlayerError, PlayerKind,
    validate_combination,
};
use tracing::instrument;

use super::prompt::{Command, SharedPrompt, help_text};

const GUESS_COMMANDS: [Command; 5] = [
    Command::Help,
    Command::Discard,
    Command::Quit,
    Command::Undo,
    Command::Redo,
];

/// Breaker whose guesses are typed in, by a person or relayed from outside.
#[derive(Debug)]
pub struct PromptBreaker {
    kind: PlayerKind,
    configuration: GameConfiguration,
    prompt: SharedPrompt,
}

impl PromptBreaker {
    /// Creates a breaker of `kind` reading from `prompt`.
    pub fn new(kind: PlayerKind, configuration: GameConfiguration, prompt: SharedPrompt) -> Self {
        Self {
            kind,
            configuration,
            prompt,
        }
    }
}

impl CodeBreaker for PromptBreaker {
    fn kind(&self) -> PlayerKind {
        self.kind
    }

    #[instrument(skip(self), fields(kind = %self.kind))]
    fn obtain_guess(&mut self) -> Result<PlayerAction<Combination>, PlayerError> {
        loop {
            let Some(line) = self.prompt.borrow_mut().ask("Enter your guess: ")? else {
                return Ok(PlayerAction::Quit);
            };
            match Command::parse(&line, &GUESS_COMMANDS) {
                Some(Command::Help) => {
                    let hint = help_text(
                        &format!(
                            "Enter a {}-digit number with digit ranging from 1 to {}.",
                            self.configuration.number_of_dots(),
                            self.configuration.number_of_colors()
                        ),
                        "For example, a 6-digit 4-color code can be 123412, or 1,2,3,4,1,2",
                        &GUESS_COMMANDS,
                    );
                    self.prompt.borrow_mut().say(&hint)?;
                    continue;
                }
                Some(Command::Discard) => return Ok(PlayerAction::Discard),
                Some(Command::Quit) => return Ok(PlayerAction::Quit),
                Some(Command::Undo) => return Ok(PlayerAction::Undo),
                Some(Command::Redo) => return Ok(PlayerAction::Redo),
                None => {}
            }

            let parsed = line.parse::<Combination>().map_err(|e| e.to_string());
            match parsed.and_then(|guess| {
                validate_combination(&guess, &self.configuration)
                    .map(|_| guess)
                    .map_err(|e| e.to_string())
            }) {
                Ok(guess) => return Ok(PlayerAction::Play(guess)),
                Err(message) => {
                    let mut prompt = self.prompt.borrow_mut();
                    prompt.say(&message)?;
                    prompt.say("To get more help, enter '?'")?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::Prompt;
    use std::io::Cursor;
    use strictly_mastermind::GameMode;

    #[test]
    fn test_reprompts_until_valid() {
        let config = GameConfiguration::new(6, 4, 10, GameMode::CVP).unwrap();
        let input = Cursor::new("12\nabcd\n7777\n1,2,3,4\nu\nr\nq\n");
        let prompt = Prompt::shared(input, std::io::sink());
        let mut breaker = PromptBreaker::new(PlayerKind::Human, config, prompt);

        assert_eq!(
            breaker.obtain_guess().unwrap(),
            PlayerAction::Play(Combination::from([1, 2, 3, 4]))
        );
        assert_eq!(breaker.obtain_guess().unwrap(), PlayerAction::Undo);
        assert_eq!(breaker.obtain_guess().unwrap(), PlayerAction::Redo);
        assert_eq!(breaker.obtain_guess().unwrap(), PlayerAction::Quit);
        assert_eq!(breaker.obtain_guess().unwrap(), PlayerAction::Quit);
    }
}
