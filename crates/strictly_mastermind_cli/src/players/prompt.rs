//! Line-based console shared by the interactive players.

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use strictly_mastermind::PlayerError;
use tracing::debug;

/// Handle to the console, shared by both seats of a hot-seat game.
pub type SharedPrompt = Rc<RefCell<Prompt>>;

/// A line reader paired with the writer its questions go to.
pub struct Prompt {
    input: Box<dyn BufRead>,
    output: Box<dyn Write>,
}

impl std::fmt::Debug for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prompt").finish_non_exhaustive()
    }
}

impl Prompt {
    /// Wraps `input` and `output` in a shareable handle.
    pub fn shared(input: impl BufRead + 'static, output: impl Write + 'static) -> SharedPrompt {
        Rc::new(RefCell::new(Self {
            input: Box::new(input),
            output: Box::new(output),
        }))
    }

    /// Prints `question` and reads one trimmed line.
    ///
    /// Returns `None` once the input is exhausted.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>, PlayerError> {
        write!(self.output, "{}", question)
            .and_then(|_| self.output.flush())
            .map_err(|e| PlayerError::new(format!("Failed to write prompt: {}", e)))?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| PlayerError::new(format!("Failed to read input: {}", e)))?;
        if read == 0 {
            debug!("Input exhausted");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prints `message` on its own line.
    pub fn say(&mut self, message: &str) -> Result<(), PlayerError> {
        writeln!(self.output, "{}", message)
            .map_err(|e| PlayerError::new(format!("Failed to write message: {}", e)))
    }
}

/// In-band commands a player can type instead of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `?`
    Help,
    /// `d`
    Discard,
    /// `q`
    Quit,
    /// `u`
    Undo,
    /// `r`
    Redo,
}

impl Command {
    /// Recognizes a command among those `allowed`.
    pub fn parse(line: &str, allowed: &[Command]) -> Option<Self> {
        let command = match line {
            "?" => Self::Help,
            "d" => Self::Discard,
            "q" => Self::Quit,
            "u" => Self::Undo,
            "r" => Self::Redo,
            _ => return None,
        };
        allowed.contains(&command).then_some(command)
    }

    /// Help line for this command.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Help => "(?) for help",
            Self::Discard => "(d) to discard the game",
            Self::Quit => "(q) to save and quit",
            Self::Undo => "(u) to undo",
            Self::Redo => "(r) to redo",
        }
    }
}

/// Builds the help text shown for `?`.
pub fn help_text(first_line: &str, example: &str, allowed: &[Command]) -> String {
    let mut text = format!("{}\n{}\nOr, you can enter a command:", first_line, example);
    for command in allowed {
        text.push('\n');
        text.push_str(command.describe());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_trims_and_detects_eof() {
        let prompt = Prompt::shared(Cursor::new("  1234 \n"), std::io::sink());
        let mut prompt = prompt.borrow_mut();
        assert_eq!(prompt.ask("> ").unwrap(), Some("1234".to_string()));
        assert_eq!(prompt.ask("> ").unwrap(), None);
    }

    #[test]
    fn test_command_must_be_allowed() {
        let allowed = [Command::Help, Command::Discard];
        assert_eq!(Command::parse("d", &allowed), Some(Command::Discard));
        assert_eq!(Command::parse("r", &allowed), None);
        assert_eq!(Command::parse("1234", &allowed), None);
    }
}
