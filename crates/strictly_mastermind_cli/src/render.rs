//! Plain-text rendering of a game board.

use strictly_mastermind::Game;

/// Renders the round history as a numbered table.
///
/// ```text
/// Attempts: 2/10
///   #  Guess      Black  White
///   1  1234           1      2
///   2  3456           0      1
/// ```
pub fn render_board(game: &Game) -> String {
    let board = game.board();
    let width = board
        .guesses()
        .map(|guess| guess.to_string().len())
        .max()
        .unwrap_or(0)
        .max("Guess".len());

    let mut lines = vec![
        format!(
            "Attempts: {}/{}",
            board.len(),
            game.configuration().attempts_allowed()
        ),
        format!("{:>3}  {:<width$}  Black  White", "#", "Guess"),
    ];
    for (index, round) in board.rounds().iter().enumerate() {
        let feedback = round.feedback();
        lines.push(format!(
            "{:>3}  {:<width$}  {:>5}  {:>5}",
            index + 1,
            round.guess().to_string(),
            feedback.black,
            feedback.white
        ));
    }
    lines.join("\n") + "\n"
}
