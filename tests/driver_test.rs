//! Tests for the terminal game loop.

use std::io::Cursor;

use tictactoe_bot::play;
use tictactoe_engine::{
    Board, Cell, Difficulty, MoveSelector, Outcome, Player, TicTacToeBot,
};

/// Tries every square in row-major order, 1-indexed.
const EVERY_SQUARE: &str = "1\n1\n1\n2\n1\n3\n2\n1\n2\n2\n2\n3\n3\n1\n3\n2\n3\n3\n";

fn run(bot: &mut TicTacToeBot, script: &str) -> (anyhow::Result<Outcome>, String) {
    let mut input = Cursor::new(script.to_string());
    let mut output = Vec::new();
    let result = play(bot, &mut input, &mut output);
    (result, String::from_utf8(output).expect("utf8 output"))
}

#[test]
fn test_hard_beats_row_major_human() {
    let mut bot = TicTacToeBot::with_seed(Difficulty::Hard, 0);
    let (result, output) = run(&mut bot, EVERY_SQUARE);

    assert_eq!(result.unwrap(), Outcome::ComputerWins);
    assert!(output.contains("That square is not available."));
    assert!(output.trim_end().ends_with("COMPUTER_WINS"));
    assert_eq!(bot.board().get(2, 0), Some(Cell::Computer));
}

#[test]
fn test_any_difficulty_finishes_scripted_game() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        for seed in 0..4 {
            let mut bot = TicTacToeBot::with_seed(difficulty, seed);
            let (result, _) = run(&mut bot, EVERY_SQUARE);
            let outcome = result.unwrap();
            assert!(outcome.is_terminal());
            assert_eq!(outcome, bot.current_outcome());
        }
    }
}

#[test]
fn test_garbage_input_reprompts() {
    let mut bot = TicTacToeBot::with_seed(Difficulty::Hard, 0);
    let script = format!("abc\n0\n{EVERY_SQUARE}");
    let (result, output) = run(&mut bot, &script);

    assert_eq!(result.unwrap(), Outcome::ComputerWins);
    assert_eq!(output.matches("Please enter a number from 1 to 3.").count(), 2);
}

#[test]
fn test_invalid_utf8_reprompts() {
    let mut bot = TicTacToeBot::with_seed(Difficulty::Hard, 0);
    let mut script = vec![0xff, 0xfe, b'\n'];
    script.extend_from_slice(EVERY_SQUARE.as_bytes());
    let mut input = Cursor::new(script);
    let mut output = Vec::new();

    let outcome = play(&mut bot, &mut input, &mut output).unwrap();
    let output = String::from_utf8(output).expect("utf8 output");
    assert_eq!(outcome, Outcome::ComputerWins);
    assert_eq!(output.matches("Please enter a number from 1 to 3.").count(), 1);
}

#[test]
fn test_human_completes_row() {
    let board = Board::from_cells([
        [Cell::Human, Cell::Human, Cell::Empty],
        [Cell::Computer, Cell::Computer, Cell::Empty],
        [Cell::Empty, Cell::Empty, Cell::Empty],
    ]);
    let mut bot = TicTacToeBot::from_parts(board, MoveSelector::with_seed(Difficulty::Easy, 0));
    let (result, output) = run(&mut bot, "1\n3\n");

    assert_eq!(result.unwrap(), Outcome::HumanWins);
    assert!(output.trim_end().ends_with("HUMAN_WINS"));
    assert_eq!(bot.turn(), 0);
}

#[test]
fn test_last_square_draws() {
    let board = Board::from_cells([
        [Cell::Human, Cell::Computer, Cell::Human],
        [Cell::Human, Cell::Computer, Cell::Computer],
        [Cell::Computer, Cell::Human, Cell::Empty],
    ]);
    let mut bot = TicTacToeBot::from_parts(board, MoveSelector::with_seed(Difficulty::Hard, 0));
    let (result, output) = run(&mut bot, "3\n3\n");

    assert_eq!(result.unwrap(), Outcome::Draw);
    assert!(output.trim_end().ends_with("DRAW"));
    assert_eq!(bot.board().count(Player::Human), 5);
}

#[test]
fn test_off_board_square_is_refused() {
    let mut bot = TicTacToeBot::with_seed(Difficulty::Hard, 0);
    let (result, output) = run(&mut bot, "4\n1\n");

    assert!(result.is_err());
    assert!(output.contains("That square is not available."));
    assert_eq!(bot.board(), &Board::new());
}

#[test]
fn test_input_closed_mid_game_is_an_error() {
    let mut bot = TicTacToeBot::with_seed(Difficulty::Easy, 0);
    let (result, output) = run(&mut bot, "2\n2\n");

    let err = result.unwrap_err();
    assert!(err.to_string().contains("Input closed"));
    assert!(output.starts_with("  |   |  "));
    assert_eq!(bot.turn(), 1);
}
