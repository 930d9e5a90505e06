//! Terminal game loop: prompts the human, lets the computer reply.

use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use tictactoe_engine::{Outcome, TicTacToeBot};
use tracing::{debug, info, instrument, warn};

/// Whose move it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    /// Waiting for a square from the terminal.
    Human,
    /// The bot picks a square.
    Computer,
}

/// Plays one game to the end. The human moves first.
///
/// Squares are read as 1-indexed row then column. A taken or off-board
/// square, or input that is not a number, asks again without giving the
/// turn away. Returns the final outcome after printing the board and the
/// outcome name.
#[instrument(skip_all, fields(difficulty = %bot.difficulty()))]
pub fn play<R: BufRead, W: Write>(
    bot: &mut TicTacToeBot,
    input: &mut R,
    output: &mut W,
) -> Result<Outcome> {
    info!("Game started");
    let mut turn = Turn::Human;

    while bot.current_outcome() == Outcome::Unfinished {
        match turn {
            Turn::Human => {
                write!(output, "{}", bot.render_board())?;
                let square = read_square(input, output)?;
                writeln!(output)?;

                match square {
                    Some((row, col)) => {
                        if bot.apply_human_move(row, col) {
                            turn = Turn::Computer;
                        } else {
                            writeln!(output, "That square is not available.\n")?;
                        }
                    }
                    None => writeln!(output, "Please enter a number from 1 to 3.\n")?,
                }
            }
            Turn::Computer => {
                if bot.computer_move().is_none() {
                    warn!("Computer had no move on an unfinished board");
                    bail!("Computer could not move");
                }
                turn = Turn::Human;
            }
        }
    }

    let outcome = bot.current_outcome();
    write!(output, "{}", bot.render_board())?;
    writeln!(output, "{}", outcome)?;
    info!(%outcome, "Game finished");
    Ok(outcome)
}

/// Prompts for a row and a column and converts them to 0-indexed values.
///
/// `Ok(None)` means the input was not a positive number.
fn read_square<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<(usize, usize)>> {
    let Some(row) = prompt_number(input, output, "Row: ")? else {
        return Ok(None);
    };
    let Some(col) = prompt_number(input, output, "Col: ")? else {
        return Ok(None);
    };
    Ok(Some((row, col)))
}

fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<usize>> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = Vec::new();
    let read = input
        .read_until(b'\n', &mut line)
        .context("Failed to read input")?;
    if read == 0 {
        bail!("Input closed before the game finished");
    }

    let parsed = std::str::from_utf8(&line)
        .ok()
        .and_then(|text| text.trim().parse::<usize>().ok())
        .and_then(|n| n.checked_sub(1));
    if parsed.is_none() {
        let text = String::from_utf8_lossy(&line);
        debug!(input = %text.trim(), "Ignoring unparsable input");
    }
    Ok(parsed)
}
