use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::ops::RangeInclusive;

use derive_more::{Display, Error};
use itertools::Itertools;
use tracing::debug;

use crate::board::{Board, Board3x3, Mark};
use crate::players::OpponentKind;

#[derive(Debug, Display, Error)]
pub enum ConsoleError {
    #[display("console I/O failed: {_0}")]
    Io(io::Error),
    #[display("input closed before a choice was made")]
    InputClosed,
}

impl From<io::Error> for ConsoleError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Everything the game needs from whoever sits in front of it.
pub trait Console {
    fn prompt_opponent_type(&mut self, kinds: &[OpponentKind]) -> Result<OpponentKind, ConsoleError>;
    /// Returns the 0-based index of the space the player typed in.
    fn prompt_player_mark(&mut self, board: &Board3x3) -> Result<usize, ConsoleError>;
    fn display_board(&mut self, board: &Board3x3) -> Result<(), ConsoleError>;
    fn display_game_results(&mut self, board: &Board3x3) -> Result<(), ConsoleError>;
    fn notify(&mut self, message: &str) -> Result<(), ConsoleError>;
}

/// One string per row, cells separated by `|`.
pub fn board_to_ascii<B: Board>(board: &B) -> Vec<String> {
    board.spaces()
        .chunks(board.size())
        .map(|row| row.iter().join("|"))
        .collect()
}

/// One string per row holding the 1-based numbers of the open spaces.
pub fn available_spaces_to_ascii<B: Board>(board: &B) -> Vec<String> {
    let labels = board.spaces().iter()
        .enumerate()
        .map(|(index, cell)| match cell {
            Mark::Blank => (index + 1).to_string(),
            _ => " ".to_string(),
        })
        .collect_vec();
    labels.chunks(board.size())
        .map(|row| row.join(" "))
        .collect()
}

pub struct CommandLineConsole<R, W> {
    input: R,
    output: W,
}

impl CommandLineConsole<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CommandLineConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }

    fn read_line(&mut self) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn prompt_number(&mut self, prompt: &str, accepted: RangeInclusive<usize>) -> Result<usize, ConsoleError> {
        loop {
            write!(self.output, "{prompt} ")?;
            self.output.flush()?;
            let line = self.read_line()?;
            match line.parse::<usize>() {
                Ok(number) if accepted.contains(&number) => return Ok(number),
                _ => {
                    debug!(input = %line, "rejected console input");
                    writeln!(self.output, "Please enter a number from {} to {}.", accepted.start(), accepted.end())?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Console for CommandLineConsole<R, W> {
    fn prompt_opponent_type(&mut self, kinds: &[OpponentKind]) -> Result<OpponentKind, ConsoleError> {
        for (number, kind) in (1..).zip(kinds) {
            writeln!(self.output, "{number}. {kind}")?;
        }
        let choice = self.prompt_number("Choose your opponent:", 1..=kinds.len())?;
        Ok(kinds[choice - 1])
    }

    fn prompt_player_mark(&mut self, board: &Board3x3) -> Result<usize, ConsoleError> {
        writeln!(self.output, "Available spaces:")?;
        for row in available_spaces_to_ascii(board) {
            writeln!(self.output, "{row}")?;
        }
        let space = self.prompt_number("Choose a space:", 1..=board.spaces().len())?;
        Ok(space - 1)
    }

    fn display_board(&mut self, board: &Board3x3) -> Result<(), ConsoleError> {
        writeln!(self.output)?;
        for row in board_to_ascii(board) {
            writeln!(self.output, "{row}")?;
        }
        Ok(())
    }

    fn display_game_results(&mut self, board: &Board3x3) -> Result<(), ConsoleError> {
        self.display_board(board)?;
        match board.winner() {
            Some(mark) => writeln!(self.output, "{mark} wins!")?,
            None => writeln!(self.output, "It's a draw.")?,
        }
        Ok(())
    }

    fn notify(&mut self, message: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use strum::IntoEnumIterator;

    use crate::board::{Board3x3, Mark};
    use crate::console::{available_spaces_to_ascii, board_to_ascii, CommandLineConsole, Console, ConsoleError};
    use crate::players::OpponentKind;

    fn scripted(input: &str) -> CommandLineConsole<Cursor<Vec<u8>>, Vec<u8>> {
        CommandLineConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: &CommandLineConsole<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(console.output()).into_owned()
    }

    fn alternating_board() -> Board3x3 {
        use Mark::*;
        Board3x3::new([Blank, O, X, Blank, O, X, Blank, O, X])
    }

    #[test]
    fn board_ascii() {
        assert_eq!(board_to_ascii(&Board3x3::empty()), vec!["_|_|_"; 3]);
        assert_eq!(board_to_ascii(&alternating_board()), vec!["_|O|X"; 3]);
    }

    #[test]
    fn available_spaces_ascii() {
        assert_eq!(available_spaces_to_ascii(&Board3x3::empty()), vec!["1 2 3", "4 5 6", "7 8 9"]);
        assert_eq!(available_spaces_to_ascii(&alternating_board()), vec!["1    ", "4    ", "7    "]);
    }

    #[test]
    fn prompt_player_mark_is_zero_based() {
        let mut console = scripted("5\n");
        assert_eq!(console.prompt_player_mark(&Board3x3::empty()).unwrap(), 4);
        assert!(output(&console).contains("1 2 3"));
    }

    #[test]
    fn prompt_player_mark_reprompts() {
        let mut console = scripted("middle\n0\n10\n9\n");
        assert_eq!(console.prompt_player_mark(&Board3x3::empty()).unwrap(), 8);
        assert_eq!(output(&console).matches("Please enter a number from 1 to 9.").count(), 3);
    }

    #[test]
    fn prompt_opponent_type() {
        let kinds = OpponentKind::iter().collect::<Vec<_>>();
        let mut console = scripted("4\n3\n");
        assert_eq!(console.prompt_opponent_type(&kinds).unwrap(), OpponentKind::ImpossibleComputer);
        let output = output(&console);
        assert!(output.contains("1. Human"));
        assert!(output.contains("2. Dumb Computer"));
        assert!(output.contains("3. Impossible Computer"));
    }

    #[test]
    fn closed_input() {
        let mut console = scripted("abc\n");
        let result = console.prompt_player_mark(&Board3x3::empty());
        assert!(matches!(result, Err(ConsoleError::InputClosed)));
    }

    #[test]
    fn game_results() {
        let mut console = scripted("");
        console.display_game_results(&Board3x3::with_marks(&[0, 1, 2], &[3, 4])).unwrap();
        assert!(output(&console).ends_with("O wins!\n"));

        let mut console = scripted("");
        console.display_game_results(&Board3x3::with_marks(&[1, 2, 3, 8], &[0, 4, 5, 6, 7])).unwrap();
        assert!(output(&console).ends_with("It's a draw.\n"));
    }
}
