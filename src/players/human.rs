use tracing::{info, instrument, warn};

use crate::board::{Board, Board3x3, Mark};
use crate::console::{Console, ConsoleError};
use crate::players::Player;

#[derive(Debug, Clone)]
pub struct Human {
    mark: Mark,
}

impl Human {
    pub fn new(mark: Mark) -> Self {
        Self { mark }
    }
}

impl Player for Human {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &'static str {
        "Human"
    }

    #[instrument(skip_all, fields(mark = %self.mark))]
    fn make_mark(&mut self, board: &mut Board3x3, console: &mut dyn Console) -> Result<(), ConsoleError> {
        loop {
            let space = console.prompt_player_mark(board)?;
            if board.is_available_space(space) {
                info!(space, "human marked space");
                board.make_mark(space, self.mark);
                return Ok(());
            }
            warn!(space, "space is already taken");
            console.notify(&format!("Space {} is already taken.", space + 1))?;
        }
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use crate::board::{Board, Board3x3, Mark};
    use crate::console::CommandLineConsole;
    use crate::players::{Human, Player};

    #[test]
    fn marks_chosen_space() {
        let mut board = Board3x3::empty();
        let mut console = CommandLineConsole::new(Cursor::new(b"1\n".to_vec()), Vec::new());
        Human::new(Mark::O).make_mark(&mut board, &mut console).unwrap();
        assert_eq!(board.spaces_with_mark(Mark::O), vec![0]);
    }

    #[test]
    fn reprompts_until_space_is_available() {
        let mut board = Board3x3::with_marks(&[], &[0]);
        let mut console = CommandLineConsole::new(Cursor::new(b"1\n2\n".to_vec()), Vec::new());
        Human::new(Mark::O).make_mark(&mut board, &mut console).unwrap();

        assert_eq!(board.spaces_with_mark(Mark::O), vec![1]);
        assert_eq!(board.spaces_with_mark(Mark::X), vec![0]);
        let output = String::from_utf8_lossy(console.output()).into_owned();
        assert!(output.contains("Space 1 is already taken."));
    }
}
