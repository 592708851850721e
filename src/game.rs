use tracing::{info, instrument};

use crate::board::{Board3x3, Mark};
use crate::console::{Console, ConsoleError};
use crate::players::Player;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Outcome {
    Win(Mark),
    Draw,
}

pub struct Game<C: Console> {
    board: Board3x3,
    // the player to move is always first
    players: [Box<dyn Player>; 2],
    console: C,
}

impl<C: Console> Game<C> {
    pub fn new(players: [Box<dyn Player>; 2], console: C) -> Self {
        Self { board: Board3x3::empty(), players, console }
    }

    #[cfg(test)]
    pub fn board(&self) -> &Board3x3 {
        &self.board
    }

    #[cfg(test)]
    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.board.winner() {
            Some(mark) => Some(Outcome::Win(mark)),
            None if self.board.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }

    #[cfg(test)]
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome, ConsoleError> {
        loop {
            if let Some(outcome) = self.outcome() {
                self.console.display_game_results(&self.board)?;
                info!(?outcome, "game over");
                return Ok(outcome);
            }
            self.console.display_board(&self.board)?;
            let player = &mut self.players[0];
            info!(player = player.name(), mark = %player.mark(), "next turn");
            player.make_mark(&mut self.board, &mut self.console)?;
            self.players.rotate_left(1);
        }
    }
}
