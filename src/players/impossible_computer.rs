use tracing::{info, instrument, warn};

use crate::board::{Board, Board3x3, Mark};
use crate::console::{Console, ConsoleError};
use crate::min_max::{best_move, Minimax};
use crate::players::Player;

/// Plays the best move minimax finds within its depth limit.
#[derive(Debug)]
pub struct ImpossibleComputer {
    mark: Mark,
    minimax: Minimax,
}

impl ImpossibleComputer {
    pub fn new(mark: Mark, opponent: Mark, depth_limit: u8) -> Self {
        Self { mark, minimax: Minimax::new(depth_limit).with_marks(mark, opponent) }
    }

    pub fn best_space(&mut self, board: &mut Board3x3) -> Option<usize> {
        let scored_moves = self.minimax.scores(board, self.mark);
        best_move(&scored_moves).map(|m| m.space)
    }
}

impl Player for ImpossibleComputer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &'static str {
        "Impossible Computer"
    }

    #[instrument(skip_all, fields(mark = %self.mark))]
    fn make_mark(&mut self, board: &mut Board3x3, _console: &mut dyn Console) -> Result<(), ConsoleError> {
        match self.best_space(board) {
            Some(space) => {
                info!(space, cached_states = self.minimax.cache().len(), total = ?self.minimax.stats(), "impossible computer marked space");
                board.make_mark(space, self.mark);
            }
            None => warn!("no open space left"),
        }
        Ok(())
    }
}
