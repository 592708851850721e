use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{info, instrument, warn};

use crate::board::{Board, Board3x3, Mark};
use crate::console::{Console, ConsoleError};
use crate::players::Player;

/// Marks a random open space.
#[derive(Debug, Clone)]
pub struct DumbComputer {
    mark: Mark,
    rng: StdRng,
}

impl DumbComputer {
    pub fn new(mark: Mark, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self { mark, rng }
    }

    pub fn choose_space(&mut self, board: &Board3x3) -> Option<usize> {
        board.spaces_with_mark(Mark::Blank)
            .choose(&mut self.rng)
            .copied()
    }
}

impl Player for DumbComputer {
    fn mark(&self) -> Mark {
        self.mark
    }

    fn name(&self) -> &'static str {
        "Dumb Computer"
    }

    #[instrument(skip_all, fields(mark = %self.mark))]
    fn make_mark(&mut self, board: &mut Board3x3, _console: &mut dyn Console) -> Result<(), ConsoleError> {
        match self.choose_space(board) {
            Some(space) => {
                info!(space, "dumb computer marked space");
                board.make_mark(space, self.mark);
            }
            None => warn!("no open space left"),
        }
        Ok(())
    }
}
