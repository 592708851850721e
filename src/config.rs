use strum::IntoEnumIterator;
use tracing::{debug, instrument};

use crate::board::Mark;
use crate::console::{Console, ConsoleError};
use crate::min_max::DEFAULT_DEPTH_LIMIT;
use crate::players::{Human, OpponentKind, Player};

/// The human always moves first.
pub const PLAYER_MARK: Mark = Mark::O;
pub const OPPONENT_MARK: Mark = Mark::X;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameConfig {
    /// Asked on the console when not set.
    pub opponent: Option<OpponentKind>,
    pub depth_limit: u8,
    /// Seed for the dumb computer.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { opponent: None, depth_limit: DEFAULT_DEPTH_LIMIT, seed: None }
    }
}

impl GameConfig {
    #[instrument(skip(console))]
    pub fn choose_players(&self, console: &mut dyn Console) -> Result<[Box<dyn Player>; 2], ConsoleError> {
        let kind = match self.opponent {
            Some(kind) => kind,
            None => console.prompt_opponent_type(&OpponentKind::iter().collect::<Vec<_>>())?,
        };
        debug!(%kind, "opponent chosen");
        let human: Box<dyn Player> = Box::new(Human::new(PLAYER_MARK));
        Ok([human, kind.create(OPPONENT_MARK, PLAYER_MARK, self)])
    }
}
