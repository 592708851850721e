mod dumb_computer;
mod human;
mod impossible_computer;

pub use dumb_computer::DumbComputer;
pub use human::Human;
pub use impossible_computer::ImpossibleComputer;

use clap::ValueEnum;
use strum_macros::{Display, EnumIter};

use crate::board::{Board3x3, Mark};
use crate::config::GameConfig;
use crate::console::{Console, ConsoleError};

/// Anything that can take a turn.
pub trait Player {
    fn mark(&self) -> Mark;
    fn name(&self) -> &'static str;
    fn make_mark(&mut self, board: &mut Board3x3, console: &mut dyn Console) -> Result<(), ConsoleError>;
}

#[derive(Debug, Display, EnumIter, ValueEnum, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OpponentKind {
    #[strum(serialize = "Human")]
    Human,
    #[strum(serialize = "Dumb Computer")]
    DumbComputer,
    #[strum(serialize = "Impossible Computer")]
    ImpossibleComputer,
}

impl OpponentKind {
    pub fn create(self, mark: Mark, opponent: Mark, config: &GameConfig) -> Box<dyn Player> {
        match self {
            OpponentKind::Human => Box::new(Human::new(mark)),
            OpponentKind::DumbComputer => Box::new(DumbComputer::new(mark, config.seed)),
            OpponentKind::ImpossibleComputer => Box::new(ImpossibleComputer::new(mark, opponent, config.depth_limit)),
        }
    }
}
