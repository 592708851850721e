use ahash::HashMap;

use crate::board::Mark;
use crate::min_max::Score;

/// Memoized scores keyed by the exact cell sequence of a board.
pub trait Cache {
    fn get_score(&self, state: &[Mark]) -> Option<Score>;
    fn put(&mut self, state: &[Mark], score: Score);
}

/// Unbounded cache; entries are never evicted for the lifetime of the engine owning it.
#[derive(Debug, Clone, Default)]
pub struct MinimaxCache(HashMap<Vec<Mark>, Score>);

impl MinimaxCache {
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Cache for MinimaxCache {
    fn get_score(&self, state: &[Mark]) -> Option<Score> {
        self.0.get(state).copied()
    }

    // keys are snapshots, later mutation of the board cannot reach them
    fn put(&mut self, state: &[Mark], score: Score) {
        self.0.insert(state.to_vec(), score);
    }
}

#[cfg(test)]
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Default)]
pub struct NullCache;

#[cfg(test)]
impl Cache for NullCache {
    fn get_score(&self, _state: &[Mark]) -> Option<Score> {
        None
    }

    fn put(&mut self, _state: &[Mark], _score: Score) {}
}
