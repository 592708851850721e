pub mod cache;
pub mod placement;
pub mod stats;

use itertools::Itertools;
use tracing::{debug, instrument, trace};

use crate::board::{Board, Mark};
use crate::min_max::cache::{Cache, MinimaxCache};
use crate::min_max::placement::Placement;
use crate::min_max::stats::SearchStats;

pub type Score = i32;

pub const MAX_WIN: Score = 1;
pub const MIN_WIN: Score = -1;
/// Also the score of any position left undecided at the depth limit.
pub const DRAW: Score = 0;

pub const DEFAULT_DEPTH_LIMIT: u8 = 7;

#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash)]
pub struct ScoredMove {
    pub space: usize,
    pub score: Score,
}

impl ScoredMove {
    pub fn new(space: usize, score: Score) -> ScoredMove {
        ScoredMove { space, score }
    }
}

/// Highest scoring move; on ties the earliest one wins.
pub fn best_move(scored_moves: &[ScoredMove]) -> Option<ScoredMove> {
    scored_moves.iter()
        .copied()
        .max_set_by_key(|m| m.score)
        .into_iter()
        .next()
}

/// Depth limited minimax over a mutable board.
///
/// Positions are scored from the point of view of `max_mark`: `MAX_WIN` if it has a
/// winning line, `MIN_WIN` if `min_mark` has one and `DRAW` otherwise. While iterating
/// the moves of a node the search stops as soon as the side to move reaches its best
/// possible score. Every scored position is memoized by its exact cell sequence; the
/// cache is never invalidated, so scores cut off by the depth limit are reused as is.
#[derive(Debug)]
pub struct Minimax<C: Cache = MinimaxCache> {
    pub max_mark: Mark,
    pub min_mark: Mark,
    pub depth_limit: u8,
    current_depth: u8,
    cache: C,
    stats: SearchStats,
}

impl Minimax<MinimaxCache> {
    pub fn new(depth_limit: u8) -> Self {
        Self::with_cache(depth_limit, MinimaxCache::default())
    }
}

impl Default for Minimax<MinimaxCache> {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH_LIMIT)
    }
}

impl<C: Cache> Minimax<C> {
    pub fn with_cache(depth_limit: u8, cache: C) -> Self {
        Self {
            max_mark: Mark::X,
            min_mark: Mark::O,
            depth_limit,
            current_depth: 0,
            cache,
            stats: SearchStats::default(),
        }
    }

    pub fn with_marks(mut self, max_mark: Mark, min_mark: Mark) -> Self {
        self.max_mark = max_mark;
        self.min_mark = min_mark;
        self
    }

    #[cfg(test)]
    pub fn current_depth(&self) -> u8 {
        self.current_depth
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    #[cfg(test)]
    pub fn cache_mut(&mut self) -> &mut C {
        &mut self.cache
    }

    /// Totals over every search this engine has run.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn opponent_of(&self, mark: Mark) -> Mark {
        if mark == self.max_mark {
            self.min_mark
        } else {
            self.max_mark
        }
    }

    /// Scores every open space for `mark`, in ascending space order.
    ///
    /// Stops at the first move reaching the best score `mark` can get, so the result
    /// may not cover every open space.
    #[instrument(level = "debug", skip(self, board), fields(depth_limit = self.depth_limit))]
    pub fn scores<B: Board>(&mut self, board: &mut B, mark: Mark) -> Vec<ScoredMove> {
        let stats_before = self.stats;
        let mut scored_moves = Vec::new();
        for space in board.spaces_with_mark(Mark::Blank) {
            let score = match self.lookup_child(board.spaces(), space, mark) {
                Some(score) => score,
                None => {
                    let mut placed = Placement::new(board, space, mark);
                    self.score(&mut *placed, mark)
                }
            };
            trace!(space, score, "scored move");
            scored_moves.push(ScoredMove::new(space, score));
            if self.is_best_possible(mark, score) {
                self.stats.record_prune();
                break;
            }
        }
        debug!(moves = scored_moves.len(), stats = ?self.stats.since(&stats_before), "search finished");
        scored_moves
    }

    /// Scores the board given that `mark` made the last move.
    pub fn score<B: Board>(&mut self, board: &mut B, mark: Mark) -> Score {
        let score = self.evaluate(board, mark);
        self.cache.put(board.spaces(), score);
        score
    }

    fn evaluate<B: Board>(&mut self, board: &mut B, mark: Mark) -> Score {
        self.stats.record_state_scored();
        if board.is_winning_solution(self.max_mark) {
            return MAX_WIN;
        }
        if board.is_winning_solution(self.min_mark) {
            return MIN_WIN;
        }
        let open_spaces = board.spaces_with_mark(Mark::Blank);
        if open_spaces.is_empty() {
            return DRAW;
        }
        if self.current_depth >= self.depth_limit {
            self.stats.record_depth_cutoff();
            return DRAW;
        }

        let to_move = self.opponent_of(mark);
        let mut best = None;
        for space in open_spaces {
            let score = self.score_child(board, space, to_move);
            let aggregate = match best {
                None => score,
                Some(best) => self.prefer(to_move, best, score),
            };
            best = Some(aggregate);
            if self.is_best_possible(to_move, aggregate) {
                self.stats.record_prune();
                break;
            }
        }
        best.unwrap_or(DRAW)
    }

    fn score_child<B: Board>(&mut self, board: &mut B, space: usize, mark: Mark) -> Score {
        if let Some(score) = self.lookup_child(board.spaces(), space, mark) {
            return score;
        }
        let mut placed = Placement::new(board, space, mark);
        self.current_depth += 1;
        let score = self.score(&mut *placed, mark);
        self.current_depth -= 1;
        score
    }

    // looks up the board that would result from `mark` on `space` without touching the board
    fn lookup_child(&mut self, spaces: &[Mark], space: usize, mark: Mark) -> Option<Score> {
        let mut child = spaces.to_vec();
        child[space] = mark;
        let cached = self.cache.get_score(&child);
        match cached {
            Some(_) => self.stats.record_cache_hit(),
            None => self.stats.record_cache_miss(),
        }
        cached
    }

    fn prefer(&self, mark: Mark, current: Score, candidate: Score) -> Score {
        if mark == self.max_mark {
            current.max(candidate)
        } else {
            current.min(candidate)
        }
    }

    fn is_best_possible(&self, mark: Mark, score: Score) -> bool {
        if mark == self.max_mark {
            score == MAX_WIN
        } else {
            score == MIN_WIN
        }
    }
}
