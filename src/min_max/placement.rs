use std::ops::{Deref, DerefMut};

use crate::board::{Board, Mark};

/// A hypothetical mark on a board, retracted again when the guard goes out of scope.
///
/// Every exit path of the search (including pruning breaks) drops the guard, so the
/// board always returns to the state it had before the mark was placed.
pub struct Placement<'b, B: Board> {
    board: &'b mut B,
    index: usize,
}

impl<'b, B: Board> Placement<'b, B> {
    pub fn new(board: &'b mut B, index: usize, mark: Mark) -> Self {
        debug_assert!(board.is_available_space(index));
        board.make_mark(index, mark);
        Self { board, index }
    }
}

impl<B: Board> Deref for Placement<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        self.board
    }
}

impl<B: Board> DerefMut for Placement<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        self.board
    }
}

impl<B: Board> Drop for Placement<'_, B> {
    fn drop(&mut self) {
        self.board.make_mark(self.index, Mark::Blank);
    }
}

#[cfg(test)]
mod test {
    use crate::board::{Board, Board3x3, Mark};
    use crate::min_max::placement::Placement;

    #[test]
    fn retracts_on_drop() {
        let mut board = Board3x3::with_marks(&[0], &[4]);
        let before = board.clone();
        {
            let placed = Placement::new(&mut board, 8, Mark::O);
            assert_eq!(placed.spaces()[8], Mark::O);
            assert!(!placed.is_winning_solution(Mark::O));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn nested_placements_unwind_in_order() {
        let mut board = Board3x3::empty();
        {
            let mut outer = Placement::new(&mut board, 0, Mark::X);
            {
                let inner = Placement::new(&mut *outer, 1, Mark::O);
                assert_eq!(inner.spaces_with_mark(Mark::Blank).len(), 7);
            }
            assert_eq!(outer.spaces()[1], Mark::Blank);
            assert_eq!(outer.spaces()[0], Mark::X);
        }
        assert_eq!(board, Board3x3::empty());
    }
}
