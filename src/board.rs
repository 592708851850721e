use lazy_static::lazy_static;
use strum_macros::Display;

/// What a cell holds: nothing, or the mark of one of the two players.
#[derive(Debug, Display, Copy, Clone, Hash, Eq, PartialEq)]
pub enum Mark {
    #[strum(serialize = "_")]
    Blank,
    O,
    X,
}

/// The board operations the search engine relies on.
pub trait Board {
    fn spaces(&self) -> &[Mark];
    fn make_mark(&mut self, index: usize, mark: Mark);
    fn is_winning_solution(&self, mark: Mark) -> bool;
    /// Side length of the square grid.
    fn size(&self) -> usize;

    fn spaces_with_mark(&self, mark: Mark) -> Vec<usize> {
        self.spaces().iter()
            .enumerate()
            .filter_map(|(index, cell)| (*cell == mark).then_some(index))
            .collect()
    }

    fn is_available_space(&self, index: usize) -> bool {
        self.spaces().get(index) == Some(&Mark::Blank)
    }
}

pub const SIDE: usize = 3;
pub const CELL_COUNT: usize = SIDE * SIDE;

lazy_static! {
    // rows, columns, then both diagonals
    static ref WIN_LINES: Vec<Vec<usize>> = {
        let rows = (0..SIDE).map(|row| (0..SIDE).map(|col| row * SIDE + col).collect::<Vec<_>>());
        let cols = (0..SIDE).map(|col| (0..SIDE).map(|row| row * SIDE + col).collect::<Vec<_>>());
        let diagonal: Vec<usize> = (0..SIDE).map(|i| i * SIDE + i).collect();
        let anti_diagonal: Vec<usize> = (0..SIDE).map(|i| i * SIDE + (SIDE - 1 - i)).collect();
        rows.chain(cols).chain([diagonal, anti_diagonal]).collect()
    };
}

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board3x3 {
    pub cells: [Mark; CELL_COUNT],
}

impl Board3x3 {
    pub fn empty() -> Self {
        Self::new([Mark::Blank; CELL_COUNT])
    }

    pub fn new(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Builds a board from the indices held by `O` and by `X`.
    #[cfg(test)]
    pub fn with_marks(o_spaces: &[usize], x_spaces: &[usize]) -> Self {
        let mut board = Self::empty();
        o_spaces.iter().for_each(|&index| board.make_mark(index, Mark::O));
        x_spaces.iter().for_each(|&index| board.make_mark(index, Mark::X));
        board
    }

    pub fn winning_line(&self) -> Option<&'static [usize]> {
        WIN_LINES.iter()
            .find(|line| {
                let first = self.cells[line[0]];
                first != Mark::Blank && line.iter().all(|&index| self.cells[index] == first)
            })
            .map(Vec::as_slice)
    }

    pub fn winner(&self) -> Option<Mark> {
        self.winning_line().map(|line| self.cells[line[0]])
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Mark::Blank)
    }
}

impl Board for Board3x3 {
    fn spaces(&self) -> &[Mark] {
        &self.cells
    }

    fn make_mark(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    fn is_winning_solution(&self, mark: Mark) -> bool {
        mark != Mark::Blank && WIN_LINES.iter().any(|line| line.iter().all(|&index| self.cells[index] == mark))
    }

    fn size(&self) -> usize {
        SIDE
    }
}
