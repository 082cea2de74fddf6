//! Square SOS grid with move validation

use super::{Cell, Pos, Symbol, BOARD_SIZE, MAX_BOARD_SIZE};

/// Game board. Corners start as `S`, every other cell starts empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major cells
    cells: Vec<Cell>,
}

impl Board {
    /// Default 5x5 board
    pub fn new() -> Self {
        Self::build(BOARD_SIZE)
    }

    /// Board of side `size`, `None` if `size` is 0 or above `MAX_BOARD_SIZE`
    pub fn with_size(size: usize) -> Option<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return None;
        }
        Some(Self::build(size))
    }

    fn build(size: usize) -> Self {
        let mut board = Self {
            size,
            cells: vec![Cell::Empty; size * size],
        };
        let last = size - 1;
        for (row, col) in [(0, 0), (0, last), (last, 0), (last, last)] {
            board.cells[row * size + col] = Cell::S;
        }
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// Cell at (row, col); out-of-range reads as empty
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.index(row, col).map_or(Cell::Empty, |i| self.cells[i])
    }

    /// Cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cell(pos.row(), pos.col())
    }

    /// In bounds and empty
    #[inline]
    pub fn is_valid_move(&self, row: usize, col: usize) -> bool {
        matches!(self.index(row, col), Some(i) if self.cells[i] == Cell::Empty)
    }

    /// Write `symbol` at (row, col) if the move is valid.
    /// Returns false and leaves the board untouched otherwise.
    pub fn make_move(&mut self, row: usize, col: usize, symbol: Symbol) -> bool {
        match self.index(row, col) {
            Some(i) if self.cells[i] == Cell::Empty => {
                self.cells[i] = symbol.into();
                true
            }
            _ => false,
        }
    }

    /// Clear a cell filled by a matching `make_move`. Search backtracking only.
    #[inline]
    pub fn undo(&mut self, row: usize, col: usize) {
        if let Some(i) = self.index(row, col) {
            debug_assert!(self.cells[i] != Cell::Empty, "undo on empty cell ({row}, {col})");
            self.cells[i] = Cell::Empty;
        }
    }

    /// No empty cell left
    #[inline]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(move |(i, _)| Pos::new((i / size) as u8, (i % size) as u8))
    }

    /// Number of cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Number of empty cells
    #[inline]
    pub fn empty_count(&self) -> usize {
        self.count(Cell::Empty)
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
