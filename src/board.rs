use serde::Serialize;

pub const N_ROWS: usize = 5;
pub const N_COLS: usize = 5;

/// Feedback state of a single cell. `White` marks an untouched cell;
/// the other three carry the game's absent/misplaced/correct feedback.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StatusColor {
    White,
    Black,
    Yellow,
    Green,
}

impl StatusColor {
    /// Single-letter code used on the wire.
    pub fn code(self) -> char {
        match self {
            StatusColor::White => 'W',
            StatusColor::Black => 'B',
            StatusColor::Yellow => 'Y',
            StatusColor::Green => 'G',
        }
    }

    /// Next color in the click cycle. White takes no part in the
    /// cycle; it is only reachable through a backspace reset.
    pub fn next(self) -> StatusColor {
        match self {
            StatusColor::Black => StatusColor::Yellow,
            StatusColor::Yellow => StatusColor::Green,
            _ => StatusColor::Black,
        }
    }
}

/// One character slot of the guess grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub status: StatusColor,
    pub filled: bool,
}

impl Cell {
    fn empty() -> Cell {
        Cell {
            letter: None,
            status: StatusColor::White,
            filled: false,
        }
    }
}

/// The guess grid: `rows × cols` cells in row-major order, plus the
/// pointer to the cell that receives the next typed letter.
///
/// At most one cell is current at any time; the pointer is `None`
/// exactly when the grid is completely filled.
#[derive(Clone, Debug)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    current: Option<usize>,
}

impl Board {
    pub fn new(rows: usize, cols: usize) -> Board {
        Board {
            rows,
            cols,
            cells: vec![Cell::empty(); rows * cols],
            current: Some(0),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Index of the current cell, if any.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Commits a letter to the current cell and advances the pointer.
    /// Filling forces the status to black, the default feedback the
    /// user can then re-cycle. Without a current cell this is a no-op.
    pub fn fill(&mut self, letter: char) {
        let index = match self.current {
            Some(index) => index,
            None => return,
        };

        let cell = &mut self.cells[index];
        cell.letter = Some(letter);
        cell.filled = true;
        cell.status = StatusColor::Black;

        self.current = match index + 1 {
            next if next < self.cells.len() => Some(next),
            _ => None,
        };
    }

    /// Undoes the most recent fill: the last filled cell loses its
    /// letter and status and becomes current again. A no-op while no
    /// cell is filled.
    pub fn backspace(&mut self) {
        let last = match self.cells.iter().rposition(|cell| cell.filled) {
            Some(index) => index,
            None => return,
        };

        self.cells[last] = Cell::empty();
        self.current = Some(last);
    }

    /// Advances the clicked cell through the color cycle. Unfilled
    /// cells keep their state.
    pub fn cycle_status(&mut self, index: usize) {
        let cell = &mut self.cells[index];
        if cell.filled {
            cell.status = cell.status.next();
        }
    }

    /// Encodes the filled cells into a guess batch, one word per run
    /// of `cols` cells in row-major order. Letters are lower-cased and
    /// statuses become their single-letter codes. A filled count of
    /// zero or not a multiple of the row width yields an empty batch.
    pub fn collect(&self) -> GuessBatch {
        let filled: Vec<&Cell> = self.cells.iter().filter(|cell| cell.filled).collect();
        if filled.is_empty() || filled.len() % self.cols != 0 {
            return GuessBatch::default();
        }

        let mut batch = GuessBatch::default();
        for run in filled.chunks(self.cols) {
            let mut word = String::new();
            let mut codes = String::new();
            for cell in run {
                if let Some(letter) = cell.letter {
                    word.extend(letter.to_lowercase());
                }
                codes.push(cell.status.code());
            }
            batch.insert(word, codes);
        }
        batch
    }
}

/// The word → status-code mapping sent to the suggestion service.
/// Entries keep insertion order; serializes as a flat sequence of
/// form pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GuessBatch {
    entries: Vec<(String, String)>,
}

impl GuessBatch {
    /// Repeating a word replaces the earlier statuses instead of
    /// producing a second pair.
    fn insert(&mut self, word: String, codes: String) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == word) {
            Some(entry) => entry.1 = codes,
            None => self.entries.push((word, codes)),
        }
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
