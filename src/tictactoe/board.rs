//! Board state representation and the game rules

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Number of rows (and columns) on the board
pub const SIZE: usize = 3;

/// Number of cells on the board
pub const CELLS: usize = SIZE * SIZE;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this mark, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
///
/// X always opens and is the maximizing player; O is the minimizing player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Whether this player maximizes the utility
    pub fn is_maximizing(self) -> bool {
        self == Player::X
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A `(row, col)` coordinate identifying a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }

    /// Build an action from a row-major index (0-8)
    pub fn from_index(index: usize) -> Self {
        Action {
            row: index / SIZE,
            col: index % SIZE,
        }
    }

    /// Row-major index of this action (0-8)
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Whether both coordinates fall on the board
    pub fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Action {
    type Err = crate::Error;

    /// Parse `"row col"` or `"row,col"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || crate::Error::ParseAction {
            input: s.to_string(),
        };

        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();
        let [row, col] = parts.as_slice() else {
            return Err(parse_err());
        };

        let row: usize = row.parse().map_err(|_| parse_err())?;
        let col: usize = col.parse().map_err(|_| parse_err())?;
        let action = Action::new(row, col);
        if !action.in_bounds() {
            return Err(parse_err());
        }
        Ok(action)
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
    empty: usize,
}

/// An immutable 3x3 board snapshot
///
/// The player to move is not stored; it is derived from the mark counts.
/// The type is `Copy`, and every transition returns a new board, so earlier
/// positions stay valid while the search backtracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create the initial, all-empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Create a board from raw cells without validating piece counts.
    pub fn from_cells(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Board { cells }
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain 9 cell characters in row-major order.
    /// Whitespace, `|` and `/` are ignored so `"XO./.X./..O"` and a
    /// multi-line grid both parse.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string does not hold exactly 9 cell characters
    /// - Any character is not a valid cell representation
    /// - The piece counts are not `X == O` or `X == O + 1`
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        // Spaces count as empty cells only when the string is too short without them.
        let marks = s.chars().filter(|c| !c.is_whitespace()).count();
        let chars: Vec<char> = s
            .chars()
            .filter(|&c| !matches!(c, '\n' | '\r' | '\t' | '|' | '/'))
            .filter(|&c| c != ' ' || marks < CELLS)
            .collect();

        if chars.len() != CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i / SIZE][i % SIZE] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        let board = Board { cells };
        let count = board.count_pieces();
        if count.x != count.o && count.x != count.o + 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(board)
    }

    /// Helper: Count pieces on the board.
    fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Raw cell grid
    pub fn cells(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Get the cell at an in-bounds action
    pub fn get(&self, action: Action) -> Cell {
        self.cells[action.row][action.col]
    }

    /// Number of marks already placed
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.count_pieces().empty
    }

    /// Player whose turn it is: X when the counts are equal, O otherwise.
    pub fn player(&self) -> Player {
        let count = self.count_pieces();
        if count.x == count.o {
            Player::X
        } else {
            Player::O
        }
    }

    /// All empty cells.
    ///
    /// Callers should treat the result as a set. It happens to be produced in
    /// row-major order, which the search relies on only for its default
    /// tie-break.
    pub fn actions(&self) -> Vec<Action> {
        (0..CELLS)
            .map(Action::from_index)
            .filter(|&action| self.get(action) == Cell::Empty)
            .collect()
    }

    /// Place the mover's mark at `action` and return the new board.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAction`](crate::Error::InvalidAction) if the
    /// action is off the board or the cell is already occupied.
    #[must_use = "result returns a new board; the original is unchanged"]
    pub fn result(&self, action: Action) -> Result<Board, crate::Error> {
        if !action.in_bounds() || self.get(action) != Cell::Empty {
            return Err(crate::Error::InvalidAction {
                row: action.row,
                col: action.col,
            });
        }

        Ok(self.place(action))
    }

    /// Every legal action paired with the board it leads to, in the order
    /// of [`actions`](Self::actions).
    pub fn successors(&self) -> Vec<(Action, Board)> {
        self.actions()
            .into_iter()
            .map(|action| (action, self.place(action)))
            .collect()
    }

    /// Mark `action` for the mover; callers guarantee the cell is empty.
    fn place(&self, action: Action) -> Board {
        let mut next = *self;
        next.cells[action.row][action.col] = self.player().to_cell();
        next
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.empty_count() == 0
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.empty_count() == 0 && self.winner().is_none()
    }

    /// Reward of the position from X's point of view: 1, -1 or 0.
    ///
    /// Only meaningful on terminal boards.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Compact nine-character encoding, e.g. `"XO..X...O"`
    pub fn encode(&self) -> String {
        self.cells.iter().flatten().map(|c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            writeln!(
                f,
                " {} | {} | {}",
                row[0].to_char(),
                row[1].to_char(),
                row[2].to_char()
            )?;
            if i + 1 < SIZE {
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}
