//! Winning line analysis for Tic-Tac-Toe

use super::{
    Player,
    board::{Action, Cell, SIZE},
};

/// Winning lines as `(row, col)` triples: 3 rows, 3 columns, 2 diagonals
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// The owner of the first complete line, if any
    pub fn winner(cells: &[[Cell; SIZE]; SIZE]) -> Option<Player> {
        WINNING_LINES.iter().find_map(|line| {
            let [(r0, c0), (r1, c1), (r2, c2)] = *line;
            let first = cells[r0][c0];
            if first != Cell::Empty && first == cells[r1][c1] && first == cells[r2][c2] {
                first.to_player()
            } else {
                None
            }
        })
    }

    /// Cells that would immediately complete a line for the player
    pub fn winning_actions(cells: &[[Cell; SIZE]; SIZE], player: Player) -> Vec<Action> {
        let mut actions: Vec<Action> = WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_action_in_line(cells, player, line))
            .collect();
        actions.sort_unstable();
        actions.dedup();
        actions
    }

    /// Find the completing cell in a specific line, if one exists
    fn winning_action_in_line(
        cells: &[[Cell; SIZE]; SIZE],
        player: Player,
        line: &[(usize, usize); 3],
    ) -> Option<Action> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty = None;

        for &(r, c) in line {
            match cells[r][c] {
                Cell::Empty => {
                    if empty.is_some() {
                        return None;
                    }
                    empty = Some(Action::new(r, c));
                }
                cell if cell == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty } else { None }
    }
}
