//! Sudoku as exact cover.
//!
//! A K×K board (K a perfect square) has one matrix row per candidate
//! "number n in cell (r, c)", K³ in total, and four groups of K² columns:
//!
//! * number n appears once in row r,
//! * number n appears once in column c,
//! * number n appears once in box b,
//! * cell (r, c) holds exactly one number.
//!
//! Row `n * K² + r * K + c` stands for number `n + 1` at `(r, c)`. Clues do
//! not remove rows; the contradicting candidates are cleared instead, so
//! row indices stay the same for every board of a given size.

use crate::error::{invalid_board, Result};

/// One candidate placement.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Candidate {
    /// 1-based number
    pub number: usize,
    pub row: usize,
    pub col: usize,
}

impl Candidate {
    /// The candidate a matrix row stands for on a K×K board, or `None` if
    /// the board has no such row.
    pub const fn from_row(index: usize, k: usize) -> Option<Self> {
        if k == 0 || index / (k * k) >= k {
            return None;
        }

        Some(Self {
            number: index / (k * k) + 1,
            row: (index / k) % k,
            col: index % k,
        })
    }

    /// Inverse of [`Candidate::from_row`]. `None` if the number or the cell
    /// does not fit on a K×K board.
    pub const fn row_index(self, k: usize) -> Option<usize> {
        if self.number == 0 || self.number > k || self.row >= k || self.col >= k {
            return None;
        }

        Some((self.number - 1) * k * k + self.row * k + self.col)
    }
}

/// Side of the boxes on a K×K board.
fn box_side(k: usize) -> Result<usize> {
    (1..=k)
        .find(|side| side * side == k)
        .ok_or_else(|| invalid_board(format!("board size {k} is not a positive perfect square")))
}

/// The matrix for an empty K×K board.
pub fn full_cover(k: usize) -> Result<Vec<Vec<bool>>> {
    let side = box_side(k)?;
    let area = k * k;

    let mut matrix = vec![vec![false; 4 * area]; k * area];

    for n in 0..k {
        for r in 0..k {
            for c in 0..k {
                let b = (r / side) * side + c / side;
                let row = &mut matrix[n * area + r * k + c];

                row[r * k + n] = true;
                row[area + c * k + n] = true;
                row[2 * area + b * k + n] = true;
                row[3 * area + r * k + c] = true;
            }
        }
    }

    Ok(matrix)
}

/// [`full_cover`] with each row as the list of columns it covers, for
/// [`DancingLinks::from_sparse`](crate::DancingLinks::from_sparse).
pub fn sparse_cover(k: usize) -> Result<Vec<Vec<usize>>> {
    Ok(full_cover(k)?
        .into_iter()
        .map(|row| {
            row.into_iter()
                .enumerate()
                .filter_map(|(col, cell)| cell.then_some(col))
                .collect()
        })
        .collect())
}

/// The matrix for a board with clues. `0` marks an empty cell.
pub fn cover_for(board: &[Vec<usize>]) -> Result<Vec<Vec<bool>>> {
    let k = board.len();

    if let Some(r) = board.iter().position(|row| row.len() != k) {
        return Err(invalid_board(format!(
            "expected a square board, row {r} has {} cells instead of {k}",
            board[r].len()
        )));
    }

    let mut matrix = full_cover(k)?;

    for (r, cells) in board.iter().enumerate() {
        for (c, &clue) in cells.iter().enumerate() {
            if clue == 0 {
                continue;
            }
            if clue > k {
                return Err(invalid_board(format!(
                    "clue {clue} at ({r}, {c}) is larger than {k}"
                )));
            }

            for number in (1..=k).filter(|&number| number != clue) {
                if let Some(index) = (Candidate { number, row: r, col: c }).row_index(k) {
                    matrix[index].fill(false);
                }
            }
        }
    }

    Ok(matrix)
}

/// Fills a K×K board from the rows of a solution. Rows past the end of the
/// matrix are skipped.
pub fn board_for(solution: &[usize], k: usize) -> Vec<Vec<usize>> {
    let mut board = vec![vec![0; k]; k];

    for candidate in solution.iter().filter_map(|&index| Candidate::from_row(index, k)) {
        board[candidate.row][candidate.col] = candidate.number;
    }

    board
}

/// Parses a board written as lines of whitespace separated numbers.
pub fn parse_board(text: &str) -> Result<Vec<Vec<usize>>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.split_whitespace()
                .map(|token| {
                    token
                        .parse()
                        .ok()
                        .ok_or_else(|| invalid_board(format!("{token:?} is not a number")))
                })
                .collect()
        })
        .collect()
}

pub fn format_board(board: &[Vec<usize>]) -> String {
    board
        .iter()
        .map(|row| {
            let cells = row
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            cells + "\n"
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cover_shape() {
        let matrix = full_cover(4).unwrap();

        assert_eq!(64, matrix.len());
        assert!(matrix.iter().all(|row| row.len() == 64));
        assert!(matrix
            .iter()
            .all(|row| row.iter().filter(|&&cell| cell).count() == 4));
    }

    #[test]
    fn test_candidate_index_round_trip() {
        let candidate = Candidate { number: 3, row: 1, col: 2 };

        assert_eq!(Some(2 * 16 + 4 + 2), candidate.row_index(4));
        assert_eq!(Some(candidate), Candidate::from_row(38, 4));
    }

    #[test]
    fn test_candidate_out_of_range() {
        assert_eq!(None, Candidate::from_row(0, 0));
        assert_eq!(None, Candidate::from_row(64, 4));
        assert_eq!(None, Candidate { number: 0, row: 0, col: 0 }.row_index(4));
        assert_eq!(None, Candidate { number: 1, row: 4, col: 0 }.row_index(4));

        assert!(board_for(&[0], 0).is_empty());
        assert_eq!(vec![vec![0; 4]; 4], board_for(&[64], 4));
    }

    #[test]
    fn test_sparse_cover_lists_columns() {
        let sparse = sparse_cover(4).unwrap();

        assert_eq!(64, sparse.len());
        // number 1 at (0, 0): row 0, column 0, box 0, cell 0
        assert_eq!(vec![0, 16, 32, 48], sparse[0]);
        assert!(sparse.iter().flatten().all(|&col| col < 64));
    }

    #[test]
    fn test_clue_clears_other_numbers() {
        let board = vec![
            vec![0, 0, 0, 0],
            vec![0, 0, 2, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ];
        let matrix = cover_for(&board).unwrap();

        for number in 1..=4 {
            let index = Candidate { number, row: 1, col: 2 }.row_index(4).unwrap();
            assert_eq!(number == 2, matrix[index].iter().any(|&cell| cell));
        }
    }

    #[test]
    fn test_board_text() {
        let board = parse_board("1 2\n\n3 4\n").unwrap();

        assert_eq!(vec![vec![1, 2], vec![3, 4]], board);
        assert_eq!("1 2\n3 4\n", format_board(&board));
        assert!(parse_board("1 x").is_err());
    }

    #[test]
    fn test_rejects_bad_boards() {
        assert!(full_cover(0).is_err());
        assert!(full_cover(6).is_err());
        assert!(cover_for(&[vec![0, 0], vec![0]]).is_err());
        assert!(cover_for(&[vec![0; 4], vec![0; 4], vec![0; 4], vec![5, 0, 0, 0]]).is_err());
    }
}
