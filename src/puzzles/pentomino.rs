//! Polyomino tiling as exact cover.
//!
//! Every piece must be used exactly once and every open board cell must be
//! covered exactly once. The matrix has one column per piece followed by
//! one column per open cell (row-major), and one row per way of putting a
//! piece, in some orientation, somewhere on the board.

use crate::error::{invalid_board, Result};

/// A rectangular 0/1 picture of a piece or a board.
pub type Mask = Vec<Vec<bool>>;

/// Reads `#` as a filled cell and anything else as empty. Short lines are
/// padded with empty cells.
pub fn parse_mask(pattern: &[&str]) -> Mask {
    let width = pattern
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or_default();

    pattern
        .iter()
        .map(|line| {
            let mut row = line.chars().map(|cell| cell == '#').collect::<Vec<_>>();
            row.resize(width, false);
            row
        })
        .collect()
}

/// Quarter turn counter-clockwise.
fn rotate(mask: &Mask) -> Mask {
    let height = mask.len();
    let width = mask.first().map_or(0, Vec::len);

    (0..width)
        .map(|i| (0..height).map(|j| mask[j][width - 1 - i]).collect())
        .collect()
}

/// Left-right mirror image.
fn mirror(mask: &Mask) -> Mask {
    mask.iter()
        .map(|row| row.iter().rev().copied().collect())
        .collect()
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Piece {
    pub letter: char,
    pub mask: Mask,
}

impl Piece {
    pub fn new(letter: char, pattern: &[&str]) -> Self {
        Self {
            letter,
            mask: parse_mask(pattern),
        }
    }

    /// The distinct rotations and reflections of the piece. The piece as
    /// given comes first, the rest in order of quarter turns, each followed
    /// by its mirror image.
    pub fn orientations(&self) -> Vec<Mask> {
        let mut unique = vec![self.mask.clone()];

        let mut rotated = self.mask.clone();
        for turns in 0..4 {
            if turns > 0 {
                rotated = rotate(&rotated);
            }

            for candidate in [rotated.clone(), mirror(&rotated)] {
                if !unique.contains(&candidate) {
                    unique.push(candidate);
                }
            }
        }

        unique
    }
}

/// The twelve pentominoes.
pub fn pentominoes() -> Vec<Piece> {
    vec![
        Piece::new('P', &["##", "##", "#."]),
        Piece::new('X', &[".#.", "###", ".#."]),
        Piece::new('F', &[".##", "##.", ".#."]),
        Piece::new('V', &["#..", "#..", "###"]),
        Piece::new('W', &["#..", "##.", ".##"]),
        Piece::new('Z', &["##.", ".#.", ".##"]),
        Piece::new('T', &["###", ".#.", ".#."]),
        Piece::new('U', &["#.#", "###"]),
        Piece::new('Y', &[".#", "##", ".#", ".#"]),
        Piece::new('L', &["##", ".#", ".#", ".#"]),
        Piece::new('N', &["#.", "##", ".#", ".#"]),
        Piece::new('I', &["#", "#", "#", "#", "#"]),
    ]
}

/// An 8×8 board with the central 2×2 square removed.
pub fn hollow_chessboard() -> Mask {
    parse_mask(&[
        "########",
        "########",
        "########",
        "###..###",
        "###..###",
        "########",
        "########",
        "########",
    ])
}

/// What a matrix row stands for.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Placement {
    /// Index into the tiling's pieces
    pub piece: usize,
    /// Index into the piece's orientations
    pub orientation: usize,
    /// Board position of the orientation's top-left corner
    pub row: usize,
    pub col: usize,
}

/// A board and a set of pieces, encoded as exact cover.
#[derive(Clone, Debug)]
pub struct Tiling {
    board: Mask,
    pieces: Vec<Piece>,
    orientations: Vec<Vec<Mask>>,
    placements: Vec<Placement>,
    matrix: Vec<Vec<bool>>,
}

impl Tiling {
    pub fn new(board: Mask, pieces: Vec<Piece>) -> Result<Self> {
        let width = board.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(invalid_board("the board has no cells"));
        }
        if board.iter().any(|row| row.len() != width) {
            return Err(invalid_board("the board is not rectangular"));
        }

        let mut cell_columns = vec![vec![None; width]; board.len()];
        let mut next = pieces.len();
        for (r, cells) in board.iter().enumerate() {
            for (c, &open) in cells.iter().enumerate() {
                if open {
                    cell_columns[r][c] = Some(next);
                    next += 1;
                }
            }
        }
        let columns = next;

        let orientations = pieces.iter().map(Piece::orientations).collect::<Vec<_>>();
        let mut placements = vec![];
        let mut matrix = vec![];

        for (piece, masks) in orientations.iter().enumerate() {
            for (orientation, mask) in masks.iter().enumerate() {
                for row in 0..board.len() {
                    for col in 0..width {
                        let Some(cells) = covered_columns(&cell_columns, mask, row, col) else {
                            continue;
                        };

                        let mut line = vec![false; columns];
                        line[piece] = true;
                        for cell in cells {
                            line[cell] = true;
                        }

                        matrix.push(line);
                        placements.push(Placement {
                            piece,
                            orientation,
                            row,
                            col,
                        });
                    }
                }
            }
        }

        log::debug!(
            "tiling: {} pieces, {} open cells, {} placements",
            pieces.len(),
            columns - pieces.len(),
            placements.len()
        );

        Ok(Self {
            board,
            pieces,
            orientations,
            placements,
            matrix,
        })
    }

    pub fn matrix(&self) -> &[Vec<bool>] {
        &self.matrix
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The matrix with the rows of every placement matching `exclude`
    /// cleared. Row indices are unchanged, so solutions still decode with
    /// this tiling.
    pub fn matrix_without(&self, exclude: impl Fn(&Piece, &Placement) -> bool) -> Vec<Vec<bool>> {
        self.matrix
            .iter()
            .zip(&self.placements)
            .map(|(line, placement)| {
                if exclude(&self.pieces[placement.piece], placement) {
                    vec![false; line.len()]
                } else {
                    line.clone()
                }
            })
            .collect()
    }

    /// Draws the board with each cell showing the letter of the piece
    /// covering it. Uncovered open cells are `.`, closed cells blank.
    pub fn render(&self, solution: &[usize]) -> String {
        let mut canvas = self
            .board
            .iter()
            .map(|cells| {
                cells
                    .iter()
                    .map(|&open| if open { '.' } else { ' ' })
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        for placement in solution.iter().filter_map(|&index| self.placements.get(index)) {
            let letter = self.pieces[placement.piece].letter;
            let mask = &self.orientations[placement.piece][placement.orientation];

            for (dr, cells) in mask.iter().enumerate() {
                for (dc, &filled) in cells.iter().enumerate() {
                    if filled {
                        canvas[placement.row + dr][placement.col + dc] = letter;
                    }
                }
            }
        }

        canvas
            .into_iter()
            .map(|cells| cells.into_iter().collect::<String>() + "\n")
            .collect()
    }
}

/// Columns of the open cells `mask` covers when its top-left corner sits at
/// `(row, col)`, or `None` if it sticks out of the board or hits a closed
/// cell.
fn covered_columns(
    cell_columns: &[Vec<Option<usize>>],
    mask: &Mask,
    row: usize,
    col: usize,
) -> Option<Vec<usize>> {
    let height = mask.len();
    let width = mask.first().map_or(0, Vec::len);
    if row + height > cell_columns.len() || col + width > cell_columns[row].len() {
        return None;
    }

    let mut cells = vec![];
    for (dr, line) in mask.iter().enumerate() {
        for (dc, &filled) in line.iter().enumerate() {
            if filled {
                cells.push(cell_columns[row + dr][col + dc]?);
            }
        }
    }
    Some(cells)
}

/// Matches every X placement except the one anchored at `(row, col)`.
fn x_only_at(row: usize, col: usize) -> impl Fn(&Piece, &Placement) -> bool {
    move |piece, placement| piece.letter == 'X' && (placement.row, placement.col) != (row, col)
}

/// Three restrictions of the hollow chessboard problem that break most of
/// its symmetry by pinning down the X:
///
/// * X centred at (1, 2),
/// * X centred at (1, 3),
/// * X centred at (2, 2), with the even numbered P orientations removed.
pub fn hollow_chessboard_subproblems() -> Result<(Tiling, [Vec<Vec<bool>>; 3])> {
    let tiling = Tiling::new(hollow_chessboard(), pentominoes())?;

    let first = tiling.matrix_without(x_only_at(0, 1));
    let second = tiling.matrix_without(x_only_at(0, 2));
    let centred = x_only_at(1, 1);
    let third = tiling.matrix_without(|piece, placement| {
        centred(piece, placement) || (piece.letter == 'P' && placement.orientation % 2 == 0)
    });

    Ok((tiling, [first, second, third]))
}
