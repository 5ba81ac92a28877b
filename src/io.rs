//! Plain text matrices and solution lists.
//!
//! A matrix file has one row per line with whitespace separated cells,
//! written as `0`/`1` or as a boolean word (`t`, `true`, `F`, `FALSE`, ...).
//! Blank lines are ignored. A solution file has one solution per line,
//! listing its row indices separated by single spaces.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Parses a textual matrix. Only the cells are checked here; the shape is
/// validated when the matrix is built.
pub fn parse_matrix(text: &str) -> Result<Vec<Vec<bool>>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line, cells)| {
            cells
                .split_whitespace()
                .enumerate()
                .map(|(column, token)| {
                    parse_cell(token).ok_or_else(|| Error::Parse {
                        line: line + 1,
                        column: column + 1,
                        token: token.to_owned(),
                    })
                })
                .collect()
        })
        .collect()
}

fn parse_cell(token: &str) -> Option<bool> {
    match token {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}

pub fn load_matrix(path: impl AsRef<Path>) -> Result<Vec<Vec<bool>>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })?;

    parse_matrix(&text)
}

/// Writes a matrix as `0`/`1` cells, the format [`parse_matrix`] reads.
pub fn format_matrix(matrix: &[Vec<bool>]) -> String {
    matrix
        .iter()
        .map(|row| {
            let cells = row
                .iter()
                .map(|&cell| if cell { "1" } else { "0" })
                .collect::<Vec<_>>()
                .join(" ");
            cells + "\n"
        })
        .collect()
}

/// Formats solutions one per line. Every line, including the last, ends
/// with a newline; no solutions give an empty string.
pub fn format_solutions(solutions: &[Vec<usize>]) -> String {
    solutions
        .iter()
        .map(|solution| {
            let rows = solution
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            rows + "\n"
        })
        .collect()
}

/// Reads a solution file written by [`save_solutions`].
pub fn parse_solutions(text: &str) -> Result<Vec<Vec<usize>>> {
    text.lines()
        .enumerate()
        .map(|(line, rows)| {
            rows.split_whitespace()
                .enumerate()
                .map(|(column, token)| {
                    token.parse::<usize>().ok().ok_or_else(|| Error::Parse {
                        line: line + 1,
                        column: column + 1,
                        token: token.to_owned(),
                    })
                })
                .collect()
        })
        .collect()
}

pub fn save_matrix(path: impl AsRef<Path>, matrix: &[Vec<bool>]) -> Result<()> {
    write(path.as_ref(), &format_matrix(matrix))
}

pub fn save_solutions(path: impl AsRef<Path>, solutions: &[Vec<usize>]) -> Result<()> {
    write(path.as_ref(), &format_solutions(solutions))
}

pub fn load_solutions(path: impl AsRef<Path>) -> Result<Vec<Vec<usize>>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })?;

    parse_solutions(&text)
}

fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| Error::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_cells() {
        let matrix = parse_matrix("1 0 true\n\nF T 0\r\n").unwrap();

        assert_eq!(
            vec![vec![true, false, true], vec![false, true, false]],
            matrix
        );
    }

    #[test]
    fn test_parse_reports_position() {
        let err = parse_matrix("1 0\n0 2\n").unwrap_err();

        match err {
            Error::Parse {
                line,
                column,
                token,
            } => {
                assert_eq!(2, line);
                assert_eq!(2, column);
                assert_eq!("2", token);
            }
            other => unreachable!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_format_solutions() {
        assert_eq!("0 3\n1 2\n", format_solutions(&[vec![0, 3], vec![1, 2]]));
        assert_eq!("\n", format_solutions(&[vec![]]));
        assert_eq!("", format_solutions(&[]));
    }

    #[test]
    fn test_parse_solutions_keeps_empty_solution() {
        assert_eq!(
            vec![vec![3, 0, 4], vec![]],
            parse_solutions("3 0 4\n\n").unwrap()
        );
    }
}
