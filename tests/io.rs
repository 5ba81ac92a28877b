//! Matrix and solution files on disk.

use std::fs;

use dance::io::{load_matrix, load_solutions, save_matrix, save_solutions};
use dance::{DancingLinks, Error};
use tempfile::TempDir;

#[test]
fn test_solve_file_to_file() {
    let dir = TempDir::new().unwrap();
    let problem = dir.path().join("problem");
    let solution = dir.path().join("solution");

    fs::write(
        &problem,
        "0 0 1 0 1 1 0\n\
         1 0 0 1 0 0 1\n\
         0 1 1 0 0 1 0\n\
         1 0 0 1 0 0 0\n\
         0 1 0 0 0 0 1\n\
         0 0 0 1 1 0 1\n",
    )
    .unwrap();

    let matrix = load_matrix(&problem).unwrap();
    let mut links = DancingLinks::new(&matrix).unwrap();
    save_solutions(&solution, &links.all_solutions().solutions).unwrap();

    assert_eq!("3 0 4\n", fs::read_to_string(&solution).unwrap());
    assert_eq!(vec![vec![3, 0, 4]], load_solutions(&solution).unwrap());
}

#[test]
fn test_no_solutions_writes_empty_file() {
    let dir = TempDir::new().unwrap();
    let solution = dir.path().join("solution");

    save_solutions(&solution, &[]).unwrap();

    assert_eq!("", fs::read_to_string(&solution).unwrap());
}

#[test]
fn test_saved_matrix_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("matrix");
    let matrix = vec![vec![true, false, true], vec![false, false, true]];

    save_matrix(&path, &matrix).unwrap();

    assert_eq!("1 0 1\n0 0 1\n", fs::read_to_string(&path).unwrap());
    assert_eq!(matrix, load_matrix(&path).unwrap());
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist");

    match load_matrix(&path) {
        Err(Error::FileSystem {
            operation, path: p, ..
        }) => {
            assert_eq!("read", operation);
            assert_eq!(path, p);
        }
        other => unreachable!("unexpected result {other:?}"),
    }
}

#[test]
fn test_ragged_file_fails_at_build() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ragged");
    fs::write(&path, "1 0 1\n1 0\n").unwrap();

    let matrix = load_matrix(&path).unwrap();
    let err = DancingLinks::new(&matrix).unwrap_err();

    assert!(err.to_string().starts_with("malformed matrix"));
}
