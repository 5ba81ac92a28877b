#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

use js_sys::Array;
use wasm_bindgen::prelude::*;

use crate::config::ColumnSelection;
use crate::iter::IntoSolutions;
use crate::links::DancingLinks;
use crate::puzzles::sudoku;

/// Collects sparse rows, each the list of column indices it covers.
#[wasm_bindgen]
#[derive(Default)]
pub struct SolverBuilder {
    rows: Vec<Vec<usize>>,
    columns: Option<usize>,
    selection: ColumnSelection,
}

#[wasm_bindgen]
impl SolverBuilder {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, row: Vec<usize>) {
        self.rows.push(row);
    }

    /// Fixes the column count. Without it, the largest index used plus one
    /// is taken.
    pub fn set_columns(&mut self, columns: usize) {
        self.columns = Some(columns);
    }

    pub fn set_greedy(&mut self, greedy: bool) {
        self.selection = ColumnSelection::from_greedy(greedy);
    }

    pub fn build(self) -> Result<Solver, JsError> {
        let columns = self.columns.unwrap_or_else(|| {
            self.rows
                .iter()
                .flatten()
                .max()
                .map_or(0, |&col| col + 1)
        });

        let links = DancingLinks::from_sparse(columns, &self.rows)?.with_selection(self.selection);

        Ok(Solver {
            solutions: links.into_solutions(),
        })
    }
}

/// Hands solutions to JavaScript one at a time, searching only as far as
/// the next one.
#[wasm_bindgen]
pub struct Solver {
    solutions: IntoSolutions,
}

#[wasm_bindgen]
impl Solver {
    /// The next solution, or an empty array once they are used up.
    pub fn next_solution(&mut self) -> Array {
        into_js_array(self.solutions.next().unwrap_or_default())
    }

    pub async fn all_solutions(self) -> Array {
        self.solutions.map(into_js_array).collect()
    }
}

fn into_js_array<T>(vec: Vec<T>) -> Array
where
    JsValue: From<T>,
{
    vec.into_iter().map(JsValue::from).collect()
}

/// The exact cover rows of an empty K×K sudoku, each as its covered column
/// indices, ready for [`SolverBuilder::add_row`].
#[wasm_bindgen]
pub fn sudoku_rows(k: usize) -> Result<Array, JsError> {
    Ok(sudoku::sparse_cover(k)?
        .into_iter()
        .map(into_js_array)
        .collect())
}
