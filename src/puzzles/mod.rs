//! Encoders turning puzzles into exact cover matrices, and decoders turning
//! the solutions back into puzzle answers.

pub mod pentomino;
pub mod sudoku;
