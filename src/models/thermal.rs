//! Thermal systems models.

pub mod cable;
