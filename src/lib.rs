// THEORY:
// This file is the main entry point for the `white_knockout` library crate.
// It exposes `make_white_transparent` and its report as the high-level API,
// with the pixel rule, the buffer transform and the PNG I/O kept in
// `core_modules` for callers that want to work on an image already in memory.

pub mod core_modules;
pub mod error;
pub mod transparency;

pub use error::{KnockoutError, Result};
pub use transparency::{KnockoutReport, make_white_transparent};
