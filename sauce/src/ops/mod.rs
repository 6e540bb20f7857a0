//! Core operations.
//!
//! This module contains the logic behind the sauce commands, separated
//! from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;

pub use check::check;
pub use generate::generate;
