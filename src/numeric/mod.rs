// ============================================================================
// Numeric Module
// Rounding and bounded random integers for quiz questions
// ============================================================================
//
// This module provides:
// - round_double / round_decimal: round-half-up to a number of decimal places
// - rand_int / rand_int_with: uniform integers in an inclusive range
// - NumericError: Error type for the range precondition
//
// Design principles:
// - Stateless functions; randomness is drawn from an injectable RandomSource
// - Fallible operations return Result (no panics)

mod errors;
mod random;
mod rounding;

pub use errors::{NumericError, NumericResult};
pub use random::{rand_int, rand_int_with};
pub use rounding::{round_decimal, round_double};
