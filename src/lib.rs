// ============================================================================
// Quiz Kit Library
// Rounding, bounded random integers and prompted console input
// ============================================================================

//! # Quiz Kit
//!
//! Small building blocks for console math quizzes.
//!
//! ## Features
//!
//! - **Round-half-up rounding** for `f64` and exact `Decimal` values
//! - **Inclusive random integers** from an injectable [`RandomSource`](interfaces::RandomSource)
//! - **Prompted reads** of integers, doubles and lines over any `BufRead`/`Write` pair
//!
//! ## Example
//!
//! ```rust
//! use quiz_kit::prelude::*;
//! use std::io::Cursor;
//!
//! let mut source = SeededRandom::from_seed(3);
//! let a = rand_int_with(&mut source, 1, 10).unwrap();
//! let b = rand_int_with(&mut source, 1, 10).unwrap();
//!
//! let answer = format!("{}\n", a + b);
//! let mut reader = PromptedReader::new(Cursor::new(answer), Vec::new());
//! let guess = reader.get_int(&format!("{a} + {b} = ")).unwrap();
//!
//! assert_eq!(guess, a + b);
//! assert_eq!(round_double(1, 2.0 / 3.0 * 100.0), 66.7);
//! ```

pub mod input;
pub mod interfaces;
#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::input::{InputError, InputResult, PromptedReader, ReaderConfig};
    pub use crate::interfaces::{RandomSource, SeededRandom, SequenceRandom, ThreadRandom};
    pub use crate::numeric::{
        rand_int, rand_int_with, round_decimal, round_double, NumericError, NumericResult,
    };
}
