// ============================================================================
// Random Integers
// Uniform integers in an inclusive range from a [0, 1) source
// ============================================================================

use super::errors::{NumericError, NumericResult};
use crate::interfaces::{RandomSource, ThreadRandom};

/// Return a uniformly distributed integer in `[min, max]`, inclusive.
///
/// Draws from the thread-local generator. Use [`rand_int_with`] to supply
/// a seeded or scripted source.
///
/// # Errors
/// Returns `InvalidArgument` if `min > max`.
pub fn rand_int(min: i32, max: i32) -> NumericResult<i32> {
    rand_int_with(&mut ThreadRandom::new(), min, max)
}

/// Return a uniformly distributed integer in `[min, max]` drawn from `source`.
///
/// The unit sample is scaled by the span and floored. The span is computed
/// in i64, so `rand_int_with(src, i32::MIN, i32::MAX)` is valid.
///
/// # Errors
/// Returns `InvalidArgument` if `min > max`.
///
/// # Example
/// ```
/// use quiz_kit::interfaces::SequenceRandom;
/// use quiz_kit::numeric::rand_int_with;
///
/// let mut source = SequenceRandom::new(vec![0.0, 0.5, 0.99]);
/// assert_eq!(rand_int_with(&mut source, 1, 10).unwrap(), 1);
/// assert_eq!(rand_int_with(&mut source, 1, 10).unwrap(), 6);
/// assert_eq!(rand_int_with(&mut source, 1, 10).unwrap(), 10);
/// ```
pub fn rand_int_with<S>(source: &mut S, min: i32, max: i32) -> NumericResult<i32>
where
    S: RandomSource + ?Sized,
{
    if min > max {
        tracing::debug!(min, max, "rand_int rejected inverted range");
        return Err(NumericError::InvalidArgument { min, max });
    }

    let span = i64::from(max) - i64::from(min) + 1;
    let sample = source.next_f64();

    // Keep a misbehaving source inside [min, max].
    let offset = ((sample * span as f64).floor() as i64).clamp(0, span - 1);
    let value = (i64::from(min) + offset) as i32;

    tracing::trace!(source = source.name(), min, max, sample, value, "rand_int");
    Ok(value)
}
