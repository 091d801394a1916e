// ============================================================================
// Interfaces Module
// Contains the trait definitions injected into the numeric utilities
// ============================================================================

mod random_source;

pub use random_source::{RandomSource, SeededRandom, SequenceRandom, ThreadRandom};
