//! Randomness port for drawing digits and tag fields.

/// Supplies uniformly distributed integers.
///
/// Abstracting randomness lets tests substitute a scripted sequence so the
/// search loop is fully deterministic.
pub trait RandomSource: Send {
    /// Returns a value in `0..bound`. `bound` is never zero.
    fn below(&mut self, bound: u32) -> u32;

    /// Returns a decimal digit in `0..=9`.
    #[allow(clippy::cast_possible_truncation)]
    fn digit(&mut self) -> u8 {
        (self.below(10) % 10) as u8
    }
}
