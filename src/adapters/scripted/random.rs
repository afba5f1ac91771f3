//! Scripted adapter for the `RandomSource` port.

use crate::ports::RandomSource;

/// Replays a fixed list of values, wrapping around at the end.
///
/// Each value is reduced modulo the requested bound.
pub struct ScriptedSource {
    values: Vec<u32>,
    cursor: usize,
}

impl ScriptedSource {
    /// Creates a source replaying `values`. An empty list always yields zero.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, cursor: 0 }
    }

    /// Source that always yields `value % bound`.
    #[must_use]
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ScriptedSource {
    fn below(&mut self, bound: u32) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % bound.max(1)
    }
}
