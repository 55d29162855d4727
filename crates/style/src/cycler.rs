use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum StyleError {
    #[error("a style cycler requires at least one value")]
    EmptySequence,
}

/// Assigns a bounded list of style values to an unbounded sequence of shapes
/// by wrapping around the list cyclically.
///
/// The backing sequence is immutable after construction; only the cursor
/// moves, and `advance` never allocates. A single-element sequence is valid
/// and yields that element forever.
#[derive(Debug, Clone)]
pub struct StyleCycler<T> {
    values: Vec<T>,
    cursor: usize,
}

impl<T> StyleCycler<T> {
    /// Build a cycler over `values`; fails on an empty sequence.
    pub fn new(values: Vec<T>) -> Result<Self, StyleError> {
        if values.is_empty() {
            return Err(StyleError::EmptySequence);
        }
        Ok(Self { values, cursor: 0 })
    }

    /// Build a cycler from an optional caller-supplied sequence, falling
    /// back to `fallback` when the sequence is absent or empty.
    pub fn with_fallback(values: Option<Vec<T>>, fallback: &[T]) -> Self
    where
        T: Clone,
    {
        let values = match values {
            Some(v) if !v.is_empty() => v,
            _ => fallback.to_vec(),
        };
        Self { values, cursor: 0 }
    }

    /// Return the next value and move the cursor, wrapping after the last
    /// element.
    pub fn advance(&mut self) -> &T {
        let value = &self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
