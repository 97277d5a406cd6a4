//! Match values produced by extraction

/// A concept occurrence found in a token stream
///
/// `start` is the 0-based index of the first matched token in the stream
/// given to the extraction call. `tokens` equals the dictionary concept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConceptMatch<T = String> {
    /// Index of the first matched token
    pub start: usize,
    /// Matched tokens, equal to the concept
    pub tokens: Vec<T>,
}

impl<T> ConceptMatch<T> {
    /// Create a match
    pub fn new(start: usize, tokens: Vec<T>) -> Self {
        Self { start, tokens }
    }

    /// Number of matched tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the match spans no tokens
    ///
    /// Extraction never yields such a match; provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Exclusive end index
    pub fn end(&self) -> usize {
        self.start + self.tokens.len()
    }

    /// Index of the token that completed the match
    pub fn completion_index(&self) -> usize {
        self.end().saturating_sub(1)
    }

    /// Split into `(start, tokens)`
    pub fn into_parts(self) -> (usize, Vec<T>) {
        (self.start, self.tokens)
    }
}

impl<T> From<(usize, Vec<T>)> for ConceptMatch<T> {
    fn from((start, tokens): (usize, Vec<T>)) -> Self {
        Self::new(start, tokens)
    }
}
