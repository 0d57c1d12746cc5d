//! Gene layout extraction from the matrix header line.
//!
//! The header of a co-occurrence matrix names the column genes. The first
//! field is the identifier column label and carries no gene information; every
//! field after it maps one data-row position to a gene symbol.

/// Ordered column gene symbols. Index `i` corresponds to the `(i + 1)`-th
/// delimited field of a data row (field 0 is the row's own subject gene).
///
/// Built once per input file and passed by reference into every row
/// conversion; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneLayout {
    genes: Vec<String>,
}

impl GeneLayout {
    /// Splits the header line on `delimiter`, drops the identifier column
    /// label and keeps every following token verbatim, in order.
    ///
    /// No trimming, no case folding, no deduplication. A header with a single
    /// token (or an empty line) yields an empty layout.
    pub fn from_header(line: &str, delimiter: char) -> Self {
        let mut tokens = line.split(delimiter);
        tokens.next();
        Self {
            genes: tokens.map(str::to_string).collect(),
        }
    }

    /// Builds a layout directly from gene symbols. Used by tests and callers
    /// that already have the column order.
    pub fn from_genes<I, S>(genes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            genes: genes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Column gene symbol at position `i` (0-based among the value fields).
    pub fn gene(&self, i: usize) -> &str {
        &self.genes[i]
    }

    pub fn genes(&self) -> &[String] {
        &self.genes
    }
}
