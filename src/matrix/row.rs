//! Row conversion: one matrix data line into a ranked interaction list.
//!
//! Each row is processed independently and statelessly aside from read-only
//! access to the [`GeneLayout`], so callers are free to convert rows in
//! parallel as long as output order is restored before writing.

use thiserror::Error;

use super::layout::GeneLayout;

/// Errors produced while converting a single data row.
///
/// Both variants are deterministic functions of the input data; there is
/// nothing transient to retry. The caller decides whether to abort the whole
/// file or skip the row.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RowError {
    /// A non-empty cell failed to parse as a floating-point number. An empty
    /// cell means "no interaction"; an unparsable one means corrupt data, and
    /// the two are never conflated.
    #[error("invalid interaction strength '{token}' for gene '{subject}' in column '{column}'")]
    InvalidStrength {
        subject: String,
        column: String,
        token: String,
    },
    /// The row carries more value fields than the header defined columns.
    /// The legacy tool left this undefined (it would read out of bounds);
    /// here it is a hard schema error.
    #[error("row for gene '{subject}' has {values} value fields but the layout has {columns} columns")]
    LayoutMismatch {
        subject: String,
        values: usize,
        columns: usize,
    },
}

/// One gene and its interaction partners, ordered by decreasing interaction
/// strength. Strength values are consumed as sort keys and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interactions {
    pub subject: String,
    pub partners: Vec<String>,
}

impl Interactions {
    pub fn has_partners(&self) -> bool {
        !self.partners.is_empty()
    }
}

/// Checks the positional schema contract between the header and a data row
/// before any cell is parsed.
fn validate(layout: &GeneLayout, subject: &str, values: &[&str]) -> Result<(), RowError> {
    if values.len() > layout.len() {
        return Err(RowError::LayoutMismatch {
            subject: subject.to_string(),
            values: values.len(),
            columns: layout.len(),
        });
    }
    Ok(())
}

/// Converts one data line into its [`Interactions`].
///
/// Field 0 is the subject gene symbol. Each following field at position `i`
/// is aligned to `layout.gene(i)`: empty fields are skipped, everything else
/// must parse as `f64` and contributes `(gene, |value|)` as a candidate.
/// Candidates are sorted by strength descending; the sort is stable, so equal
/// strengths keep their column order. That tie policy makes repeated runs
/// byte-identical.
pub fn convert_row(
    layout: &GeneLayout,
    line: &str,
    delimiter: char,
) -> Result<Interactions, RowError> {
    let mut fields = line.split(delimiter);
    let subject = fields.next().unwrap_or("").to_string();
    let values: Vec<&str> = fields.collect();

    validate(layout, &subject, &values)?;

    // Transient (column, strength) pairs; the strength never escapes the sort.
    let mut candidates: Vec<(usize, f64)> = Vec::with_capacity(values.len());
    for (i, raw) in values.iter().enumerate() {
        if raw.is_empty() {
            // No interaction recorded for this column
            continue;
        }
        let strength: f64 = raw.parse().map_err(|_| RowError::InvalidStrength {
            subject: subject.clone(),
            column: layout.gene(i).to_string(),
            token: (*raw).to_string(),
        })?;
        candidates.push((i, strength.abs()));
    }

    // Strength DESC, column order on ties (stable sort). total_cmp keeps the
    // ordering deterministic even for non-finite strengths.
    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

    let partners = candidates
        .into_iter()
        .map(|(i, _)| layout.gene(i).to_string())
        .collect();

    Ok(Interactions { subject, partners })
}
