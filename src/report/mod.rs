//! Interaction table output.
//!
//! The output format is a two-column table, one line per interaction pair.
//! Its delimiter is a comma for both the header and the data lines no matter
//! which delimiter the input matrix was parsed with.

use std::io::{self, Write};

use crate::matrix::Interactions;

/// Written once before any data lines.
pub const OUTPUT_HEADER: &str = "Gene Symbol,Interaction Gene Symbol";

/// Fixed output delimiter, independent of the input delimiter.
pub const OUTPUT_DELIMITER: char = ',';

pub fn write_header<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "{}", OUTPUT_HEADER)
}

/// Writes one `<subject>,<partner>` line per partner, in ranked order.
///
/// A result with no partners produces no output lines; reporting such genes
/// is the caller's concern.
pub fn write_interactions<W: Write>(writer: &mut W, result: &Interactions) -> io::Result<()> {
    for partner in &result.partners {
        writeln!(
            writer,
            "{}{}{}",
            result.subject, OUTPUT_DELIMITER, partner
        )?;
    }
    Ok(())
}
