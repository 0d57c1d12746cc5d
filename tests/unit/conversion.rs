//! Unit tests for the core conversion through the public API: header line to
//! gene layout, data line to ranked interactions, interactions to output
//! lines.

use coocc2inter::matrix::{convert_row, GeneLayout, RowError};
use coocc2inter::report;

#[test]
fn test_layout_extraction_example() {
    let layout = GeneLayout::from_header("ID,GeneA,GeneB,GeneC", ',');
    assert_eq!(layout.genes(), &["GeneA", "GeneB", "GeneC"]);
}

#[test]
fn test_header_to_row_to_output_lines() {
    let layout = GeneLayout::from_header("ID,B,C,D", ',');
    let result = convert_row(&layout, "A,0.5,,-0.9", ',').unwrap();

    let mut out = Vec::new();
    report::write_header(&mut out).unwrap();
    report::write_interactions(&mut out, &result).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Gene Symbol,Interaction Gene Symbol\nA,D\nA,B\n"
    );
}

#[test]
fn test_tab_parsed_matrix_still_writes_comma_output() {
    let layout = GeneLayout::from_header("gene\tB\tC", '\t');
    let result = convert_row(&layout, "A\t0.2\t0.8", '\t').unwrap();

    let mut out = Vec::new();
    report::write_interactions(&mut out, &result).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "A,C\nA,B\n");
}

#[test]
fn test_empty_header_degenerates_to_empty_results() {
    let layout = GeneLayout::from_header("ID", ',');
    assert!(layout.is_empty());

    let result = convert_row(&layout, "A", ',').unwrap();
    assert!(result.partners.is_empty());

    let mut out = Vec::new();
    report::write_interactions(&mut out, &result).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_corrupt_cell_is_distinguished_from_missing_cell() {
    let layout = GeneLayout::from_header("ID,B,C", ',');

    // Missing cell: fine
    assert!(convert_row(&layout, "A,,0.5", ',').is_ok());

    // Corrupt cell: hard error carrying the offending token
    match convert_row(&layout, "A,abc,0.5", ',') {
        Err(RowError::InvalidStrength { token, column, .. }) => {
            assert_eq!(token, "abc");
            assert_eq!(column, "B");
        }
        other => panic!("expected InvalidStrength, got {:?}", other),
    }
}

#[test]
fn test_repeated_conversion_is_idempotent() {
    let layout = GeneLayout::from_header("ID,B,C,D", ',');
    let first = convert_row(&layout, "A,0.3,-0.3,0.1", ',').unwrap();
    for _ in 0..5 {
        let again = convert_row(&layout, "A,0.3,-0.3,0.1", ',').unwrap();
        assert_eq!(again.subject, first.subject);
        assert_eq!(again.partners, first.partners);
    }
}
