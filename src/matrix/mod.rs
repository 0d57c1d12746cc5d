//! Core co-occurrence matrix model: the column layout derived from the header
//! line and the per-row conversion into ranked interactions.

pub mod layout;
pub mod row;

pub use layout::GeneLayout;
pub use row::{convert_row, Interactions, RowError};
