pub mod convert;
pub mod matrix;
pub mod report;
