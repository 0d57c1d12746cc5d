//! The conversion pipeline: CLI arguments, path/delimiter derivation and the
//! file-level driver that owns all I/O around the core row conversion.

pub mod args;
pub mod paths;
pub mod run;

pub use args::ConvertArgs;
pub use run::run;
