//! Input-extension conventions: which delimiter to parse with and where the
//! converted table goes by default.

use std::path::{Path, PathBuf};

/// Extension of `path`, without the dot. Missing extensions degrade to "".
pub fn input_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Parse delimiter, selected by file extension convention: tab for
/// `.tsv`/`.tsvc` inputs, comma for everything else.
pub fn parse_delimiter(path: &Path) -> char {
    match input_extension(path).as_str() {
        "tsv" | "tsvc" => '\t',
        _ => ',',
    }
}

/// Output extension: the input extension with `c` appended, forcing the
/// output to be interpreted as a 'columns-defined' file. Inputs that already
/// carry `csvc`/`tsvc` are kept as-is.
pub fn output_extension(input_ext: &str) -> String {
    if input_ext == "csvc" || input_ext == "tsvc" {
        input_ext.to_string()
    } else {
        format!("{}c", input_ext)
    }
}

/// Default output path: `<input stem>-interactions.<output extension>`,
/// next to the input file.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = output_extension(&input_extension(input));
    input.with_file_name(format!("{}-interactions.{}", stem, ext))
}
