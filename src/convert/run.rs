//! File-level conversion driver.
//!
//! Owns everything around the core row conversion: reading the matrix,
//! building the gene layout from the header, converting rows in parallel
//! (input order is restored before writing, so each subject's block stays
//! contiguous and cross-row order matches the input), prompting before
//! overwriting an existing output file and writing the interaction table.

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::matrix::{convert_row, GeneLayout, Interactions};
use crate::report;

use super::args::ConvertArgs;
use super::paths::{default_output_path, parse_delimiter};

pub fn run(args: ConvertArgs) -> Result<()> {
    let num_threads = if args.num_threads == 0 {
        num_cpus::get()
    } else {
        args.num_threads
    };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .context("Failed to build thread pool")?;

    let delimiter = parse_delimiter(&args.input);
    let out_path = args
        .out
        .clone()
        .unwrap_or_else(|| default_output_path(&args.input));

    if !args.force && out_path.exists() && !confirm_overwrite(&out_path)? {
        eprintln!("Skipping file '{}'", args.input.display());
        return Ok(());
    }

    let input = File::open(&args.input).with_context(|| {
        format!(
            "File '{}' couldn't be opened. Either it doesn't exist, or you don't have permissions to read it.",
            args.input.display()
        )
    })?;
    let mut lines = BufReader::new(input).lines();

    let header = match lines.next() {
        Some(line) => line.context("Failed to read the header line")?,
        None => bail!(
            "Input file '{}' is empty: there is no header line to derive the gene layout from",
            args.input.display()
        ),
    };
    let layout = GeneLayout::from_header(&header, delimiter);

    if args.verbose {
        eprintln!(
            "[INFO] gene layout: {} columns, delimiter={:?}",
            layout.len(),
            delimiter
        );
    }

    let rows: Vec<String> = lines
        .collect::<io::Result<_>>()
        .context("Failed to read the input table")?;

    let bar = ProgressBar::new(rows.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len}")
            .unwrap(),
    );

    // Rows are independent; parallel conversion, input order restored by collect.
    let results: Vec<Interactions> = pool.install(|| {
        rows.par_iter()
            .enumerate()
            .map(|(idx, line)| {
                let result = convert_row(&layout, line, delimiter)
                    .with_context(|| format!("line {} of '{}'", idx + 2, args.input.display()));
                bar.inc(1);
                result
            })
            .collect::<Result<_>>()
    })?;
    bar.finish_and_clear();

    let out_file = File::create(&out_path)
        .with_context(|| format!("Couldn't open the output file '{}'", out_path.display()))?;
    let mut writer = BufWriter::new(out_file);

    report::write_header(&mut writer)?;
    for result in &results {
        if result.has_partners() {
            report::write_interactions(&mut writer, result)?;
        } else if args.verbose {
            // This gene doesn't interact with any other gene. Skipping it.
            println!(
                "The input table does not contain interactions for gene '{}'",
                result.subject
            );
        }
    }
    writer.flush()?;

    println!("The output file is located at '{}'", out_path.display());
    Ok(())
}

/// Asks on stdout whether an existing output file may be overwritten and
/// reads one line from stdin. Only a response starting with 'y'/'Y' proceeds.
fn confirm_overwrite(path: &Path) -> Result<bool> {
    print!(
        "File '{}' already exists. Do you wish to override it? [Y/n] ",
        path.display()
    );
    io::stdout().flush()?;
    let mut response = String::new();
    io::stdin()
        .read_line(&mut response)
        .context("Failed to read the response")?;
    Ok(matches!(
        response.trim_start().chars().next(),
        Some('y') | Some('Y')
    ))
}
