//! High-level library API: drive the line pipeline over readers, files, and
//! whole directories of input files. Prefer these entrypoints over the
//! low-level `core` functions when integrating romanwords into a program
//! that owns its own I/O.
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::params::ProcessingParams;
use crate::core::processing::pipeline::process_line;
use crate::error::{Error, Result};
use crate::io::write_outcome;

/// Line and file counts for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Lines that evaluated to a number
    pub processed: usize,
    /// Lines answered with the invalid-format diagnostic
    pub invalid: usize,
    /// Blank lines (when skipped) or non-input directory entries
    pub skipped: usize,
    /// Files that failed to process in batch mode
    pub errors: usize,
}

impl BatchReport {
    pub fn merge(&mut self, other: BatchReport) {
        self.processed += other.processed;
        self.invalid += other.invalid;
        self.skipped += other.skipped;
        self.errors += other.errors;
    }
}

/// Stream every line of `reader` through the pipeline into `writer`.
pub fn process_reader_to_writer<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    params: &ProcessingParams,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let raw = buf.strip_suffix(b"\n").unwrap_or(buf.as_slice());
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        // Non-UTF-8 bytes become U+FFFD, which the sanitizer drops
        let line = String::from_utf8_lossy(raw);

        if params.skip_blank && line.trim().is_empty() {
            report.skipped += 1;
            continue;
        }

        let outcome = process_line(&line);
        if outcome.is_valid() {
            report.processed += 1;
        } else {
            report.invalid += 1;
        }
        write_outcome(&mut writer, &outcome, params.format)?;
    }

    writer.flush()?;
    debug!(
        "Stream done: processed={} invalid={} skipped={}",
        report.processed, report.invalid, report.skipped
    );
    Ok(report)
}

/// Process the lines of `input` into a newly created `output` file.
/// Fails with `InvalidArgument` if `output` is the input file itself.
pub fn process_file_to_path(
    input: &Path,
    output: &Path,
    params: &ProcessingParams,
) -> Result<BatchReport> {
    if is_same_file(input, output) {
        return Err(Error::InvalidArgument {
            arg: "output",
            value: output.display().to_string(),
        });
    }
    let reader = BufReader::new(File::open(input)?);
    let writer = BufWriter::new(File::create(output)?);
    process_reader_to_writer(reader, writer, params)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Return the `.txt` files directly inside `input_dir`, sorted by path
pub fn iterate_input_files(input_dir: &Path) -> Result<std::vec::IntoIter<PathBuf>> {
    let (files, _) = scan_input_dir(input_dir)?;
    Ok(files.into_iter())
}

/// Sorted input files plus the number of other entries
fn scan_input_dir(input_dir: &Path) -> Result<(Vec<PathBuf>, usize)> {
    let mut files = Vec::new();
    let mut others = 0;
    for entry in std::fs::read_dir(input_dir)? {
        let path = entry?.path();
        if is_input_file(&path) {
            files.push(path);
        } else {
            debug!("Skipping non-input entry: {:?}", path);
            others += 1;
        }
    }
    files.sort();
    Ok((files, others))
}

fn is_input_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
}

/// Output path inside `output_dir` for a given input file
pub fn output_path_for(input: &Path, output_dir: &Path, params: &ProcessingParams) -> Result<PathBuf> {
    let stem = input.file_stem().ok_or_else(|| Error::InvalidArgument {
        arg: "input",
        value: input.display().to_string(),
    })?;
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(params.format.extension());
    Ok(output_dir.join(name))
}

/// Process every `.txt` file in `input_dir` into `output_dir` using `params`.
/// If `continue_on_error` is true, failures are counted in the report and processing continues; otherwise, the first error is returned.
pub fn process_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &ProcessingParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    std::fs::create_dir_all(output_dir)?;

    let (files, others) = scan_input_dir(input_dir)?;
    let mut report = BatchReport {
        skipped: others,
        ..BatchReport::default()
    };

    for path in files {
        let result = output_path_for(&path, output_dir, params)
            .and_then(|output_path| {
                info!("Processing: {:?} -> {:?}", path, output_path);
                process_file_to_path(&path, &output_path, params)
            });

        match result {
            Ok(file_report) => report.merge(file_report),
            Err(e) => {
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
                warn!("Error processing {:?}: {}", path, e);
            }
        }
    }

    Ok(report)
}
