//! Orchestration: derivative generation, PNG conversion, exact resizes,
//! and folder batches.
//!
//! Every operation here takes an [`ImageBackend`] and a [`Console`], so the
//! logic is testable with a recording mock and the quiet flag never lives
//! in global state.
//!
//! ## Failure isolation
//!
//! Single-file operations propagate their error to the caller. Folder
//! batches isolate failures per file: one corrupt image is reported and
//! counted, the remaining files still process. Within one Android file, a
//! bucket-directory creation failure abandons that file's remaining
//! derivatives only.
//!
//! ## Parallelism
//!
//! Batches fan out across files with rayon — every file's derivative set
//! touches disjoint output paths, so files are independent. Outcomes are
//! collected and failures reported in listing order once the batch ends.

use crate::imaging::{BackendError, ConvertParams, ImageBackend, ResizeParams};
use crate::output::{
    Console, format_derivative_line, format_file_error, format_file_header, format_skip_line,
};
use crate::placement;
use crate::profile::{self, Profile};
use crate::scaling::plan_derivatives;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
    #[error("Could not create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Eligible and fully processed; carries the number of outputs written.
    Processed { outputs: usize },
    /// Rejected by an eligibility gate. Policy, not an error.
    Skipped,
}

/// Tally of a folder batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl std::fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} processed, {} skipped, {} failed",
            self.processed, self.skipped, self.failed
        )
    }
}

/// Generate the full derivative set for a single file.
///
/// Skips (and reports) files the profile does not select. For Android, each
/// density bucket directory is created before its derivative is written;
/// a creation failure surfaces the attempted path and ends this file's run.
pub fn process_file(
    backend: &impl ImageBackend,
    console: &Console,
    input_dir: &Path,
    file_name: &str,
    profile: Profile,
    exclusions: &[String],
) -> Result<FileOutcome, ProcessError> {
    if let Some(reason) = rejection_reason(profile, file_name) {
        console.info(&format_skip_line(file_name, reason));
        return Ok(FileOutcome::Skipped);
    }

    let source = input_dir.join(file_name);
    let dims = backend.identify(&source)?;
    console.info(&format_file_header(file_name, dims.width, dims.height));

    let plan = plan_derivatives((dims.width, dims.height), profile, exclusions);
    for derivative in &plan {
        let output = placement::derivative_path(input_dir, file_name, profile, &derivative.label);

        if profile == Profile::Android {
            // Bucket directories are siblings of the input dir and may not
            // exist yet. create_dir_all is a no-op when they already do.
            if let Some(bucket) = output.parent() {
                std::fs::create_dir_all(bucket).map_err(|source| ProcessError::OutputDir {
                    path: bucket.to_path_buf(),
                    source,
                })?;
            }
        }

        backend.resize(&ResizeParams {
            source: source.clone(),
            output: output.clone(),
            width: derivative.width,
            height: derivative.height,
        })?;
        console.info(&format_derivative_line(
            &derivative.label,
            derivative.width,
            derivative.height,
            &output.display().to_string(),
        ));
    }

    Ok(FileOutcome::Processed {
        outputs: plan.len(),
    })
}

/// Generate derivatives for every eligible file in a folder.
pub fn process_folder(
    backend: &impl ImageBackend,
    console: &Console,
    folder: &Path,
    profile: Profile,
    exclusions: &[String],
) -> Result<BatchSummary, ProcessError> {
    console.info(&format!("Processing folder: {}", folder.display()));
    run_batch(console, folder, |file_name| {
        process_file(backend, console, folder, file_name, profile, exclusions)
    })
}

/// Re-encode one file as `<stem>.png` next to the input.
///
/// A PNG input is re-encoded over itself; anything else gains a `.png`
/// sibling and the original stays untouched.
pub fn convert_file(
    backend: &impl ImageBackend,
    console: &Console,
    input_dir: &Path,
    file_name: &str,
) -> Result<FileOutcome, ProcessError> {
    if !profile::has_accepted_extension(file_name) {
        console.info(&format_skip_line(file_name, "extension not accepted"));
        return Ok(FileOutcome::Skipped);
    }

    console.info(&format!("Converting file: {file_name}"));
    backend.convert_to_png(&ConvertParams {
        source: input_dir.join(file_name),
        output: placement::converted_png_path(input_dir, file_name),
    })?;
    Ok(FileOutcome::Processed { outputs: 1 })
}

/// Convert every accepted file in a folder to PNG.
pub fn convert_folder(
    backend: &impl ImageBackend,
    console: &Console,
    folder: &Path,
) -> Result<BatchSummary, ProcessError> {
    console.info(&format!("Processing folder: {}", folder.display()));
    run_batch(console, folder, |file_name| {
        convert_file(backend, console, folder, file_name)
    })
}

/// Resize one file to exactly `width`×`height`, overwriting it in place.
pub fn resize_file_exact(
    backend: &impl ImageBackend,
    console: &Console,
    input_dir: &Path,
    file_name: &str,
    width: u32,
    height: u32,
) -> Result<FileOutcome, ProcessError> {
    if !profile::has_accepted_extension(file_name) {
        console.info(&format_skip_line(file_name, "extension not accepted"));
        return Ok(FileOutcome::Skipped);
    }

    console.info(&format_file_header(file_name, width, height));
    let path = input_dir.join(file_name);
    backend.resize(&ResizeParams {
        source: path.clone(),
        output: path,
        width,
        height,
    })?;
    Ok(FileOutcome::Processed { outputs: 1 })
}

/// Resize every accepted file in a folder to exactly `width`×`height`.
pub fn resize_folder_exact(
    backend: &impl ImageBackend,
    console: &Console,
    folder: &Path,
    width: u32,
    height: u32,
) -> Result<BatchSummary, ProcessError> {
    console.info(&format!("Processing folder: {}", folder.display()));
    run_batch(console, folder, |file_name| {
        resize_file_exact(backend, console, folder, file_name, width, height)
    })
}

/// Why a file is not selected for derivative generation, if it isn't.
fn rejection_reason(profile: Profile, file_name: &str) -> Option<&'static str> {
    if !profile::has_accepted_extension(file_name) {
        return Some("extension not accepted");
    }
    if profile::is_nine_patch(file_name) {
        return Some("NinePatch files are never resized");
    }
    if !profile.selects(file_name) {
        return Some("file name has no @3x marker");
    }
    None
}

/// Flat, sorted listing of the file names in a folder.
fn list_file_names(folder: &Path) -> Result<Vec<String>, ProcessError> {
    if !folder.is_dir() {
        return Err(ProcessError::NotADirectory(folder.to_path_buf()));
    }

    let mut names = Vec::new();
    for entry in walkdir::WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) => names.push(name.to_string()),
            None => continue,
        }
    }
    Ok(names)
}

/// Run a per-file operation across a folder with per-file failure isolation.
///
/// Files process in parallel; outcomes are collected and failures reported
/// in listing order afterwards, so one bad file never aborts the batch.
fn run_batch<F>(console: &Console, folder: &Path, op: F) -> Result<BatchSummary, ProcessError>
where
    F: Fn(&str) -> Result<FileOutcome, ProcessError> + Sync,
{
    let names = list_file_names(folder)?;

    let outcomes: Vec<(String, Result<FileOutcome, ProcessError>)> = names
        .into_par_iter()
        .map(|name| {
            let result = op(&name);
            (name, result)
        })
        .collect();

    let mut summary = BatchSummary::default();
    for (name, result) in outcomes {
        match result {
            Ok(FileOutcome::Processed { .. }) => summary.processed += 1,
            Ok(FileOutcome::Skipped) => summary.skipped += 1,
            Err(err) => {
                summary.failed += 1;
                console.error(&format_file_error(&name, &err.to_string()));
            }
        }
    }
    console.info(&format!("Done: {summary}"));
    Ok(summary)
}
