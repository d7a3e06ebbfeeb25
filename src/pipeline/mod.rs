//! Dataset-to-exercises conversion.
//!
//! Each record is converted independently: the transforms are pure, so
//! records run in parallel and only the final report is assembled from
//! their outcomes. A record that fails any transform writes nothing.

mod report;

pub use report::{ConvertReport, Problem};

use crate::config::PackageConfig;
use crate::core::TransformError;
use crate::dataset::{load_records, DatasetEntry};
use crate::golden::{write_goldens, GoldenRecord};
use crate::io::{ensure_dir, render_package_json, slugify, Exercise, ExerciseWriter};
use crate::markdown::html_to_markdown;
use crate::progress::{ProgressManager, TEMPLATE_EXERCISES};
use crate::transformers::{stub_from_solution, suite_from_tests};
use anyhow::Result;
use rayon::prelude::*;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub json_dir: PathBuf,
    pub exercise_dir: PathBuf,
    pub golden_file: Option<PathBuf>,
    pub parallel: bool,
    pub package: PackageConfig,
}

/// Which half of a record failed to convert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseFailure {
    Code(TransformError),
    Tests(TransformError),
}

impl ExerciseFailure {
    pub fn error(&self) -> &TransformError {
        match self {
            ExerciseFailure::Code(e) | ExerciseFailure::Tests(e) => e,
        }
    }
}

/// Result of processing one record
#[derive(Debug)]
pub enum Outcome {
    Written { id: String, golden: GoldenRecord },
    Rejected { id: String, failure: ExerciseFailure },
    WriteFailed { id: String, error: anyhow::Error },
}

/// `difficulty` and `title` slugs; an unsluggable title falls back to the
/// record's file name
pub fn exercise_slugs(entry: &DatasetEntry) -> (String, String) {
    let difficulty = slugify(&entry.record.difficulty);
    let title = match slugify(&entry.record.title) {
        slug if slug.is_empty() => entry
            .path
            .file_stem()
            .map(|stem| slugify(&stem.to_string_lossy()))
            .unwrap_or_default(),
        slug => slug,
    };
    (difficulty, title)
}

/// Convert one record into its exercise files, in memory
pub fn build_exercise(
    entry: &DatasetEntry,
    package: &PackageConfig,
) -> std::result::Result<Exercise, ExerciseFailure> {
    let record = &entry.record;
    let stub = stub_from_solution(&record.code).map_err(ExerciseFailure::Code)?;
    let tests = suite_from_tests(&record.tests).map_err(ExerciseFailure::Tests)?;
    let (difficulty_slug, title_slug) = exercise_slugs(entry);

    Ok(Exercise {
        readme: html_to_markdown(&record.instructions),
        package_json: render_package_json(&title_slug, package),
        challenge: entry.raw.clone(),
        difficulty_slug,
        title_slug,
        stub,
        tests,
    })
}

pub fn process_entry(entry: &DatasetEntry, writer: &ExerciseWriter, package: &PackageConfig) -> Outcome {
    let (difficulty, title) = exercise_slugs(entry);
    let id = format!("{difficulty}/{title}");
    let _span = tracing::debug_span!("exercise", id = %id).entered();

    let exercise = match build_exercise(entry, package) {
        Ok(exercise) => exercise,
        Err(failure) => {
            let error = failure.error();
            if error.is_logic_error() {
                tracing::error!("{}: {}", id, error);
            } else {
                tracing::warn!("{}: skipping, {}", id, error);
            }
            return Outcome::Rejected { id, failure };
        }
    };

    match writer.write(&exercise) {
        Ok(_) => Outcome::Written {
            golden: GoldenRecord {
                original_code: entry.record.code.clone(),
                new_code: exercise.stub,
                original_tests: entry.record.tests.clone(),
                new_tests: exercise.tests,
            },
            id,
        },
        Err(error) => {
            tracing::warn!("{}: failed to write exercise, {:#}", id, error);
            Outcome::WriteFailed { id, error }
        }
    }
}

/// Load the dataset, write every convertible exercise, and report on the rest
pub fn run_convert(options: &ConvertOptions, progress: &ProgressManager) -> Result<ConvertReport> {
    let spinner = progress.create_spinner("Loading dataset");
    let (entries, load_failures) = load_records(&options.json_dir)?;
    spinner.finish_and_clear();
    tracing::info!(
        "Loaded {} records from {}",
        entries.len(),
        options.json_dir.display()
    );

    ensure_dir(&options.exercise_dir)?;
    let writer = ExerciseWriter::new(&options.exercise_dir);

    let bar = progress.create_bar(entries.len() as u64, TEMPLATE_EXERCISES);
    bar.set_message("Converting");
    let process = |entry: &DatasetEntry| {
        let outcome = process_entry(entry, &writer, &options.package);
        bar.inc(1);
        outcome
    };
    let outcomes: Vec<Outcome> = if options.parallel {
        entries.par_iter().map(process).collect()
    } else {
        entries.iter().map(process).collect()
    };
    bar.finish_and_clear();

    let mut report = ConvertReport::default();
    for failure in load_failures {
        tracing::warn!("{}: {:#}", failure.path.display(), failure.error);
        report.load_failures.push(Problem::new(
            failure.path.display().to_string(),
            format!("{:#}", failure.error),
        ));
    }
    for outcome in outcomes {
        report.record(outcome);
    }

    if let Some(golden_file) = &options.golden_file {
        write_goldens(golden_file, &report.goldens)?;
        tracing::info!(
            "Wrote {} goldens to {}",
            report.goldens.len(),
            golden_file.display()
        );
    }

    Ok(report)
}
