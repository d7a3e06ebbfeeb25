use crate::cli::setup::{configure_thread_pool, get_worker_count};
use crate::config::KataForgeConfig;
use crate::pipeline::{run_convert, ConvertOptions, ConvertReport};
use crate::progress::{ProgressConfig, ProgressManager};
use anyhow::Result;
use std::path::PathBuf;

/// `convert` flags; anything left `None` comes from the configuration file
#[derive(Debug, Clone, Default)]
pub struct ConvertConfig {
    pub json_dir: Option<PathBuf>,
    pub exercise_dir: Option<PathBuf>,
    pub golden_file: Option<PathBuf>,
    pub jobs: Option<usize>,
    pub no_parallel: bool,
    pub quiet: bool,
}

impl ConvertConfig {
    /// Resolve flags against the loaded configuration
    pub fn into_options(self, config: KataForgeConfig) -> (ConvertOptions, usize) {
        let pipeline = config.pipeline;
        let jobs = self.jobs.unwrap_or(pipeline.jobs);
        let options = ConvertOptions {
            json_dir: self.json_dir.unwrap_or(pipeline.json_dir),
            exercise_dir: self.exercise_dir.unwrap_or(pipeline.exercise_dir),
            golden_file: self.golden_file,
            parallel: pipeline.parallel && !self.no_parallel,
            package: config.package,
        };
        (options, jobs)
    }
}

pub fn handle_convert(config: ConvertConfig, file_config: KataForgeConfig) -> Result<ConvertReport> {
    let progress = ProgressManager::new(ProgressConfig::from_env(config.quiet));
    let (options, jobs) = config.into_options(file_config);

    if options.parallel {
        configure_thread_pool(jobs);
        tracing::info!("Converting with {} worker threads", get_worker_count(jobs));
    }

    let report = run_convert(&options, &progress)?;
    let _ = progress.clear();
    print!("{}", report);

    if report.has_logic_errors() {
        anyhow::bail!(
            "{} exercises hit logic errors; the conversion itself is broken",
            report.logic_errors.len()
        );
    }
    if !report.write_failures.is_empty() {
        anyhow::bail!("{} exercises could not be written", report.write_failures.len());
    }
    Ok(report)
}
