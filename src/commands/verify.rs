use crate::golden::{read_goldens, verify_goldens, GoldenMismatch};
use crate::progress::{ProgressConfig, ProgressManager};
use anyhow::Result;
use std::path::Path;

/// Check recorded goldens against the current transforms; any mismatch is
/// printed and fails the command.
pub fn handle_verify(golden_file: &Path, quiet: bool) -> Result<()> {
    let progress = ProgressManager::new(ProgressConfig::from_env(quiet));
    let spinner = progress.create_spinner("Verifying goldens");

    let goldens = read_goldens(golden_file)?;
    let mismatches = verify_goldens(&goldens);
    spinner.finish_and_clear();

    report_mismatches(goldens.len(), &mismatches);
    if !mismatches.is_empty() {
        anyhow::bail!(
            "{} of {} goldens no longer match",
            mismatches.len(),
            goldens.len()
        );
    }
    Ok(())
}

fn report_mismatches(total: usize, mismatches: &[GoldenMismatch]) {
    for mismatch in mismatches {
        println!("{}\n", mismatch);
    }
    println!(
        "{} goldens checked, {} mismatches",
        total,
        mismatches.len()
    );
}
