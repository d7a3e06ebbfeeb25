use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Which half of a challenge a single-file transform reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceKind {
    /// A reference solution, printed back as an empty stub
    Code,
    /// `Test.assertX` tests, printed back as a Jest suite
    Tests,
}

#[derive(Parser, Debug)]
#[command(name = "kata-forge")]
#[command(about = "Turn solved coding challenges into Jest exercises", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    /// -v: info
    /// -vv: debug
    /// -vvv: trace
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a dataset of solved challenges into exercise directories
    Convert {
        /// Directory of scraped `*.json` challenge records
        #[arg(long = "json-dir")]
        json_dir: Option<PathBuf>,

        /// Directory the exercises are written into
        #[arg(long = "exercise-dir")]
        exercise_dir: Option<PathBuf>,

        /// Also write (original, transformed) pairs to this file
        #[arg(long = "golden-file")]
        golden_file: Option<PathBuf>,

        /// Number of parallel jobs (0 = use all cores)
        #[arg(short = 'j', long = "jobs", env = "KATA_FORGE_JOBS")]
        jobs: Option<usize>,

        /// Process records one at a time
        #[arg(long = "no-parallel")]
        no_parallel: bool,

        /// Suppress progress bars
        #[arg(short, long)]
        quiet: bool,
    },

    /// Re-run the transforms against recorded golden data
    Verify {
        /// Golden file written by `convert --golden-file`
        #[arg(long = "golden-file")]
        golden_file: PathBuf,

        /// Suppress progress bars
        #[arg(short, long)]
        quiet: bool,
    },

    /// Transform a single file and print the result
    Transform {
        #[arg(value_enum)]
        kind: SourceKind,

        /// JavaScript source file
        path: PathBuf,
    },

    /// Initialize a kata-forge configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert() {
        let cli = Cli::parse_from([
            "kata-forge",
            "-vv",
            "convert",
            "--json-dir",
            "records",
            "--jobs",
            "2",
        ]);
        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Convert {
                json_dir,
                exercise_dir,
                jobs,
                quiet,
                ..
            } => {
                assert_eq!(json_dir, Some(PathBuf::from("records")));
                assert_eq!(exercise_dir, None);
                assert_eq!(jobs, Some(2));
                assert!(!quiet);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_transform() {
        let cli = Cli::parse_from(["kata-forge", "transform", "tests", "a.js"]);
        match cli.command {
            Commands::Transform { kind, path } => {
                assert_eq!(kind, SourceKind::Tests);
                assert_eq!(path, PathBuf::from("a.js"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
