use anyhow::Result;
use kata_forge::cli::{self, Commands};
use kata_forge::commands::{self, ConvertConfig};
use kata_forge::config;

fn main() -> Result<()> {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbosity);

    match cli.command {
        Commands::Convert {
            json_dir,
            exercise_dir,
            golden_file,
            jobs,
            no_parallel,
            quiet,
        } => {
            let convert_config = ConvertConfig {
                json_dir,
                exercise_dir,
                golden_file,
                jobs,
                no_parallel,
                quiet,
            };
            commands::handle_convert(convert_config, config::load_config())?;
            Ok(())
        }
        Commands::Verify { golden_file, quiet } => {
            commands::handle_verify(&golden_file, quiet)
        }
        Commands::Transform { kind, path } => commands::handle_transform(kind, &path),
        Commands::Init { force } => commands::init_config(force),
    }
}
