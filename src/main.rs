use anyhow::Result;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use scaffold_names::cli::{Cli, Commands, OutputFormat, Target};
use scaffold_names::config::Config;
use scaffold_names::models::GeneratorOptions;
use scaffold_names::pipeline::Pipeline;

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Commands::Generate {
            target,
            stub,
            force,
            verbose,
        } => {
            init_logging(verbose);
            let options = GeneratorOptions {
                force,
                ..target.options(&stub)
            };
            run_generate(&target, &options)?;
        }
        Commands::Names {
            target,
            stub,
            format,
        } => {
            init_logging(false);
            run_names(&target, &target.options(&stub), format)?;
        }
        Commands::Init { output, force } => {
            run_init(&output, force)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "scaffold_names=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}

/// Run the generate command
fn run_generate(target: &Target, options: &GeneratorOptions) -> Result<()> {
    let config = Config::load(&target.config)?;
    tracing::debug!(path = %target.config.display(), "Loaded configuration");

    let pipeline = Pipeline::new(&config);
    let path = pipeline.run(options, &target.name)?;

    println!("Created: {}", path.display());

    Ok(())
}

/// Run the names command
fn run_names(target: &Target, options: &GeneratorOptions, format: OutputFormat) -> Result<()> {
    let config = Config::load(&target.config)?;
    let report = Pipeline::new(&config).describe(options, &target.name)?;

    let output = match format {
        OutputFormat::Toml => toml::to_string_pretty(&report)?,
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
    };
    println!("{}", output);

    Ok(())
}

/// Run the init command
fn run_init(output_path: &Path, force: bool) -> Result<()> {
    if output_path.exists() && !force {
        anyhow::bail!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    let config = Config::default_config();
    config.save(output_path)?;

    println!("Created configuration file: {}", output_path.display());
    println!("\nEdit the file to configure:");
    println!("  - root_namespace: Namespace prepended to every type namespace");
    println!("  - output_dir: Root directory for generated files");
    println!("  - [types.*]: prefix, postfix, path_format and location per generator type");
    println!("  - [stubs]: Stub key to template file, or stubs_dir to scan for *.stub files");

    Ok(())
}
