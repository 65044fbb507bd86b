use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::models::GeneratorOptions;

const DEFAULT_CONFIG: &str = "scaffold.toml";

/// Derive conventional names and generate files from stub templates
#[derive(Debug, Parser)]
#[command(name = "scaffold-names")]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a file from the stub of a generator type
    Generate {
        #[command(flatten)]
        target: Target,

        #[command(flatten)]
        stub: StubArgs,

        /// Overwrite the file if it already exists
        #[arg(long)]
        force: bool,

        /// Print debug output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the names derived for an identifier without writing anything
    Names {
        #[command(flatten)]
        target: Target,

        #[command(flatten)]
        stub: StubArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Toml)]
        format: OutputFormat,
    },

    /// Write a default configuration file
    Init {
        /// Path of the configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG)]
        output: PathBuf,

        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

/// Generator type and identifier shared by the generating commands
#[derive(Debug, clap::Args)]
pub struct Target {
    /// Generator type, e.g. model, controller, seed, view
    #[arg(value_name = "TYPE")]
    pub generator_type: String,

    /// The name of the class being generated, e.g. Admin/Posts
    pub name: String,

    /// Path to the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,
}

/// Flags selecting the stub template
#[derive(Debug, clap::Args)]
pub struct StubArgs {
    /// Use the bare variant of the stub
    #[arg(long)]
    pub plain: bool,

    /// Stub to use instead of the type's default
    #[arg(long = "stub", value_name = "KEY")]
    pub key: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Toml,
    Json,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Target {
    /// Options for this target with the given stub flags
    pub fn options(&self, stub: &StubArgs) -> GeneratorOptions {
        GeneratorOptions {
            stub: stub.key.clone(),
            plain: stub.plain,
            ..GeneratorOptions::new(&self.generator_type)
        }
    }
}
