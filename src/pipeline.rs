//! Wires resolver, stub registry and generator for one invocation

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::config::Config;
use crate::generator::GeneratorContext;
use crate::models::{GeneratorOptions, ResolvedNames};
use crate::resolver::NameResolver;
use crate::stubs::StubRegistry;

/// Everything a generate run would use, without touching the filesystem
#[derive(Debug, Clone, Serialize)]
pub struct NamesReport {
    pub stub_key: String,
    pub namespace: String,
    pub output_path: PathBuf,
    pub names: ResolvedNames,
}

/// Generation pipeline over a loaded configuration
pub struct Pipeline<'a> {
    config: &'a Config,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    fn context(&self, options: &GeneratorOptions, name: &str) -> Result<GeneratorContext> {
        let generator_type = &options.generator_type;
        let settings = self.config.settings_for(generator_type)?.clone();
        let namespace = self.config.default_namespace(generator_type)?;
        let names = NameResolver::new(name, settings.clone()).resolve_for(generator_type);

        Ok(GeneratorContext::new(
            names,
            namespace,
            settings,
            self.config.output_dir.clone(),
        ))
    }

    /// Resolve names and output location for `name`
    pub fn describe(&self, options: &GeneratorOptions, name: &str) -> Result<NamesReport> {
        let ctx = self.context(options, name)?;

        Ok(NamesReport {
            stub_key: options.stub_key(),
            namespace: ctx.namespace(),
            output_path: ctx.output_path(),
            names: ctx.names,
        })
    }

    /// Generate the file for `name`, returning the written path.
    ///
    /// The stub is looked up before anything is written; a missing stub
    /// leaves the filesystem untouched.
    pub fn run(&self, options: &GeneratorOptions, name: &str) -> Result<PathBuf> {
        let ctx = self.context(options, name)?;

        let key = options.stub_key();
        let registry = StubRegistry::from_config(self.config)?;
        let stub_path = registry.lookup(&key)?;
        debug!(key = %key, path = %stub_path.display(), "Using stub");

        let stub = fs::read_to_string(stub_path)
            .with_context(|| format!("Failed to read stub file: {}", stub_path.display()))?;

        ctx.write(&stub, options.force)
    }
}
