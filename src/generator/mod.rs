pub mod template;

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::GeneratorError;
use crate::models::{ResolvedNames, Settings};

/// Context for generating one file from a stub
pub struct GeneratorContext {
    /// Names resolved from the argument
    pub names: ResolvedNames,
    /// Namespace of the type, without the argument's own path
    pub base_namespace: String,
    /// Settings of the generator type
    pub settings: Settings,
    /// Root directory for generated files
    pub output_dir: PathBuf,
}

impl GeneratorContext {
    pub fn new(
        names: ResolvedNames,
        base_namespace: String,
        settings: Settings,
        output_dir: PathBuf,
    ) -> Self {
        Self {
            names,
            base_namespace,
            settings,
            output_dir,
        }
    }

    /// Base namespace extended with the argument path, `\` separated
    pub fn namespace(&self) -> String {
        let base = self.base_namespace.trim_end_matches('\\');
        let sub = self.relative_path().trim_end_matches('/').replace('/', "\\");

        match (base.is_empty(), sub.is_empty()) {
            (_, true) => base.to_string(),
            (true, false) => sub,
            (false, false) => format!("{}\\{}", base, sub),
        }
    }

    /// Values substituted into the stub
    pub fn placeholders(&self) -> HashMap<&'static str, String> {
        let names = &self.names;
        let mut values = HashMap::new();

        values.insert("namespace", self.namespace());
        values.insert("class", names.file_name_complete.clone());
        values.insert("name", names.name_only.clone());
        values.insert("path", names.path.clone());
        values.insert("resource", names.resource_name.clone());
        values.insert("model", names.model_name.clone());
        values.insert("controller", names.controller_name.clone());
        values.insert("seed", names.seed_name.clone());
        values.insert("collection", names.collection_name.clone());
        values.insert("table", names.table_name.clone());
        values.insert("view", names.view_path.clone());

        values
    }

    /// Render stub text with this context's names
    pub fn render(&self, stub: &str) -> String {
        template::render(stub, &self.placeholders())
    }

    /// Where the generated file is written
    pub fn output_path(&self) -> PathBuf {
        let file_name = format!(
            "{}{}",
            self.names.file_name_complete, self.settings.file_type
        );

        self.output_dir
            .join(&self.settings.directory)
            .join(self.relative_path())
            .join(file_name)
    }

    /// Argument path without leading separators, so joining it never
    /// escapes the output directory
    fn relative_path(&self) -> &str {
        self.names.path.trim_start_matches(['/', '\\'])
    }

    /// Render the stub and write it to the output path.
    ///
    /// An existing file is only replaced when `force` is set.
    pub fn write(&self, stub: &str, force: bool) -> Result<PathBuf> {
        let path = self.output_path();

        if path.exists() && !force {
            return Err(GeneratorError::FileExists { path }.into());
        }

        create_parent_dir(&path)?;

        fs::write(&path, self.render(stub))
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        info!(path = %path.display(), "Generated file");

        Ok(path)
    }
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() && !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    Ok(())
}
