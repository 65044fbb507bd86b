use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::GeneratorError;
use crate::models::{PathFormat, Settings};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Namespace every type namespace is appended to
    #[serde(default)]
    pub root_namespace: String,
    /// Root directory generated files are written below
    pub output_dir: PathBuf,
    /// Directory scanned for `*.stub` templates
    #[serde(default)]
    pub stubs_dir: Option<PathBuf>,
    /// Settings per generator type
    #[serde(default)]
    pub types: BTreeMap<String, Settings>,
    /// Stub key -> template location
    #[serde(default)]
    pub stubs: BTreeMap<String, PathBuf>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        if let Some(stubs_dir) = &self.stubs_dir {
            if !stubs_dir.is_dir() {
                anyhow::bail!("Stubs directory does not exist: {}", stubs_dir.display());
            }
        }

        Ok(())
    }

    /// Settings of a generator type
    pub fn settings_for(&self, generator_type: &str) -> Result<&Settings, GeneratorError> {
        self.types
            .get(&generator_type.to_lowercase())
            .ok_or_else(|| GeneratorError::UnknownType {
                name: generator_type.to_string(),
            })
    }

    /// Root namespace followed by the type's namespace
    pub fn default_namespace(&self, generator_type: &str) -> Result<String, GeneratorError> {
        let settings = self.settings_for(generator_type)?;
        Ok(format!("{}{}", self.root_namespace, settings.namespace))
    }

    /// Generate a default configuration
    pub fn default_config() -> Self {
        let mut types = BTreeMap::new();
        types.insert(
            "model".to_string(),
            Self::php_type("Models", "app/Models", "", ""),
        );
        types.insert(
            "controller".to_string(),
            Self::php_type("Http\\Controllers", "app/Http/Controllers", "", "Controller"),
        );
        types.insert(
            "seed".to_string(),
            Self::php_type("", "database/seeds", "", "TableSeeder"),
        );
        types.insert(
            "migration".to_string(),
            Self::php_type("", "database/migrations", "", ""),
        );
        types.insert(
            "view".to_string(),
            Settings {
                path_format: PathFormat::Lowercase,
                directory: "resources/views".to_string(),
                file_type: ".blade.php".to_string(),
                ..Default::default()
            },
        );

        let stubs_dir = PathBuf::from("resources/stubs");
        let stubs = [
            "model",
            "model_plain",
            "controller",
            "controller_plain",
            "seed",
            "seed_plain",
            "migration",
            "migration_plain",
            "view",
        ]
        .iter()
        .map(|name| {
            (
                format!("{}_stub", name),
                stubs_dir.join(format!("{}.stub", name)),
            )
        })
        .collect();

        Config {
            root_namespace: "App\\".to_string(),
            output_dir: PathBuf::from("."),
            stubs_dir: None,
            types,
            stubs,
        }
    }

    fn php_type(namespace: &str, directory: &str, prefix: &str, postfix: &str) -> Settings {
        Settings {
            prefix: prefix.to_string(),
            postfix: postfix.to_string(),
            path_format: PathFormat::PreserveCase,
            namespace: namespace.to_string(),
            directory: directory.to_string(),
            file_type: ".php".to_string(),
        }
    }

    /// Save configuration to a TOML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .with_context(|| "Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
