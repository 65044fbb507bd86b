use anyhow::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::GeneratorError;

const STUB_EXTENSION: &str = "stub";

/// Stub key -> template file
#[derive(Debug, Default)]
pub struct StubRegistry {
    stubs: BTreeMap<String, PathBuf>,
}

impl StubRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from the `[stubs]` table and the stubs directory.
    ///
    /// Explicit entries win over scanned files with the same key.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut registry = Self::new();

        if let Some(stubs_dir) = &config.stubs_dir {
            registry.scan(stubs_dir)?;
        }

        for (key, path) in &config.stubs {
            registry.register(key, path.clone());
        }

        Ok(registry)
    }

    /// Register every `<name>.stub` below `dir` as `<name>_stub`
    pub fn scan(&mut self, dir: &Path) -> Result<usize> {
        let mut found = 0;

        for entry in WalkDir::new(dir).follow_links(true).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && is_stub_file(path) {
                if let Some(name) = path.file_stem() {
                    let key = format!("{}_stub", name.to_string_lossy());
                    debug!(key = %key, path = %path.display(), "Found stub");
                    self.register(&key, path.to_path_buf());
                    found += 1;
                }
            }
        }

        Ok(found)
    }

    pub fn register(&mut self, key: &str, path: PathBuf) {
        self.stubs.insert(key.to_string(), path);
    }

    /// Template location of a stub key
    pub fn lookup(&self, key: &str) -> Result<&Path, GeneratorError> {
        self.stubs
            .get(key)
            .map(PathBuf::as_path)
            .ok_or_else(|| GeneratorError::MissingStub {
                key: key.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.stubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stubs.is_empty()
    }
}

/// Check if a path is a stub template
fn is_stub_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == STUB_EXTENSION)
        .unwrap_or(false)
}
