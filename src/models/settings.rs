use serde::{Deserialize, Serialize};

/// Casing policy for generated namespace/directory segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathFormat {
    /// Keep each segment as typed, with its first letter capitalized
    #[default]
    PreserveCase,
    /// Force every segment to lowercase
    Lowercase,
}

/// Per generator type settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Prepended to the generated file/class name
    #[serde(default)]
    pub prefix: String,
    /// Appended to the generated file/class name, stripped from the argument
    #[serde(default)]
    pub postfix: String,
    /// Casing of the namespace path segments
    #[serde(default)]
    pub path_format: PathFormat,
    /// Namespace appended to the root namespace
    #[serde(default)]
    pub namespace: String,
    /// Directory below the output root
    #[serde(default)]
    pub directory: String,
    /// Extension of the generated file, including the leading dot
    #[serde(default)]
    pub file_type: String,
}

impl Settings {
    pub fn new(prefix: &str, postfix: &str, path_format: PathFormat) -> Self {
        Self {
            prefix: prefix.to_string(),
            postfix: postfix.to_string(),
            path_format,
            ..Default::default()
        }
    }
}
