use std::path::PathBuf;
use thiserror::Error;

/// Errors a generate run reports to the user
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The requested stub key is not registered
    #[error("The stub does not exist in the config file - \"{key}\"")]
    MissingStub { key: String },

    /// No settings are configured for the generator type
    #[error("Unknown generator type: \"{name}\". Add a [types.{name}] section to the config file.")]
    UnknownType { name: String },

    /// The output file exists and overwriting was not requested
    #[error("File already exists: {}. Use --force to overwrite.", path.display())]
    FileExists { path: PathBuf },
}
