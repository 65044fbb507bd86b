mod names;
mod options;
mod settings;

pub use names::ResolvedNames;
pub use options::GeneratorOptions;
pub use settings::{PathFormat, Settings};
