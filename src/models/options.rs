/// Flags of a single generate invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Generator type, e.g. `model` or `controller`
    pub generator_type: String,
    /// Explicit stub identifier overriding the type
    pub stub: Option<String>,
    /// Request the bare template variant
    pub plain: bool,
    /// Overwrite an existing output file
    pub force: bool,
}

impl GeneratorOptions {
    pub fn new(generator_type: &str) -> Self {
        Self {
            generator_type: generator_type.to_lowercase(),
            stub: None,
            plain: false,
            force: false,
        }
    }

    /// Key of the stub template in the registry.
    ///
    /// `--stub` wins over the type; `--plain` selects the `_plain` variant.
    pub fn stub_key(&self) -> String {
        let base = self.stub.as_deref().unwrap_or(&self.generator_type);
        let plain = if self.plain { "_plain" } else { "" };

        format!("{}{}_stub", base, plain)
    }
}
