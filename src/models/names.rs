use serde::Serialize;

/// Every name a generator derives from a single identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedNames {
    /// Raw identifier with the configured postfix removed
    pub argument_name: String,
    /// Leaf segment of the argument, without namespace
    pub name_only: String,
    /// Containing namespace path, `""` at the root
    pub path: String,
    /// Singular, lowercase resource name
    pub resource_name: String,
    pub model_name: String,
    pub controller_name: String,
    pub seed_name: String,
    /// Plural resource name
    pub collection_name: String,
    /// Dot-separated view path
    pub view_path: String,
    pub table_name: String,
    /// Prefix + leaf name + postfix
    pub file_name_complete: String,
}
