//! Name resolver - derives every conventional name from one identifier

use tracing::debug;

use crate::inflector::{EnglishInflector, Inflector};
use crate::models::{PathFormat, ResolvedNames, Settings};

const SEPARATOR: char = '/';

/// Replace `\` and `.` separators with `/`
pub fn normalize_separators(raw: &str) -> String {
    raw.replace(['\\', '.'], "/")
}

/// Leaf segment of an identifier, dropping every namespace qualifier
pub fn name_only(name: &str) -> String {
    let normalized = normalize_separators(name);
    match normalized.rfind(SEPARATOR) {
        Some(idx) => normalized[idx + 1..].to_string(),
        None => normalized,
    }
}

fn upper_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn remove_all(haystack: &str, needle: &str) -> String {
    if needle.is_empty() {
        return haystack.to_string();
    }
    haystack.replace(needle, "")
}

/// Resolves the names of a single generate invocation
#[derive(Debug, Clone)]
pub struct NameResolver<I = EnglishInflector> {
    /// Identifier as typed by the user
    raw: String,
    settings: Settings,
    inflector: I,
}

impl NameResolver<EnglishInflector> {
    pub fn new(raw: &str, settings: Settings) -> Self {
        Self::with_inflector(raw, settings, EnglishInflector)
    }
}

impl<I: Inflector> NameResolver<I> {
    pub fn with_inflector(raw: &str, settings: Settings, inflector: I) -> Self {
        Self {
            raw: raw.to_string(),
            settings,
            inflector,
        }
    }

    /// The identifier with every occurrence of the postfix removed.
    ///
    /// The postfix is stripped wherever it appears, not only at the end:
    /// with postfix `Controller`, `ControllerThing` becomes `Thing`.
    pub fn argument_name(&self) -> String {
        remove_all(&self.raw, &self.settings.postfix)
    }

    /// Leaf segment of the argument name
    pub fn name_only(&self) -> String {
        name_only(&self.argument_name())
    }

    /// Namespace path of the argument.
    ///
    /// With `with_name` the leaf is included and the result ends in `/`;
    /// otherwise only the containing path is returned, `""` at the root.
    /// Leading and repeated separators are dropped, so the result is always
    /// relative.
    pub fn path(&self, with_name: bool) -> String {
        let normalized = normalize_separators(&self.argument_name());
        let has_leaf = !normalized.ends_with(SEPARATOR);

        let segments: Vec<String> = normalized
            .split(SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .map(|segment| match self.settings.path_format {
                PathFormat::PreserveCase => upper_first(segment),
                PathFormat::Lowercase => segment.to_lowercase(),
            })
            .collect();

        if segments.is_empty() {
            return String::new();
        }

        let dirs = if with_name || !has_leaf {
            &segments[..]
        } else {
            &segments[..segments.len() - 1]
        };

        if dirs.is_empty() {
            return String::new();
        }

        format!("{}/", dirs.join("/"))
    }

    /// Singular, lowercase resource name.
    ///
    /// `format == false` returns a non-empty `name` untouched. A missing
    /// `name` falls back to the argument name.
    pub fn resource_name(&self, name: Option<&str>, format: bool) -> String {
        if let Some(name) = name {
            if !name.is_empty() && !format {
                return name.to_string();
            }
        }

        let name = match name {
            Some(name) => name.to_string(),
            None => self.argument_name(),
        };

        self.inflector
            .singularize(&name_only(&name).to_lowercase())
    }

    pub fn model_name(&self, name: Option<&str>) -> String {
        self.type_name(&self.resource_name(name, true))
    }

    pub fn controller_name(&self, name: Option<&str>, format: bool) -> String {
        let resource = self.resource_name(name, format);
        self.type_name(&remove_all(&resource, &self.settings.postfix))
    }

    pub fn seed_name(&self, name: Option<&str>) -> String {
        let resource = self.resource_name(name, true);
        self.type_name(&remove_all(&resource, &self.settings.postfix))
    }

    /// Plural form of the resource name
    pub fn collection_name(&self, name: Option<&str>) -> String {
        self.inflector.pluralize(&self.resource_name(name, true))
    }

    /// Dot separated view path: `admin/post` -> `admin.posts`.
    ///
    /// Only the leaf is pluralized. Namespace segments are left singular on
    /// purpose: they name view directories (`admin`), not collections.
    pub fn view_path(&self, name: &str) -> String {
        let normalized = normalize_separators(name);
        let mut segments: Vec<String> = normalized
            .split(SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .map(|segment| segment.to_string())
            .collect();

        if let Some(leaf) = segments.last_mut() {
            *leaf = self.inflector.pluralize(leaf);
        }

        segments
            .join(".")
            .to_lowercase()
            .trim_matches('.')
            .to_string()
    }

    /// Plural snake_case table name of the leaf segment
    pub fn table_name(&self, name: &str) -> String {
        let snake = self.inflector.to_snake_case(&name_only(name));
        self.inflector.pluralize(&snake).to_lowercase()
    }

    /// Prefix + name + postfix
    pub fn file_name_complete(&self, name: &str) -> String {
        format!("{}{}{}", self.settings.prefix, name, self.settings.postfix)
    }

    /// Leaf used for the generated class and file of a generator type.
    ///
    /// Models, controllers and seeds use their conventional type name; any
    /// other type keeps the leaf as typed.
    pub fn class_name(&self, generator_type: &str) -> String {
        match generator_type.to_lowercase().as_str() {
            "model" => self.model_name(None),
            "controller" => self.controller_name(None, true),
            "seed" => self.seed_name(None),
            _ => self.name_only(),
        }
    }

    /// Resolve every name for the identifier at once
    pub fn resolve(&self) -> ResolvedNames {
        self.resolve_for("")
    }

    /// Resolve every name, building the complete file name from the
    /// class name of `generator_type`
    pub fn resolve_for(&self, generator_type: &str) -> ResolvedNames {
        let argument_name = self.argument_name();

        let names = ResolvedNames {
            name_only: self.name_only(),
            path: self.path(false),
            resource_name: self.resource_name(None, true),
            model_name: self.model_name(None),
            controller_name: self.controller_name(None, true),
            seed_name: self.seed_name(None),
            collection_name: self.collection_name(None),
            view_path: self.view_path(&argument_name),
            table_name: self.table_name(&argument_name),
            file_name_complete: self.file_name_complete(&self.class_name(generator_type)),
            argument_name,
        };

        debug!(raw = %self.raw, generator_type, ?names, "Resolved names");

        names
    }

    fn type_name(&self, resource: &str) -> String {
        self.inflector
            .to_title_case(&self.inflector.to_camel_case(resource))
    }
}
