//! Linguistic helpers used by the name resolver.
//!
//! The resolver only depends on the [`Inflector`] trait, so another language
//! or a project specific word list can be plugged in without touching it.

use convert_case::{Case, Casing};

/// Pluralization and case conversion capabilities
pub trait Inflector {
    fn pluralize(&self, word: &str) -> String;
    fn singularize(&self, word: &str) -> String;
    /// `blog_post` -> `blogPost`
    fn to_camel_case(&self, word: &str) -> String;
    /// `BlogPost` -> `blog_post`
    fn to_snake_case(&self, word: &str) -> String;
    /// Capitalize each word and drop separators: `blogPost` -> `BlogPost`
    fn to_title_case(&self, word: &str) -> String;
}

/// English rules from `pluralizer`, casing from `convert_case`
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishInflector;

impl Inflector for EnglishInflector {
    fn pluralize(&self, word: &str) -> String {
        if word.is_empty() {
            return String::new();
        }
        pluralizer::pluralize(word, 2, false)
    }

    fn singularize(&self, word: &str) -> String {
        if word.is_empty() {
            return String::new();
        }
        pluralizer::pluralize(word, 1, false)
    }

    fn to_camel_case(&self, word: &str) -> String {
        word.to_case(Case::Camel)
    }

    fn to_snake_case(&self, word: &str) -> String {
        word.to_case(Case::Snake)
    }

    fn to_title_case(&self, word: &str) -> String {
        word.to_case(Case::Pascal)
    }
}
