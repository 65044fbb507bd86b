//! Integration tests for name resolution through the public API

use scaffold_names::inflector::{EnglishInflector, Inflector};
use scaffold_names::models::{GeneratorOptions, PathFormat, Settings};
use scaffold_names::resolver::{name_only, normalize_separators, NameResolver};

fn settings(postfix: &str, path_format: PathFormat) -> Settings {
    Settings::new("", postfix, path_format)
}

#[test]
fn test_separator_forms_resolve_identically() {
    let dotted = NameResolver::new("Admin.Posts", Settings::default()).resolve();
    let slashed = NameResolver::new("Admin/Posts", Settings::default()).resolve();
    let backslashed = NameResolver::new("Admin\\Posts", Settings::default()).resolve();

    assert_eq!(normalize_separators("Admin.Posts"), "Admin/Posts");
    assert_eq!(dotted.path, slashed.path);
    assert_eq!(dotted.name_only, backslashed.name_only);
    assert_eq!(dotted.view_path, slashed.view_path);
    assert_eq!(slashed.table_name, backslashed.table_name);
}

#[test]
fn test_name_only_is_idempotent() {
    for raw in ["Admin/Posts", "blog.post", "App\\Models\\User", "Post", ""] {
        let once = name_only(raw);
        assert_eq!(name_only(&once), once, "name_only not idempotent for {:?}", raw);
    }
}

#[test]
fn test_resource_and_collection_round_trip() {
    let resolver = NameResolver::new("Posts", Settings::default());
    let inflector = EnglishInflector;

    assert_eq!(resolver.resource_name(None, true), "post");
    assert_eq!(resolver.collection_name(Some("post")), "posts");
    assert_eq!(
        inflector.singularize(&resolver.collection_name(None)),
        resolver.resource_name(None, true)
    );
}

#[test]
fn test_path_formats() {
    let preserve = NameResolver::new("Admin/Posts", settings("", PathFormat::PreserveCase));
    assert_eq!(preserve.path(false), "Admin/");
    assert_eq!(preserve.path(true), "Admin/Posts/");

    let lowercase = NameResolver::new("admin/posts", settings("", PathFormat::Lowercase));
    assert_eq!(lowercase.path(true), "admin/posts/");
}

#[test]
fn test_view_and_table_names() {
    let resolver = NameResolver::new("post", Settings::default());

    assert_eq!(resolver.view_path("admin/post"), "admin.posts");
    assert_eq!(resolver.table_name("App/Models/BlogPost"), "blog_posts");
}

#[test]
fn test_controller_postfix_is_not_duplicated() {
    let resolver = NameResolver::new(
        "Admin/PostController",
        settings("Controller", PathFormat::PreserveCase),
    );
    let names = resolver.resolve();

    assert_eq!(names.argument_name, "Admin/Post");
    assert_eq!(names.controller_name, "Post");
    assert_eq!(names.file_name_complete, "PostController");
}

#[test]
fn test_postfix_removed_anywhere() {
    let resolver = NameResolver::new(
        "ControllerThing",
        settings("Controller", PathFormat::PreserveCase),
    );
    assert_eq!(resolver.argument_name(), "Thing");
}

#[test]
fn test_resolution_is_pure() {
    let resolver = NameResolver::new("Admin/BlogPosts", settings("", PathFormat::Lowercase));
    let first = resolver.resolve();

    for _ in 0..3 {
        assert_eq!(resolver.resolve(), first);
    }
}

#[test]
fn test_malformed_identifiers_degrade_to_empty() {
    for raw in ["", "/", "//", "..", "\\"] {
        let names = NameResolver::new(raw, Settings::default()).resolve();
        assert_eq!(names.name_only, "", "name_only for {:?}", raw);
        assert_eq!(names.path, "", "path for {:?}", raw);
        assert_eq!(names.resource_name, "", "resource_name for {:?}", raw);
        assert_eq!(names.table_name, "", "table_name for {:?}", raw);
        assert_eq!(names.view_path, "", "view_path for {:?}", raw);
    }
}

#[test]
fn test_stub_keys() {
    let model = GeneratorOptions::new("model");
    assert_eq!(model.stub_key(), "model_stub");

    let plain = GeneratorOptions {
        plain: true,
        ..GeneratorOptions::new("model")
    };
    assert_eq!(plain.stub_key(), "model_plain_stub");

    let custom = GeneratorOptions {
        stub: Some("custom".to_string()),
        ..GeneratorOptions::new("model")
    };
    assert_eq!(custom.stub_key(), "custom_stub");
}
