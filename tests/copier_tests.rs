// ABOUTME: Integration tests for the tree copier
// ABOUTME: Covers render independence, verbatim subtrees, and nested structures

use std::fs;
use std::path::Path;

use serde_json::json;
use tempfile::TempDir;

use imprint::template::{RenderContext, TemplateEngine};
use imprint::tree::{CopyMatcher, TreeCopier, TreeError};

mod common;
use common::{workspace_with_source, TestTreeBuilder};

fn render_tree(
    workspace: &TempDir,
    source: &Path,
    values: serde_json::Value,
    patterns: &[&str],
) -> Result<std::path::PathBuf, TreeError> {
    let engine = TemplateEngine::new().unwrap();
    let context = RenderContext::from_value(values).unwrap();
    let patterns: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
    let matcher = if patterns.is_empty() {
        CopyMatcher::empty()
    } else {
        CopyMatcher::new(&patterns).unwrap()
    };

    let copier = TreeCopier::new(&engine, &context, matcher, workspace.path().to_path_buf());
    copier.copy_templated_contents(source, &workspace.path().join("out"))
}

#[test]
fn test_name_and_content_rendering_are_independent() {
    let (workspace, source) = workspace_with_source(
        TestTreeBuilder::new()
            .with_file("${{ name }}.txt", "static content")
            .with_file("static-name.txt", "value: ${{ count }}"),
    );

    let out = render_tree(
        &workspace,
        &source,
        json!({"name": "test-project", "count": 1234}),
        &[],
    )
    .unwrap();

    // Templated name, untouched content
    assert_eq!(
        fs::read_to_string(out.join("test-project.txt")).unwrap(),
        "static content"
    );
    // Untouched name, templated content
    assert_eq!(
        fs::read_to_string(out.join("static-name.txt")).unwrap(),
        "value: 1234"
    );
}

#[test]
fn test_nested_directories_render_each_segment() {
    let (workspace, source) = workspace_with_source(
        TestTreeBuilder::new().with_file("${{ org }}/${{ name }}/readme.md", "# ${{ name }}"),
    );

    let out = render_tree(
        &workspace,
        &source,
        json!({"org": "acme", "name": "widget"}),
        &[],
    )
    .unwrap();

    assert_eq!(
        fs::read_to_string(out.join("acme/widget/readme.md")).unwrap(),
        "# widget"
    );
}

#[test]
fn test_verbatim_subtree_is_untouched() {
    let (workspace, source) = workspace_with_source(
        TestTreeBuilder::new()
            .with_file("vendor/${{ name }}/lib.js", "exports.name = '${{ name }}';")
            .with_file("app/${{ name }}.js", "console.log('${{ name }}');"),
    );

    let out = render_tree(&workspace, &source, json!({"name": "demo"}), &["vendor"]).unwrap();

    // Matched directory: names and contents both stay literal
    assert_eq!(
        fs::read_to_string(out.join("vendor/${{ name }}/lib.js")).unwrap(),
        "exports.name = '${{ name }}';"
    );
    // Sibling outside the match is rendered
    assert_eq!(
        fs::read_to_string(out.join("app/demo.js")).unwrap(),
        "console.log('demo');"
    );
}

#[test]
fn test_excluded_file_pattern() {
    let (workspace, source) = workspace_with_source(
        TestTreeBuilder::new()
            .with_file("keep-${{ name }}.raw", "${{ name }}")
            .with_file("render-${{ name }}.txt", "${{ name }}"),
    );

    let out = render_tree(&workspace, &source, json!({"name": "x"}), &["*.raw"]).unwrap();

    assert!(out.join("keep-${{ name }}.raw").is_file());
    assert_eq!(
        fs::read_to_string(out.join("render-x.txt")).unwrap(),
        "x"
    );
}

#[test]
fn test_deeply_nested_empty_directory_preserved() {
    let (workspace, source) = workspace_with_source(
        TestTreeBuilder::new().with_dir("a-${{ n }}/b-${{ n }}/empty"),
    );

    let out = render_tree(&workspace, &source, json!({"n": 7}), &[]).unwrap();

    let empty = out.join("a-7/b-7/empty");
    assert!(empty.is_dir());
    assert_eq!(fs::read_dir(&empty).unwrap().count(), 0);
}

#[test]
fn test_rendered_directory_name_cannot_escape() {
    let (workspace, source) = workspace_with_source(
        TestTreeBuilder::new().with_file("${{ dir }}/payload.txt", "owned"),
    );

    let result = render_tree(
        &workspace,
        &source,
        json!({"dir": "../../../../tmp/escape"}),
        &[],
    );

    assert!(matches!(result, Err(TreeError::OutsideWorkspace { .. })));
}

#[test]
fn test_list_value_in_dotfile_content() {
    let (workspace, source) = workspace_with_source(
        TestTreeBuilder::new().with_file(".config", "plugins = ${{ plugins | dump }}\n"),
    );

    let out = render_tree(
        &workspace,
        &source,
        json!({"plugins": ["alpha", "beta"]}),
        &[],
    )
    .unwrap();

    assert_eq!(
        fs::read_to_string(out.join(".config")).unwrap(),
        "plugins = [\"alpha\",\"beta\"]\n"
    );
}
