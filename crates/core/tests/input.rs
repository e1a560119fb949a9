use docscope_api::SymbolId;
use docscope_core::DocscopeError;
use docscope_core::input::load_project;
use docscope_core::phase::{DocumentationPhase, run};
use std::io::Write;
use tempfile::NamedTempFile;

const PROJECT: &str = r#"{
    "name": "demo",
    "options": { "entry_point": "lib", "readme": false },
    "children": [
        { "id": 1, "kind": "external_module", "name": "\"lib\"", "children": [
            { "id": 2, "kind": "class", "name": "Client",
              "flags": { "is_exported": true },
              "comment": { "short_text": "A client.", "tags": [
                  { "tag": "param", "param": "connect.timeout", "text": "in ms" }
              ]},
              "children": [
                { "id": 3, "kind": "method", "name": "connect", "children": [
                    { "id": 4, "kind": "call_signature", "name": "connect", "children": [
                        { "id": 5, "kind": "parameter", "name": "timeout" }
                    ]}
                ]}
              ]
            }
        ]}
    ]
}"#;

fn write_project(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_and_plan_from_file() {
    let file = write_project(PROJECT);
    let (mut tree, options) = load_project(file.path()).unwrap();
    let options = options.unwrap();
    assert_eq!(options.entry_point.as_deref(), Some("lib"));
    assert!(!options.readme);

    let output = run(&DocumentationPhase::new(options), &mut tree);
    assert_eq!(output.plan.entry_point, SymbolId(1));
    assert_eq!(output.report.moved(), 1);

    let urls: Vec<_> = output.plan.documents.iter().map(|d| d.url.as_str()).collect();
    assert_eq!(urls, vec!["index.html", "classes/_lib_.client.html"]);
    assert_eq!(
        tree[SymbolId(5)].url(),
        "classes/_lib_.client.html#connect.timeout"
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_project(&dir.path().join("missing.json"));
    assert!(matches!(result, Err(DocscopeError::Io(_))));
}

#[test]
fn test_malformed_file_is_json_error() {
    let file = write_project("{ \"name\": ");
    assert!(matches!(load_project(file.path()), Err(DocscopeError::Json(_))));
}
