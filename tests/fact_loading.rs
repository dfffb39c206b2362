use callslice::core::{CallGraphAnalyzer, FileScanner, NodeId};
use callslice::facts::{load_fact_files, FileFacts, FunctionDefinition};
use callslice::GraphConfig;
use std::fs;
use std::path::Path;

fn touch<P: AsRef<Path>>(p: P, content: &str) {
    fs::write(p, content).unwrap();
}

#[test]
fn scanner_finds_fact_files_and_skips_noise() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("routes")).unwrap();
    fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
    fs::create_dir_all(root.join(".git")).unwrap();

    touch(root.join("server.json"), "{}");
    touch(root.join("routes/users.json"), "{}");
    touch(root.join("routes/notes.txt"), "ignored");
    touch(root.join("node_modules/pkg/index.json"), "{}");
    touch(root.join(".git/config.json"), "{}");

    let scanner = FileScanner::new(&GraphConfig::default().skip_dirs);
    let files = scanner.scan_directory(root).unwrap();

    let relative: Vec<_> = files
        .iter()
        .map(|f| f.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    assert_eq!(relative, vec!["routes/users.json", "server.json"]);
}

#[test]
fn scanner_rejects_missing_directory() {
    let dir = tempfile::TempDir::new().unwrap();
    let scanner = FileScanner::new(&[]);
    assert!(scanner.scan_directory(&dir.path().join("absent")).is_err());
}

#[test]
fn loader_accepts_single_and_list_documents() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();

    let single = r#"{
        "path": "/app/data.js",
        "definitions": [
            {"name": "readBookings", "file_path": "/app/data.js", "start_line": 1, "end_line": 3, "source": "function readBookings() {}"}
        ]
    }"#;
    let many = serde_json::to_string(&vec![
        FileFacts::new("/app/a.js"),
        FileFacts::new("/app/b.js")
            .with_definition(FunctionDefinition::new("b", "/app/b.js", 1, 1, "function b() {}")),
    ])
    .unwrap();

    touch(root.join("a_single.json"), single);
    touch(root.join("b_many.json"), &many);
    touch(root.join("c_broken.json"), "{ not json");

    let scanner = FileScanner::new(&[]);
    let paths = scanner.scan_directory(root).unwrap();
    let facts = load_fact_files(&paths);

    let loaded: Vec<&str> = facts.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(loaded, vec!["/app/data.js", "/app/a.js", "/app/b.js"]);
    assert!(facts[0].calls.is_empty());

    let mut analyzer = CallGraphAnalyzer::new();
    analyzer.build_graph(facts);
    assert_eq!(analyzer.node_count(), 2);
    assert!(analyzer
        .definition(&NodeId::new("/app/data.js", "readBookings"))
        .is_some());
}
