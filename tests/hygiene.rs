//! Hygiene: production sources must not panic or drop errors silently.
//!
//! Each antipattern has a budget of zero. Test files (`*_test.rs`) are
//! exempt since fixtures are allowed to `unwrap`.

use std::fs;
use std::path::Path;

const BANNED: [(&str, &str); 8] = [
    (".unwrap()", "crashes the page on None/Err"),
    (".expect(", "crashes the page on None/Err"),
    ("panic!(", "crashes the page"),
    ("unreachable!(", "crashes the page"),
    ("todo!(", "unfinished stub"),
    ("unimplemented!(", "unfinished stub"),
    ("let _ =", "discards a Result without inspecting it"),
    (".ok()", "discards the error without logging it"),
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<String> {
    files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(|(n, line)| format!("  {}:{}: {}", file.path, n + 1, line.trim()))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn banned_patterns_absent() {
    let files = source_files();
    let report: Vec<String> = BANNED
        .iter()
        .filter_map(|(pattern, why)| {
            let found = hits(&files, pattern);
            if found.is_empty() { None } else { Some(format!("`{pattern}` ({why}):\n{}", found.join("\n"))) }
        })
        .collect();
    assert!(report.is_empty(), "hygiene violations:\n{}", report.join("\n"));
}
