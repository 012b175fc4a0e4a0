//! Hygiene: source-level budgets for the client crate.
//!
//! Browser calls return `Result`s that are easy to drop on the floor. Those
//! failures must be logged, not discarded. Budgets only ever go down.

use std::fs;
use std::path::Path;

// One allowed: the non-hydrate build binds unused tour props in tour_carousel.
const MAX_SILENT_DISCARD: usize = 1;
// Element downcasts in util/keys and the bid due date parse in state/workspace.
const MAX_DOT_OK: usize = 2;
const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;

fn source_files(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            source_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((path_str, content));
        }
    }
}

fn count(files: &[(String, String)], pattern: &str) -> usize {
    files
        .iter()
        .map(|(_, content)| content.lines().filter(|line| line.contains(pattern)).count())
        .sum()
}

fn files() -> Vec<(String, String)> {
    let mut files = Vec::new();
    source_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no sources found under {}/src", env!("CARGO_PKG_NAME"));
    files
}

#[test]
fn silent_discard_budget() {
    let found = count(&files(), "let _ =");
    assert!(found <= MAX_SILENT_DISCARD, "`let _ =` found {found}, max {MAX_SILENT_DISCARD}");
}

#[test]
fn cell_editor_focus_failure_is_logged() {
    let files = files();
    assert_eq!(count(&files, "let _ = input.focus()"), 0);
    let cell = files
        .iter()
        .find(|(path, _)| path.ends_with("editable_cell.rs"))
        .map(|(_, content)| content.as_str())
        .unwrap_or_default();
    assert!(cell.contains("if let Err(err) = input.focus()"));
}

#[test]
fn dot_ok_budget() {
    let found = count(&files(), ".ok()");
    assert!(found <= MAX_DOT_OK, "`.ok()` found {found}, max {MAX_DOT_OK}");
}

#[test]
fn panic_budgets() {
    let files = files();
    let unwraps = count(&files, ".unwrap()");
    let expects = count(&files, ".expect(");
    assert!(unwraps <= MAX_UNWRAP, "`.unwrap()` found {unwraps}, max {MAX_UNWRAP}");
    assert!(expects <= MAX_EXPECT, "`.expect(` found {expects}, max {MAX_EXPECT}");
}
