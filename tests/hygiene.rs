//! Hygiene — enforces coding standards at test time.
//!
//! Scans the crate's production source for antipatterns. Each pattern has a
//! budget (ideally zero). If you must add an occurrence, fix an existing one
//! first — a budget never grows.

use std::fs;
use std::path::Path;

/// Pattern, allowed occurrences across `src/` (test side-files excluded).
///
/// `let _ =` is budgeted rather than banned: the logger init in the hydrate
/// entry and the SSR stub branches deliberately discard values. `.ok()`
/// covers the four gloo `Response::ok` status checks in `net/api.rs`, which
/// are not error discards.
const BUDGETS: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("unreachable!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("#[allow(dead_code)]", 0),
    (".ok()", 4),
    ("let _ =", 7),
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    assert!(!files.is_empty(), "no production sources found under src/");
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
                out.push(SourceFile {
                    path: path_str,
                    content,
                });
            }
        }
    }
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut violations = Vec::new();

    for (pattern, budget) in BUDGETS {
        let hits: Vec<(String, usize)> = files
            .iter()
            .filter_map(|file| {
                let count = file
                    .content
                    .lines()
                    .filter(|line| line.contains(pattern))
                    .count();
                (count > 0).then(|| (file.path.clone(), count))
            })
            .collect();
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > *budget {
            let detail = hits
                .iter()
                .map(|(path, count)| format!("  {path}: {count}"))
                .collect::<Vec<_>>()
                .join("\n");
            violations.push(format!(
                "`{pattern}` exceeded: found {count}, max {budget}\n{detail}"
            ));
        }
    }

    assert!(violations.is_empty(), "{}", violations.join("\n"));
}
