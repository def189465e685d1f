//! Reporter: human-readable rendering and persistence of comparison results.

use crate::error::StoreError;
use crate::store::{self, artifact};
use crate::types::{CompareReport, DiffResult};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::info;

/// Render the three sections in order: changed, added, removed.
///
/// Entries are numbered from 1 within each section; an empty section gets a
/// notice line instead.
pub fn render(diff: &DiffResult) -> String {
    let mut out = String::from("[+] Results:\n\n");
    render_section(
        &mut out,
        "Hash Differences",
        &diff.changed,
        "No hash differences found",
    );
    render_section(&mut out, "Files Added", &diff.added, "No files added");
    render_section(&mut out, "Files Removed", &diff.removed, "No files removed");
    out
}

fn render_section(out: &mut String, title: &str, paths: &BTreeSet<String>, none_found: &str) {
    out.push_str(&format!("~~~{}~~~\n", title));
    if paths.is_empty() {
        out.push_str(none_found);
        out.push('\n');
    }
    for (n, path) in paths.iter().enumerate() {
        out.push_str(&format!("{} - {}\n", n + 1, path));
    }
}

/// Write a [`CompareReport`] to `<dir>/Compare <today>: <baseline file name>`.
pub fn persist(
    dir: &Path,
    baseline_file: &Path,
    root_path: &str,
    diff: &DiffResult,
) -> Result<PathBuf, StoreError> {
    let report = CompareReport {
        root_path: root_path.to_string(),
        diff: diff.clone(),
    };
    let bytes = store::to_pretty_json(&report)?;
    let file_name = artifact::compare_file_name(baseline_file, artifact::today());
    let path = artifact::write_artifact(dir, &file_name, &bytes)?;
    info!(path = %path.display(), differences = diff.total(), "Wrote compare report");
    Ok(path)
}
