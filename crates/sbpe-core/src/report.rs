//! Plain-text extraction manifest, plus the size helpers for the console
//! summary. Writing the report is best-effort: a failure is logged and the
//! run still counts as successful.

use chrono::Local;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::extract::ExtractionResult;
use crate::identity::PlayerIdentity;
use crate::profiles::ProfileSummary;

/// Filename of the manifest written into the output directory.
pub const REPORT_FILE: &str = "extraction_report.txt";

/// Writes `extraction_report.txt` into the result's output directory.
pub fn write_report(
    result: &ExtractionResult,
    identity: &PlayerIdentity,
    profile: &ProfileSummary,
) {
    let text = render_report(result, identity, profile);
    let path = result.output_dir.join(REPORT_FILE);
    if let Err(err) = fs::write(&path, text) {
        tracing::warn!("failed to write extraction report: {}", err);
    }
}

fn render_report(
    result: &ExtractionResult,
    identity: &PlayerIdentity,
    profile: &ProfileSummary,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "SkyBlock profile extraction report");
    let _ = writeln!(out, "==================================");
    let _ = writeln!(out, "Generated: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out, "Player:    {}", identity.display_name);
    let _ = writeln!(out, "Profile:   {} ({})", profile.name, profile.game_mode);
    let _ = writeln!(out, "UUID:      {}", identity.uuid.hyphenated());
    let _ = writeln!(
        out,
        "Extracted: {} of {} endpoints",
        result.succeeded, result.attempted
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Files written:");
    for file in &result.files_written {
        let _ = writeln!(out, "  - {}", file);
    }
    out
}

/// Total size in bytes of all regular files under `path`, recursively.
pub fn dir_size_bytes(path: &Path) -> u64 {
    let mut total = 0;
    if let Ok(entries) = fs::read_dir(path) {
        for entry in entries.flatten() {
            if let Ok(meta) = entry.metadata() {
                if meta.is_dir() {
                    total += dir_size_bytes(&entry.path());
                } else {
                    total += meta.len();
                }
            }
        }
    }
    total
}

/// Renders bytes as "x.y MB" above one mebibyte, "x.y KB" otherwise.
pub fn human_size(bytes: u64) -> String {
    const MB: u64 = 1024 * 1024;
    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}
