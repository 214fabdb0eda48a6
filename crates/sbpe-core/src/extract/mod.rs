//! Extraction orchestration: one output directory per run, the mandatory
//! raw-payload file, then the fixed plan of auxiliary endpoint fetches.
//!
//! A failed plan entry is recorded and skipped; the batch never aborts
//! because one category failed, and no retry or backoff is attempted.
//! The directory name has second resolution, so repeated runs for the same
//! player and profile within one second collide; accepted limitation.

mod plan;

use chrono::{DateTime, Local};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::fetch::{self, Fetcher};
use crate::identity::PlayerIdentity;
use crate::outname::sanitize_component;
use crate::profiles::ProfileSummary;

pub use plan::{render_endpoint, PlanEntry, EXTRACTION_PLAN};

/// Filename of the mandatory verbatim profile payload.
pub const RAW_PROFILE_FILE: &str = "profile_raw.json";

/// Outcome of one extraction batch. Terminal: written to disk and
/// summarized, never mutated after creation.
#[derive(Debug)]
pub struct ExtractionResult {
    pub output_dir: PathBuf,
    /// Files actually written, in write order (raw payload first).
    pub files_written: Vec<String>,
    /// Plan entries that produced a file.
    pub succeeded: usize,
    /// Plan entries attempted (the full plan length).
    pub attempted: usize,
}

/// Progress notification for one plan entry, consumed by the CLI.
#[derive(Debug)]
pub enum ExtractEvent {
    Fetching { description: &'static str },
    Saved { description: &'static str, file: &'static str },
    Skipped { description: &'static str, error: String },
}

/// `{display_name}_{sanitized_profile}_{YYYYmmdd_HHMMSS}`.
pub fn output_dir_name(
    display_name: &str,
    profile_name: &str,
    now: &DateTime<Local>,
) -> String {
    format!(
        "{}_{}_{}",
        display_name,
        sanitize_component(profile_name),
        now.format("%Y%m%d_%H%M%S")
    )
}

/// Runs the full extraction batch for one selected profile.
///
/// Creates the output directory under `root`, writes the raw payload
/// (failure here is fatal), then works through the plan with
/// skip-and-continue semantics, reporting per-entry progress via `on_event`.
pub fn extract(
    fetcher: &Fetcher,
    base: &str,
    identity: &PlayerIdentity,
    profile: &ProfileSummary,
    key: &str,
    root: &Path,
    mut on_event: impl FnMut(ExtractEvent),
) -> Result<ExtractionResult, Error> {
    let dir_name = output_dir_name(&identity.display_name, &profile.name, &Local::now());
    let output_dir = root.join(dir_name);
    fs::create_dir_all(&output_dir)?;
    tracing::info!("created output directory {}", output_dir.display());

    let mut files_written = Vec::with_capacity(EXTRACTION_PLAN.len() + 1);

    // The authoritative record; everything after it is convenience extracts.
    write_json_file(&output_dir.join(RAW_PROFILE_FILE), &profile.raw)?;
    files_written.push(RAW_PROFILE_FILE.to_string());

    let attempted = EXTRACTION_PLAN.len();
    let mut succeeded = 0usize;

    for entry in EXTRACTION_PLAN {
        on_event(ExtractEvent::Fetching {
            description: entry.description,
        });
        match fetch_entry(fetcher, base, identity, profile, key, &output_dir, entry) {
            Ok(()) => {
                succeeded += 1;
                files_written.push(entry.file.to_string());
                on_event(ExtractEvent::Saved {
                    description: entry.description,
                    file: entry.file,
                });
            }
            Err(err) => {
                tracing::warn!("skipping {}: {}", entry.description, err);
                on_event(ExtractEvent::Skipped {
                    description: entry.description,
                    error: err.to_string(),
                });
            }
        }
    }

    Ok(ExtractionResult {
        output_dir,
        files_written,
        succeeded,
        attempted,
    })
}

fn fetch_entry(
    fetcher: &Fetcher,
    base: &str,
    identity: &PlayerIdentity,
    profile: &ProfileSummary,
    key: &str,
    output_dir: &Path,
    entry: &PlanEntry,
) -> Result<(), Error> {
    let wrap = |source| Error::EndpointFetchFailed {
        description: entry.description.to_string(),
        source,
    };

    let path = render_endpoint(entry.endpoint, identity.uuid.raw(), &profile.id);
    let url = fetch::build_url(base, &path, key).map_err(wrap)?;
    let body = fetcher.get_json(&url, entry.description).map_err(wrap)?;
    write_json_file(&output_dir.join(entry.file), &body)
}

/// Pretty-prints `value` to `path`. Key order is the order received from
/// upstream, so a parse of the written file is structurally equal to the
/// response body.
fn write_json_file(path: &Path, value: &Value) -> Result<(), Error> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    fs::write(path, text)?;
    Ok(())
}
