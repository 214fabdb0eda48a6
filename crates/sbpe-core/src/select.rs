//! Deterministic profile selection, with an interactive chooser.
//!
//! Selection order, first match wins:
//! 1. requested name, case-insensitive exact match;
//! 2. requested-but-missing emits a warning and falls through;
//! 3. non-interactive mode or a single profile takes the first element
//!    (most recently saved, per the lister's sort);
//! 4. otherwise an enumerated prompt loops until a valid 1-based choice.

use anyhow::Result;
use std::io::{BufRead, Write};

use crate::profiles::ProfileSummary;

/// Picks one profile. Returns `Ok(None)` only when the interactive prompt is
/// cancelled (EOF); the caller must treat that as run termination.
///
/// The prompt reads from `input` and writes to `output` so tests can drive
/// it with in-memory buffers.
pub fn select_profile<'a, R, W>(
    profiles: &'a [ProfileSummary],
    requested: Option<&str>,
    interactive: bool,
    input: &mut R,
    output: &mut W,
) -> Result<Option<&'a ProfileSummary>>
where
    R: BufRead,
    W: Write,
{
    if let Some(name) = requested {
        if let Some(found) = profiles.iter().find(|p| p.name.eq_ignore_ascii_case(name)) {
            return Ok(Some(found));
        }
        tracing::warn!("requested profile '{}' not found", name);
        writeln!(output, "[!] Profile '{}' not found. Available profiles:", name)?;
        for (i, p) in profiles.iter().enumerate() {
            writeln!(output, "  {}. {}", i + 1, p.name)?;
        }
    }

    if !interactive || profiles.len() == 1 {
        return Ok(profiles.first());
    }

    writeln!(output)?;
    writeln!(output, "[i] Available profiles:")?;
    for (i, p) in profiles.iter().enumerate() {
        writeln!(output, "  {}. {}{}", i + 1, p.name, annotation(p))?;
    }

    loop {
        write!(output, "Select profile [1]: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            writeln!(output, "Operation cancelled.")?;
            return Ok(None);
        }

        let choice = line.trim();
        let choice = if choice.is_empty() { "1" } else { choice };
        match choice.parse::<usize>() {
            Ok(n) if (1..=profiles.len()).contains(&n) => return Ok(Some(&profiles[n - 1])),
            Ok(_) => writeln!(output, "Invalid choice. Please try again.")?,
            Err(_) => writeln!(output, "Please enter a valid number.")?,
        }
    }
}

fn annotation(p: &ProfileSummary) -> String {
    let mut s = String::new();
    if p.game_mode != "normal" {
        s.push_str(&format!(" [{}]", p.game_mode));
    }
    if p.is_current() {
        s.push_str(" (currently selected)");
    }
    s
}
