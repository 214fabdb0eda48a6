//! Pipeline driver: identity -> profiles -> selection -> extraction -> report.
//!
//! Console messages use fixed category prefixes: `[i]` info, `[+]` success,
//! `[!]` warning, `[x]` error. Per-endpoint failures only warn; the run exits
//! non-zero only on the fatal conditions (identity, profile listing, missing
//! required input in unattended mode).

use anyhow::{Context, Result};
use std::io::{self, Write};

use sbpe_core::config::SbpeConfig;
use sbpe_core::error::Error;
use sbpe_core::extract::{self, ExtractEvent};
use sbpe_core::fetch::Fetcher;
use sbpe_core::{identity, profiles, report, select};

use super::Cli;

pub fn run(cli: Cli, cfg: SbpeConfig) -> Result<()> {
    let interactive = !cli.unattended;
    let fetcher = Fetcher::from_config(&cfg);

    println!(">> SkyBlock Profile Extractor v{}", env!("CARGO_PKG_VERSION"));

    fetcher
        .probe(&cfg.data_api_base)
        .context("cannot reach the SkyBlock data API; check your internet connection")?;

    let username = resolve_username(cli.username, interactive)?;
    let key = resolve_credential(cli.key, &cfg, interactive)?;

    println!("[i] Looking up UUID for {}...", username);
    let player = identity::resolve(&fetcher, &cfg.identity_api_base, &username)?;
    println!(
        "[+] Found player: {} ({}...)",
        player.display_name,
        &player.uuid.raw()[..8]
    );

    println!("[i] Fetching SkyBlock profiles...");
    let profiles = profiles::list_profiles(&fetcher, &cfg.data_api_base, &player, &key)?;
    if profiles.len() == 1 && profiles[0].is_current() {
        println!("[!] Full profile listing unavailable; using the active profile only.");
    }
    println!("[+] Found {} profile(s).", profiles.len());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let selected = select::select_profile(
        &profiles,
        cli.profile.as_deref(),
        interactive,
        &mut input,
        &mut output,
    )?;
    let profile = match selected {
        Some(p) => p,
        None => anyhow::bail!("no profile selected"),
    };
    println!("[i] Using profile: {}", profile.name);

    let root = match cli.output_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let result = extract::extract(
        &fetcher,
        &cfg.data_api_base,
        &player,
        profile,
        &key,
        &root,
        |event| match event {
            ExtractEvent::Fetching { description } => {
                println!("[i] Extracting {}...", description);
            }
            ExtractEvent::Saved { description, .. } => {
                println!("[+] Saved {}", description);
            }
            ExtractEvent::Skipped { description, error } => {
                println!("[!] Failed to extract {}: {}", description, error);
            }
        },
    )?;

    report::write_report(&result, &player, profile);

    let rate = if result.attempted == 0 {
        100.0
    } else {
        result.succeeded as f64 / result.attempted as f64 * 100.0
    };
    println!();
    println!("[+] Data extraction completed!");
    println!("[i] Output directory: {}", result.output_dir.display());
    println!(
        "[i] Files extracted: {}/{}",
        result.succeeded, result.attempted
    );
    println!("[i] Success rate: {:.1}%", rate);
    println!(
        "[i] Total size: {}",
        report::human_size(report::dir_size_bytes(&result.output_dir))
    );
    Ok(())
}

fn resolve_username(arg: Option<String>, interactive: bool) -> Result<String> {
    let username = match arg {
        Some(u) => u,
        None => {
            if !interactive {
                anyhow::bail!("a username is required in unattended mode");
            }
            prompt_line("Enter your Minecraft username: ")?
        }
    };
    let username = username.trim().to_string();
    if username.is_empty() {
        anyhow::bail!("username must not be empty");
    }
    Ok(username)
}

/// Flag wins over the config file; an interactive prompt is the last resort.
fn resolve_credential(flag: Option<String>, cfg: &SbpeConfig, interactive: bool) -> Result<String> {
    if let Some(key) = flag {
        let key = key.trim().to_string();
        if !key.is_empty() {
            return Ok(key);
        }
    }
    if let Some(key) = cfg.api_key.as_deref() {
        let key = key.trim();
        if !key.is_empty() {
            return Ok(key.to_string());
        }
    }
    if !interactive {
        return Err(Error::MissingCredential.into());
    }
    let key = prompt_line("Enter your API key: ")?;
    if key.is_empty() {
        return Err(Error::MissingCredential.into());
    }
    Ok(key)
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
