//! CLI parse tests.

use super::Cli;
use clap::Parser;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_bare() {
    let cli = parse(&["sbpe"]);
    assert!(cli.username.is_none());
    assert!(cli.profile.is_none());
    assert!(!cli.unattended);
    assert!(cli.key.is_none());
    assert!(cli.output_dir.is_none());
}

#[test]
fn cli_parse_username() {
    let cli = parse(&["sbpe", "Notch"]);
    assert_eq!(cli.username.as_deref(), Some("Notch"));
}

#[test]
fn cli_parse_profile_short_and_long() {
    let cli = parse(&["sbpe", "Notch", "-p", "Apple"]);
    assert_eq!(cli.profile.as_deref(), Some("Apple"));

    let cli = parse(&["sbpe", "Notch", "--profile", "Banana"]);
    assert_eq!(cli.profile.as_deref(), Some("Banana"));
}

#[test]
fn cli_parse_unattended() {
    let cli = parse(&["sbpe", "Notch", "--unattended"]);
    assert!(cli.unattended);

    let cli = parse(&["sbpe", "Notch", "-u"]);
    assert!(cli.unattended);
}

#[test]
fn cli_parse_key_and_output_dir() {
    let cli = parse(&["sbpe", "Notch", "--key", "abc-123", "--output-dir", "/tmp"]);
    assert_eq!(cli.key.as_deref(), Some("abc-123"));
    assert_eq!(
        cli.output_dir.as_deref(),
        Some(std::path::Path::new("/tmp"))
    );
}

#[test]
fn cli_rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["sbpe", "--bogus"]).is_err());
}
