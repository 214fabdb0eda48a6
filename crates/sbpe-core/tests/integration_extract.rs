//! Integration test: full pipeline against a local JSON stub server.
//!
//! Serves identity, profile listing, and a subset of the plan endpoints,
//! then runs resolve -> list -> select -> extract -> report and asserts the
//! partial-failure accounting and the on-disk artifacts.

mod common;

use common::json_server;
use sbpe_core::config::SbpeConfig;
use sbpe_core::extract::{self, ExtractEvent, EXTRACTION_PLAN};
use sbpe_core::fetch::Fetcher;
use sbpe_core::report::{self, REPORT_FILE};
use sbpe_core::{identity, profiles, select};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::io::Cursor;
use tempfile::tempdir;

const UUID: &str = "069a79f444e94726a5befca90e38aaf5";

fn test_config(base: &str) -> SbpeConfig {
    SbpeConfig {
        data_api_base: base.to_string(),
        identity_api_base: base.to_string(),
        connect_timeout_secs: 5,
        timeout_secs: 10,
        rate_limit_ms: 0,
        api_key: None,
    }
}

#[test]
fn full_pipeline_with_partial_failures() {
    let stats_body = json!({
        "success": true,
        "stats": { "deaths": 12, "kills": 340 }
    });

    let mut routes: json_server::Routes = HashMap::new();
    routes.insert(
        "/users/profiles/minecraft/Notch".to_string(),
        (200, json!({ "id": UUID, "name": "Notch" }).to_string()),
    );
    routes.insert(
        format!("/profiles/{}", UUID),
        (
            200,
            json!({
                "success": true,
                "profiles": {
                    "p-apple": {
                        "profile_id": "p-apple",
                        "cute_name": "Apple",
                        "members": { UUID: { "last_save": 100 } }
                    },
                    "p-banana": {
                        "profile_id": "p-banana",
                        "cute_name": "Banana",
                        "members": { UUID: { "last_save": 200 } }
                    }
                }
            })
            .to_string(),
        ),
    );
    // Two plan endpoints succeed, one fails server-side, the rest 404.
    routes.insert(
        format!("/stats/{}/p-banana", UUID),
        (200, stats_body.to_string()),
    );
    routes.insert(
        format!("/networth/{}/p-banana", UUID),
        (200, json!({ "success": true, "networth": 123456789 }).to_string()),
    );
    routes.insert(
        format!("/skills/{}/p-banana", UUID),
        (500, json!({ "error": "boom" }).to_string()),
    );

    let base = json_server::start(routes);
    let cfg = test_config(&base);
    let fetcher = Fetcher::from_config(&cfg);

    fetcher.probe(&cfg.data_api_base).unwrap();

    let player = identity::resolve(&fetcher, &cfg.identity_api_base, "Notch").unwrap();
    assert_eq!(player.display_name, "Notch");
    assert_eq!(player.uuid.raw(), UUID);

    let listed = profiles::list_profiles(&fetcher, &cfg.data_api_base, &player, "k").unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name, "Banana");
    assert_eq!(listed[1].name, "Apple");

    let mut input = Cursor::new(Vec::new());
    let mut output = Vec::new();
    let profile = select::select_profile(&listed, None, false, &mut input, &mut output)
        .unwrap()
        .unwrap();
    assert_eq!(profile.name, "Banana");

    let root = tempdir().unwrap();
    let mut skipped = Vec::new();
    let result = extract::extract(
        &fetcher,
        &cfg.data_api_base,
        &player,
        profile,
        "k",
        root.path(),
        |event| {
            if let ExtractEvent::Skipped { description, .. } = event {
                skipped.push(description);
            }
        },
    )
    .unwrap();

    assert_eq!(result.attempted, EXTRACTION_PLAN.len());
    assert_eq!(result.succeeded, 2);
    assert!(skipped.contains(&"Skills & XP"));
    assert_eq!(
        result.files_written,
        vec!["profile_raw.json", "stats.json", "networth.json"]
    );

    // M succeeded plus the mandatory raw payload on disk, nothing else yet.
    let mut on_disk: Vec<String> = std::fs::read_dir(&result.output_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    on_disk.sort();
    assert_eq!(on_disk, ["networth.json", "profile_raw.json", "stats.json"]);

    // Round-trip: written content parses back structurally equal.
    let written: Value = serde_json::from_str(
        &std::fs::read_to_string(result.output_dir.join("stats.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(written, stats_body);

    // Raw payload is the listing's verbatim per-profile object.
    let raw: Value = serde_json::from_str(
        &std::fs::read_to_string(result.output_dir.join("profile_raw.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(raw["cute_name"], "Banana");

    report::write_report(&result, &player, profile);
    let manifest =
        std::fs::read_to_string(result.output_dir.join(REPORT_FILE)).unwrap();
    assert!(manifest.contains("stats.json"));
    assert!(manifest.contains("networth.json"));
    assert!(!manifest.contains("skills.json"));
}

#[test]
fn listing_falls_back_to_active_profile_on_permission_denial() {
    let mut routes: json_server::Routes = HashMap::new();
    routes.insert(
        "/users/profiles/minecraft/Notch".to_string(),
        (200, json!({ "id": UUID, "name": "Notch" }).to_string()),
    );
    routes.insert(
        format!("/profiles/{}", UUID),
        (403, json!({ "success": false, "cause": "Invalid API key" }).to_string()),
    );
    routes.insert(
        format!("/stats/{}", UUID),
        (
            200,
            json!({
                "success": true,
                "stats": {
                    "profile_id": "p-active",
                    "profile_cute_name": "Coconut"
                }
            })
            .to_string(),
        ),
    );

    let base = json_server::start(routes);
    let cfg = test_config(&base);
    let fetcher = Fetcher::from_config(&cfg);

    let player = identity::resolve(&fetcher, &cfg.identity_api_base, "Notch").unwrap();
    let listed = profiles::list_profiles(&fetcher, &cfg.data_api_base, &player, "k").unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Coconut");
    assert_eq!(listed[0].id, "p-active");
    assert!(listed[0].is_current());
}

#[test]
fn unknown_player_is_fatal() {
    let routes: json_server::Routes = HashMap::new();
    let base = json_server::start(routes);
    let cfg = test_config(&base);
    let fetcher = Fetcher::from_config(&cfg);

    let err = identity::resolve(&fetcher, &cfg.identity_api_base, "NoSuchPlayer").unwrap_err();
    assert!(err.to_string().contains("NoSuchPlayer"));
}

#[test]
fn both_listing_strategies_failing_is_fatal() {
    let mut routes: json_server::Routes = HashMap::new();
    routes.insert(
        "/users/profiles/minecraft/Notch".to_string(),
        (200, json!({ "id": UUID, "name": "Notch" }).to_string()),
    );
    // /profiles and /stats both unrouted -> 404 on each strategy.

    let base = json_server::start(routes);
    let cfg = test_config(&base);
    let fetcher = Fetcher::from_config(&cfg);

    let player = identity::resolve(&fetcher, &cfg.identity_api_base, "Notch").unwrap();
    let err = profiles::list_profiles(&fetcher, &cfg.data_api_base, &player, "k").unwrap_err();
    assert!(err.to_string().contains("no SkyBlock profiles"));
}
