//! Wire structures for the two profile listing endpoints.

use serde::Deserialize;
use serde_json::Value;

use super::ProfileSummary;

/// Per-profile object inside the full listing's `profiles` map.
#[derive(Debug, Deserialize)]
struct ProfileEntry {
    profile_id: String,
    cute_name: String,
    #[serde(default)]
    game_mode: Option<String>,
    #[serde(default)]
    members: serde_json::Map<String, Value>,
}

/// `stats` object of the active-profile endpoint.
#[derive(Debug, Deserialize)]
struct ActiveStats {
    profile_id: String,
    profile_cute_name: String,
    #[serde(default)]
    game_mode: Option<String>,
}

/// Normalizes the full listing body into `ProfileSummary` records, in
/// upstream order. Malformed entries are skipped with a warning; the caller
/// treats an empty result as a failed strategy.
///
/// `last_saved` comes from the member entry keyed by the player's raw uuid,
/// defaulting to 0 when absent.
pub fn normalize_profiles(body: &Value, raw_uuid: &str) -> Vec<ProfileSummary> {
    let Some(entries) = body.get("profiles").and_then(Value::as_object) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(entries.len());
    for (id, raw) in entries {
        let entry: ProfileEntry = match serde_json::from_value(raw.clone()) {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("skipping malformed profile entry '{}': {}", id, err);
                continue;
            }
        };

        let last_saved = entry
            .members
            .get(raw_uuid)
            .and_then(|m| m.get("last_save"))
            .and_then(Value::as_i64)
            .unwrap_or(0);

        out.push(ProfileSummary {
            id: entry.profile_id,
            name: entry.cute_name,
            game_mode: entry.game_mode.unwrap_or_else(|| "normal".to_string()),
            last_saved: Some(last_saved),
            raw: raw.clone(),
        });
    }
    out
}

/// Normalizes the active-profile body into a single summary with
/// `last_saved` unset (it is the currently selected profile).
pub(super) fn normalize_active_profile(body: &Value) -> Option<ProfileSummary> {
    let stats = body.get("stats")?;
    let parsed: ActiveStats = serde_json::from_value(stats.clone()).ok()?;
    Some(ProfileSummary {
        id: parsed.profile_id,
        name: parsed.profile_cute_name,
        game_mode: parsed.game_mode.unwrap_or_else(|| "normal".to_string()),
        last_saved: None,
        raw: stats.clone(),
    })
}
