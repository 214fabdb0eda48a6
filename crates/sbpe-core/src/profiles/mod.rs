//! SkyBlock profile listing.
//!
//! Primary strategy queries the full profile listing; when that is denied
//! (restricted API visibility) or otherwise unusable, a fallback queries the
//! single active profile instead. Zero profiles from both strategies is
//! fatal. The returned list is sorted most-recently-saved first.

mod parse;

use serde_json::Value;

use crate::error::Error;
use crate::fetch::{self, Fetcher};
use crate::identity::PlayerIdentity;

pub use parse::normalize_profiles;

/// One SkyBlock save-slot, normalized from either listing strategy.
#[derive(Debug, Clone)]
pub struct ProfileSummary {
    pub id: String,
    /// Upstream "cute name" (e.g. "Apple").
    pub name: String,
    /// Opaque mode string; "normal" when upstream omits it.
    pub game_mode: String,
    /// Last-saved epoch milliseconds. `Some(0)` when the member entry is
    /// missing in the full listing; `None` when synthesized by the fallback
    /// (the profile is by definition the currently selected one).
    pub last_saved: Option<i64>,
    /// Verbatim upstream payload for this profile.
    pub raw: Value,
}

impl ProfileSummary {
    /// True for the fallback-synthesized "currently selected" profile.
    pub fn is_current(&self) -> bool {
        self.last_saved.is_none()
    }
}

/// Sorts by `last_saved` descending. The sort is stable: profiles with equal
/// timestamps keep their upstream relative order. `None` sorts first, since
/// it marks the currently selected profile.
pub fn sort_profiles(profiles: &mut [ProfileSummary]) {
    fn key(p: &ProfileSummary) -> i64 {
        p.last_saved.unwrap_or(i64::MAX)
    }
    profiles.sort_by(|a, b| key(b).cmp(&key(a)));
}

/// Lists the player's profiles, most recently saved first.
///
/// Any primary-strategy failure (permission denied, transport error, empty
/// listing) degrades to the active-profile fallback; only the fallback
/// failing too is fatal.
pub fn list_profiles(
    fetcher: &Fetcher,
    base: &str,
    identity: &PlayerIdentity,
    key: &str,
) -> Result<Vec<ProfileSummary>, Error> {
    match fetch_full_listing(fetcher, base, identity, key) {
        Ok(mut profiles) if !profiles.is_empty() => {
            sort_profiles(&mut profiles);
            Ok(profiles)
        }
        Ok(_) => {
            tracing::warn!("full listing returned no profiles, falling back to active profile");
            fetch_active_profile(fetcher, base, identity, key)
        }
        Err(Error::PermissionDenied { context }) => {
            tracing::warn!("full listing denied ({context}), falling back to active profile");
            fetch_active_profile(fetcher, base, identity, key)
        }
        Err(err) => {
            tracing::warn!("full listing failed ({err}), falling back to active profile");
            fetch_active_profile(fetcher, base, identity, key)
        }
    }
}

fn fetch_full_listing(
    fetcher: &Fetcher,
    base: &str,
    identity: &PlayerIdentity,
    key: &str,
) -> Result<Vec<ProfileSummary>, Error> {
    let path = format!("profiles/{}", identity.uuid.raw());
    let url = fetch::build_url(base, &path, key).map_err(wrap_listing_error)?;
    let body = fetcher
        .get_json(&url, "full profile listing")
        .map_err(wrap_listing_error)?;
    Ok(normalize_profiles(&body, identity.uuid.raw()))
}

fn wrap_listing_error(source: fetch::FetchError) -> Error {
    if source.is_permission_denied() {
        Error::PermissionDenied {
            context: source.to_string(),
        }
    } else {
        Error::Api {
            context: "full profile listing failed".to_string(),
            source,
        }
    }
}

/// Queries the single active profile and synthesizes a one-element list.
fn fetch_active_profile(
    fetcher: &Fetcher,
    base: &str,
    identity: &PlayerIdentity,
    key: &str,
) -> Result<Vec<ProfileSummary>, Error> {
    let no_profiles = || Error::NoProfilesFound {
        username: identity.display_name.clone(),
    };

    let path = format!("stats/{}", identity.uuid.raw());
    let url = fetch::build_url(base, &path, key).map_err(|_| no_profiles())?;
    let body = fetcher
        .get_json(&url, "active profile lookup")
        .map_err(|err| {
            tracing::debug!("active profile lookup failed: {}", err);
            no_profiles()
        })?;

    parse::normalize_active_profile(&body).ok_or_else(no_profiles).map(|p| vec![p])
}
