//! Username -> player identity resolution.
//!
//! One lookup against the name-resolution service. Any failure at all
//! (transport, non-2xx, missing or malformed id) is fatal for the run.

use serde::Deserialize;

use crate::error::Error;
use crate::fetch::Fetcher;

/// Player UUID stored in its raw 32-hex-digit form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uuid(String);

impl Uuid {
    /// Accepts raw or hyphenated input; returns `None` unless the result is
    /// exactly 32 hex digits.
    pub fn new(s: &str) -> Option<Self> {
        let raw: String = s
            .chars()
            .filter(|c| *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        if raw.len() == 32 && raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// Raw form, as used in member-map keys and endpoint paths.
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Canonical hyphenated form (8-4-4-4-12 groups).
    pub fn hyphenated(&self) -> String {
        format!(
            "{}-{}-{}-{}-{}",
            &self.0[..8],
            &self.0[8..12],
            &self.0[12..16],
            &self.0[16..20],
            &self.0[20..]
        )
    }
}

/// Resolved player identity. Immutable once created.
#[derive(Debug, Clone)]
pub struct PlayerIdentity {
    /// Display name with upstream's canonical capitalization.
    pub display_name: String,
    pub uuid: Uuid,
}

#[derive(Debug, Deserialize)]
struct NameLookup {
    id: String,
    #[serde(default)]
    name: Option<String>,
}

/// Resolves `username` via `<base>/users/profiles/minecraft/{username}`.
pub fn resolve(fetcher: &Fetcher, base: &str, username: &str) -> Result<PlayerIdentity, Error> {
    let url = format!(
        "{}/users/profiles/minecraft/{}",
        base.trim_end_matches('/'),
        username
    );

    let not_found = || Error::IdentityNotFound {
        username: username.to_string(),
    };

    let body = fetcher.get_json(&url, "name lookup").map_err(|err| {
        tracing::debug!("name lookup for '{}' failed: {}", username, err);
        not_found()
    })?;
    let lookup: NameLookup = serde_json::from_value(body).map_err(|_| not_found())?;
    let uuid = Uuid::new(&lookup.id).ok_or_else(not_found)?;

    Ok(PlayerIdentity {
        display_name: lookup.name.unwrap_or_else(|| username.to_string()),
        uuid,
    })
}
