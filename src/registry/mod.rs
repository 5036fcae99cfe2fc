// radioid.net DMR User Registry
//
// Loads the users.json dump published by radioid.net for offline selection.
//
// Data source: https://radioid.net/static/users.json
// Format: {"users": [{"radio_id": 2420001, "callsign": "LA1AB", ...}, ...]}

mod download;

pub use download::{download_database, DMR_URL};

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DmrError, Result};

/// Dumps older than this are reported as stale
pub const STALE_AFTER_DAYS: i64 = 7;

/// One registered DMR user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DmrUser {
    /// DMR ID; its leading digits encode region and country
    pub radio_id: u64,
    /// Secondary registry row ID
    pub id: u64,
    #[serde(deserialize_with = "null_as_empty")]
    pub callsign: String,
    /// Given name
    #[serde(deserialize_with = "null_as_empty")]
    pub fname: String,
    /// Family name
    #[serde(deserialize_with = "null_as_empty")]
    pub surname: String,
    /// Display name
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub state: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub country: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub remarks: String,
}

/// radioid.net writes `null` for some unset text fields
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
struct UserDatabase {
    users: Vec<DmrUser>,
}

/// File name of the local dump, taken from the download URL
pub fn default_database_path() -> PathBuf {
    PathBuf::from(DMR_URL.rsplit('/').next().unwrap_or("users.json"))
}

/// Load all users from a local users.json dump
pub fn load_database(path: &Path) -> Result<Vec<DmrUser>> {
    if !path.exists() {
        return Err(DmrError::DatabaseMissing { path: path.to_path_buf() });
    }

    log::info!("Loading DMR database: {:?}", path);

    let file = File::open(path).map_err(|e| DmrError::io(path, e))?;
    let database: UserDatabase = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| DmrError::Json { path: path.to_path_buf(), source: e })?;

    log::info!("Loaded {} DMR users", database.users.len());
    Ok(database.users)
}

/// Age of the local dump in whole days, from its modification time
pub fn database_age_days(path: &Path) -> Result<i64> {
    let modified = std::fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| DmrError::io(path, e))?;
    let modified: DateTime<Utc> = modified.into();
    Ok((Utc::now() - modified).num_days())
}

/// Log a warning if the local dump is older than `STALE_AFTER_DAYS`
pub fn warn_if_stale(path: &Path) {
    match database_age_days(path) {
        Ok(age) if age > STALE_AFTER_DAYS => {
            log::warn!("DMR database is {} days old, use -d to refresh it", age);
        }
        Ok(age) => log::debug!("DMR database is {} days old", age),
        Err(e) => log::warn!("Failed to check DMR database age: {}", e),
    }
}
