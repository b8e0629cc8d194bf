use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::audit::AuditLog;
use crate::models::committee::Committee;
use crate::models::meeting::Meeting;

pub const DEFAULT_SEED: &str = include_str!("../data/seed/collaboration.json");

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "Seed file error: {e}"),
            StoreError::Json(e) => write!(f, "Seed JSON error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e)
    }
}

/// Shape of a seed file.
#[derive(Debug, Deserialize)]
pub struct SeedPayload {
    #[serde(default)]
    pub projects: Vec<String>,
    #[serde(default)]
    pub committees: Vec<Committee>,
    #[serde(default)]
    pub meetings: Vec<Meeting>,
}

/// Every collection the application works on. Lives only as long as the
/// process.
#[derive(Debug, Default)]
pub struct Store {
    pub projects: Vec<String>,
    pub committees: Vec<Committee>,
    pub meetings: Vec<Meeting>,
    pub audit: AuditLog,
    last_member_id: i64,
    last_meeting_id: i64,
}

impl Store {
    pub fn from_payload(payload: SeedPayload) -> Self {
        let last_member_id = payload
            .committees
            .iter()
            .flat_map(|c| c.members.iter().map(|m| m.id))
            .max()
            .unwrap_or(0);
        let last_meeting_id = payload.meetings.iter().map(|m| m.id).max().unwrap_or(0);
        Store {
            projects: payload.projects,
            committees: payload.committees,
            meetings: payload.meetings,
            audit: AuditLog::default(),
            last_member_id,
            last_meeting_id,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let payload: SeedPayload = serde_json::from_str(json)?;
        Ok(Self::from_payload(payload))
    }

    /// Member ids are unique across all committees.
    pub fn next_member_id(&mut self) -> i64 {
        self.last_member_id += 1;
        self.last_member_id
    }

    pub fn next_meeting_id(&mut self) -> i64 {
        self.last_meeting_id += 1;
        self.last_meeting_id
    }
}

/// Load the store from `seed_file`, or from the bundled dataset when unset.
pub fn load(seed_file: Option<&Path>) -> Result<Store, StoreError> {
    let store = match seed_file {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            Store::from_json(&json)?
        }
        None => Store::from_json(DEFAULT_SEED)?,
    };
    log::info!(
        "Seed loaded: projects={}, committees={}, meetings={}",
        store.projects.len(),
        store.committees.len(),
        store.meetings.len()
    );
    Ok(store)
}
