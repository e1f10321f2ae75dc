use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Discriminator distinguishing punishment records from release records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Punishment,
    Release,
}

/// One immutable record of a punishment or release action.
///
/// Entries are never updated or deleted once written. Unknown fields in
/// stored records are ignored on decode so newer writers can extend the
/// format without breaking older readers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub kind: EntryKind,
    pub subject_id: u64,
    pub subject_name: String,
    pub punishment: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub moderator_id: u64,
    pub moderator_name: String,
    pub created_at: u64,
}

/// Parameters for a new punishment entry.
pub struct NewPunishment<'a> {
    pub subject_id: u64,
    pub subject_name: &'a str,
    pub punishment: &'a str,
    pub reason: &'a str,
    pub duration: Option<&'a str>,
    pub moderator_id: u64,
    pub moderator_name: &'a str,
}

/// Parameters for a new punishment release entry.
pub struct NewRelease<'a> {
    pub subject_id: u64,
    pub subject_name: &'a str,
    pub punishment: &'a str,
    pub reason: &'a str,
    pub moderator_id: u64,
    pub moderator_name: &'a str,
}

impl LogEntry {
    /// Build a punishment entry stamped with the current time.
    pub fn punishment(new: NewPunishment<'_>) -> Self {
        Self {
            kind: EntryKind::Punishment,
            subject_id: new.subject_id,
            subject_name: new.subject_name.to_owned(),
            punishment: new.punishment.to_owned(),
            reason: new.reason.to_owned(),
            duration: new.duration.map(str::to_owned),
            moderator_id: new.moderator_id,
            moderator_name: new.moderator_name.to_owned(),
            created_at: now_unix_secs(),
        }
    }

    /// Build a release entry stamped with the current time.
    ///
    /// Release entries never carry a duration.
    pub fn release(new: NewRelease<'_>) -> Self {
        Self {
            kind: EntryKind::Release,
            subject_id: new.subject_id,
            subject_name: new.subject_name.to_owned(),
            punishment: new.punishment.to_owned(),
            reason: new.reason.to_owned(),
            duration: None,
            moderator_id: new.moderator_id,
            moderator_name: new.moderator_name.to_owned(),
            created_at: now_unix_secs(),
        }
    }
}

/// Return the current unix timestamp in seconds.
pub fn now_unix_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_secs())
}
