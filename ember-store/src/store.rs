use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::debug;

use crate::model::{EntryKind, LogEntry};

/// Error surfaced by mod-log store operations.
///
/// A malformed stored line is not an error; reads skip it and continue.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("mod-log storage I/O failure: {0}")]
    Io(#[from] io::Error),
}

/// Append-only JSONL store for moderation log entries.
///
/// Every operation opens the backing file, does its work, and drops the
/// handle; no state is carried between calls. Append order is the only
/// ordering the store maintains.
#[derive(Clone, Debug)]
pub struct ModLogStore {
    path: PathBuf,
}

impl ModLogStore {
    /// Create a store handle for the given JSONL file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the backing file and its parent directory exist.
    ///
    /// Idempotent; called on every process start.
    pub async fn initialize(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        Ok(())
    }

    /// Durably append one entry after all previously appended entries.
    pub async fn append(&self, entry: &LogEntry) -> Result<(), StoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        let mut line = serde_json::to_string(entry).map_err(io::Error::other)?;
        line.push('\n');

        file.write_all(line.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }

    /// Return up to `limit` entries of `kind`, newest-append-first.
    ///
    /// Fewer than `limit` stored entries of that kind returns all of them;
    /// `limit == 0` returns an empty vec. The whole history is rescanned on
    /// each call; log volume in this domain is small enough that no index
    /// is kept.
    pub async fn recent(
        &self,
        kind: EntryKind,
        limit: usize,
    ) -> Result<Vec<LogEntry>, StoreError> {
        if limit == 0 || !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path).await?;
        let reader = BufReader::new(file);
        let mut lines = reader.lines();

        let mut matching = Vec::new();
        while let Some(line) = lines.next_line().await? {
            let Some(entry) = parse_line(&line) else {
                continue;
            };
            if entry.kind == kind {
                matching.push(entry);
            }
        }

        let skip = matching.len().saturating_sub(limit);
        let mut newest_first = matching.split_off(skip);
        newest_first.reverse();
        Ok(newest_first)
    }
}

/// Decode one stored line.
///
/// Blank and malformed lines yield `None` so partial corruption never
/// aborts retrieval of the remaining valid entries.
fn parse_line(line: &str) -> Option<LogEntry> {
    if line.trim().is_empty() {
        return None;
    }

    match serde_json::from_str(line) {
        Ok(entry) => Some(entry),
        Err(source) => {
            debug!(?source, "skipping malformed mod-log line");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewPunishment, NewRelease};
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> ModLogStore {
        ModLogStore::new(dir.path().join("modlog.jsonl"))
    }

    fn punishment(subject_id: u64, reason: &str) -> LogEntry {
        LogEntry::punishment(NewPunishment {
            subject_id,
            subject_name: "subject",
            punishment: "mute",
            reason,
            duration: Some("3d"),
            moderator_id: 7,
            moderator_name: "mod",
        })
    }

    fn release(subject_id: u64, reason: &str) -> LogEntry {
        LogEntry::release(NewRelease {
            subject_id,
            subject_name: "subject",
            punishment: "mute",
            reason,
            moderator_id: 7,
            moderator_name: "mod",
        })
    }

    #[tokio::test]
    async fn append_then_recent_returns_exact_entry() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let entry = punishment(1, "spam");
        store.append(&entry).await.unwrap();

        let recent = store.recent(EntryKind::Punishment, 1).await.unwrap();
        assert_eq!(recent, vec![entry]);
    }

    #[tokio::test]
    async fn recent_filters_by_kind_and_orders_newest_first() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let p1 = punishment(1, "first");
        let r1 = release(1, "lifted");
        let p2 = punishment(2, "second");
        let p3 = punishment(3, "third");
        let r2 = release(2, "lifted too");
        for entry in [&p1, &r1, &p2, &p3, &r2] {
            store.append(entry).await.unwrap();
        }

        let punishments = store.recent(EntryKind::Punishment, 2).await.unwrap();
        assert_eq!(punishments, vec![p3, p2]);

        let releases = store.recent(EntryKind::Release, 10).await.unwrap();
        assert_eq!(releases, vec![r2, r1]);
    }

    #[tokio::test]
    async fn recent_returns_all_when_fewer_than_limit() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.append(&punishment(1, "only one")).await.unwrap();

        let recent = store.recent(EntryKind::Punishment, 50).await.unwrap();
        assert_eq!(recent.len(), 1);
    }

    #[tokio::test]
    async fn recent_with_zero_limit_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.append(&punishment(1, "spam")).await.unwrap();

        let recent = store.recent(EntryKind::Punishment, 0).await.unwrap();
        assert!(recent.is_empty());
    }

    #[tokio::test]
    async fn recent_on_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let recent = store.recent(EntryKind::Release, 5).await.unwrap();
        assert!(recent.is_empty());
    }

    #[tokio::test]
    async fn initialize_is_idempotent_and_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let store = ModLogStore::new(dir.path().join("nested").join("logs").join("modlog.jsonl"));

        store.initialize().await.unwrap();
        store.initialize().await.unwrap();
        assert!(store.path().exists());

        store.append(&punishment(1, "spam")).await.unwrap();
        let recent = store.recent(EntryKind::Punishment, 1).await.unwrap();
        assert_eq!(recent.len(), 1);
    }

    #[tokio::test]
    async fn corrupted_line_does_not_abort_read() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let before = punishment(1, "before corruption");
        store.append(&before).await.unwrap();

        tokio::fs::OpenOptions::new()
            .append(true)
            .open(store.path())
            .await
            .unwrap()
            .write_all(b"{not valid json\n\n")
            .await
            .unwrap();

        let after = punishment(2, "after corruption");
        store.append(&after).await.unwrap();

        let recent = store.recent(EntryKind::Punishment, 10).await.unwrap();
        assert_eq!(recent, vec![after, before]);
    }

    #[tokio::test]
    async fn recent_parses_records_with_unknown_fields() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let line = concat!(
            r#"{"kind":"release","subject_id":9,"subject_name":"s","punishment":"ban","#,
            r#""reason":"appeal","moderator_id":7,"moderator_name":"m","created_at":5,"#,
            r#""extra_field":true}"#,
            "\n",
        );
        tokio::fs::write(store.path(), line).await.unwrap();

        let recent = store.recent(EntryKind::Release, 1).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].subject_id, 9);
        assert_eq!(recent[0].duration, None);
    }

    #[tokio::test]
    async fn created_at_is_non_decreasing_in_append_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        for id in 0..4 {
            store.append(&punishment(id, "spam")).await.unwrap();
        }

        let recent = store.recent(EntryKind::Punishment, 10).await.unwrap();
        for pair in recent.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }
}
