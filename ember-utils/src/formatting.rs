use ember_store::LogEntry;

/// Render one stored entry into a multi-line display block.
///
/// The duration line only appears when the entry carries one, and the
/// recorded-at timestamp uses Discord timestamp markup.
pub fn format_entry_block(entry: &LogEntry) -> String {
    let mut lines = vec![
        format!("• {} (`{}`)", entry.subject_name, entry.subject_id),
        format!("  - Punishment: {}", entry.punishment),
        format!("  - Reason: {}", entry.reason.replace('@', "@\u{200B}")),
        format!(
            "  - Moderator: {} (`{}`)",
            entry.moderator_name, entry.moderator_id
        ),
    ];

    if let Some(duration) = entry.duration.as_deref() {
        lines.push(format!("  - Duration: {duration}"));
    }

    lines.push(format!("  - Recorded: <t:{}:f>", entry.created_at));
    lines.join("\n")
}

/// Render a batch of entries into display blocks, preserving their order.
pub fn format_entry_blocks(entries: &[LogEntry]) -> Vec<String> {
    entries.iter().map(format_entry_block).collect()
}

#[cfg(test)]
mod tests {
    use super::{format_entry_block, format_entry_blocks};
    use ember_store::{EntryKind, LogEntry};

    fn entry(duration: Option<&str>) -> LogEntry {
        LogEntry {
            kind: EntryKind::Punishment,
            subject_id: 42,
            subject_name: "someone".to_owned(),
            punishment: "mute".to_owned(),
            reason: "spam".to_owned(),
            duration: duration.map(str::to_owned),
            moderator_id: 7,
            moderator_name: "mod".to_owned(),
            created_at: 1_700_000_000,
        }
    }

    #[test]
    fn block_includes_duration_when_present() {
        let block = format_entry_block(&entry(Some("3d")));
        assert!(block.contains("• someone (`42`)"));
        assert!(block.contains("  - Punishment: mute"));
        assert!(block.contains("  - Duration: 3d"));
        assert!(block.contains("  - Recorded: <t:1700000000:f>"));
    }

    #[test]
    fn block_omits_duration_when_absent() {
        let block = format_entry_block(&entry(None));
        assert!(!block.contains("Duration"));
    }

    #[test]
    fn reason_mentions_are_neutralized() {
        let mut sample = entry(None);
        sample.reason = "@everyone ping".to_owned();
        let block = format_entry_block(&sample);
        assert!(!block.contains("@everyone"));
    }

    #[test]
    fn batch_formatting_preserves_order() {
        let mut second = entry(None);
        second.subject_name = "other".to_owned();
        let blocks = format_entry_blocks(&[entry(None), second]);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].contains("someone"));
        assert!(blocks[1].contains("other"));
    }
}
