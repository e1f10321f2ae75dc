use std::env;
use std::path::PathBuf;

use anyhow::Context as _;

/// Runtime configuration, read once at startup.
#[derive(Clone, Debug)]
pub struct BotConfig {
    /// Guild to register commands in; `None` registers globally.
    pub guild_id: Option<u64>,
    /// Channel that punishment and release notices are posted to.
    pub announcement_channel_id: u64,
    /// Role allowed to record punishments and releases.
    pub punishment_role_id: u64,
    /// Role allowed to query the mod log.
    pub log_role_id: u64,
    /// Path of the append-only mod-log file.
    pub modlog_path: PathBuf,
}

impl BotConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let guild_id = optional_id("DISCORD_GUILD_ID")?;
        let announcement_channel_id = required_id("EMBER_ANNOUNCEMENT_CHANNEL")?;
        let punishment_role_id = required_id("EMBER_PUNISHMENT_ROLE")?;
        let log_role_id = optional_id("EMBER_LOG_ROLE")?.unwrap_or(punishment_role_id);
        let modlog_path = env::var("EMBER_MODLOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("modlog.jsonl"));

        Ok(Self {
            guild_id,
            announcement_channel_id,
            punishment_role_id,
            log_role_id,
            modlog_path,
        })
    }
}

fn required_id(key: &str) -> anyhow::Result<u64> {
    let value = env::var(key).with_context(|| format!("{key} is not set"))?;
    parse_id(key, &value)
}

fn optional_id(key: &str) -> anyhow::Result<Option<u64>> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => parse_id(key, &value).map(Some),
        _ => Ok(None),
    }
}

fn parse_id(key: &str, value: &str) -> anyhow::Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .with_context(|| format!("{key} is not a valid Discord ID"))
}
