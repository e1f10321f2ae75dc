/// Embed colors shared across the bot UI.
pub mod embed;
/// Display formatting for stored mod-log entries.
pub mod formatting;
/// Single source of truth for the message-command prefix.
pub const COMMAND_PREFIX: char = '!';
/// Role-based permission helpers.
pub mod permissions;
