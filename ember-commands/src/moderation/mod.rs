pub mod modlogs;
pub mod punish;
pub mod release;

pub(crate) mod embeds;
mod notify;
