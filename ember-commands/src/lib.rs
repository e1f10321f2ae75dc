pub mod moderation;
pub mod utility;

use ember_core::{Data, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::ping::META,
    utility::help::META,
    moderation::punish::META,
    moderation::release::META,
    moderation::modlogs::META,
];

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        utility::ping::ping(),
        utility::help::help(),
        moderation::punish::punish(),
        moderation::release::release(),
        moderation::modlogs::modlogs(),
    ]
}
