pub mod config;

pub use config::BotConfig;

use ember_store::ModLogStore;

pub type Error = anyhow::Error;

/// Process-lifetime context handed to every command invocation.
#[derive(Clone, Debug)]
pub struct Data {
    pub store: ModLogStore,
    pub config: BotConfig,
}

pub type Context<'a> = poise::Context<'a, Data, Error>;
