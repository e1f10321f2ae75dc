use crate::CommandMeta;
use crate::moderation::embeds::{guild_only_message, log_embed, permission_denied_message};
use ember_core::{Context, Error};
use ember_store::EntryKind;
use ember_utils::formatting::format_entry_blocks;
use ember_utils::permissions::has_required_role;

pub const META: CommandMeta = CommandMeta {
    name: "modlogs",
    desc: "View recently recorded punishments and releases.",
    category: "moderation",
    usage: "/modlogs [count]",
};

/// Upstream cap on how many entries a single query reads per kind.
const MAX_ENTRIES_PER_QUERY: usize = 50;

#[poise::command(slash_command, category = "Moderation")]
pub async fn modlogs(
    ctx: Context<'_>,
    #[description = "How much history to show (1-10)"]
    #[min = 1]
    #[max = 10]
    count: Option<u32>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        ctx.say(guild_only_message()).await?;
        return Ok(());
    };

    ctx.defer_ephemeral().await?;

    if !has_required_role(
        ctx.http(),
        guild_id,
        ctx.author().id,
        ctx.data().config.log_role_id,
    )
    .await?
    {
        ctx.say(permission_denied_message()).await?;
        return Ok(());
    }

    let count = count.unwrap_or(1).clamp(1, 10) as usize;
    let limit = (count * 5).min(MAX_ENTRIES_PER_QUERY);

    let punishments = ctx.data().store.recent(EntryKind::Punishment, limit).await?;
    let releases = ctx.data().store.recent(EntryKind::Release, limit).await?;

    let embed = log_embed(
        &format_entry_blocks(&punishments),
        &format_entry_blocks(&releases),
    );
    ctx.send(poise::CreateReply::default().ephemeral(true).embed(embed))
        .await?;

    Ok(())
}
