use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{guild_only_message, permission_denied_message, release_embed};
use crate::moderation::notify::record_and_announce;
use ember_core::{Context, Error};
use ember_store::{LogEntry, NewRelease};
use ember_utils::permissions::has_required_role;

pub const META: CommandMeta = CommandMeta {
    name: "release",
    desc: "Record a punishment release and post it to the announcement channel.",
    category: "moderation",
    usage: "/release <user> <punishment> <reason>",
};

#[poise::command(slash_command, category = "Moderation")]
pub async fn release(
    ctx: Context<'_>,
    #[description = "The released user"] user: serenity::User,
    #[description = "Punishment being lifted"] punishment: String,
    #[description = "Reason for the release"] reason: String,
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
        ctx.data().config.punishment_role_id,
    )
    .await?
    {
        ctx.say(permission_denied_message()).await?;
        return Ok(());
    }

    let subject_name = user.tag();
    let moderator_name = ctx.author().tag();
    let entry = LogEntry::release(NewRelease {
        subject_id: user.id.get(),
        subject_name: &subject_name,
        punishment: &punishment,
        reason: &reason,
        moderator_id: ctx.author().id.get(),
        moderator_name: &moderator_name,
    });

    let notice = release_embed(&user, &punishment, &reason, ctx.author());
    let announced = record_and_announce(&ctx, &entry, notice).await?;

    let confirmation = if announced {
        "Release recorded and announced."
    } else {
        "Release recorded, but I couldn't post to the announcement channel."
    };
    ctx.say(confirmation).await?;

    Ok(())
}
