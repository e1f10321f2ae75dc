use poise::serenity_prelude as serenity;

use crate::CommandMeta;
use crate::moderation::embeds::{guild_only_message, permission_denied_message, punishment_embed};
use crate::moderation::notify::record_and_announce;
use ember_core::{Context, Error};
use ember_store::{LogEntry, NewPunishment};
use ember_utils::permissions::has_required_role;

pub const META: CommandMeta = CommandMeta {
    name: "punish",
    desc: "Record a punishment and post it to the announcement channel.",
    category: "moderation",
    usage: "/punish <user> <punishment> <reason> [duration]",
};

#[poise::command(slash_command, category = "Moderation")]
pub async fn punish(
    ctx: Context<'_>,
    #[description = "The punished user"] user: serenity::User,
    #[description = "Punishment type"] punishment: String,
    #[description = "Reason for the punishment"] reason: String,
    #[description = "Punishment duration (e.g. 3 days)"] duration: Option<String>,
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

    let duration = duration
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    let subject_name = user.tag();
    let moderator_name = ctx.author().tag();
    let entry = LogEntry::punishment(NewPunishment {
        subject_id: user.id.get(),
        subject_name: &subject_name,
        punishment: &punishment,
        reason: &reason,
        duration,
        moderator_id: ctx.author().id.get(),
        moderator_name: &moderator_name,
    });

    let notice = punishment_embed(&user, &punishment, &reason, duration, ctx.author());
    let announced = record_and_announce(&ctx, &entry, notice).await?;

    let confirmation = if announced {
        "Punishment recorded and announced."
    } else {
        "Punishment recorded, but I couldn't post to the announcement channel."
    };
    ctx.say(confirmation).await?;

    Ok(())
}
