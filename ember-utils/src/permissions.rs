use poise::serenity_prelude as serenity;

/// Check whether a guild member carries the given role.
pub async fn has_required_role(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    user_id: serenity::UserId,
    role_id: u64,
) -> anyhow::Result<bool> {
    let member = guild_id.member(http, user_id).await?;
    Ok(member.roles.iter().any(|role| role.get() == role_id))
}
