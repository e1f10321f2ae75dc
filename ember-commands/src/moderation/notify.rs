use tracing::error;

use poise::serenity_prelude as serenity;

use ember_core::Context;
use ember_store::{LogEntry, StoreError};

/// Orchestrator: append the entry to the mod-log store, then post the
/// notice to the configured announcement channel.
///
/// The append is the source of truth. A failed announcement keeps the
/// record and is reported back to the caller as `false`.
pub async fn record_and_announce(
    ctx: &Context<'_>,
    entry: &LogEntry,
    notice: serenity::CreateEmbed,
) -> Result<bool, StoreError> {
    ctx.data().store.append(entry).await?;

    let channel_id = serenity::ChannelId::new(ctx.data().config.announcement_channel_id);
    let message = serenity::CreateMessage::new().embed(notice);
    if let Err(source) = channel_id.send_message(ctx.http(), message).await {
        error!(?source, "failed to post notice to announcement channel");
        return Ok(false);
    }

    Ok(true)
}
