use poise::serenity_prelude as serenity;

use ember_utils::embed::{DEFAULT_EMBED_COLOR, PUNISHMENT_EMBED_COLOR, RELEASE_EMBED_COLOR};

/// Discord caps embed field values at 1024 characters.
const FIELD_VALUE_CAP: usize = 1024;

/// Build the announcement-channel notice for a punishment.
pub fn punishment_embed(
    subject: &serenity::User,
    punishment: &str,
    reason: &str,
    duration: Option<&str>,
    moderator: &serenity::User,
) -> serenity::CreateEmbed {
    let reason = reason.replace('@', "@\u{200B}");
    let duration = duration.unwrap_or("No duration specified").to_owned();

    serenity::CreateEmbed::new()
        .title("Punishment Notice")
        .description(format!(
            "A punishment has been applied to <@{}>.",
            subject.id.get()
        ))
        .color(PUNISHMENT_EMBED_COLOR)
        .timestamp(serenity::Timestamp::now())
        .field(
            "Subject",
            format!("{} (`{}`)", subject.tag(), subject.id.get()),
            true,
        )
        .field("Punishment", punishment.to_owned(), false)
        .field("Reason", reason, false)
        .field("Duration", duration, false)
        .footer(serenity::CreateEmbedFooter::new(format!(
            "Moderator: {} | ID: {}",
            moderator.tag(),
            moderator.id.get()
        )))
}

/// Build the announcement-channel notice for a punishment release.
pub fn release_embed(
    subject: &serenity::User,
    punishment: &str,
    reason: &str,
    moderator: &serenity::User,
) -> serenity::CreateEmbed {
    let reason = reason.replace('@', "@\u{200B}");

    serenity::CreateEmbed::new()
        .title("Punishment Release Notice")
        .description(format!(
            "The punishment on <@{}> has been lifted.",
            subject.id.get()
        ))
        .color(RELEASE_EMBED_COLOR)
        .timestamp(serenity::Timestamp::now())
        .field(
            "Subject",
            format!("{} (`{}`)", subject.tag(), subject.id.get()),
            true,
        )
        .field("Punishment", punishment.to_owned(), false)
        .field("Reason", reason, false)
        .footer(serenity::CreateEmbedFooter::new(format!(
            "Moderator: {} | ID: {}",
            moderator.tag(),
            moderator.id.get()
        )))
}

/// Build the summary embed for the `modlogs` query.
pub fn log_embed(punishments: &[String], releases: &[String]) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title("Moderation Log")
        .color(DEFAULT_EMBED_COLOR)
        .timestamp(serenity::Timestamp::now())
        .field(
            "Recent punishments",
            field_text(punishments, "No punishments recorded."),
            false,
        )
        .field(
            "Recent releases",
            field_text(releases, "No releases recorded."),
            false,
        )
}

fn field_text(blocks: &[String], placeholder: &str) -> String {
    if blocks.is_empty() {
        return placeholder.to_owned();
    }

    let joined = blocks.join("\n\n");
    if joined.len() <= FIELD_VALUE_CAP {
        return joined;
    }

    let mut cut = FIELD_VALUE_CAP - '…'.len_utf8();
    while !joined.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…", &joined[..cut])
}

pub fn guild_only_message() -> &'static str {
    "This command only works in servers."
}

pub fn permission_denied_message() -> &'static str {
    "You don't have permission to run this command."
}
