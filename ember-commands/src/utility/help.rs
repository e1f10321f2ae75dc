use poise::serenity_prelude as serenity;

use crate::{COMMANDS, CommandMeta};
use ember_core::{Context, Error};
use ember_utils::embed::DEFAULT_EMBED_COLOR;

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "!help",
};

#[poise::command(prefix_command, slash_command, category = "Utility")]
pub async fn help(ctx: Context<'_>) -> Result<(), Error> {
    let embed = serenity::CreateEmbed::new()
        .title("Available Commands")
        .color(DEFAULT_EMBED_COLOR)
        .description(command_listing(COMMANDS));
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}

fn command_listing(commands: &[CommandMeta]) -> String {
    let mut sorted: Vec<&CommandMeta> = commands.iter().collect();
    sorted.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });

    let mut body = String::new();
    let mut current_category: Option<&str> = None;
    for meta in sorted {
        if current_category != Some(meta.category) {
            if current_category.is_some() {
                body.push('\n');
            }
            body.push_str(&format!("**{}**\n", category_heading(meta.category)));
            current_category = Some(meta.category);
        }
        body.push_str(&format!("`{}` - {}\n", meta.usage, meta.desc));
    }

    body.trim_end().to_owned()
}

fn category_heading(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}
