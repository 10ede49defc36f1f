use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use serde::{Serialize, Deserialize};
use tracing::debug;

use finchbot_common::models::embed::{EmbedField, HelpEmbed};
use finchbot_common::models::help::{CategoryEntry, CommandEntry, CommandGroup, HelpTarget};
use crate::Error;
use crate::services::message_sender::MessageSender;
use crate::services::prefix_service::PrefixFormatter;

/// Placeholder shown when a command or category has no help text.
pub const DEFAULT_HELP: &str = "\u{203c} `No help message provided.`";

/// Display label for commands that belong to no category.
pub const UNCATEGORISED: &str = "Uncategorised";

/// Per-invocation request context supplied by the host framework.
pub struct HelpContext {
    /// Channel the reply goes to.
    pub channel: String,
    /// The prefix the user actually invoked the bot with, cleaned up for
    /// display (mentions resolved to a readable form).
    pub clean_prefix: String,
    /// Whether the requesting user may see hidden commands.
    pub is_privileged: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpConfig {
    /// When true, requests for an unknown command or subcommand get no
    /// reply at all.
    pub suppress_not_found: bool,
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            suppress_not_found: true,
        }
    }
}

// ----------------------------------------------------------------
// Formatting helpers
// ----------------------------------------------------------------

/// Uppercases only the first character, leaving the rest unchanged.
/// Idempotent on already-capitalized input.
pub fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if !first.is_uppercase() => {
            first.to_uppercase().collect::<String>() + chars.as_str()
        }
        _ => s.to_string(),
    }
}

/// Sorts the items lexicographically, back-quotes each one and joins them
/// with `", "`.
pub fn format_list<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut items: Vec<String> = items
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect();
    items.sort();
    items
        .iter()
        .map(|s| format!("`{}`", s))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Full invocation line for a command, back-quoted as a single token.
pub fn usage_signature(prefix: &str, cmd: &CommandEntry) -> String {
    if cmd.signature.is_empty() {
        format!("`{}{}`", prefix, cmd.name)
    } else {
        format!("`{}{} {}`", prefix, cmd.name, cmd.signature)
    }
}

/// Hidden commands are only shown to privileged requesters.
pub fn is_visible(cmd: &CommandEntry, is_privileged: bool) -> bool {
    !cmd.hidden || is_privileged
}

fn help_text(cmd: &CommandEntry) -> String {
    cmd.help.clone().unwrap_or_else(|| DEFAULT_HELP.to_string())
}

// ----------------------------------------------------------------
// Rendering
// ----------------------------------------------------------------

/// Renders a single command: `[Aliases?, Usage]`.
pub fn render_command(ctx: &HelpContext, cmd: &CommandEntry) -> HelpEmbed {
    let mut embed = HelpEmbed::new();
    embed.title = Some(capitalise(&cmd.name));
    embed.description = Some(help_text(cmd));

    let aliases = format_list(&cmd.aliases);
    if !aliases.is_empty() {
        embed.fields.push(EmbedField {
            name: "Aliases".to_string(),
            value: aliases,
            inline: false,
        });
    }
    embed.fields.push(EmbedField {
        name: "Usage".to_string(),
        value: usage_signature(&ctx.clean_prefix, cmd),
        inline: false,
    });
    embed
}

/// Renders a command group: `[Aliases?, Subcommands, Usage]`.
pub fn render_group(ctx: &HelpContext, group: &CommandGroup) -> HelpEmbed {
    let mut embed = HelpEmbed::new();
    embed.title = Some(capitalise(&group.entry.name));
    embed.description = Some(help_text(&group.entry));

    let aliases = format_list(&group.entry.aliases);
    if !aliases.is_empty() {
        embed.fields.push(EmbedField {
            name: "Aliases".to_string(),
            value: aliases,
            inline: false,
        });
    }

    let subcommands = format_list(
        group
            .subcommands
            .iter()
            .filter(|c| is_visible(c, ctx.is_privileged))
            .map(|c| c.name.as_str()),
    );
    embed.fields.push(EmbedField {
        name: "Subcommands".to_string(),
        value: subcommands,
        inline: false,
    });
    embed.fields.push(EmbedField {
        name: "Usage".to_string(),
        value: usage_signature(&ctx.clean_prefix, &group.entry),
        inline: false,
    });
    embed
}

/// Renders one category: a single `Commands` field with its visible members.
pub fn render_category(ctx: &HelpContext, category: &CategoryEntry) -> HelpEmbed {
    let label = category.name.as_deref().unwrap_or(UNCATEGORISED);

    let mut embed = HelpEmbed::new();
    embed.title = Some(capitalise(label));
    embed.description = Some(
        category
            .description
            .clone()
            .unwrap_or_else(|| DEFAULT_HELP.to_string()),
    );
    embed.fields.push(EmbedField {
        name: "Commands".to_string(),
        value: format_list(
            category
                .commands
                .iter()
                .filter(|c| is_visible(c, ctx.is_privileged))
                .map(|c| c.name.as_str()),
        ),
        inline: false,
    });
    embed
}

/// Renders the full listing: one field per category that still has visible
/// commands, sorted by case-normalized category label. The `None` category
/// is folded into [`UNCATEGORISED`] before sorting; duplicate labels after
/// that are merged.
pub fn render_overview(
    ctx: &HelpContext,
    mapping: &HashMap<Option<String>, Vec<CommandEntry>>,
) -> HelpEmbed {
    let mut buckets: BTreeMap<String, Vec<&CommandEntry>> = BTreeMap::new();
    for (name, commands) in mapping {
        let label = name.clone().unwrap_or_else(|| UNCATEGORISED.to_string());
        buckets.entry(label).or_default().extend(commands.iter());
    }

    let mut ordered: Vec<(String, Vec<&CommandEntry>)> = buckets.into_iter().collect();
    ordered.sort_by_key(|(label, _)| label.to_lowercase());

    let mut embed = HelpEmbed::new();
    embed.title = Some("Help".to_string());
    embed.description = Some(format!(
        "For additional support, do `{}invite`",
        ctx.clean_prefix
    ));

    for (label, commands) in ordered {
        let visible: Vec<String> = commands
            .iter()
            .filter(|c| is_visible(c, ctx.is_privileged))
            .map(|c| capitalise(&c.name))
            .collect();
        if visible.is_empty() {
            continue;
        }
        embed.fields.push(EmbedField {
            name: capitalise(&label),
            value: format_list(visible),
            inline: false,
        });
    }
    embed
}

/// Dispatches rendering over the three target shapes.
pub fn render_target(ctx: &HelpContext, target: &HelpTarget) -> HelpEmbed {
    match target {
        HelpTarget::Command(cmd) => render_command(ctx, cmd),
        HelpTarget::Group(group) => render_group(ctx, group),
        HelpTarget::Category(category) => render_category(ctx, category),
    }
}

// ----------------------------------------------------------------
// Service
// ----------------------------------------------------------------

/// Renders help payloads and hands them to the outbound sender. Holds no
/// command data of its own; everything is supplied per invocation.
pub struct HelpService {
    config: HelpConfig,
    prefixes: PrefixFormatter,
    sender: Arc<dyn MessageSender>,
}

impl HelpService {
    pub fn new(config: HelpConfig, sender: Arc<dyn MessageSender>) -> Result<Self, Error> {
        debug!("Initializing HelpService");
        Ok(Self {
            config,
            prefixes: PrefixFormatter::new()?,
            sender,
        })
    }

    /// Renders help for one target and sends the embed.
    pub async fn send_help(&self, ctx: &HelpContext, target: &HelpTarget) -> Result<(), Error> {
        debug!("send_help() for channel '{}'", ctx.channel);
        let embed = render_target(ctx, target);
        self.sender.send_embed(&ctx.channel, embed).await
    }

    /// Renders the full command listing and sends the embed.
    pub async fn send_overview(
        &self,
        ctx: &HelpContext,
        mapping: &HashMap<Option<String>, Vec<CommandEntry>>,
    ) -> Result<(), Error> {
        debug!(
            "send_overview() for channel '{}' with {} categories",
            ctx.channel,
            mapping.len()
        );
        let embed = render_overview(ctx, mapping);
        self.sender.send_embed(&ctx.channel, embed).await
    }

    /// Hook for help requests that resolved to nothing. Silent unless the
    /// config says otherwise.
    pub async fn handle_unknown_target(&self, ctx: &HelpContext, query: &str) -> Result<(), Error> {
        if self.config.suppress_not_found {
            debug!("No help target matching '{}'; staying silent", query);
            return Ok(());
        }
        self.sender
            .send_text(
                &ctx.channel,
                &format!("No command called \"{}\" found.", query),
            )
            .await
    }

    /// The `prefix` command: plain-text reply listing the accepted
    /// invocation prefixes.
    pub async fn send_prefixes(&self, ctx: &HelpContext, prefixes: &[String]) -> Result<(), Error> {
        debug!("send_prefixes() for channel '{}'", ctx.channel);
        let reply = self.prefixes.prefix_reply(prefixes);
        self.sender.send_text(&ctx.channel, &reply).await
    }
}
