use async_trait::async_trait;

use finchbot_common::models::embed::HelpEmbed;
use crate::Error;

/// Outbound delivery, implemented by the host platform connection. This
/// crate renders payloads; it never talks to the chat platform itself.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Send a rich embed to the given channel.
    async fn send_embed(&self, channel: &str, embed: HelpEmbed) -> Result<(), Error>;

    /// Send a plain text message to the given channel.
    async fn send_text(&self, channel: &str, text: &str) -> Result<(), Error>;
}
