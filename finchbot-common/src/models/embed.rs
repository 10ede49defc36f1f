use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};

/// One named text field of an embed. Field order within an embed is
/// significant and reflects insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// A rich-message payload as the chat platform displays it. The help
/// renderer fills title, description and fields; delivery is up to the
/// host transport.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HelpEmbed {
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<u32>,
    pub timestamp: Option<DateTime<Utc>>,
    pub fields: Vec<EmbedField>,
}

impl HelpEmbed {
    pub fn new() -> Self {
        Self::default()
    }
}
