// File: finchbot-common/src/models/mod.rs
pub mod embed;
pub mod help;

pub use embed::{EmbedField, HelpEmbed};
pub use help::{CategoryEntry, CommandEntry, CommandGroup, HelpTarget};
