// File: src/services/mod.rs

pub mod help_service;
pub mod message_sender;
pub mod prefix_service;

pub use help_service::{HelpConfig, HelpContext, HelpService};
pub use message_sender::MessageSender;
pub use prefix_service::PrefixFormatter;
