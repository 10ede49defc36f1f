//! tests/help_service_tests.rs
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

// Our crate modules
use finchbot_common::models::embed::HelpEmbed;
use finchbot_common::models::help::{CommandEntry, CommandGroup, HelpTarget};
use finchbot_core::Error;
use finchbot_core::services::{HelpConfig, HelpContext, HelpService, MessageSender};

// ---------- Mock Sender ----------
#[derive(Clone, Default)]
struct MockSender {
    embeds: Arc<Mutex<Vec<(String, HelpEmbed)>>>,
    texts: Arc<Mutex<Vec<(String, String)>>>,
}

#[async_trait]
impl MessageSender for MockSender {
    async fn send_embed(&self, channel: &str, embed: HelpEmbed) -> Result<(), Error> {
        let mut lock = self.embeds.lock().unwrap();
        lock.push((channel.to_string(), embed));
        Ok(())
    }

    async fn send_text(&self, channel: &str, text: &str) -> Result<(), Error> {
        let mut lock = self.texts.lock().unwrap();
        lock.push((channel.to_string(), text.to_string()));
        Ok(())
    }
}

fn ctx() -> HelpContext {
    HelpContext {
        channel: "#general".to_string(),
        clean_prefix: "!".to_string(),
        is_privileged: false,
    }
}

fn cmd(name: &str) -> CommandEntry {
    CommandEntry {
        name: name.to_string(),
        aliases: HashSet::new(),
        help: None,
        signature: String::new(),
        hidden: false,
        category: None,
    }
}

fn service(sender: &MockSender) -> HelpService {
    HelpService::new(HelpConfig::default(), Arc::new(sender.clone())).unwrap()
}

#[tokio::test]
async fn send_help_delivers_command_embed() {
    let sender = MockSender::default();
    let svc = service(&sender);

    let mut target = cmd("ping");
    target.help = Some("Check latency".to_string());
    svc.send_help(&ctx(), &HelpTarget::Command(target))
        .await
        .unwrap();

    let embeds = sender.embeds.lock().unwrap();
    assert_eq!(embeds.len(), 1);
    let (channel, embed) = &embeds[0];
    assert_eq!(channel, "#general");
    assert_eq!(embed.title.as_deref(), Some("Ping"));
    assert_eq!(embed.description.as_deref(), Some("Check latency"));
    assert_eq!(embed.fields.len(), 1);
    assert_eq!(embed.fields[0].name, "Usage");
    assert_eq!(embed.fields[0].value, "`!ping`");
}

#[tokio::test]
async fn send_help_delivers_group_embed_with_subcommands() {
    let sender = MockSender::default();
    let svc = service(&sender);

    let group = CommandGroup {
        entry: cmd("config"),
        subcommands: vec![cmd("set"), cmd("get")],
    };
    svc.send_help(&ctx(), &HelpTarget::Group(group))
        .await
        .unwrap();

    let embeds = sender.embeds.lock().unwrap();
    let (_, embed) = &embeds[0];
    assert_eq!(embed.title.as_deref(), Some("Config"));
    assert_eq!(embed.fields[0].name, "Subcommands");
    assert_eq!(embed.fields[0].value, "`get`, `set`");
    assert_eq!(embed.fields[1].name, "Usage");
    assert_eq!(embed.fields[1].value, "`!config`");
}

#[tokio::test]
async fn send_overview_orders_categories_by_label() {
    let sender = MockSender::default();
    let svc = service(&sender);

    let mut mapping: HashMap<Option<String>, Vec<CommandEntry>> = HashMap::new();
    mapping.insert(None, vec![cmd("alpha")]);
    mapping.insert(Some("Moderation".to_string()), vec![cmd("ban")]);

    svc.send_overview(&ctx(), &mapping).await.unwrap();

    let embeds = sender.embeds.lock().unwrap();
    let (_, embed) = &embeds[0];
    assert_eq!(embed.title.as_deref(), Some("Help"));
    let names: Vec<&str> = embed.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Moderation", "Uncategorised"]);
    assert_eq!(embed.fields[0].value, "`Ban`");
}

#[tokio::test]
async fn unknown_target_is_silent_by_default() {
    let sender = MockSender::default();
    let svc = service(&sender);

    svc.handle_unknown_target(&ctx(), "frobnicate").await.unwrap();

    assert!(sender.texts.lock().unwrap().is_empty());
    assert!(sender.embeds.lock().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_target_replies_when_not_suppressed() {
    let sender = MockSender::default();
    let config = HelpConfig {
        suppress_not_found: false,
    };
    let svc = HelpService::new(config, Arc::new(sender.clone())).unwrap();

    svc.handle_unknown_target(&ctx(), "frobnicate").await.unwrap();

    let texts = sender.texts.lock().unwrap();
    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0].1, "No command called \"frobnicate\" found.");
}

#[tokio::test]
async fn send_prefixes_replies_with_formatted_list() {
    let sender = MockSender::default();
    let svc = service(&sender);

    let prefixes = vec!["!".to_string(), "<@123> ".to_string()];
    svc.send_prefixes(&ctx(), &prefixes).await.unwrap();

    let texts = sender.texts.lock().unwrap();
    assert_eq!(texts.len(), 1);
    assert_eq!(texts[0].0, "#general");
    assert_eq!(
        texts[0].1,
        "You can mention me or use any of the following prefixes like so: `!help`, <@123> help"
    );
}
