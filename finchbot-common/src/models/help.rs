use std::collections::HashSet;
use serde::{Serialize, Deserialize};

/// Metadata for a single invocable chat command (e.g. `!lurk`), as handed
/// over by the host command framework when help is requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandEntry {
    pub name: String,
    /// Alternative names. Unordered; rendering sorts them.
    pub aliases: HashSet<String>,
    /// Help text written by the command author, if any. A fallback
    /// placeholder is substituted at render time.
    pub help: Option<String>,
    /// Argument signature, e.g. `<user> [reason]`. Empty when the command
    /// takes no arguments.
    pub signature: String,
    pub hidden: bool,
    /// Name of the owning category, if any. A back-reference only; the
    /// category owns the command, never the other way round.
    pub category: Option<String>,
}

/// A parent command together with its immediate subcommands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandGroup {
    pub entry: CommandEntry,
    pub subcommands: Vec<CommandEntry>,
}

/// A display grouping of commands. `name: None` is the framework's
/// "no category" bucket and is normalized to a fixed label when rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub name: Option<String>,
    pub description: Option<String>,
    pub commands: Vec<CommandEntry>,
}

/// What a help request points at.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum HelpTarget {
    Command(CommandEntry),
    Group(CommandGroup),
    Category(CategoryEntry),
}
