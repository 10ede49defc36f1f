use regex::Regex;

use crate::Error;

/// Default pattern recognizing a user mention used as a prefix, e.g.
/// `<@123456789> ` or `<@!123456789> `.
pub const DEFAULT_MENTION_PATTERN: &str = r"^<@!?\d+> ";

/// Renders the bot's accepted invocation prefixes as a display string.
pub struct PrefixFormatter {
    mention: Regex,
}

impl PrefixFormatter {
    pub fn new() -> Result<Self, Error> {
        Self::with_pattern(DEFAULT_MENTION_PATTERN)
    }

    pub fn with_pattern(pattern: &str) -> Result<Self, Error> {
        let mention = Regex::new(pattern)
            .map_err(|e| Error::Parse(format!("Invalid mention pattern: {}", e)))?;
        Ok(Self { mention })
    }

    /// One display line for all accepted prefixes, in input order. Each
    /// prefix gets the literal `help` suffix appended; a mention-style
    /// prefix stays unquoted and only the first one is kept, every other
    /// prefix is back-quoted.
    pub fn format_prefixes(&self, prefixes: &[String]) -> String {
        let mut rendered = Vec::new();
        let mut added_mention = false;

        for prefix in prefixes {
            let usage = format!("{}help", prefix);

            if self.mention.is_match(&usage) {
                if added_mention {
                    continue;
                }
                added_mention = true;
                rendered.push(usage);
            } else {
                rendered.push(format!("`{}`", usage));
            }
        }
        rendered.join(", ")
    }

    /// Full reply text for the user-facing `prefix` command.
    pub fn prefix_reply(&self, prefixes: &[String]) -> String {
        format!(
            "You can mention me or use any of the following prefixes like so: {}",
            self.format_prefixes(prefixes)
        )
    }
}
