#[cfg(test)]
#[path = "command_test.rs"]
mod tests;

use once_cell::sync::Lazy;
use regex::Regex;

/// A quoted phrase (shortest match) followed by optional trailing text.
static ASK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^["'](.+?)["']\s*(.*)$"#).expect("ask pattern is valid"));

/// Tokenised form of one submitted line.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    /// First token, lower-cased.
    pub name: String,
    /// Remaining whitespace-separated tokens.
    pub args: Vec<String>,
    /// Question text, only set for `ask`.
    pub raw_question: Option<String>,
    /// Address following the quoted question, only set for `ask`. Empty when
    /// absent.
    pub raw_address: Option<String>,
}

impl ParsedCommand {
    /// Parses a raw input line. Blank input yields `None`.
    pub fn parse(input: &str) -> Option<ParsedCommand> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        let mut tokens = trimmed.split_whitespace();
        let first = tokens.next()?;
        let name = first.to_lowercase();
        let args: Vec<String> = tokens.map(str::to_string).collect();

        let mut parsed = ParsedCommand {
            name,
            args,
            ..Default::default()
        };

        if parsed.name == "ask" {
            let remainder = trimmed[first.len()..].trim();
            let (question, address) = split_question(remainder);
            parsed.raw_question = Some(question);
            parsed.raw_address = Some(address);
        }

        return Some(parsed);
    }
}

fn split_question(remainder: &str) -> (String, String) {
    match ASK_PATTERN.captures(remainder) {
        Some(captures) => {
            let question = captures.get(1).map_or("", |m| m.as_str());
            let address = captures.get(2).map_or("", |m| m.as_str().trim());
            (question.to_string(), address.to_string())
        }
        None => (remainder.to_string(), String::new()),
    }
}

/// The command a parsed line resolves to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Clear,
    Help,
    About,
    Status,
    Trending,
    NewPairs,
    Sol,
    Scan { address: Option<String> },
    Ask { question: String, address: Option<String> },
    Unknown(String),
}

impl From<&ParsedCommand> for Command {
    fn from(parsed: &ParsedCommand) -> Command {
        return match parsed.name.as_str() {
            "clear" => Command::Clear,
            "help" => Command::Help,
            "about" => Command::About,
            "status" => Command::Status,
            "trending" => Command::Trending,
            "newpairs" => Command::NewPairs,
            "sol" => Command::Sol,
            "scan" | "analyze" => Command::Scan {
                address: parsed.args.first().cloned(),
            },
            "ask" => Command::Ask {
                question: parsed.raw_question.clone().unwrap_or_default(),
                address: parsed.raw_address.clone().filter(|a| !a.is_empty()),
            },
            other => Command::Unknown(other.to_string()),
        };
    }
}
