//! Slash-command parsing for the REPL.

use std::str::FromStr;

use mathhub_core::settings::{ExplanationDepth, GRADE_MAX, GRADE_MIN, Settings, Theme};

/// Everything a non-empty input line can mean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A plain line is a topic query.
    Topic(String),
    Settings,
    Grade(u8),
    Depth(ExplanationDepth),
    Theme(Theme),
    Thinking(bool),
    Voice(bool),
    Syllabus,
    History,
    Help,
    Quit,
}

/// Slash commands offered for completion and hinting.
pub const COMMANDS: &[&str] = &[
    "/settings",
    "/grade",
    "/depth",
    "/theme",
    "/thinking",
    "/voice",
    "/syllabus",
    "/history",
    "/help",
];

/// Parses a trimmed, non-empty input line. Errors are user-facing messages.
pub fn parse(line: &str) -> Result<Command, String> {
    if line == "quit" || line == "exit" {
        return Ok(Command::Quit);
    }
    if !line.starts_with('/') {
        return Ok(Command::Topic(line.to_string()));
    }

    let mut words = line.split_whitespace();
    let head = words.next().unwrap_or_default();
    let arg = words.next();

    match head {
        "/settings" => Ok(Command::Settings),
        "/syllabus" => Ok(Command::Syllabus),
        "/history" => Ok(Command::History),
        "/help" => Ok(Command::Help),
        "/grade" => {
            let grade = arg
                .and_then(|value| value.parse::<u8>().ok())
                .filter(|grade| Settings::is_valid_grade(*grade))
                .ok_or_else(|| {
                    format!("Usage: /grade <{GRADE_MIN}..{GRADE_MAX}>")
                })?;
            Ok(Command::Grade(grade))
        }
        "/depth" => {
            let depth = arg
                .and_then(|value| ExplanationDepth::from_str(value).ok())
                .ok_or("Usage: /depth <simple|comprehensive>")?;
            Ok(Command::Depth(depth))
        }
        "/theme" => {
            let theme = arg
                .and_then(|value| Theme::from_str(value).ok())
                .ok_or("Usage: /theme <indigo|emerald|amber|cyan>")?;
            Ok(Command::Theme(theme))
        }
        "/thinking" => parse_toggle(arg, "/thinking").map(Command::Thinking),
        "/voice" => parse_toggle(arg, "/voice").map(Command::Voice),
        other => Err(format!("Unknown command: {other}. Try /help.")),
    }
}

fn parse_toggle(arg: Option<&str>, command: &str) -> Result<bool, String> {
    match arg {
        Some("on") => Ok(true),
        Some("off") => Ok(false),
        _ => Err(format!("Usage: {command} <on|off>")),
    }
}
