use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ---------------------------------------------------------------------------
// Window commands: UI → host (payload-free, fire-and-forget)
// ---------------------------------------------------------------------------

/// One of the three window-chrome actions the UI can ask the host for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowCommand {
    Close,
    Minimize,
    Maximize,
}

impl WindowCommand {
    pub const ALL: [WindowCommand; 3] = [
        WindowCommand::Close,
        WindowCommand::Minimize,
        WindowCommand::Maximize,
    ];

    /// The wire tag carried over the message channel.
    pub fn tag(self) -> &'static str {
        match self {
            WindowCommand::Close => "window:close",
            WindowCommand::Minimize => "window:minimize",
            WindowCommand::Maximize => "window:maximize",
        }
    }
}

impl fmt::Display for WindowCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A message body that is not one of the three command tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown window command '{}'", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl FromStr for WindowCommand {
    type Err = UnknownCommand;

    /// Exact match only: no trimming, no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "window:close" => Ok(WindowCommand::Close),
            "window:minimize" => Ok(WindowCommand::Minimize),
            "window:maximize" => Ok(WindowCommand::Maximize),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

impl Serialize for WindowCommand {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for WindowCommand {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse a raw message body as delivered by a script bridge.
///
/// Bodies are normally the bare tag, but some bridges JSON-stringify the
/// value before posting, so a JSON string literal is accepted too.
pub fn parse_message(body: &str) -> Result<WindowCommand, UnknownCommand> {
    if body.starts_with('"') {
        if let Ok(command) = serde_json::from_str::<WindowCommand>(body) {
            return Ok(command);
        }
    }
    body.parse()
}
