use std::fmt;

use crossbeam_channel::{Receiver, Sender};

/// The messaging capability could not be obtained or has gone away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelError {
    Unavailable(String),
}

impl fmt::Display for ChannelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelError::Unavailable(reason) => {
                write!(f, "window command channel unavailable: {}", reason)
            }
        }
    }
}

impl std::error::Error for ChannelError {}

/// A one-way, payload-free message handle into the host process.
pub trait CommandChannel {
    fn send(&self, tag: &str) -> Result<(), ChannelError>;
}

/// Gives UI code access to the host's messaging capability.
///
/// Looked up on every activation; senders never cache the channel.
pub trait HostIntegration {
    fn command_channel(&self) -> Result<Box<dyn CommandChannel>, ChannelError>;
}

/// No native host at all, e.g. the UI opened in a plain browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct Detached;

impl HostIntegration for Detached {
    fn command_channel(&self) -> Result<Box<dyn CommandChannel>, ChannelError> {
        Err(ChannelError::Unavailable(
            "no host integration present".to_string(),
        ))
    }
}

// ---------------------------------------------------------------------------
// In-process host: sender and receiver in the same process
// ---------------------------------------------------------------------------

/// Host integration backed by an unbounded in-process queue.
#[derive(Clone)]
pub struct LocalHost {
    tx: Sender<String>,
}

/// Receiving end of a [`LocalHost`]. Dropping it makes the host unavailable.
pub struct CommandInbox {
    rx: Receiver<String>,
}

/// Create a connected host/inbox pair.
pub fn local_host() -> (LocalHost, CommandInbox) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (LocalHost { tx }, CommandInbox { rx })
}

struct LocalChannel {
    tx: Sender<String>,
}

impl CommandChannel for LocalChannel {
    fn send(&self, tag: &str) -> Result<(), ChannelError> {
        self.tx
            .send(tag.to_string())
            .map_err(|_| ChannelError::Unavailable("host inbox closed".to_string()))
    }
}

impl HostIntegration for LocalHost {
    fn command_channel(&self) -> Result<Box<dyn CommandChannel>, ChannelError> {
        Ok(Box::new(LocalChannel {
            tx: self.tx.clone(),
        }))
    }
}

impl CommandInbox {
    /// Take every pending message without blocking.
    pub fn drain(&self) -> Vec<String> {
        self.rx.try_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_host_is_unavailable() {
        let err = Detached.command_channel().err().unwrap();
        assert!(matches!(err, ChannelError::Unavailable(_)));
        assert!(err.to_string().contains("unavailable"));
    }

    #[test]
    fn local_host_delivers_in_order() {
        let (host, inbox) = local_host();
        let channel = host.command_channel().unwrap();
        channel.send("window:minimize").unwrap();
        channel.send("window:close").unwrap();
        assert_eq!(inbox.drain(), vec!["window:minimize", "window:close"]);
        assert!(inbox.drain().is_empty());
    }

    #[test]
    fn local_host_unavailable_after_inbox_dropped() {
        let (host, inbox) = local_host();
        drop(inbox);
        let channel = host.command_channel().unwrap();
        assert_eq!(
            channel.send("window:close"),
            Err(ChannelError::Unavailable("host inbox closed".to_string()))
        );
    }
}
