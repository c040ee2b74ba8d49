use crate::channel::{ChannelError, HostIntegration};
use crate::command::WindowCommand;

/// UI-side half of the window-chrome channel.
///
/// Holds no window state. Each activation sends one tag and forgets it.
pub struct WindowCommandSender<H: HostIntegration> {
    host: H,
}

impl<H: HostIntegration> WindowCommandSender<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn close(&self) {
        self.activate(WindowCommand::Close);
    }

    pub fn minimize(&self) {
        self.activate(WindowCommand::Minimize);
    }

    pub fn maximize(&self) {
        self.activate(WindowCommand::Maximize);
    }

    /// Send `command`, logging and dropping any channel failure.
    pub fn activate(&self, command: WindowCommand) {
        if let Err(e) = self.try_activate(command) {
            log::warn!("Dropping {}: {}", command, e);
        }
    }

    pub fn try_activate(&self, command: WindowCommand) -> Result<(), ChannelError> {
        log::debug!("Sending {}", command);
        let channel = self.host.command_channel()?;
        channel.send(command.tag())
    }
}
