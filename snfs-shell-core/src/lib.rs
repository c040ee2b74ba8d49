pub mod channel;
pub mod command;
pub mod receiver;
pub mod sender;
pub mod settings;

pub use channel::{
    local_host, ChannelError, CommandChannel, CommandInbox, Detached, HostIntegration, LocalHost,
};
pub use command::{UnknownCommand, WindowCommand};
pub use receiver::{Dispatch, NativeWindow, WindowAction, WindowCommandReceiver};
pub use sender::WindowCommandSender;
