use crate::command::{parse_message, WindowCommand};

/// Native window operations the receiver drives.
///
/// Implementations forward to the platform window manager. Calls that do
/// not apply (minimizing an already minimized window) are left to the
/// window manager to ignore.
pub trait NativeWindow {
    fn is_maximized(&self) -> bool;
    fn maximize(&self);
    fn unmaximize(&self);
    fn minimize(&self);
    fn close(&self);
}

/// The native call issued for a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAction {
    Closed,
    Minimized,
    Maximized,
    Restored,
}

/// Outcome of handing one message to the receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Applied(WindowAction),
    /// Body was not one of the three command tags.
    Rejected,
    /// The window was already closed through this receiver.
    WindowGone,
}

/// Host-side half of the window-chrome channel, bound to a single window.
pub struct WindowCommandReceiver<W: NativeWindow> {
    window: Option<W>,
}

impl<W: NativeWindow> WindowCommandReceiver<W> {
    pub fn new(window: W) -> Self {
        Self {
            window: Some(window),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.window.is_some()
    }

    /// Handle a raw message body from the script bridge.
    pub fn handle_message(&mut self, body: &str) -> Dispatch {
        match parse_message(body) {
            Ok(command) => self.handle(command),
            Err(e) => {
                log::warn!("Ignoring message: {}", e);
                Dispatch::Rejected
            }
        }
    }

    pub fn handle(&mut self, command: WindowCommand) -> Dispatch {
        let window = match &self.window {
            Some(w) => w,
            None => {
                log::debug!("Window already closed, ignoring {}", command);
                return Dispatch::WindowGone;
            }
        };
        log::debug!("Handling {}", command);

        let action = match command {
            WindowCommand::Close => {
                // Release the window first so nothing reaches it after close.
                if let Some(w) = self.window.take() {
                    w.close();
                }
                WindowAction::Closed
            }
            WindowCommand::Minimize => {
                window.minimize();
                WindowAction::Minimized
            }
            WindowCommand::Maximize => {
                if window.is_maximized() {
                    window.unmaximize();
                    WindowAction::Restored
                } else {
                    window.maximize();
                    WindowAction::Maximized
                }
            }
        };
        Dispatch::Applied(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum State {
        Normal,
        Minimized,
        Maximized,
        Closed,
    }

    /// Models the window manager's four-state machine and logs each call.
    struct FakeWindow {
        state: Cell<State>,
        calls: RefCell<Vec<&'static str>>,
    }

    impl FakeWindow {
        fn new(state: State) -> Self {
            Self {
                state: Cell::new(state),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl NativeWindow for &FakeWindow {
        fn is_maximized(&self) -> bool {
            self.state.get() == State::Maximized
        }

        fn maximize(&self) {
            self.calls.borrow_mut().push("maximize");
            self.state.set(State::Maximized);
        }

        fn unmaximize(&self) {
            self.calls.borrow_mut().push("unmaximize");
            self.state.set(State::Normal);
        }

        fn minimize(&self) {
            self.calls.borrow_mut().push("minimize");
            self.state.set(State::Minimized);
        }

        fn close(&self) {
            self.calls.borrow_mut().push("close");
            self.state.set(State::Closed);
        }
    }

    #[test]
    fn close_from_every_state() {
        for initial in [State::Normal, State::Minimized, State::Maximized] {
            let window = FakeWindow::new(initial);
            let mut receiver = WindowCommandReceiver::new(&window);
            assert_eq!(
                receiver.handle(WindowCommand::Close),
                Dispatch::Applied(WindowAction::Closed)
            );
            assert_eq!(window.state.get(), State::Closed);
            assert_eq!(*window.calls.borrow(), vec!["close"]);
            assert!(!receiver.is_attached());
        }
    }

    #[test]
    fn minimize_from_normal_and_maximized() {
        for initial in [State::Normal, State::Maximized] {
            let window = FakeWindow::new(initial);
            let mut receiver = WindowCommandReceiver::new(&window);
            receiver.handle(WindowCommand::Minimize);
            assert_eq!(window.state.get(), State::Minimized);
        }
    }

    #[test]
    fn minimize_when_minimized_is_left_to_window_manager() {
        let window = FakeWindow::new(State::Minimized);
        let mut receiver = WindowCommandReceiver::new(&window);
        assert_eq!(
            receiver.handle(WindowCommand::Minimize),
            Dispatch::Applied(WindowAction::Minimized)
        );
        assert_eq!(*window.calls.borrow(), vec!["minimize"]);
    }

    #[test]
    fn maximize_toggles_on_current_state() {
        let window = FakeWindow::new(State::Maximized);
        let mut receiver = WindowCommandReceiver::new(&window);
        assert_eq!(
            receiver.handle(WindowCommand::Maximize),
            Dispatch::Applied(WindowAction::Restored)
        );
        assert_eq!(window.state.get(), State::Normal);

        for initial in [State::Normal, State::Minimized] {
            let window = FakeWindow::new(initial);
            let mut receiver = WindowCommandReceiver::new(&window);
            assert_eq!(
                receiver.handle(WindowCommand::Maximize),
                Dispatch::Applied(WindowAction::Maximized)
            );
            assert_eq!(window.state.get(), State::Maximized);
        }
    }

    #[test]
    fn state_is_read_at_receipt_time() {
        let window = FakeWindow::new(State::Normal);
        let mut receiver = WindowCommandReceiver::new(&window);
        // Window manager maximizes the window behind our back (e.g. double-click on a tiling WM).
        window.state.set(State::Maximized);
        assert_eq!(
            receiver.handle(WindowCommand::Maximize),
            Dispatch::Applied(WindowAction::Restored)
        );
    }

    #[test]
    fn unknown_messages_never_reach_window() {
        let window = FakeWindow::new(State::Normal);
        let mut receiver = WindowCommandReceiver::new(&window);
        for body in ["window:fullscreen", "WINDOW:CLOSE", "", "close", "{}"] {
            assert_eq!(receiver.handle_message(body), Dispatch::Rejected);
        }
        assert!(window.calls.borrow().is_empty());
        assert!(receiver.is_attached());
    }

    #[test]
    fn commands_after_close_are_noops() {
        let window = FakeWindow::new(State::Normal);
        let mut receiver = WindowCommandReceiver::new(&window);
        receiver.handle_message("window:close");
        for command in WindowCommand::ALL {
            assert_eq!(receiver.handle(command), Dispatch::WindowGone);
        }
        assert_eq!(*window.calls.borrow(), vec!["close"]);
        assert!(!receiver.is_attached());
    }
}
