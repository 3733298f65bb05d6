use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::errors::{Result, TagwmError};
use crate::models::{Handle, Manager};
use std::sync::atomic::Ordering;
use std::time::Duration;

/// How often bars are redrawn so the clock keeps ticking.
const CLOCK_INTERVAL: Duration = Duration::from_secs(1);

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Builds the monitors, takes over existing windows and shows the result.
    pub fn setup(&mut self) {
        let topology = self.display_server.topology();
        let pointer = self.display_server.query_pointer().unwrap_or_default();
        self.state.update_geometry(&topology, pointer);
        self.move_bars();
        self.scan();
        self.state.focus(None);
        self.state.arrange(None);
        self.execute_actions();
    }

    /// Manages the windows that were mapped before we started, transient
    /// windows last so their parents are already known.
    pub fn scan(&mut self) {
        let (transients, windows): (Vec<_>, Vec<_>) = self
            .display_server
            .existing_windows()
            .into_iter()
            .filter(|w| w.mapped && !w.override_redirect)
            .partition(|w| w.transient_for.is_some());
        tracing::debug!(
            "adopting {} windows and {} transients",
            windows.len(),
            transients.len()
        );
        for info in windows.iter().chain(&transients) {
            self.state.manage(info);
        }
    }

    /// Runs until a `Quit` command or a fatal display server error.
    ///
    /// # Errors
    ///
    /// Returns the first display server error that is not caused by a
    /// window vanishing under us.
    pub async fn start_event_loop(mut self) -> Result<()> {
        self.register_child_hook();
        self.setup();
        let mut clock = tokio::time::interval(CLOCK_INTERVAL);
        let mut event_buffer = vec![];
        while self.state.running {
            self.display_server.flush();

            tokio::select! {
                _ = self.display_server.wait_readable(), if event_buffer.is_empty() => {
                    event_buffer.append(&mut self.display_server.get_next_events());
                    continue;
                }
                _ = clock.tick(), if event_buffer.is_empty() => {
                    self.state.draw_bars();
                }
                else => {
                    for event in event_buffer.drain(..) {
                        self.display_event_handler(event);
                    }
                }
            }

            self.execute_actions();
            self.check_transport_errors()?;

            if self.reap_requested.swap(false, Ordering::SeqCst) {
                self.children.remove_finished_children();
            }
            if self.reload_requested {
                self.reload_config();
            }
        }
        self.display_server.flush();
        tracing::info!("event loop finished");
        Ok(())
    }

    /// Hands every queued action to the display server.
    pub(crate) fn execute_actions(&mut self) {
        while let Some(act) = self.state.actions.pop_front() {
            if let Some(event) = self.display_server.execute_action(act) {
                self.display_event_handler(event);
            }
        }
    }

    pub(crate) fn check_transport_errors(&mut self) -> Result<()> {
        while let Some(error) = self.display_server.take_error() {
            if error.is_benign() {
                tracing::trace!("ignoring display server error: {}", error);
                continue;
            }
            tracing::error!("fatal display server error: {}", error);
            return Err(TagwmError::Transport(error));
        }
        Ok(())
    }

    /// Re-reads the configuration and applies it to the running state.
    pub fn reload_config(&mut self) {
        self.reload_requested = false;
        let Some(config) = self.config.reload() else {
            tracing::warn!("configuration could not be reloaded, keeping the current one");
            return;
        };
        self.config = config;
        self.display_server.load_config(&self.config);
        self.state.load_config(&self.config);
        self.state.actions.push_back(DisplayAction::ReloadKeyGrabs);
        self.move_bars();
        self.state.focus(None);
        self.state.arrange(None);
        tracing::info!("configuration reloaded");
    }

    fn move_bars(&mut self) {
        let bar_height = self.state.bar_height;
        for (monitor, mon) in self.state.monitors.iter().enumerate() {
            self.state.actions.push_back(DisplayAction::MoveBar {
                monitor,
                geometry: mon.bar_geometry(bar_height),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TransportError;
    use crate::models::{test_window, WindowHandle};

    #[test]
    fn setup_adopts_mapped_windows_parents_first() {
        let mut manager = Manager::new_test(vec!["1".to_owned(), "2".to_owned()]);
        let mut dialog = test_window(2);
        dialog.transient_for = Some(WindowHandle(1));
        let mut menu = test_window(3);
        menu.override_redirect = true;
        let mut hidden = test_window(4);
        hidden.mapped = false;
        manager.display_server.windows = vec![dialog, test_window(1), menu, hidden];
        manager.setup();
        let state = &manager.state;
        assert_eq!(state.clients.len(), 2);
        assert!(state.clients[&WindowHandle(2)].is_floating);
        assert!(state.actions.is_empty());
        assert!(manager
            .display_server
            .executed
            .contains(&DisplayAction::MapWindow(WindowHandle(1))));
    }

    #[test]
    fn reload_applies_new_settings_to_clients() {
        let mut manager = Manager::new_test(vec!["1".to_owned()]);
        manager.state.manage(&test_window(1));
        manager.config.border_width = 3;
        manager.request_reload();
        manager.reload_config();
        assert!(!manager.reload_requested);
        assert_eq!(manager.state.clients[&WindowHandle(1)].border, 3);
        assert!(manager.state.actions.contains(&DisplayAction::ReloadKeyGrabs));
    }

    #[test]
    fn benign_errors_are_swallowed() {
        let mut manager = Manager::new_test(vec!["1".to_owned()]);
        manager.display_server.errors.push_back(TransportError {
            request_code: 42,
            error_code: 8,
        });
        assert!(manager.check_transport_errors().is_ok());
        assert!(manager.display_server.errors.is_empty());
    }

    #[tokio::test]
    async fn fatal_errors_end_the_event_loop() {
        let mut manager = Manager::new_test(vec!["1".to_owned()]);
        manager.display_server.errors.push_back(TransportError {
            request_code: 1,
            error_code: 2,
        });
        let result = manager.start_event_loop().await;
        assert!(matches!(result, Err(TagwmError::Transport(_))));
    }

    #[tokio::test]
    async fn quitting_ends_the_event_loop() {
        let mut manager = Manager::new_test(vec!["1".to_owned()]);
        manager.state.running = false;
        assert!(manager.start_event_loop().await.is_ok());
    }
}
