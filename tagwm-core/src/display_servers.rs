#[cfg(test)]
mod mock_display_server;

use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::display_event::Topology;
use crate::errors::{Result, TransportError};
use crate::models::{Handle, WindowHandle, WindowInfo};
use crate::DisplayEvent;

use futures::prelude::*;
use std::pin::Pin;

#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;

/// Pointer shapes shown during pointer grabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorKind {
    Normal,
    Resize,
    Move,
}

/// The connection to the display server.
///
/// Implementations translate protocol events into [`DisplayEvent`]s and
/// carry out [`DisplayAction`]s. Errors the server reports asynchronously
/// are queued and handed out through `take_error`.
pub trait DisplayServer<H: Handle> {
    /// Connects and registers as the window manager.
    ///
    /// # Errors
    ///
    /// Fails when no display is reachable or another window manager is running.
    fn new(config: &impl Config) -> Result<Self>
    where
        Self: Sized;

    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>>;

    fn load_config(&mut self, _config: &impl Config) {}

    fn execute_action(&mut self, _act: DisplayAction<H>) -> Option<DisplayEvent<H>> {
        None
    }

    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>>;

    fn flush(&self);

    fn topology(&self) -> Topology;

    /// Top-level windows that existed before we started.
    fn existing_windows(&self) -> Vec<WindowInfo<H>>;

    /// Pointer position in root coordinates.
    fn query_pointer(&self) -> Option<(i32, i32)>;

    /// Grabs the pointer for a drag; `false` when the grab was refused.
    fn grab_pointer(&mut self, cursor: CursorKind) -> bool;

    fn ungrab_pointer(&mut self);

    /// Moves the pointer to a position relative to a window.
    fn warp_pointer(&mut self, window: WindowHandle<H>, x: i32, y: i32);

    /// Blocks for the next pointer, expose, map or configure request event
    /// while a drag is in progress.
    fn next_pointer_event(&mut self) -> Option<DisplayEvent<H>>;

    /// Width in pixels of `text` as the bar would draw it, padding included.
    fn text_width(&self, text: &str) -> i32;

    fn take_error(&mut self) -> Option<TransportError> {
        None
    }
}
