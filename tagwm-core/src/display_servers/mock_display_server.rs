use std::collections::VecDeque;

use super::{Config, CursorKind, DisplayServer};
use crate::display_action::DisplayAction;
use crate::display_event::Topology;
use crate::errors::{Result, TransportError};
use crate::models::{Handle, WindowHandle, WindowInfo, Xyhw};
use crate::DisplayEvent;

/// Scripted display server recording every action it is asked to perform.
pub struct MockDisplayServer<H: Handle> {
    pub topology: Topology,
    pub windows: Vec<WindowInfo<H>>,
    pub pointer: (i32, i32),
    pub events: Vec<DisplayEvent<H>>,
    pub pointer_events: VecDeque<DisplayEvent<H>>,
    pub executed: Vec<DisplayAction<H>>,
    pub grabbed: bool,
    pub refuse_grab: bool,
    pub errors: VecDeque<TransportError>,
}

impl<H: Handle> MockDisplayServer<H> {
    /// Replaces the outputs, keeping the root window as their bounding box.
    pub fn set_screens(&mut self, screens: Vec<Xyhw>) {
        let right = screens.iter().map(Xyhw::right).max().unwrap_or_default();
        let bottom = screens.iter().map(Xyhw::bottom).max().unwrap_or_default();
        self.topology = Topology {
            display: Xyhw::new(0, 0, right, bottom),
            screens,
        };
    }
}

impl<H: Handle> DisplayServer<H> for MockDisplayServer<H> {
    fn new(_: &impl Config) -> Result<Self> {
        let screen = Xyhw::new(0, 0, 1920, 1080);
        Ok(Self {
            topology: Topology {
                display: screen,
                screens: vec![screen],
            },
            windows: vec![],
            pointer: (0, 0),
            events: vec![],
            pointer_events: VecDeque::new(),
            executed: vec![],
            grabbed: false,
            refuse_grab: false,
            errors: VecDeque::new(),
        })
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent<H>> {
        std::mem::take(&mut self.events)
    }

    fn execute_action(&mut self, act: DisplayAction<H>) -> Option<DisplayEvent<H>> {
        self.executed.push(act);
        None
    }

    fn wait_readable(&self) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()>>> {
        Box::pin(futures::future::pending())
    }

    fn flush(&self) {}

    fn topology(&self) -> Topology {
        self.topology.clone()
    }

    fn existing_windows(&self) -> Vec<WindowInfo<H>> {
        self.windows.clone()
    }

    fn query_pointer(&self) -> Option<(i32, i32)> {
        Some(self.pointer)
    }

    fn grab_pointer(&mut self, _cursor: CursorKind) -> bool {
        self.grabbed = !self.refuse_grab;
        self.grabbed
    }

    fn ungrab_pointer(&mut self) {
        self.grabbed = false;
    }

    fn warp_pointer(&mut self, _window: WindowHandle<H>, x: i32, y: i32) {
        self.pointer = (x, y);
    }

    fn next_pointer_event(&mut self) -> Option<DisplayEvent<H>> {
        self.pointer_events.pop_front()
    }

    fn text_width(&self, text: &str) -> i32 {
        i32::try_from(text.chars().count()).unwrap_or(i32::MAX) * 10
    }

    fn take_error(&mut self) -> Option<TransportError> {
        self.errors.pop_front()
    }
}
