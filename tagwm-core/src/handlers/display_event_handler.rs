#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_event::EventKind;
use crate::display_servers::DisplayServer;
use std::fmt;

/// Handles one kind of display event.
pub type EventHandler<H, C, SERVER> = fn(&mut Manager<H, C, SERVER>, DisplayEvent<H>);

/// Handler table indexed by [`EventKind`]. Kinds without a handler are ignored.
pub struct Dispatcher<H: Handle, C, SERVER: DisplayServer<H>> {
    slots: [Option<EventHandler<H, C, SERVER>>; EventKind::COUNT],
}

impl<H: Handle, C, SERVER: DisplayServer<H>> fmt::Debug for Dispatcher<H, C, SERVER> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let handled = self.slots.iter().filter(|s| s.is_some()).count();
        write!(f, "Dispatcher {{ handled: {handled} }}")
    }
}

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Dispatcher<H, C, SERVER> {
    #[must_use]
    pub fn new() -> Self {
        let mut dispatcher = Self {
            slots: [None; EventKind::COUNT],
        };
        dispatcher.set(EventKind::ButtonPress, button_press);
        dispatcher.set(EventKind::ClientMessage, client_message);
        dispatcher.set(EventKind::ConfigureRequest, configure_request);
        dispatcher.set(EventKind::ConfigureNotify, configure_notify);
        dispatcher.set(EventKind::DestroyNotify, destroy_notify);
        dispatcher.set(EventKind::EnterNotify, enter_notify);
        dispatcher.set(EventKind::Expose, expose);
        dispatcher.set(EventKind::FocusIn, focus_in);
        dispatcher.set(EventKind::KeyPress, key_press);
        dispatcher.set(EventKind::MappingNotify, mapping_notify);
        dispatcher.set(EventKind::MapRequest, map_request);
        dispatcher.set(EventKind::MotionNotify, motion_notify);
        dispatcher.set(EventKind::PropertyNotify, property_notify);
        dispatcher.set(EventKind::UnmapNotify, unmap_notify);
        dispatcher
    }

    pub fn set(&mut self, kind: EventKind, handler: EventHandler<H, C, SERVER>) {
        self.slots[kind.index()] = Some(handler);
    }

    #[must_use]
    pub fn get(&self, kind: EventKind) -> Option<EventHandler<H, C, SERVER>> {
        self.slots[kind.index()]
    }
}

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Default for Dispatcher<H, C, SERVER> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Routes an event to the handler registered for its kind.
    pub fn display_event_handler(&mut self, event: DisplayEvent<H>) {
        let kind = event.kind();
        match self.handlers.get(kind) {
            Some(handler) => handler(self, event),
            None => tracing::trace!("ignoring {:?}", kind),
        }
    }
}

fn button_press<H: Handle, C: Config, SERVER: DisplayServer<H>>(
    manager: &mut Manager<H, C, SERVER>,
    event: DisplayEvent<H>,
) {
    if let DisplayEvent::ButtonPress(press) = event {
        manager.button_press(&press);
    }
}

fn client_message<H: Handle, C: Config, SERVER: DisplayServer<H>>(
    manager: &mut Manager<H, C, SERVER>,
    event: DisplayEvent<H>,
) {
    if let DisplayEvent::ClientMessage(handle, request) = event {
        manager.state.client_message(handle, request);
    }
}

fn configure_request<H: Handle, C: Config, SERVER: DisplayServer<H>>(
    manager: &mut Manager<H, C, SERVER>,
    event: DisplayEvent<H>,
) {
    if let DisplayEvent::ConfigureRequest(handle, changes) = event {
        manager.state.configure_request(handle, &changes);
    }
}

fn configure_notify<H: Handle, C: Config, SERVER: DisplayServer<H>>(
    manager: &mut Manager<H, C, SERVER>,
    event: DisplayEvent<H>,
) {
    if let DisplayEvent::ConfigureNotify(topology) = event {
        let pointer = manager.display_server.query_pointer().unwrap_or_default();
        manager.state.configure_notify(&topology, pointer);
    }
}

fn destroy_notify<H: Handle, C: Config, SERVER: DisplayServer<H>>(
    manager: &mut Manager<H, C, SERVER>,
    event: DisplayEvent<H>,
) {
    if let DisplayEvent::DestroyNotify(handle) = event {
        manager.state.destroy_notify(handle);
    }
}

fn enter_notify<H: Handle, C: Config, SERVER: DisplayServer<H>>(
    manager: &mut Manager<H, C, SERVER>,
    event: DisplayEvent<H>,
) {
    if let DisplayEvent::EnterNotify { target, normal } = event {
        let pointer = manager.display_server.query_pointer();
        manager.state.enter_notify(target, normal, pointer);
    }
}

fn expose<H: Handle, C: Config, SERVER: DisplayServer<H>>(
    manager: &mut Manager<H, C, SERVER>,
    event: DisplayEvent<H>,
) {
    if let DisplayEvent::Expose(target) = event {
        let mon = manager.state.window_to_monitor(&target, None);
        manager.state.draw_bar(mon);
    }
}

fn focus_in<H: Handle, C: Config, SERVER: DisplayServer<H>>(
    manager: &mut Manager<H, C, SERVER>,
    event: DisplayEvent<H>,
) {
    if let DisplayEvent::FocusIn(handle) = event {
        manager.state.focus_in(handle);
    }
}

fn key_press<H: Handle, C: Config, SERVER: DisplayServer<H>>(
    manager: &mut Manager<H, C, SERVER>,
    event: DisplayEvent<H>,
) {
    if let DisplayEvent::KeyPress(modmask, key) = event {
        manager.key_press(modmask, &key);
    }
}

fn mapping_notify<H: Handle, C: Config, SERVER: DisplayServer<H>>(
    manager: &mut Manager<H, C, SERVER>,
    event: DisplayEvent<H>,
) {
    if let DisplayEvent::MappingNotify { keyboard: true } = event {
        manager.state.actions.push_back(DisplayAction::ReloadKeyGrabs);
    }
}

fn map_request<H: Handle, C: Config, SERVER: DisplayServer<H>>(
    manager: &mut Manager<H, C, SERVER>,
    event: DisplayEvent<H>,
) {
    if let DisplayEvent::MapRequest(info) = event {
        manager.state.map_request(&info);
    }
}

fn motion_notify<H: Handle, C: Config, SERVER: DisplayServer<H>>(
    manager: &mut Manager<H, C, SERVER>,
    event: DisplayEvent<H>,
) {
    if let DisplayEvent::MotionNotify(motion) = event {
        manager.state.motion_notify(motion.target, motion.x, motion.y);
    }
}

fn property_notify<H: Handle, C: Config, SERVER: DisplayServer<H>>(
    manager: &mut Manager<H, C, SERVER>,
    event: DisplayEvent<H>,
) {
    if let DisplayEvent::PropertyNotify(change) = event {
        manager.state.property_notify(change);
    }
}

fn unmap_notify<H: Handle, C: Config, SERVER: DisplayServer<H>>(
    manager: &mut Manager<H, C, SERVER>,
    event: DisplayEvent<H>,
) {
    if let DisplayEvent::UnmapNotify { window, synthetic } = event {
        manager.state.unmap_notify(window, synthetic);
    }
}
