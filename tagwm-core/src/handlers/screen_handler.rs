#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_event::Topology;
use crate::models::Monitor;

impl<H: Handle> State<H> {
    /// Matches the monitor list to the outputs in `topology`.
    ///
    /// Outputs with identical geometry count once. New outputs get a fresh
    /// monitor, changed ones are moved, and monitors beyond the output count
    /// hand their clients to the first monitor before they are dropped.
    /// Returns whether anything changed.
    pub fn update_geometry(&mut self, topology: &Topology, pointer: (i32, i32)) -> bool {
        let mut screens: Vec<Xyhw> = vec![];
        for screen in &topology.screens {
            if !screens.contains(screen) {
                screens.push(*screen);
            }
        }
        if screens.is_empty() {
            screens.push(topology.display);
        }
        self.display = topology.display;

        let known = self.monitors.len();
        let mut dirty = false;
        while self.monitors.len() < screens.len() {
            let monitor = Monitor::new(self.monitors.len(), &self.monitor_defaults());
            self.monitors.push(monitor);
            dirty = true;
        }
        for (i, screen) in screens.iter().enumerate() {
            let mon = &mut self.monitors[i];
            if i >= known || mon.screen != *screen {
                tracing::debug!("monitor {} now covers {:?}", i, screen);
                mon.num = i;
                mon.set_screen(*screen, self.bar_height);
                dirty = true;
            }
        }
        while self.monitors.len() > screens.len() {
            let Some(removed) = self.monitors.pop() else {
                break;
            };
            tracing::debug!("monitor {} removed", removed.num);
            self.migrate_clients(&removed);
            if self.selected_monitor == removed.num {
                self.selected_monitor = 0;
            }
            self.actions.push_back(DisplayAction::DestroyBar(removed.num));
            dirty = true;
        }
        if dirty {
            if self.selected_monitor >= self.monitors.len() {
                self.selected_monitor = 0;
            }
            self.selected_monitor = self.rect_to_monitor(&Xyhw::new(pointer.0, pointer.1, 1, 1));
        }
        dirty
    }

    /// Appends the clients of a removed monitor to the first monitor,
    /// showing them on its active tags.
    fn migrate_clients(&mut self, removed: &Monitor<H>) {
        let Some(first) = self.monitors.first_mut() else {
            return;
        };
        let tags = first.active_tags();
        for handle in &removed.clients {
            if let Some(client) = self.clients.get_mut(handle) {
                client.monitor = 0;
                client.tags = tags;
                first.clients.push(*handle);
            }
        }
        for handle in &removed.stack {
            if self.clients.contains_key(handle) {
                first.stack.push(*handle);
            }
        }
    }

    /// The root window or the output layout changed.
    pub fn configure_notify(&mut self, topology: &Topology, pointer: (i32, i32)) {
        let resized = self.display != topology.display;
        let dirty = self.update_geometry(topology, pointer);
        if !(dirty || resized) {
            return;
        }
        let fullscreen: Vec<_> = self
            .clients
            .values()
            .filter(|c| c.is_fullscreen)
            .filter_map(|c| Some((c.handle, self.monitors.get(c.monitor)?.screen)))
            .collect();
        for (handle, screen) in fullscreen {
            self.resize_client(handle, screen);
        }
        for (monitor, mon) in self.monitors.iter().enumerate() {
            self.actions.push_back(DisplayAction::MoveBar {
                monitor,
                geometry: mon.bar_geometry(self.bar_height),
            });
        }
        self.focus(None);
        self.arrange(None);
    }
}
