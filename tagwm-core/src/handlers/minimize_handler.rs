#![allow(clippy::wildcard_imports)]

use super::*;

const SLOT_WIDTH: i32 = 50;
const SLOT_HEIGHT: i32 = 20;

impl<H: Handle> State<H> {
    pub fn toggle_minimize(&mut self) -> Option<bool> {
        let handle = self.selected_client()?;
        if self.clients.get(&handle)?.is_minimized {
            self.restore(handle);
        } else {
            self.minimize(handle);
        }
        Some(true)
    }

    /// Shrinks a client into a slot along the top of its monitor, keeping
    /// its geometry for [`State::restore`].
    pub fn minimize(&mut self, handle: WindowHandle<H>) {
        let Some(client) = self.clients.get(&handle) else {
            return;
        };
        if client.is_minimized {
            return;
        }
        if client.is_fullscreen {
            self.set_fullscreen(handle, false);
        }
        let Some(client) = self.clients.get_mut(&handle) else {
            return;
        };
        client.restore_geometry = Some(client.geometry);
        client.is_minimized = true;
        client.is_floating = true;
        client.is_fixed = true;
        let mon = client.monitor;
        self.pack_minimized(mon);
        self.arrange(Some(mon));
    }

    pub fn restore(&mut self, handle: WindowHandle<H>) {
        let Some(client) = self.clients.get_mut(&handle) else {
            return;
        };
        if !client.is_minimized {
            return;
        }
        client.is_minimized = false;
        client.refresh_size_hints();
        let saved = client.restore_geometry.take();
        let mon = client.monitor;
        if let Some(saved) = saved {
            self.resize(handle, saved, true);
        }
        self.pack_minimized(mon);
        self.arrange(Some(mon));
    }

    /// Lays out the minimized clients of a monitor in tiling order, row by
    /// row below the bar.
    pub fn pack_minimized(&mut self, mon: MonitorId) {
        let Some(monitor) = self.monitors.get(mon) else {
            return;
        };
        let screen = monitor.screen;
        let minimized: Vec<_> = monitor
            .clients
            .iter()
            .filter(|h| self.clients.get(h).map_or(false, |c| c.is_minimized))
            .copied()
            .collect();
        let mut x = screen.x;
        let mut y = screen.y + self.bar_height;
        for handle in minimized {
            if x > screen.x && x + SLOT_WIDTH > screen.right() {
                x = screen.x;
                y += SLOT_HEIGHT;
            }
            self.resize(handle, Xyhw::new(x, y, SLOT_WIDTH, SLOT_HEIGHT), false);
            x += SLOT_WIDTH;
        }
    }
}
