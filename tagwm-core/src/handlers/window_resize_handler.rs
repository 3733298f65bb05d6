#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_servers::{CursorKind, DisplayServer};

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Resizes the selected client from its bottom right corner until the
    /// button is released.
    pub fn resize_mouse(&mut self) -> bool {
        let Some(handle) = self.state.selected_client() else {
            return false;
        };
        let Some(client) = self.state.clients.get(&handle) else {
            return false;
        };
        if client.is_fullscreen {
            return false;
        }
        let origin = (client.geometry.x, client.geometry.y);
        self.state.restack(self.state.selected_monitor);
        self.execute_actions();
        if !self.display_server.grab_pointer(CursorKind::Resize) {
            return false;
        }
        self.warp_to_corner(handle);
        self.state.mode = Mode::ResizingWindow(handle);
        self.drag(|state, x, y| state.drag_resize_step(handle, origin, x, y));
        self.warp_to_corner(handle);
        self.display_server.ungrab_pointer();
        self.state.mode = Mode::Normal;
        self.state.actions.push_back(DisplayAction::DiscardEnterEvents);
        self.state.finish_drag(handle);
        true
    }

    fn warp_to_corner(&mut self, handle: WindowHandle<H>) {
        if let Some(client) = self.state.clients.get(&handle) {
            let corner_x = client.geometry.w + client.border - 1;
            let corner_y = client.geometry.h + client.border - 1;
            self.display_server.warp_pointer(handle, corner_x, corner_y);
        }
    }
}

impl<H: Handle> State<H> {
    /// One motion step of a resize drag with the pointer at `(x, y)` and the
    /// client's top left corner at `origin` when the drag started.
    ///
    /// A tiled client only starts floating when the new size stays within
    /// the selected monitor and differs by more than the snap distance.
    pub fn drag_resize_step(&mut self, handle: WindowHandle<H>, origin: (i32, i32), x: i32, y: i32) {
        let Some(client) = self.clients.get(&handle) else {
            return;
        };
        let (Some(own), Some(selected)) = (
            self.monitors.get(client.monitor),
            self.monitors.get(self.selected_monitor),
        ) else {
            return;
        };
        let border = client.border;
        let width = (x - origin.0 - 2 * border + 1).max(1);
        let height = (y - origin.1 - 2 * border + 1).max(1);
        let (own, sel, arranges) = (own.usable, selected.usable, selected.arranges());
        let fits = own.x + width >= sel.x
            && own.x + width <= sel.right()
            && own.y + height >= sel.y
            && own.y + height <= sel.bottom();

        let geometry = client.geometry;
        let mut floating = client.is_floating;
        if fits
            && !floating
            && arranges
            && ((width - geometry.w).abs() > self.snap || (height - geometry.h).abs() > self.snap)
        {
            self.promote_to_floating(handle);
            floating = self.clients.get(&handle).map_or(false, |c| c.is_floating);
        }
        if !arranges || floating {
            let proposed = Xyhw::new(geometry.x, geometry.y, width, height);
            self.resize(handle, proposed, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::TestConfig;
    use crate::display_event::{ButtonEvent, Motion};
    use crate::models::{test_window, NormalHints, TestManager};
    use crate::utils::modmask_lookup::{Button, ModMask};

    fn manager() -> TestManager {
        let config = TestConfig {
            snap: 10,
            ..TestConfig::default()
        };
        Manager::new_test_with_config(config)
    }

    fn drag_to(manager: &mut TestManager, x: i32, y: i32) {
        manager.display_server.pointer_events = vec![
            DisplayEvent::MotionNotify(Motion {
                target: Target::Root,
                x,
                y,
                time: 100,
            }),
            DisplayEvent::ButtonRelease(ButtonEvent {
                target: Target::Root,
                modmask: ModMask::Zero,
                button: Button::Button3,
                x: 0,
                root_x: x,
                root_y: y,
            }),
        ]
        .into();
    }

    #[test]
    fn resizing_a_tiled_client_floats_it() {
        let mut manager = manager();
        manager.state.manage(&test_window(1));
        drag_to(&mut manager, 500, 400);
        assert!(manager.resize_mouse());
        let client = &manager.state.clients[&WindowHandle(1)];
        assert!(client.is_floating);
        assert_eq!(client.geometry, Xyhw::new(0, 20, 499, 379));
        assert_eq!(manager.display_server.pointer, (499, 379));
    }

    #[test]
    fn small_resize_keeps_client_tiled() {
        let mut manager = manager();
        manager.state.manage(&test_window(1));
        let before = manager.state.clients[&WindowHandle(1)].geometry;
        let (x, y) = (before.x + before.w - 3, before.y + before.h - 3);
        manager.state.drag_resize_step(WindowHandle(1), (before.x, before.y), x, y);
        let client = &manager.state.clients[&WindowHandle(1)];
        assert!(!client.is_floating);
        assert_eq!(client.geometry, before);
    }

    #[test]
    fn resize_respects_increments_of_floating_clients() {
        let mut manager = manager();
        manager.state.set_layout(Some(crate::layouts::Layout::Floating));
        let mut info = test_window(1);
        info.geometry = Xyhw::new(100, 100, 100, 100);
        info.normal_hints = NormalHints {
            increment: Some((10, 10)),
            ..NormalHints::default()
        };
        manager.state.manage(&info);
        manager
            .state
            .drag_resize_step(WindowHandle(1), (100, 100), 100 + 257, 100 + 148);
        let geometry = manager.state.clients[&WindowHandle(1)].geometry;
        assert_eq!((geometry.w, geometry.h), (250, 140));
    }

    #[test]
    fn resize_needs_a_selection() {
        let mut manager = manager();
        assert!(!manager.resize_mouse());
    }
}
