#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_servers::{CursorKind, DisplayServer};

/// Shortest gap between two handled motion events, in milliseconds.
const MOTION_INTERVAL: u64 = 1000 / 60;

/// Drops pointer motion arriving faster than 60 times a second.
#[derive(Debug, Default, Clone, Copy)]
pub struct MotionThrottle {
    last: Option<u64>,
}

impl MotionThrottle {
    /// Whether a motion event stamped `time` should be handled.
    pub fn accept(&mut self, time: u64) -> bool {
        if let Some(last) = self.last {
            if time.saturating_sub(last) <= MOTION_INTERVAL {
                return false;
            }
        }
        self.last = Some(time);
        true
    }
}

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Moves the selected client with the pointer until the button is released.
    ///
    /// Returns `false` when there is nothing to move or the pointer could not be grabbed.
    pub fn move_mouse(&mut self) -> bool {
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
        if !self.display_server.grab_pointer(CursorKind::Move) {
            return false;
        }
        let Some(start) = self.display_server.query_pointer() else {
            self.display_server.ungrab_pointer();
            return false;
        };
        self.state.mode = Mode::MovingWindow(handle);
        self.drag(|state, x, y| {
            state.drag_move_step(handle, origin.0 + x - start.0, origin.1 + y - start.1);
        });
        self.display_server.ungrab_pointer();
        self.state.mode = Mode::Normal;
        self.state.finish_drag(handle);
        true
    }

    /// Runs the drag until the button is released, feeding throttled motion
    /// to `step` and still serving requests from other windows.
    pub(crate) fn drag(&mut self, mut step: impl FnMut(&mut State<H>, i32, i32)) {
        let mut throttle = MotionThrottle::default();
        while let Some(event) = self.display_server.next_pointer_event() {
            match event {
                DisplayEvent::ButtonRelease(_) => break,
                DisplayEvent::MotionNotify(motion) => {
                    if throttle.accept(motion.time) {
                        step(&mut self.state, motion.x, motion.y);
                    }
                }
                DisplayEvent::ConfigureRequest(..)
                | DisplayEvent::Expose(_)
                | DisplayEvent::MapRequest(_) => self.display_event_handler(event),
                _ => {}
            }
            self.execute_actions();
        }
    }
}

impl<H: Handle> State<H> {
    /// One motion step of a move drag, with the client's top left corner
    /// proposed at `(x, y)`.
    ///
    /// The corner snaps to the usable area and to the edges of visible
    /// clients on the same monitor. A tiled client dragged further than
    /// the snap distance starts floating; until then it stays in place.
    pub fn drag_move_step(&mut self, handle: WindowHandle<H>, x: i32, y: i32) {
        let Some(client) = self.clients.get(&handle) else {
            return;
        };
        let Some(monitor) = self.monitors.get(self.selected_monitor) else {
            return;
        };
        let snap = self.snap;
        let usable = monitor.usable;
        let arranges = monitor.arranges();
        let (width, height) = (client.outer_width(), client.outer_height());
        let (mut nx, mut ny) = (x, y);

        if (usable.x - nx).abs() < snap {
            nx = usable.x;
        } else if (usable.right() - (nx + width)).abs() < snap {
            nx = usable.right() - width;
        }
        if (usable.y - ny).abs() < snap {
            ny = usable.y;
        } else if (usable.bottom() - (ny + height)).abs() < snap {
            ny = usable.bottom() - height;
        }

        let active = monitor.active_tags();
        for other in &monitor.clients {
            if *other == handle {
                continue;
            }
            let Some(sibling) = self.clients.get(other).filter(|c| c.is_visible_on(active))
            else {
                continue;
            };
            let edges = sibling.geometry.outer(sibling.border);
            nx = snap_to_edges(nx, width, edges.x, edges.right(), snap);
            ny = snap_to_edges(ny, height, edges.y, edges.bottom(), snap);
        }

        let geometry = client.geometry;
        let mut floating = client.is_floating;
        if !floating
            && arranges
            && ((nx - geometry.x).abs() > snap || (ny - geometry.y).abs() > snap)
        {
            self.promote_to_floating(handle);
            floating = self.clients.get(&handle).map_or(false, |c| c.is_floating);
        }
        if !arranges || floating {
            let proposed = Xyhw::new(nx, ny, geometry.w, geometry.h);
            self.resize(handle, proposed, true);
        }
    }

    /// Floats a client where it currently is.
    pub(crate) fn promote_to_floating(&mut self, handle: WindowHandle<H>) {
        let Some(client) = self.clients.get_mut(&handle) else {
            return;
        };
        if client.is_fullscreen {
            return;
        }
        client.is_floating = true;
        let (geometry, mon) = (client.geometry, client.monitor);
        self.resize(handle, geometry, false);
        self.arrange(Some(mon));
    }

    /// After a drag, hands the client to the monitor it now mostly covers.
    pub fn finish_drag(&mut self, handle: WindowHandle<H>) {
        let Some(client) = self.clients.get(&handle) else {
            return;
        };
        let mon = self.rect_to_monitor(&client.geometry);
        if mon != self.selected_monitor {
            self.send_monitor(handle, mon);
            self.selected_monitor = mon;
            self.focus(None);
        }
    }
}

/// Snaps the leading edge `pos` of a span of length `len` onto the edges
/// `start` and `end` of another span.
fn snap_to_edges(pos: i32, len: i32, start: i32, end: i32, snap: i32) -> i32 {
    let mut pos = pos;
    for candidate in [start, start - len, end, end - len] {
        if (candidate - pos).abs() < snap {
            pos = candidate;
        }
    }
    pos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::TestConfig;
    use crate::display_event::{ButtonEvent, Motion};
    use crate::models::{test_window, TestManager};
    use crate::utils::modmask_lookup::{Button, ModMask};

    fn manager(snap: i32) -> TestManager {
        let config = TestConfig {
            snap,
            ..TestConfig::default()
        };
        Manager::new_test_with_config(config)
    }

    fn motion(x: i32, y: i32, time: u64) -> DisplayEvent<i32> {
        DisplayEvent::MotionNotify(Motion {
            target: Target::Root,
            x,
            y,
            time,
        })
    }

    fn release() -> DisplayEvent<i32> {
        DisplayEvent::ButtonRelease(ButtonEvent {
            target: Target::Root,
            modmask: ModMask::Zero,
            button: Button::Button1,
            x: 0,
            root_x: 0,
            root_y: 0,
        })
    }

    #[test]
    fn throttle_drops_motion_closer_than_a_frame() {
        let mut throttle = MotionThrottle::default();
        assert!(throttle.accept(100));
        assert!(!throttle.accept(110));
        assert!(!throttle.accept(116));
        assert!(throttle.accept(117));
    }

    #[test]
    fn small_drag_leaves_tiled_client_alone() {
        let mut manager = manager(10);
        manager.state.manage(&test_window(1));
        let before = manager.state.clients[&WindowHandle(1)].geometry;
        manager.state.drag_move_step(WindowHandle(1), before.x + 2, before.y + 2);
        let client = &manager.state.clients[&WindowHandle(1)];
        assert!(!client.is_floating);
        assert_eq!(client.geometry, before);
    }

    #[test]
    fn large_drag_floats_tiled_client() {
        let mut manager = manager(10);
        manager.state.manage(&test_window(1));
        let before = manager.state.clients[&WindowHandle(1)].geometry;
        manager
            .state
            .drag_move_step(WindowHandle(1), before.x + 50, before.y + 50);
        let client = &manager.state.clients[&WindowHandle(1)];
        assert!(client.is_floating);
        assert_eq!(
            client.geometry,
            Xyhw::new(before.x + 50, before.y + 50, before.w, before.h)
        );
    }

    #[test]
    fn floating_client_snaps_to_sibling_edges() {
        let mut manager = manager(10);
        manager.state.set_layout(Some(crate::layouts::Layout::Floating));
        let mut left = test_window(1);
        left.geometry = Xyhw::new(100, 100, 200, 200);
        manager.state.manage(&left);
        manager.state.manage(&test_window(2));
        // The sibling's outer right edge is at 302.
        manager.state.drag_move_step(WindowHandle(2), 306, 400);
        assert_eq!(manager.state.clients[&WindowHandle(2)].geometry.x, 302);
        manager.state.drag_move_step(WindowHandle(2), 500, 96);
        assert_eq!(manager.state.clients[&WindowHandle(2)].geometry.y, 100);
    }

    #[test]
    fn move_mouse_follows_the_pointer_until_release() {
        let mut manager = manager(10);
        manager.state.manage(&test_window(1));
        manager.display_server.pointer = (100, 100);
        manager.display_server.pointer_events =
            vec![motion(150, 150, 100), motion(400, 400, 105), release()].into();
        assert!(manager.move_mouse());
        let client = &manager.state.clients[&WindowHandle(1)];
        assert!(client.is_floating);
        assert_eq!((client.geometry.x, client.geometry.y), (50, 70));
        assert_eq!(manager.state.mode, Mode::Normal);
        assert!(!manager.display_server.grabbed);
    }

    #[test]
    fn fullscreen_clients_are_not_dragged() {
        let mut manager = manager(10);
        manager.state.manage(&test_window(1));
        manager.state.set_fullscreen(WindowHandle(1), true);
        assert!(!manager.move_mouse());
    }

    #[test]
    fn refused_grab_aborts_the_drag() {
        let mut manager = manager(10);
        manager.state.manage(&test_window(1));
        manager.display_server.refuse_grab = true;
        assert!(!manager.move_mouse());
        assert_eq!(manager.state.mode, Mode::Normal);
    }

    #[test]
    fn window_mapped_during_a_drag_is_managed() {
        let mut manager = manager(10);
        manager.state.manage(&test_window(1));
        manager.display_server.pointer_events =
            vec![DisplayEvent::MapRequest(test_window(2)), release()].into();
        manager.move_mouse();
        assert!(manager.state.clients.contains_key(&WindowHandle(2)));
    }

    #[test]
    fn dropping_on_another_monitor_moves_the_client() {
        let mut manager = manager(10);
        let screens = vec![Xyhw::new(0, 0, 1000, 800), Xyhw::new(1000, 0, 1000, 800)];
        manager.display_server.set_screens(screens);
        let topology = manager.display_server.topology();
        manager.state.update_geometry(&topology, (0, 0));
        manager.state.manage(&test_window(1));
        manager.state.promote_to_floating(WindowHandle(1));
        manager.state.drag_move_step(WindowHandle(1), 1300, 300);
        manager.state.finish_drag(WindowHandle(1));
        assert_eq!(manager.state.clients[&WindowHandle(1)].monitor, 1);
        assert_eq!(manager.state.selected_monitor, 1);
        assert_eq!(manager.state.monitors[1].clients, vec![WindowHandle(1)]);
    }
}
