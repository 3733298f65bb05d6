#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_action::BorderColor;
use crate::utils::helpers::relative_find;

impl<H: Handle> State<H> {
    /// Gives focus to `handle`, or to the most recently focused visible
    /// client of the selected monitor when `handle` is absent or hidden.
    /// With nothing to focus, the root window takes input focus.
    pub fn focus(&mut self, handle: Option<WindowHandle<H>>) {
        let target = handle
            .filter(|h| self.is_visible(h))
            .or_else(|| self.first_visible_in_stack(self.selected_monitor));
        if let Some(selected) = self.selected_client() {
            if Some(selected) != target {
                self.unfocus(selected, false);
            }
        }
        if let Some(h) = target {
            let Some(client) = self.clients.get(&h) else {
                return;
            };
            self.selected_monitor = client.monitor;
            if client.is_urgent {
                self.set_urgent(h, false);
            }
            self.detach_stack(h);
            self.attach_stack(h);
            self.actions.push_back(DisplayAction::GrabButtons(h, true));
            self.actions
                .push_back(DisplayAction::SetBorderColor(h, BorderColor::Focused));
            self.set_focus(h);
        } else {
            self.actions.push_back(DisplayAction::Unfocus);
        }
        if let Some(mon) = self.monitors.get_mut(self.selected_monitor) {
            mon.selected = target;
        }
        self.draw_bars();
    }

    /// Drops the focused look of a client, handing input to the root
    /// window when `set_focus` is true.
    pub fn unfocus(&mut self, handle: WindowHandle<H>, set_focus: bool) {
        if !self.clients.contains_key(&handle) {
            return;
        }
        self.actions
            .push_back(DisplayAction::GrabButtons(handle, false));
        self.actions
            .push_back(DisplayAction::SetBorderColor(handle, BorderColor::Normal));
        if set_focus {
            self.actions.push_back(DisplayAction::Unfocus);
        }
    }

    pub fn set_focus(&mut self, handle: WindowHandle<H>) {
        let Some(client) = self.clients.get(&handle) else {
            return;
        };
        self.actions.push_back(DisplayAction::WindowTakeFocus {
            window: handle,
            set_input_focus: !client.never_focus,
        });
    }

    pub fn set_urgent(&mut self, handle: WindowHandle<H>, urgent: bool) {
        if let Some(client) = self.clients.get_mut(&handle) {
            client.is_urgent = urgent;
            self.actions
                .push_back(DisplayAction::SetUrgent(handle, urgent));
        }
    }

    /// Cycles focus through the visible clients of the selected monitor.
    pub fn focus_stack(&mut self, direction: i32) {
        let Some(selected) = self.selected_client() else {
            return;
        };
        let fullscreen = self
            .clients
            .get(&selected)
            .map_or(false, |c| c.is_fullscreen);
        if fullscreen && self.lock_fullscreen {
            return;
        }
        let visible = self.visible_clients(self.selected_monitor);
        let shift = if direction > 0 { 1 } else { -1 };
        let next = relative_find(&visible, |h| *h == selected, shift, true).copied();
        if let Some(next) = next {
            self.focus(Some(next));
            self.restack(self.selected_monitor);
        }
    }

    /// The monitor `direction` steps away from the selected one, wrapping around.
    #[must_use]
    pub fn dir_to_monitor(&self, direction: i32) -> MonitorId {
        let count = self.monitors.len();
        if count == 0 {
            return self.selected_monitor;
        }
        if direction > 0 {
            (self.selected_monitor + 1) % count
        } else {
            (self.selected_monitor + count - 1) % count
        }
    }

    pub fn focus_monitor(&mut self, direction: i32) {
        if self.monitors.len() < 2 {
            return;
        }
        let target = self.dir_to_monitor(direction);
        if target == self.selected_monitor {
            return;
        }
        if let Some(selected) = self.selected_client() {
            self.unfocus(selected, false);
        }
        self.selected_monitor = target;
        self.focus(None);
    }

    /// The pointer entered a window. Focus follows it, switching monitors
    /// when the window lives on another one.
    pub fn enter_notify(&mut self, target: Target<H>, normal: bool, pointer: Option<(i32, i32)>) {
        if !normal && target != Target::Root {
            return;
        }
        let client = match target {
            Target::Window(h) if self.clients.contains_key(&h) => Some(h),
            _ => None,
        };
        let mon = self.window_to_monitor(&target, pointer);
        if mon == self.selected_monitor {
            if client.is_none() || client == self.selected_client() {
                return;
            }
        } else {
            if let Some(selected) = self.selected_client() {
                self.unfocus(selected, true);
            }
            self.selected_monitor = mon;
        }
        if let Some(h) = client {
            self.actions.push_back(DisplayAction::MoveToTop(h));
            self.actions.push_back(DisplayAction::SetClientState(
                h,
                crate::display_action::ClientState::Normal,
            ));
        }
        self.focus(client);
    }

    /// Pointer motion over the root window selects the monitor under it.
    pub fn motion_notify(&mut self, target: Target<H>, x: i32, y: i32) {
        if target != Target::Root {
            return;
        }
        let mon = self.rect_to_monitor(&Xyhw::new(x, y, 1, 1));
        if self.motion_monitor.is_some() && self.motion_monitor != Some(mon) {
            if let Some(selected) = self.selected_client() {
                self.unfocus(selected, true);
            }
            self.selected_monitor = mon;
            self.focus(None);
        }
        self.motion_monitor = Some(mon);
    }

    /// Some clients grab focus themselves; give it back to the selection.
    pub fn focus_in(&mut self, handle: WindowHandle<H>) {
        if let Some(selected) = self.selected_client() {
            if selected != handle {
                self.set_focus(selected);
            }
        }
    }
}
