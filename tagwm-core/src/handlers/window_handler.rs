#![allow(clippy::wildcard_imports)]

use super::*;
use crate::display_action::{BorderColor, ClientState};
use crate::models::{
    Client, ClientRequest, StateAction, WindowChange, WindowChanges, WindowInfo, WindowType,
    WmHints,
};

impl<H: Handle> State<H> {
    /// A window asked to be mapped.
    pub fn map_request(&mut self, info: &WindowInfo<H>) {
        if info.override_redirect || self.clients.contains_key(&info.handle) {
            return;
        }
        self.manage(info);
    }

    /// Starts managing a window: places it, attaches it to its monitor
    /// and focuses the monitor again.
    pub fn manage(&mut self, info: &WindowInfo<H>) {
        let handle = info.handle;
        let mut client = Client::new(info, self.selected_monitor);
        let parent = info
            .transient_for
            .and_then(|t| self.clients.get(&t))
            .map(|t| (t.monitor, t.tags));
        match parent {
            Some((monitor, tags)) => {
                client.monitor = monitor;
                client.tags = tags;
            }
            None => self.apply_rules(&mut client),
        }
        let Some(usable) = self.monitors.get(client.monitor).map(|m| m.usable) else {
            tracing::warn!("no monitor to manage {:?} on", handle);
            return;
        };
        if client.geometry.x + client.outer_width() > usable.right() {
            client.geometry.x = usable.right() - client.outer_width();
        }
        if client.geometry.y + client.outer_height() > usable.bottom() {
            client.geometry.y = usable.bottom() - client.outer_height();
        }
        client.geometry.x = client.geometry.x.max(usable.x);
        client.geometry.y = client.geometry.y.max(usable.y);
        client.border = self.border_width;
        client.saved_border = self.border_width;
        let geometry = client.geometry;
        let monitor = client.monitor;
        self.clients.insert(handle, client);

        self.actions
            .push_back(DisplayAction::SetBorderWidth(handle, self.border_width));
        self.actions
            .push_back(DisplayAction::SetBorderColor(handle, BorderColor::Normal));
        self.actions.push_back(DisplayAction::ConfigureNotify {
            window: handle,
            geometry,
            border: self.border_width,
        });
        self.update_window_type(handle, info.window_type, info.fullscreen);
        if let Some(client) = self.clients.get_mut(&handle) {
            client.refresh_size_hints();
        }
        self.update_wm_hints(handle, info.wm_hints);
        self.actions
            .push_back(DisplayAction::GrabButtons(handle, false));

        let floating = self.clients.get_mut(&handle).map_or(false, |c| {
            if !c.is_floating {
                c.is_floating = c.transient.is_some() || c.is_fixed;
                c.old_floating = c.is_floating;
            }
            c.is_floating
        });
        if floating {
            self.actions.push_back(DisplayAction::MoveToTop(handle));
        }
        self.attach(handle);
        self.attach_stack(handle);
        self.update_client_list();
        // Keep it off screen until the layout has placed it.
        self.actions.push_back(DisplayAction::MoveWindow(
            handle,
            geometry.x + 2 * self.display.w,
            geometry.y,
        ));
        self.actions
            .push_back(DisplayAction::SetClientState(handle, ClientState::Normal));
        if monitor == self.selected_monitor {
            if let Some(selected) = self.selected_client() {
                self.unfocus(selected, false);
            }
        }
        self.monitors[monitor].selected = Some(handle);
        self.arrange(Some(monitor));
        self.actions.push_back(DisplayAction::MapWindow(handle));
        self.focus(None);
        tracing::debug!("managing {:?} on monitor {}", handle, monitor);
    }

    /// Stops managing a client. Windows that still exist get their
    /// original border back and are marked withdrawn.
    pub fn unmanage(&mut self, handle: WindowHandle<H>, destroyed: bool) {
        let Some((monitor, old_border)) = self.clients.get(&handle).map(|c| (c.monitor, c.old_border))
        else {
            return;
        };
        if matches!(self.mode, Mode::MovingWindow(h) | Mode::ResizingWindow(h) if h == handle) {
            self.mode = Mode::Normal;
        }
        self.detach(handle);
        self.detach_stack(handle);
        if !destroyed {
            self.actions.push_back(DisplayAction::ReleaseWindow {
                window: handle,
                border: old_border,
            });
            self.actions
                .push_back(DisplayAction::SetClientState(handle, ClientState::Withdrawn));
        }
        self.clients.remove(&handle);
        self.focus(None);
        self.update_client_list();
        self.arrange(Some(monitor));
        tracing::debug!("released {:?}", handle);
    }

    /// A window was unmapped. Synthetic unmaps only withdraw it.
    pub fn unmap_notify(&mut self, handle: WindowHandle<H>, synthetic: bool) {
        if !self.clients.contains_key(&handle) {
            return;
        }
        if synthetic {
            self.actions
                .push_back(DisplayAction::SetClientState(handle, ClientState::Withdrawn));
        } else {
            self.unmanage(handle, false);
        }
    }

    pub fn destroy_notify(&mut self, handle: WindowHandle<H>) {
        if self.clients.contains_key(&handle) {
            self.unmanage(handle, true);
        }
    }

    /// A window asked for a new geometry.
    ///
    /// Floating clients, and every client while nothing is arranged, get
    /// what they ask for, re-centred when they would leave their monitor.
    /// Tiled clients are only told their current geometry. Unmanaged
    /// windows are passed through.
    pub fn configure_request(&mut self, handle: WindowHandle<H>, changes: &WindowChanges<H>) {
        let arranges = self.selected_monitor().map_or(true, |m| m.arranges());
        let Some(client) = self.clients.get_mut(&handle) else {
            self.actions
                .push_back(DisplayAction::ConfigureWindow(handle, *changes));
            return;
        };
        if let Some(border) = changes.border {
            client.border = border;
            return;
        }
        if !(client.is_floating || !arranges) {
            self.actions.push_back(DisplayAction::ConfigureNotify {
                window: handle,
                geometry: client.geometry,
                border: client.border,
            });
            return;
        }
        let Some(monitor) = self.monitors.get(client.monitor) else {
            return;
        };
        let screen = monitor.screen;
        let active = monitor.active_tags();
        let mut geometry = client.geometry;
        if let Some(x) = changes.x {
            geometry.x = screen.x + x;
        }
        if let Some(y) = changes.y {
            geometry.y = screen.y + y;
        }
        if let Some(w) = changes.width {
            geometry.w = w;
        }
        if let Some(h) = changes.height {
            geometry.h = h;
        }
        client.old_geometry = client.geometry;
        client.geometry = geometry;
        if client.is_floating {
            if geometry.right() > screen.right() {
                client.geometry.x = screen.x + (screen.w / 2 - client.outer_width() / 2);
            }
            if geometry.bottom() > screen.bottom() {
                client.geometry.y = screen.y + (screen.h / 2 - client.outer_height() / 2);
            }
        }
        let (geometry, border) = (client.geometry, client.border);
        if changes.has_position() && !changes.has_size() {
            self.actions.push_back(DisplayAction::ConfigureNotify {
                window: handle,
                geometry,
                border,
            });
        }
        if client.is_visible_on(active) {
            self.actions.push_back(DisplayAction::MoveResizeWindow {
                window: handle,
                geometry,
                border,
            });
        }
    }

    pub fn property_notify(&mut self, change: WindowChange<H>) {
        match change {
            WindowChange::RootName(name) => {
                self.status_text = name;
                self.draw_bar(self.selected_monitor);
            }
            WindowChange::TransientFor(handle, parent) => {
                let parent_managed = parent.map_or(false, |p| self.clients.contains_key(&p));
                let Some(client) = self.clients.get_mut(&handle) else {
                    return;
                };
                client.transient = parent;
                if !client.is_floating && parent_managed {
                    client.is_floating = true;
                    let monitor = client.monitor;
                    self.arrange(Some(monitor));
                }
            }
            WindowChange::NormalHints(handle, hints) => {
                if let Some(client) = self.clients.get_mut(&handle) {
                    client.set_normal_hints(hints);
                }
            }
            WindowChange::WmHints(handle, hints) => {
                self.update_wm_hints(handle, hints);
                self.draw_bars();
            }
            WindowChange::Title(handle, title) => {
                let Some(client) = self.clients.get_mut(&handle) else {
                    return;
                };
                client.set_title(title.as_deref());
                let monitor = client.monitor;
                if self.monitors.get(monitor).and_then(|m| m.selected) == Some(handle) {
                    self.draw_bar(monitor);
                }
            }
            WindowChange::WindowType(handle, window_type, fullscreen) => {
                self.update_window_type(handle, window_type, fullscreen);
            }
        }
    }

    pub fn client_message(&mut self, handle: WindowHandle<H>, request: ClientRequest) {
        let Some(client) = self.clients.get(&handle) else {
            return;
        };
        match request {
            ClientRequest::Fullscreen(action) => {
                let fullscreen = match action {
                    StateAction::Add => true,
                    StateAction::Toggle => !client.is_fullscreen,
                    StateAction::Remove => false,
                };
                self.set_fullscreen(handle, fullscreen);
            }
            ClientRequest::Activate => {
                if self.selected_client() != Some(handle) && !client.is_urgent {
                    self.set_urgent(handle, true);
                }
            }
        }
    }

    /// Covers the whole monitor without a border, or restores the geometry,
    /// border and floating state the client had before.
    pub fn set_fullscreen(&mut self, handle: WindowHandle<H>, fullscreen: bool) {
        let Some(client) = self.clients.get_mut(&handle) else {
            return;
        };
        if fullscreen && !client.is_fullscreen {
            client.is_fullscreen = true;
            client.old_floating = client.is_floating;
            client.saved_border = client.border;
            client.border = 0;
            client.is_floating = true;
            let screen = self
                .monitors
                .get(client.monitor)
                .map_or(self.display, |m| m.screen);
            self.actions
                .push_back(DisplayAction::SetFullscreen(handle, true));
            self.resize_client(handle, screen);
            self.actions.push_back(DisplayAction::MoveToTop(handle));
        } else if !fullscreen && client.is_fullscreen {
            client.is_fullscreen = false;
            client.is_floating = client.old_floating;
            client.border = client.saved_border;
            let (restore, monitor) = (client.old_geometry, client.monitor);
            self.actions
                .push_back(DisplayAction::SetFullscreen(handle, false));
            self.resize_client(handle, restore);
            self.arrange(Some(monitor));
        }
    }

    /// Takes urgency and input acceptance from new WM hints. The selected
    /// client cannot become urgent; its urgency hint is cleared instead.
    pub fn update_wm_hints(&mut self, handle: WindowHandle<H>, hints: WmHints) {
        let selected = self.selected_client() == Some(handle);
        let Some(client) = self.clients.get_mut(&handle) else {
            return;
        };
        if selected && hints.urgent {
            self.actions
                .push_back(DisplayAction::SetUrgent(handle, false));
        } else {
            client.is_urgent = hints.urgent;
        }
        client.never_focus = hints.never_focus();
    }

    pub fn update_window_type(
        &mut self,
        handle: WindowHandle<H>,
        window_type: WindowType,
        fullscreen: bool,
    ) {
        if fullscreen {
            self.set_fullscreen(handle, true);
        }
        if window_type == WindowType::Dialog {
            if let Some(client) = self.clients.get_mut(&handle) {
                client.is_floating = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Rule;
    use crate::config::tests::TestConfig;
    use crate::models::{test_window, NormalHints, TagSet};

    #[test]
    fn managed_window_is_selected_and_mapped() {
        let mut manager = Manager::new_test(vec!["1".to_owned()]);
        manager.state.manage(&test_window(1));
        assert_eq!(manager.state.selected_client(), Some(WindowHandle(1)));
        assert!(manager
            .state
            .actions
            .contains(&DisplayAction::MapWindow(WindowHandle(1))));
        let client = &manager.state.clients[&WindowHandle(1)];
        assert_eq!(client.tags, TagSet::single(1));
        assert_eq!(client.border, 1);
    }

    #[test]
    fn override_redirect_windows_are_ignored() {
        let mut manager = Manager::new_test(vec!["1".to_owned()]);
        let mut info = test_window(1);
        info.override_redirect = true;
        manager.state.map_request(&info);
        assert!(manager.state.clients.is_empty());
    }

    #[test]
    fn transients_inherit_parent_tags_and_float() {
        let mut manager = Manager::new_test(vec!["1".to_owned(), "2".to_owned()]);
        manager.state.manage(&test_window(1));
        manager.state.tag(TagSet::single(2));
        let mut dialog = test_window(2);
        dialog.transient_for = Some(WindowHandle(1));
        manager.state.manage(&dialog);
        let client = &manager.state.clients[&WindowHandle(2)];
        assert_eq!(client.tags, TagSet::single(2));
        assert!(client.is_floating);
    }

    #[test]
    fn fixed_windows_float() {
        let mut manager = Manager::new_test(vec!["1".to_owned()]);
        let mut info = test_window(1);
        info.normal_hints = NormalHints {
            min: Some((300, 200)),
            max: Some((300, 200)),
            ..NormalHints::default()
        };
        manager.state.manage(&info);
        let client = &manager.state.clients[&WindowHandle(1)];
        assert!(client.is_fixed);
        assert!(client.is_floating);
    }

    #[test]
    fn new_windows_are_kept_inside_the_usable_area() {
        let mut manager = Manager::new_test(vec!["1".to_owned()]);
        let config = TestConfig {
            rules: vec![Rule {
                floating: true,
                ..Rule::default()
            }],
            ..TestConfig::default()
        };
        manager.state.load_config(&config);
        let mut info = test_window(1);
        info.geometry = Xyhw::new(1900, -40, 200, 100);
        manager.state.manage(&info);
        let client = &manager.state.clients[&WindowHandle(1)];
        assert_eq!((client.geometry.x, client.geometry.y), (1920 - 200, 20));
    }

    #[test]
    fn unmanaging_restores_the_original_border() {
        let mut manager = Manager::new_test(vec!["1".to_owned()]);
        let mut info = test_window(1);
        info.border = 4;
        manager.state.manage(&info);
        manager.state.unmap_notify(WindowHandle(1), false);
        assert!(manager.state.clients.is_empty());
        assert!(manager.state.actions.contains(&DisplayAction::ReleaseWindow {
            window: WindowHandle(1),
            border: 4,
        }));
        assert_eq!(manager.state.selected_client(), None);
    }

    #[test]
    fn synthetic_unmap_only_withdraws() {
        let mut manager = Manager::new_test(vec!["1".to_owned()]);
        manager.state.manage(&test_window(1));
        manager.state.unmap_notify(WindowHandle(1), true);
        assert_eq!(manager.state.clients.len(), 1);
    }

    #[test]
    fn fullscreen_round_trip_restores_geometry() {
        let mut manager = Manager::new_test(vec!["1".to_owned()]);
        manager.state.manage(&test_window(1));
        let before = manager.state.clients[&WindowHandle(1)].clone();
        manager
            .state
            .client_message(WindowHandle(1), ClientRequest::Fullscreen(StateAction::Toggle));
        let client = &manager.state.clients[&WindowHandle(1)];
        assert!(client.is_fullscreen);
        assert_eq!(client.geometry, Xyhw::new(0, 0, 1920, 1080));
        assert_eq!(client.border, 0);
        manager
            .state
            .client_message(WindowHandle(1), ClientRequest::Fullscreen(StateAction::Remove));
        let client = &manager.state.clients[&WindowHandle(1)];
        assert!(!client.is_fullscreen);
        assert_eq!(client.geometry, before.geometry);
        assert_eq!(client.border, before.border);
        assert_eq!(client.is_floating, before.is_floating);
    }

    #[test]
    fn activation_marks_unselected_clients_urgent() {
        let mut manager = Manager::new_test(vec!["1".to_owned()]);
        manager.state.manage(&test_window(1));
        manager.state.manage(&test_window(2));
        manager
            .state
            .client_message(WindowHandle(1), ClientRequest::Activate);
        manager
            .state
            .client_message(WindowHandle(2), ClientRequest::Activate);
        assert!(manager.state.clients[&WindowHandle(1)].is_urgent);
        assert!(!manager.state.clients[&WindowHandle(2)].is_urgent);
    }

    #[test]
    fn tiled_configure_request_only_gets_notified() {
        let mut manager = Manager::new_test(vec!["1".to_owned()]);
        manager.state.manage(&test_window(1));
        let before = manager.state.clients[&WindowHandle(1)].geometry;
        manager.state.actions.clear();
        let changes = WindowChanges {
            width: Some(50),
            ..WindowChanges::default()
        };
        manager.state.configure_request(WindowHandle(1), &changes);
        assert_eq!(manager.state.clients[&WindowHandle(1)].geometry, before);
        assert!(matches!(
            manager.state.actions.front(),
            Some(DisplayAction::ConfigureNotify { .. })
        ));
    }

    #[test]
    fn floating_configure_request_is_centred_when_too_large() {
        let mut manager = Manager::new_test(vec!["1".to_owned()]);
        manager.state.manage(&test_window(1));
        manager.state.toggle_floating();
        let changes = WindowChanges {
            x: Some(1800),
            width: Some(400),
            ..WindowChanges::default()
        };
        manager.state.configure_request(WindowHandle(1), &changes);
        let client = &manager.state.clients[&WindowHandle(1)];
        assert_eq!(client.geometry.w, 400);
        assert_eq!(client.geometry.x, 960 - 201);
    }

    #[test]
    fn unmanaged_configure_request_passes_through() {
        let mut manager = Manager::new_test(vec!["1".to_owned()]);
        let changes = WindowChanges {
            height: Some(10),
            ..WindowChanges::default()
        };
        manager.state.configure_request(WindowHandle(9), &changes);
        assert_eq!(
            manager.state.actions.back(),
            Some(&DisplayAction::ConfigureWindow(WindowHandle(9), changes))
        );
    }

    #[test]
    fn root_name_becomes_status() {
        let mut manager = Manager::new_test(vec!["1".to_owned()]);
        manager
            .state
            .property_notify(WindowChange::RootName(Some("vol 50%".to_owned())));
        assert_eq!(manager.state.status_line(), "vol 50%");
    }

    #[test]
    fn title_changes_are_tracked() {
        let mut manager = Manager::new_test(vec!["1".to_owned()]);
        manager.state.manage(&test_window(1));
        manager
            .state
            .property_notify(WindowChange::Title(WindowHandle(1), None));
        assert_eq!(manager.state.clients[&WindowHandle(1)].name, crate::models::BROKEN);
    }
}
