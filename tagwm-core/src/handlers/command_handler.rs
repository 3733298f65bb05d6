#![allow(clippy::wildcard_imports)]

use super::*;
use crate::child_process::{exec_shell, Children};
use crate::display_servers::DisplayServer;
use crate::layouts::Layout;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /* Please also update tagwm/src/config/keybind.rs if any of the following apply after your update:
     * - a command now requires a value
     * - a command no longer requires a value
     * - a new command is introduced that requires a value
     *  */
    /// Processes a command and invokes the associated function.
    pub fn command_handler(&mut self, command: &Command) -> bool {
        process_internal(self, command).unwrap_or(false)
    }
}

fn process_internal<H: Handle, C: Config, SERVER: DisplayServer<H>>(
    manager: &mut Manager<H, C, SERVER>,
    command: &Command,
) -> Option<bool> {
    let state = &mut manager.state;
    match command {
        Command::Execute(shell_command) => execute(&mut manager.children, shell_command),

        Command::ToggleBar => state.toggle_bar(),
        Command::FocusStack(direction) => {
            state.focus_stack(*direction);
            Some(true)
        }
        Command::IncNMaster(delta) => state.inc_nmaster(*delta),
        Command::SetMFact(factor) => state.set_mfact(*factor),
        Command::Zoom => state.zoom(),

        Command::View(tags) => {
            state.view(*tags);
            Some(true)
        }
        Command::ToggleView(tags) => {
            state.toggle_view(*tags);
            Some(true)
        }
        Command::Tag(tags) => {
            state.tag(*tags);
            Some(true)
        }
        Command::ToggleTag(tags) => {
            state.toggle_tag(*tags);
            Some(true)
        }

        Command::KillClient => state.kill_client(),
        Command::SetLayout(layout) => {
            state.set_layout(*layout);
            Some(true)
        }
        Command::ToggleFloating => state.toggle_floating(),
        Command::FocusMonitor(direction) => {
            state.focus_monitor(*direction);
            Some(true)
        }
        Command::TagMonitor(direction) => state.tag_monitor(*direction),
        Command::ToggleMinimize => state.toggle_minimize(),

        Command::MoveMouse => Some(manager.move_mouse()),
        Command::ResizeMouse => Some(manager.resize_mouse()),

        Command::ReloadConfig => {
            manager.request_reload();
            Some(true)
        }
        Command::Quit => {
            tracing::info!("quit requested");
            state.running = false;
            Some(true)
        }
    }
}

fn execute(children: &mut Children, shell_command: &str) -> Option<bool> {
    exec_shell(shell_command, children)?;
    Some(false)
}

impl<H: Handle> State<H> {
    pub fn toggle_bar(&mut self) -> Option<bool> {
        let bar_height = self.bar_height;
        let mon = self.monitors.get_mut(self.selected_monitor)?;
        mon.show_bar = !mon.show_bar;
        mon.update_bar_position(bar_height);
        let geometry = mon.bar_geometry(bar_height);
        self.actions.push_back(DisplayAction::MoveBar {
            monitor: self.selected_monitor,
            geometry,
        });
        self.arrange(Some(self.selected_monitor));
        Some(true)
    }

    /// Changes the number of master clients, never below zero.
    pub fn inc_nmaster(&mut self, delta: i32) -> Option<bool> {
        let mon = self.monitors.get_mut(self.selected_monitor)?;
        let magnitude = delta.unsigned_abs() as usize;
        mon.nmaster = if delta < 0 {
            mon.nmaster.saturating_sub(magnitude)
        } else {
            mon.nmaster.saturating_add(magnitude)
        };
        self.arrange(Some(self.selected_monitor));
        Some(true)
    }

    /// Factors below 1.0 are relative to the current one, larger factors
    /// are absolute offset by 1.0. Results outside `[0.05, 0.95]` are refused.
    pub fn set_mfact(&mut self, factor: f32) -> Option<bool> {
        let mon = self.monitors.get_mut(self.selected_monitor)?;
        if !mon.arranges() {
            return None;
        }
        let mfact = if factor < 1.0 {
            factor + mon.mfact
        } else {
            factor - 1.0
        };
        if !(0.05..=0.95).contains(&mfact) {
            return None;
        }
        mon.mfact = mfact;
        self.arrange(Some(self.selected_monitor));
        Some(true)
    }

    /// Promotes the selected tiled client to master, or the next tiled
    /// client when it already is master.
    pub fn zoom(&mut self) -> Option<bool> {
        let mon = self.selected_monitor()?;
        if !mon.arranges() {
            return None;
        }
        let selected = mon.selected?;
        if self.clients.get(&selected)?.is_floating {
            return None;
        }
        let tiled = self.tiled_clients(self.selected_monitor);
        let target = if tiled.first() == Some(&selected) {
            *tiled.get(1)?
        } else {
            selected
        };
        self.pop(target);
        Some(true)
    }

    /// Moves a client to the head of its monitor's tiling order and focuses it.
    pub fn pop(&mut self, handle: WindowHandle<H>) {
        let Some(mon) = self.clients.get(&handle).map(|c| c.monitor) else {
            return;
        };
        self.detach(handle);
        self.attach(handle);
        self.focus(Some(handle));
        self.arrange(Some(mon));
    }

    pub fn kill_client(&mut self) -> Option<bool> {
        let handle = self.selected_client()?;
        self.actions.push_back(DisplayAction::KillWindow(handle));
        Some(false)
    }

    /// Switches to the other layout slot, then puts `layout` in the current
    /// slot. Picking the layout already shown does not switch slots.
    pub fn set_layout(&mut self, layout: Option<Layout>) {
        let Some(mon) = self.monitors.get_mut(self.selected_monitor) else {
            return;
        };
        if layout.map_or(true, |l| l != mon.layout()) {
            mon.selected_layout ^= 1;
        }
        if let Some(layout) = layout {
            mon.layouts[mon.selected_layout] = layout;
        }
        mon.layout_symbol = mon.layout().symbol().to_owned();
        if mon.selected.is_some() {
            self.arrange(Some(self.selected_monitor));
        } else {
            self.draw_bar(self.selected_monitor);
        }
    }

    /// Flips the selected client between tiled and floating. Fixed-size
    /// clients stay floating and fullscreen clients are left alone.
    pub fn toggle_floating(&mut self) -> Option<bool> {
        let handle = self.selected_client()?;
        let client = self.clients.get_mut(&handle)?;
        if client.is_fullscreen {
            return None;
        }
        client.is_floating = !client.is_floating || client.is_fixed;
        if client.is_floating {
            let geometry = client.geometry;
            self.resize(handle, geometry, false);
        }
        self.arrange(Some(self.selected_monitor));
        Some(true)
    }

    /// Sends the selected client to the neighbouring monitor.
    pub fn tag_monitor(&mut self, direction: i32) -> Option<bool> {
        let handle = self.selected_client()?;
        if self.monitors.len() < 2 {
            return None;
        }
        let target = self.dir_to_monitor(direction);
        self.send_monitor(handle, target);
        Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{test_window, NormalHints, TagSet, TestManager};

    fn manager_with(count: i32) -> TestManager {
        let mut manager = Manager::new_test(vec!["1".to_owned(), "2".to_owned()]);
        for id in 1..=count {
            manager.state.manage(&test_window(id));
        }
        manager
    }

    #[test]
    fn quit_stops_the_manager() {
        let mut manager = manager_with(0);
        assert!(manager.command_handler(&Command::Quit));
        assert!(!manager.state.running);
    }

    #[test]
    fn reload_is_deferred_to_the_event_loop() {
        let mut manager = manager_with(0);
        manager.command_handler(&Command::ReloadConfig);
        assert!(manager.reload_requested);
    }

    #[test]
    fn set_mfact_is_relative_below_one_and_absolute_above() {
        let mut manager = manager_with(2);
        assert!(manager.command_handler(&Command::SetMFact(0.05)));
        assert!((manager.state.monitors[0].mfact - 0.6).abs() < 1e-6);
        assert!(manager.command_handler(&Command::SetMFact(1.3)));
        assert!((manager.state.monitors[0].mfact - 0.3).abs() < 1e-6);
        assert!(!manager.command_handler(&Command::SetMFact(1.99)));
        assert!(!manager.command_handler(&Command::SetMFact(-0.3)));
        assert!((manager.state.monitors[0].mfact - 0.3).abs() < 1e-6);
    }

    #[test]
    fn set_mfact_needs_an_arranging_layout() {
        let mut manager = manager_with(1);
        manager.state.set_layout(Some(Layout::Floating));
        assert!(!manager.command_handler(&Command::SetMFact(0.1)));
        assert!((manager.state.monitors[0].mfact - 0.55).abs() < 1e-6);
    }

    #[test]
    fn nmaster_never_goes_below_zero() {
        let mut manager = manager_with(1);
        manager.command_handler(&Command::IncNMaster(-3));
        assert_eq!(manager.state.monitors[0].nmaster, 0);
        manager.command_handler(&Command::IncNMaster(2));
        assert_eq!(manager.state.monitors[0].nmaster, 2);
    }

    #[test]
    fn zoom_swaps_master_with_next_tiled_client() {
        let mut manager = manager_with(3);
        assert_eq!(manager.state.monitors[0].clients[0], WindowHandle(3));
        manager.command_handler(&Command::Zoom);
        assert_eq!(manager.state.monitors[0].clients[0], WindowHandle(2));
        assert_eq!(manager.state.selected_client(), Some(WindowHandle(2)));
        manager.state.focus(Some(WindowHandle(1)));
        manager.command_handler(&Command::Zoom);
        assert_eq!(manager.state.monitors[0].clients[0], WindowHandle(1));
    }

    #[test]
    fn set_layout_toggles_between_slots() {
        let mut manager = manager_with(1);
        manager.state.set_layout(Some(Layout::Monocle));
        assert_eq!(manager.state.monitors[0].layout(), Layout::Monocle);
        manager.state.set_layout(Some(Layout::Monocle));
        assert_eq!(manager.state.monitors[0].layout(), Layout::Monocle);
        manager.state.set_layout(None);
        assert_eq!(manager.state.monitors[0].layout(), Layout::Tile);
        manager.state.set_layout(None);
        assert_eq!(manager.state.monitors[0].layout(), Layout::Monocle);
    }

    #[test]
    fn fixed_clients_stay_floating() {
        let mut manager = manager_with(0);
        let mut info = test_window(1);
        info.normal_hints = NormalHints {
            min: Some((100, 100)),
            max: Some((100, 100)),
            ..NormalHints::default()
        };
        manager.state.manage(&info);
        manager.command_handler(&Command::ToggleFloating);
        assert!(manager.state.clients[&WindowHandle(1)].is_floating);
    }

    #[test]
    fn toggle_floating_keeps_the_tiled_geometry() {
        let mut manager = manager_with(2);
        let before = manager.state.clients[&WindowHandle(2)].geometry;
        manager.command_handler(&Command::ToggleFloating);
        let client = &manager.state.clients[&WindowHandle(2)];
        assert!(client.is_floating);
        assert_eq!(client.geometry, before);
        assert_eq!(
            manager.state.clients[&WindowHandle(1)].geometry,
            Xyhw::new(0, 20, 1918, 1058)
        );
    }

    #[test]
    fn toggle_bar_gives_the_space_to_clients() {
        let mut manager = manager_with(1);
        manager.command_handler(&Command::ToggleBar);
        assert_eq!(manager.state.monitors[0].usable, Xyhw::new(0, 0, 1920, 1080));
        assert_eq!(
            manager.state.clients[&WindowHandle(1)].geometry,
            Xyhw::new(0, 0, 1918, 1078)
        );
        assert!(manager.state.actions.contains(&DisplayAction::MoveBar {
            monitor: 0,
            geometry: Xyhw::new(0, -20, 1920, 20),
        }));
    }

    #[test]
    fn kill_client_targets_the_selection() {
        let mut manager = manager_with(2);
        manager.command_handler(&Command::KillClient);
        assert_eq!(
            manager.state.actions.back(),
            Some(&DisplayAction::KillWindow(WindowHandle(2)))
        );
    }

    #[test]
    fn tag_monitor_moves_client_to_the_next_monitor() {
        let mut manager = manager_with(0);
        let screens = vec![Xyhw::new(0, 0, 1000, 800), Xyhw::new(1000, 0, 1000, 800)];
        manager.display_server.set_screens(screens);
        let topology = manager.display_server.topology();
        manager.state.update_geometry(&topology, (0, 0));
        manager.state.manage(&test_window(1));
        manager.state.monitors[1].tagset[0] = TagSet::single(2);
        assert!(manager.command_handler(&Command::TagMonitor(1)));
        let client = &manager.state.clients[&WindowHandle(1)];
        assert_eq!(client.monitor, 1);
        assert_eq!(client.tags, TagSet::single(2));
        assert_eq!(manager.state.monitors[1].clients, vec![WindowHandle(1)]);
        assert!(manager.state.monitors[0].clients.is_empty());
    }

    #[test]
    fn tag_monitor_needs_two_monitors() {
        let mut manager = manager_with(1);
        assert!(!manager.command_handler(&Command::TagMonitor(1)));
    }
}
