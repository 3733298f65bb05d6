#![allow(clippy::wildcard_imports)]

use super::*;
use crate::config::ClickTarget;
use crate::display_event::ButtonEvent;
use crate::display_servers::DisplayServer;
use crate::models::TagSet;
use crate::utils::modmask_lookup::ModMask;

impl<H: Handle, C: Config, SERVER: DisplayServer<H>> Manager<H, C, SERVER> {
    /// Runs the mouse bindings matching a button press.
    ///
    /// Pressing on another monitor selects it first. Clicks on a client
    /// focus it and are replayed to it.
    pub fn button_press(&mut self, event: &ButtonEvent<H>) {
        let state = &mut self.state;
        let mon = state.window_to_monitor(&event.target, Some((event.root_x, event.root_y)));
        if mon != state.selected_monitor {
            if let Some(selected) = state.selected_client() {
                state.unfocus(selected, true);
            }
            state.selected_monitor = mon;
            state.focus(None);
        }

        let mut clicked = TagSet::EMPTY;
        let click = match event.target {
            Target::Bar(bar) if bar == self.state.selected_monitor => {
                let (click, tags) = self.bar_click(event.x);
                clicked = tags;
                click
            }
            Target::Window(handle) if self.state.clients.contains_key(&handle) => {
                self.state.focus(Some(handle));
                self.state.restack(self.state.selected_monitor);
                self.state.actions.push_back(DisplayAction::ReplayClick);
                ClickTarget::ClientWin
            }
            _ => ClickTarget::RootWin,
        };

        let modmask = event.modmask.cleaned();
        let commands: Vec<Command> = self
            .state
            .mouse_bindings
            .iter()
            .filter(|b| b.click == click && b.button == event.button && b.modmask() == modmask)
            .map(|b| match click {
                ClickTarget::TagBar => b.command.clone().with_clicked_tag(clicked),
                _ => b.command.clone(),
            })
            .collect();
        for command in &commands {
            self.command_handler(command);
        }
    }

    /// Which part of the selected monitor's bar lies under `x`, and the tag
    /// when it is a tag label.
    fn bar_click(&self, x: i32) -> (ClickTarget, TagSet) {
        let mut right = 0;
        for (i, label) in self.state.tags.labels().iter().enumerate() {
            right += self.display_server.text_width(label);
            if x < right {
                return (ClickTarget::TagBar, TagSet::single(i + 1));
            }
        }
        let Some(mon) = self.state.selected_monitor() else {
            return (ClickTarget::RootWin, TagSet::EMPTY);
        };
        let click = if x < right + self.display_server.text_width(&mon.layout_symbol) {
            ClickTarget::LtSymbol
        } else if x > mon.usable.w - self.display_server.text_width(&self.state.status_line()) {
            ClickTarget::StatusText
        } else {
            ClickTarget::WinTitle
        };
        (click, TagSet::EMPTY)
    }

    /// Runs the key bindings matching a key press.
    pub fn key_press(&mut self, modmask: ModMask, key: &str) {
        let modmask = modmask.cleaned();
        let commands: Vec<Command> = self
            .state
            .keybinds
            .iter()
            .filter(|k| k.key == key && k.modmask() == modmask)
            .map(|k| k.command.clone())
            .collect();
        for command in &commands {
            self.command_handler(command);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layouts::Layout;
    use crate::models::{test_window, TestManager};
    use crate::utils::modmask_lookup::Button;

    fn press(target: Target<i32>, modmask: ModMask, x: i32) -> ButtonEvent<i32> {
        ButtonEvent {
            target,
            modmask,
            button: Button::Button1,
            x,
            root_x: x,
            root_y: 5,
        }
    }

    fn manager_with(count: i32) -> TestManager {
        let mut manager = Manager::new_test((1..=9).map(|i| i.to_string()).collect());
        for id in 1..=count {
            manager.state.manage(&test_window(id));
        }
        manager
    }

    #[test]
    fn clicking_a_tag_label_views_it() {
        let mut manager = manager_with(0);
        manager.button_press(&press(Target::Bar(0), ModMask::Zero, 15));
        assert_eq!(manager.state.monitors[0].active_tags(), TagSet::single(2));
    }

    #[test]
    fn clicking_the_layout_symbol_toggles_layouts() {
        let mut manager = manager_with(0);
        manager.button_press(&press(Target::Bar(0), ModMask::Zero, 95));
        assert_eq!(manager.state.monitors[0].layout(), Layout::Floating);
    }

    #[test]
    fn clicking_the_title_does_nothing() {
        let mut manager = manager_with(1);
        manager.button_press(&press(Target::Bar(0), ModMask::Zero, 500));
        assert_eq!(manager.state.monitors[0].layout(), Layout::Tile);
        assert_eq!(manager.state.monitors[0].active_tags(), TagSet::single(1));
    }

    #[test]
    fn clicking_a_client_focuses_and_replays() {
        let mut manager = manager_with(2);
        manager.button_press(&press(Target::Window(WindowHandle(1)), ModMask::Zero, 0));
        assert_eq!(manager.state.selected_client(), Some(WindowHandle(1)));
        assert!(manager.state.actions.contains(&DisplayAction::ReplayClick));
    }

    #[test]
    fn num_lock_does_not_break_bindings() {
        let mut manager = manager_with(2);
        manager.key_press(ModMask::Super | ModMask::NumLock, "j");
        assert_eq!(manager.state.selected_client(), Some(WindowHandle(1)));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut manager = manager_with(2);
        manager.key_press(ModMask::Zero, "j");
        assert_eq!(manager.state.selected_client(), Some(WindowHandle(2)));
    }
}
