//! Turning the model into geometry, stacking and bar updates.
use std::fmt::Write;

use crate::display_action::Sibling;
use crate::layouts::{monocle, tile, Layout};
use crate::models::dto::{BarState, TagState, TitleState};
use crate::models::{Handle, MonitorId, WindowHandle, Xyhw};
use crate::solver::{solve, SolveContext};
use crate::state::State;
use crate::DisplayAction;

impl<H: Handle> State<H> {
    /// Re-tiles one monitor and restacks it, or re-tiles every monitor
    /// without restacking when `mon` is `None`.
    pub fn arrange(&mut self, mon: Option<MonitorId>) {
        match mon {
            Some(mon) => {
                self.show_hide(mon);
                self.arrange_monitor(mon);
                self.restack(mon);
            }
            None => {
                for mon in 0..self.monitors.len() {
                    self.show_hide(mon);
                }
                for mon in 0..self.monitors.len() {
                    self.arrange_monitor(mon);
                }
            }
        }
    }

    pub fn arrange_monitor(&mut self, mon: MonitorId) {
        let Some(monitor) = self.monitors.get_mut(mon) else {
            return;
        };
        let layout = monitor.layout();
        monitor.layout_symbol = layout.symbol().to_owned();
        let (area, mfact, nmaster) = (monitor.usable, monitor.mfact, monitor.nmaster);
        let tiled = self.tiled_clients(mon);
        match layout {
            Layout::Tile => {
                tile::update(area, mfact, nmaster, &tiled, |h, rect| self.place_outer(h, rect));
            }
            Layout::Monocle => {
                if let Some(symbol) = monocle::symbol(self.visible_clients(mon).len()) {
                    self.monitors[mon].layout_symbol = symbol;
                }
                monocle::update(area, &tiled, |h, rect| self.place_outer(h, rect));
            }
            Layout::Floating => {}
        }
    }

    /// Resizes a client into an outer rectangle and returns the outer
    /// rectangle it ended up with.
    fn place_outer(&mut self, handle: WindowHandle<H>, outer: Xyhw) -> Xyhw {
        let border = self.clients.get(&handle).map_or(0, |c| c.border);
        let inner = Xyhw::new(outer.x, outer.y, outer.w - 2 * border, outer.h - 2 * border);
        self.resize(handle, inner, false);
        self.clients
            .get(&handle)
            .map_or(outer, |c| c.geometry.outer(c.border))
    }

    /// Moves visible clients into place top down and hidden ones off screen
    /// bottom up.
    pub fn show_hide(&mut self, mon: MonitorId) {
        let Some(monitor) = self.monitors.get(mon) else {
            return;
        };
        let arranges = monitor.arranges();
        let (visible, hidden): (Vec<_>, Vec<_>) = monitor
            .stack
            .clone()
            .into_iter()
            .partition(|h| self.is_visible(h));
        for handle in visible {
            let Some(client) = self.clients.get(&handle) else {
                continue;
            };
            let geometry = client.geometry;
            let refit = (!arranges || client.is_floating) && !client.is_fullscreen;
            self.actions
                .push_back(DisplayAction::MoveWindow(handle, geometry.x, geometry.y));
            if refit {
                self.resize(handle, geometry, false);
            }
        }
        for handle in hidden.into_iter().rev() {
            if let Some(client) = self.clients.get(&handle) {
                let x = client.outer_width() * -2;
                self.actions
                    .push_back(DisplayAction::MoveWindow(handle, x, client.geometry.y));
            }
        }
    }

    /// Redraws the bar and orders the monitor's windows: a floating
    /// selection on top, tiled clients below the bar in focus order.
    pub fn restack(&mut self, mon: MonitorId) {
        self.draw_bar(mon);
        let Some(monitor) = self.monitors.get(mon) else {
            return;
        };
        let Some(selected) = monitor.selected else {
            return;
        };
        let arranges = monitor.arranges();
        let floating = self.clients.get(&selected).map_or(false, |c| c.is_floating);
        if floating || !arranges {
            self.actions.push_back(DisplayAction::MoveToTop(selected));
        }
        if arranges {
            let mut sibling = Sibling::Bar(mon);
            let tiled: Vec<_> = monitor
                .stack
                .iter()
                .filter(|h| self.is_visible(h))
                .filter(|h| self.clients.get(h).map_or(false, |c| !c.is_floating))
                .copied()
                .collect();
            for handle in tiled {
                self.actions
                    .push_back(DisplayAction::StackBelow(handle, sibling));
                sibling = Sibling::Window(handle);
            }
        }
        self.actions.push_back(DisplayAction::DiscardEnterEvents);
    }

    /// Solves `proposed` for the client and commits it when it changed.
    pub fn resize(&mut self, handle: WindowHandle<H>, proposed: Xyhw, interactive: bool) {
        if let Some(geometry) = self.apply_size_hints(handle, proposed, interactive) {
            self.resize_client(handle, geometry);
        }
    }

    /// The corrected geometry for a client, `None` when it would not change.
    pub fn apply_size_hints(
        &mut self,
        handle: WindowHandle<H>,
        proposed: Xyhw,
        interactive: bool,
    ) -> Option<Xyhw> {
        let client = self.clients.get_mut(&handle)?;
        let monitor = self.monitors.get(client.monitor)?;
        let respect = !client.is_minimized
            && (self.resize_hints || client.is_floating || !monitor.arranges());
        let ctx = SolveContext {
            hints: respect.then(|| client.size_hints()),
            current: client.geometry,
            border: client.border,
            display: self.display,
            usable: monitor.usable,
            bar_height: self.bar_height,
        };
        let (geometry, changed) = solve(&ctx, proposed, interactive);
        changed.then_some(geometry)
    }

    /// Commits a geometry without consulting the solver.
    pub fn resize_client(&mut self, handle: WindowHandle<H>, geometry: Xyhw) {
        let Some(client) = self.clients.get_mut(&handle) else {
            return;
        };
        client.old_geometry = client.geometry;
        client.geometry = geometry;
        self.actions.push_back(DisplayAction::MoveResizeWindow {
            window: handle,
            geometry,
            border: client.border,
        });
    }

    pub fn draw_bars(&mut self) {
        for mon in 0..self.monitors.len() {
            self.draw_bar(mon);
        }
    }

    pub fn draw_bar(&mut self, mon: MonitorId) {
        if let Some(bar) = self.bar_state(mon) {
            self.actions.push_back(DisplayAction::DrawBar(bar));
        }
    }

    /// What the bar of a monitor shows, `None` while the bar is hidden.
    #[must_use]
    pub fn bar_state(&self, mon: MonitorId) -> Option<BarState> {
        let monitor = self.monitors.get(mon)?;
        if !monitor.show_bar {
            return None;
        }
        let is_selected = mon == self.selected_monitor;
        let (occupied, urgent) = monitor
            .clients
            .iter()
            .filter_map(|h| self.clients.get(h))
            .fold((0, 0), |(occ, urg), c| {
                let bits = c.tags.bits();
                (occ | bits, if c.is_urgent { urg | bits } else { urg })
            });
        let selected = monitor.selected.and_then(|h| self.clients.get(&h));
        let focused = selected
            .filter(|_| is_selected)
            .map_or(0, |c| c.tags.bits());
        let active = monitor.active_tags().bits();
        let tags = self
            .tags
            .labels()
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let bit = 1 << i;
                TagState {
                    label: label.clone(),
                    selected: active & bit != 0,
                    occupied: occupied & bit != 0,
                    urgent: urgent & bit != 0,
                    focused: focused & bit != 0,
                }
            })
            .collect();
        Some(BarState {
            monitor: mon,
            geometry: monitor.bar_geometry(self.bar_height),
            tags,
            layout_symbol: monitor.layout_symbol.clone(),
            title: selected.map(|c| TitleState {
                text: c.name.clone(),
                floating: c.is_floating,
                fixed: c.is_fixed,
            }),
            status: is_selected.then(|| self.status_line()),
            selected_monitor: is_selected,
        })
    }

    /// The status text, or the current time when no status is set.
    #[must_use]
    pub fn status_line(&self) -> String {
        if let Some(status) = self.status_text.as_ref().filter(|s| !s.is_empty()) {
            return status.clone();
        }
        let mut line = String::new();
        let now = chrono::Local::now();
        if write!(line, "{}", now.format(&self.clock_format)).is_err() {
            tracing::warn!("invalid clock format: {}", self.clock_format);
            line.clear();
        }
        line
    }
}
