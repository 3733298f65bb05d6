//! The client registry and monitor set.

use crate::config::{Config, Keybind, MouseBinding, Rule};
use crate::display_event::Target;
use crate::layouts::{Layout, LAYOUTS};
use crate::models::{
    Client, Handle, Mode, Monitor, MonitorDefaults, MonitorId, TagSet, Tags, WindowHandle, Xyhw,
    BROKEN,
};
use crate::DisplayAction;
use std::collections::{HashMap, VecDeque};

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug)]
pub struct State<H: Handle> {
    /// Every managed client, keyed by its window.
    pub clients: HashMap<WindowHandle<H>, Client<H>>,
    /// Never empty once the first topology has been applied.
    pub monitors: Vec<Monitor<H>>,
    pub selected_monitor: MonitorId,
    /// Monitor the pointer was last seen on while moving over the root window.
    pub motion_monitor: Option<MonitorId>,
    /// Bounds of the root window.
    pub display: Xyhw,
    pub mode: Mode<H>,
    pub actions: VecDeque<DisplayAction<H>>,
    pub tags: Tags,
    pub layouts: Vec<Layout>,
    pub rules: Vec<Rule>,
    pub keybinds: Vec<Keybind>,
    pub mouse_bindings: Vec<MouseBinding>,
    /// Text of the root window title, shown in place of the clock when set.
    pub status_text: Option<String>,
    pub clock_format: String,
    pub snap: i32,
    pub bar_height: i32,
    pub border_width: i32,
    pub default_mfact: f32,
    pub default_nmaster: usize,
    pub show_bar: bool,
    pub top_bar: bool,
    pub resize_hints: bool,
    pub lock_fullscreen: bool,
    pub running: bool,
}

fn visible_in<H: Handle>(
    clients: &HashMap<WindowHandle<H>, Client<H>>,
    active: TagSet,
    handle: &WindowHandle<H>,
) -> bool {
    clients
        .get(handle)
        .map_or(false, |c| c.is_visible_on(active))
}

impl<H: Handle> State<H> {
    pub(crate) fn new(config: &impl Config) -> Self {
        let mut state = Self {
            clients: HashMap::new(),
            monitors: vec![],
            selected_monitor: 0,
            motion_monitor: None,
            display: Xyhw::default(),
            mode: Mode::default(),
            actions: VecDeque::new(),
            tags: Tags::default(),
            layouts: vec![],
            rules: vec![],
            keybinds: vec![],
            mouse_bindings: vec![],
            status_text: None,
            clock_format: String::new(),
            snap: 0,
            bar_height: 0,
            border_width: 0,
            default_mfact: 0.55,
            default_nmaster: 1,
            show_bar: true,
            top_bar: true,
            resize_hints: true,
            lock_fullscreen: true,
            running: true,
        };
        state.load_config(config);
        state
    }

    /// Takes over settings from `config`, keeping clients and monitors.
    ///
    /// Tag sets are masked to the configured tags; a monitor left without
    /// a visible tag falls back to the first one, a client to its monitor's
    /// active tags.
    pub fn load_config(&mut self, config: &impl Config) {
        self.tags = Tags::new(config.tag_labels());
        if self.tags.is_empty() {
            tracing::warn!("no tags configured, using a single tag");
            self.tags = Tags::new(vec!["1".to_owned()]);
        }
        self.rules = config.rules();
        self.keybinds = config.keybinds();
        self.mouse_bindings = config.mouse_bindings();
        self.layouts = config.layouts();
        if self.layouts.is_empty() {
            self.layouts = LAYOUTS.to_vec();
        }
        self.clock_format = config.clock_format();
        self.snap = config.snap().max(0);
        self.bar_height = config.bar_height().max(0);
        self.border_width = config.border_width().max(0);
        self.default_mfact = config.mfact().clamp(0.05, 0.95);
        self.default_nmaster = config.nmaster();
        self.show_bar = config.show_bar();
        self.top_bar = config.top_bar();
        self.resize_hints = config.resize_hints();
        self.lock_fullscreen = config.lock_fullscreen();

        let mask = self.tags.mask();
        for mon in &mut self.monitors {
            for set in &mut mon.tagset {
                *set = *set & mask;
                if set.is_empty() {
                    *set = TagSet::single(1);
                }
            }
            mon.update_bar_position(self.bar_height);
        }
        for client in self.clients.values_mut() {
            client.tags = client.tags & mask;
            if client.tags.is_empty() {
                if let Some(mon) = self.monitors.get(client.monitor) {
                    client.tags = mon.active_tags();
                }
            }
            if client.is_fullscreen {
                client.saved_border = self.border_width;
            } else {
                client.border = self.border_width;
                self.actions.push_back(DisplayAction::SetBorderWidth(
                    client.handle,
                    self.border_width,
                ));
            }
        }
    }

    #[must_use]
    pub fn monitor_defaults(&self) -> MonitorDefaults<'_> {
        MonitorDefaults {
            layouts: &self.layouts,
            mfact: self.default_mfact,
            nmaster: self.default_nmaster,
            show_bar: self.show_bar,
            top_bar: self.top_bar,
        }
    }

    #[must_use]
    pub fn selected_monitor(&self) -> Option<&Monitor<H>> {
        self.monitors.get(self.selected_monitor)
    }

    /// The selected client of the selected monitor.
    #[must_use]
    pub fn selected_client(&self) -> Option<WindowHandle<H>> {
        self.selected_monitor().and_then(|m| m.selected)
    }

    /// A client is visible when it shares a tag with its monitor's active set.
    #[must_use]
    pub fn is_visible(&self, handle: &WindowHandle<H>) -> bool {
        self.clients.get(handle).map_or(false, |c| {
            self.monitors
                .get(c.monitor)
                .map_or(false, |m| c.is_visible_on(m.active_tags()))
        })
    }

    /// Puts a client at the head of its monitor's tiling order.
    pub fn attach(&mut self, handle: WindowHandle<H>) {
        let Some(mon) = self.clients.get(&handle).map(|c| c.monitor) else {
            return;
        };
        if let Some(m) = self.monitors.get_mut(mon) {
            m.clients.insert(0, handle);
        }
    }

    pub fn detach(&mut self, handle: WindowHandle<H>) {
        let Some(mon) = self.clients.get(&handle).map(|c| c.monitor) else {
            return;
        };
        if let Some(m) = self.monitors.get_mut(mon) {
            m.clients.retain(|h| *h != handle);
        }
    }

    /// Puts a client at the head of its monitor's focus order.
    pub fn attach_stack(&mut self, handle: WindowHandle<H>) {
        let Some(mon) = self.clients.get(&handle).map(|c| c.monitor) else {
            return;
        };
        if let Some(m) = self.monitors.get_mut(mon) {
            m.stack.insert(0, handle);
        }
    }

    /// Removes a client from its monitor's focus order.
    ///
    /// When the monitor's selection was this client, or is no longer
    /// visible, the first visible client in focus order becomes selected.
    pub fn detach_stack(&mut self, handle: WindowHandle<H>) {
        let Some(mon) = self.clients.get(&handle).map(|c| c.monitor) else {
            return;
        };
        let Some(m) = self.monitors.get_mut(mon) else {
            return;
        };
        m.stack.retain(|h| *h != handle);
        let active = m.active_tags();
        let reselect = m.selected.map_or(false, |sel| {
            sel == handle || !visible_in(&self.clients, active, &sel)
        });
        if reselect {
            m.selected = m
                .stack
                .iter()
                .find(|h| visible_in(&self.clients, active, h))
                .copied();
        }
    }

    /// First visible client in the monitor's focus order.
    #[must_use]
    pub fn first_visible_in_stack(&self, mon: MonitorId) -> Option<WindowHandle<H>> {
        let m = self.monitors.get(mon)?;
        let active = m.active_tags();
        m.stack
            .iter()
            .find(|h| visible_in(&self.clients, active, h))
            .copied()
    }

    /// Visible clients of a monitor in tiling order.
    #[must_use]
    pub fn visible_clients(&self, mon: MonitorId) -> Vec<WindowHandle<H>> {
        let Some(m) = self.monitors.get(mon) else {
            return vec![];
        };
        let active = m.active_tags();
        m.clients
            .iter()
            .filter(|h| visible_in(&self.clients, active, h))
            .copied()
            .collect()
    }

    /// Visible, non-floating clients of a monitor in tiling order.
    #[must_use]
    pub fn tiled_clients(&self, mon: MonitorId) -> Vec<WindowHandle<H>> {
        self.visible_clients(mon)
            .into_iter()
            .filter(|h| self.clients.get(h).map_or(false, |c| !c.is_floating))
            .collect()
    }

    /// The monitor whose usable area overlaps `rect` the most. Ties and
    /// rectangles on no monitor resolve to the selected monitor.
    #[must_use]
    pub fn rect_to_monitor(&self, rect: &Xyhw) -> MonitorId {
        let mut best = self.selected_monitor;
        let mut best_area = self
            .monitors
            .get(best)
            .map_or(0, |mon| rect.intersection_area(&mon.usable));
        for (i, mon) in self.monitors.iter().enumerate() {
            let area = rect.intersection_area(&mon.usable);
            if area > best_area {
                best_area = area;
                best = i;
            }
        }
        best
    }

    /// The monitor an event target belongs to.
    #[must_use]
    pub fn window_to_monitor(&self, target: &Target<H>, pointer: Option<(i32, i32)>) -> MonitorId {
        match target {
            Target::Root => pointer.map_or(self.selected_monitor, |(x, y)| {
                self.rect_to_monitor(&Xyhw::new(x, y, 1, 1))
            }),
            Target::Bar(mon) if *mon < self.monitors.len() => *mon,
            Target::Window(handle) => self
                .clients
                .get(handle)
                .map_or(self.selected_monitor, |c| c.monitor),
            Target::Bar(_) => self.selected_monitor,
        }
    }

    /// Sets floating state, tags and monitor of a new client from the rules.
    pub fn apply_rules(&self, client: &mut Client<H>) {
        client.is_floating = false;
        client.tags = TagSet::EMPTY;
        let class = client.class.as_deref().unwrap_or(BROKEN);
        let instance = client.instance.as_deref().unwrap_or(BROKEN);
        for rule in &self.rules {
            if !rule.matches(class, instance, &client.name) {
                continue;
            }
            client.is_floating = rule.floating;
            client.tags |= rule.tags;
            if let Some(mon) = rule.monitor.filter(|m| *m < self.monitors.len()) {
                client.monitor = mon;
            }
        }
        let masked = client.tags & self.tags.mask();
        client.tags = if masked.is_empty() {
            self.monitors
                .get(client.monitor)
                .map_or(TagSet::single(1), Monitor::active_tags)
        } else {
            masked
        };
    }

    /// Moves a client to another monitor, giving it that monitor's active tags.
    pub fn send_monitor(&mut self, handle: WindowHandle<H>, target: MonitorId) {
        let Some(current) = self.clients.get(&handle).map(|c| c.monitor) else {
            return;
        };
        if current == target || target >= self.monitors.len() {
            return;
        }
        self.unfocus(handle, true);
        self.detach(handle);
        self.detach_stack(handle);
        let tags = self.monitors[target].active_tags();
        if let Some(client) = self.clients.get_mut(&handle) {
            client.monitor = target;
            client.tags = tags;
        }
        self.attach(handle);
        self.attach_stack(handle);
        self.focus(None);
        self.arrange(None);
    }

    /// Publishes every managed window, monitor by monitor in tiling order.
    pub fn update_client_list(&mut self) {
        let list = self
            .monitors
            .iter()
            .flat_map(|m| m.clients.iter().copied())
            .collect();
        self.actions.push_back(DisplayAction::SetClientList(list));
    }
}
