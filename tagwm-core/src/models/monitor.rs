use crate::layouts::Layout;
use crate::models::{Handle, TagSet, WindowHandle, Xyhw};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a monitor in the monitor list.
pub type MonitorId = usize;

/// One physical output and the clients assigned to it.
///
/// A monitor keeps two tag sets and two layouts so the previous choice can
/// be restored by toggling `selected_tags` or `selected_layout`. Its clients
/// are held twice: `clients` in tiling order, `stack` in focus order with
/// the most recently focused first.
#[derive(Serialize, Deserialize, Clone)]
pub struct Monitor<H: Handle> {
    pub num: MonitorId,
    /// Full area of the output.
    pub screen: Xyhw,
    /// Area left for clients once the bar is placed.
    pub usable: Xyhw,
    pub bar_y: i32,
    pub show_bar: bool,
    pub top_bar: bool,
    pub tagset: [TagSet; 2],
    pub selected_tags: usize,
    pub layouts: [Layout; 2],
    pub selected_layout: usize,
    pub layout_symbol: String,
    pub mfact: f32,
    pub nmaster: usize,
    #[serde(bound = "")]
    pub clients: Vec<WindowHandle<H>>,
    #[serde(bound = "")]
    pub stack: Vec<WindowHandle<H>>,
    #[serde(bound = "")]
    pub selected: Option<WindowHandle<H>>,
}

impl<H: Handle> fmt::Debug for Monitor<H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Monitor {{ num: {}, tags: {:#x}, layout: {}, x: {}, y: {} }}",
            self.num,
            self.active_tags().bits(),
            self.layout_symbol,
            self.screen.x,
            self.screen.y
        )
    }
}

/// Settings a new monitor starts with.
#[derive(Debug, Clone, Copy)]
pub struct MonitorDefaults<'a> {
    pub layouts: &'a [Layout],
    pub mfact: f32,
    pub nmaster: usize,
    pub show_bar: bool,
    pub top_bar: bool,
}

impl<H: Handle> Monitor<H> {
    #[must_use]
    pub fn new(num: MonitorId, defaults: &MonitorDefaults) -> Self {
        let first = defaults.layouts.first().copied().unwrap_or_default();
        let second = defaults
            .layouts
            .get(1 % defaults.layouts.len().max(1))
            .copied()
            .unwrap_or(first);
        Self {
            num,
            screen: Xyhw::default(),
            usable: Xyhw::default(),
            bar_y: 0,
            show_bar: defaults.show_bar,
            top_bar: defaults.top_bar,
            tagset: [TagSet::single(1); 2],
            selected_tags: 0,
            layouts: [first, second],
            selected_layout: 0,
            layout_symbol: first.symbol().to_owned(),
            mfact: defaults.mfact,
            nmaster: defaults.nmaster,
            clients: vec![],
            stack: vec![],
            selected: None,
        }
    }

    #[must_use]
    pub const fn active_tags(&self) -> TagSet {
        self.tagset[self.selected_tags]
    }

    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layouts[self.selected_layout]
    }

    /// Whether the active layout positions clients at all.
    #[must_use]
    pub const fn arranges(&self) -> bool {
        self.layout().arranges()
    }

    /// Places the bar and shrinks the usable area around it.
    pub fn update_bar_position(&mut self, bar_height: i32) {
        self.usable.y = self.screen.y;
        self.usable.h = self.screen.h;
        if self.show_bar {
            self.usable.h -= bar_height;
            if self.top_bar {
                self.bar_y = self.usable.y;
                self.usable.y += bar_height;
            } else {
                self.bar_y = self.usable.y + self.usable.h;
            }
        } else {
            self.bar_y = -bar_height;
        }
    }

    #[must_use]
    pub const fn bar_geometry(&self, bar_height: i32) -> Xyhw {
        Xyhw::new(self.usable.x, self.bar_y, self.usable.w, bar_height)
    }

    /// Moves the monitor onto a new output area.
    pub fn set_screen(&mut self, screen: Xyhw, bar_height: i32) {
        self.screen = screen;
        self.usable = screen;
        self.update_bar_position(bar_height);
    }
}
