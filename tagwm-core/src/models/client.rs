//! Managed client windows.
#![allow(clippy::module_name_repetitions)]

use std::fmt::Debug;
use std::hash::Hash;

use super::{MonitorId, NormalHints, SizeHints, TagSet, WindowInfo, Xyhw};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A trait which backend specific window handles need to implement
pub trait Handle:
    Serialize
    + DeserializeOwned
    + Debug
    + Clone
    + Copy
    + PartialEq
    + Eq
    + Hash
    + Default
    + Send
    + 'static
{
}

/// A Backend-agnostic handle to a window used to identify it
///
/// # Serde
///
/// Using generics here with serde derive macros causes some wierd behaviour with the compiler, so
/// as suggested by [this `serde` issue][serde-issue], just adding `#[serde(bound = "")]`
/// everywhere the generic is declared fixes the bug.
///
/// [serde-issue]: https://github.com/serde-rs/serde/issues/1296
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowHandle<H>(#[serde(bound = "")] pub H)
where
    H: Handle;

/// Handle for testing purposes
pub type MockHandle = i32;
impl Handle for MockHandle {}

/// Title given to clients that do not report one.
pub const BROKEN: &str = "broken";

/// A managed top-level window.
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Client<H: Handle> {
    #[serde(bound = "")]
    pub handle: WindowHandle<H>,
    pub name: String,
    pub class: Option<String>,
    pub instance: Option<String>,
    #[serde(bound = "")]
    pub transient: Option<WindowHandle<H>>,
    pub monitor: MonitorId,
    pub tags: TagSet,
    /// Committed geometry, excluding the border.
    pub geometry: Xyhw,
    /// Geometry before the last commit, restored when leaving fullscreen.
    pub old_geometry: Xyhw,
    pub border: i32,
    /// Border the window had before it was managed.
    pub old_border: i32,
    /// Border to restore when leaving fullscreen.
    pub saved_border: i32,
    pub normal_hints: NormalHints,
    size_hints: SizeHints,
    hints_valid: bool,
    pub is_fixed: bool,
    pub is_floating: bool,
    pub is_urgent: bool,
    pub never_focus: bool,
    pub is_fullscreen: bool,
    pub is_minimized: bool,
    /// Floating state to restore when leaving fullscreen.
    pub old_floating: bool,
    /// Geometry to restore when leaving the minimized state.
    pub restore_geometry: Option<Xyhw>,
}

impl<H: Handle> Client<H> {
    #[must_use]
    pub fn new(info: &WindowInfo<H>, monitor: MonitorId) -> Self {
        let mut client = Self {
            handle: info.handle,
            name: String::new(),
            class: info.class.clone(),
            instance: info.instance.clone(),
            transient: info.transient_for,
            monitor,
            tags: TagSet::EMPTY,
            geometry: info.geometry,
            old_geometry: info.geometry,
            border: info.border,
            old_border: info.border,
            saved_border: info.border,
            normal_hints: info.normal_hints,
            size_hints: SizeHints::default(),
            hints_valid: false,
            is_fixed: false,
            is_floating: false,
            is_urgent: false,
            never_focus: false,
            is_fullscreen: false,
            is_minimized: false,
            old_floating: false,
            restore_geometry: None,
        };
        client.set_title(info.title.as_deref());
        client
    }

    #[must_use]
    pub const fn outer_width(&self) -> i32 {
        self.geometry.w + 2 * self.border
    }

    #[must_use]
    pub const fn outer_height(&self) -> i32 {
        self.geometry.h + 2 * self.border
    }

    /// Stores new hints; the normalized form is rebuilt on next use.
    pub fn set_normal_hints(&mut self, hints: NormalHints) {
        self.normal_hints = hints;
        self.hints_valid = false;
    }

    #[must_use]
    pub const fn hints_valid(&self) -> bool {
        self.hints_valid
    }

    /// Normalized hints, refreshed first if the raw hints changed.
    pub fn size_hints(&mut self) -> SizeHints {
        if !self.hints_valid {
            self.refresh_size_hints();
        }
        self.size_hints
    }

    pub fn refresh_size_hints(&mut self) {
        self.size_hints = SizeHints::from(&self.normal_hints);
        self.is_fixed = self.size_hints.is_fixed() || self.is_minimized;
        self.hints_valid = true;
    }

    pub fn set_title(&mut self, title: Option<&str>) {
        self.name = match title {
            Some(title) if !title.is_empty() => title.to_owned(),
            _ => BROKEN.to_owned(),
        };
    }

    #[must_use]
    pub fn is_visible_on(&self, active: TagSet) -> bool {
        self.tags.intersects(active)
    }
}
