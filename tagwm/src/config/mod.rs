//! `tagwm` general configuration

mod checks;
mod default;
mod keybind;

pub use self::keybind::{to_command, Keybind, Modifier, Mousebind};

use crate::utils::file_handler;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use tagwm_core::config::{Keybind as CoreKeybind, MouseBinding, Rule};
use tagwm_core::layouts::Layout;

/// Selecting by `WM_CLASS` and/or window title, allow the user to define on
/// which tags, on which monitor and whether floating a window is managed.
///
/// # Example
///
/// ```toml
/// [[window_rules]]
/// class = "Firefox"
/// tags = [9]
/// ```
///
/// windows whose class contains "Firefox" are placed on tag 9 (1-indexed).
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WindowRule {
    /// Matched against the class part of `WM_CLASS`.
    pub class: Option<String>,
    /// Matched against the instance part of `WM_CLASS`.
    pub instance: Option<String>,
    pub title: Option<String>,
    pub tags: Vec<usize>,
    pub floating: bool,
    /// Index of the monitor, starting at 0.
    pub monitor: Option<usize>,
}

impl From<&WindowRule> for Rule {
    fn from(rule: &WindowRule) -> Self {
        Self {
            class: rule.class.clone(),
            instance: rule.instance.clone(),
            title: rule.title.clone(),
            tags: rule.tags.iter().copied().collect(),
            floating: rule.floating,
            monitor: rule.monitor,
        }
    }
}

/// General configuration
#[allow(clippy::struct_excessive_bools)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Substituted for `modkey` in binding modifiers.
    pub modkey: String,
    pub tags: Vec<String>,
    /// The first two fill the layout slots of every monitor.
    pub layouts: Vec<Layout>,
    pub mfact: f32,
    pub nmaster: usize,
    pub snap: i32,
    pub show_bar: bool,
    pub top_bar: bool,
    pub bar_height: i32,
    pub border_width: i32,
    pub resize_hints: bool,
    pub lock_fullscreen: bool,
    pub default_border_color: String,
    pub focused_border_color: String,
    pub clock_format: String,
    pub log_level: String,
    pub window_rules: Vec<WindowRule>,
    pub keybind: Vec<Keybind>,
    pub mousebind: Vec<Mousebind>,

    /// File the configuration was read from.
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

/// Loads the configuration from its default location, falling back to the
/// built in defaults when it cannot be read.
#[must_use]
pub fn load() -> Config {
    file_handler::load_config_file(None)
        .map_err(|err| tracing::error!("Error loading config: {:?}", err))
        .unwrap_or_default()
}

#[must_use]
pub fn is_program_in_path(program: &str) -> bool {
    if let Ok(path) = env::var("PATH") {
        for p in path.split(':') {
            let p_str = format!("{p}/{program}");
            if fs::metadata(p_str).is_ok() {
                return true;
            }
        }
    }
    false
}

/// Returns a terminal to set for the default terminal bindings.
fn default_terminal<'s>() -> &'s str {
    // order from least common to most common.
    // the thinking is if a machine has an uncommon terminal installed, it is intentional
    let terms = &[
        "alacritty",
        "kitty",
        "urxvt",
        "st",
        "xterm",
        "gnome-terminal",
        "konsole",
    ];

    // If no terminal found in path, default to a good one
    terms
        .iter()
        .find(|terminal| is_program_in_path(terminal))
        .unwrap_or(&"st")
}

impl Config {
    /// Modifier names of a binding with `modkey` replaced by the configured key.
    pub fn expand_modifier(&self, modifier: Option<&Modifier>) -> Vec<String> {
        modifier.map_or_else(Vec::new, |modifier| {
            modifier
                .into_iter()
                .map(|m| if m == "modkey" { self.modkey.clone() } else { m })
                .collect()
        })
    }
}

impl tagwm_core::Config for Config {
    fn tag_labels(&self) -> Vec<String> {
        self.tags.clone()
    }

    fn rules(&self) -> Vec<Rule> {
        self.window_rules.iter().map(Rule::from).collect()
    }

    fn keybinds(&self) -> Vec<CoreKeybind> {
        self.keybind
            .iter()
            .filter_map(|keybind| match keybind.try_convert_to_core_keybind(self) {
                Ok(internal_keybind) => Some(internal_keybind),
                Err(err) => {
                    tracing::error!("Invalid key binding: {}\n{:?}", err, keybind);
                    None
                }
            })
            .collect()
    }

    fn mouse_bindings(&self) -> Vec<MouseBinding> {
        self.mousebind
            .iter()
            .filter_map(|bind| match bind.try_convert_to_core_binding(self) {
                Ok(binding) => Some(binding),
                Err(err) => {
                    tracing::error!("Invalid mouse binding: {}\n{:?}", err, bind);
                    None
                }
            })
            .collect()
    }

    fn layouts(&self) -> Vec<Layout> {
        self.layouts.clone()
    }

    fn mfact(&self) -> f32 {
        self.mfact
    }

    fn nmaster(&self) -> usize {
        self.nmaster
    }

    fn snap(&self) -> i32 {
        self.snap
    }

    fn show_bar(&self) -> bool {
        self.show_bar
    }

    fn top_bar(&self) -> bool {
        self.top_bar
    }

    fn bar_height(&self) -> i32 {
        self.bar_height
    }

    fn border_width(&self) -> i32 {
        self.border_width
    }

    fn resize_hints(&self) -> bool {
        self.resize_hints
    }

    fn lock_fullscreen(&self) -> bool {
        self.lock_fullscreen
    }

    fn default_border_color(&self) -> String {
        self.default_border_color.clone()
    }

    fn focused_border_color(&self) -> String {
        self.focused_border_color.clone()
    }

    fn clock_format(&self) -> String {
        self.clock_format.clone()
    }

    fn reload(&self) -> Option<Self> {
        file_handler::load_config_file(self.path.as_deref())
            .map_err(|err| tracing::warn!("Error reloading config: {:?}", err))
            .ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagwm_core::config::ClickTarget;
    use tagwm_core::models::TagSet;
    use tagwm_core::Command;
    use tagwm_core::Config as _;

    #[test]
    fn partial_config_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
modkey = "Mod1"
tags = ["web", "dev", "chat"]

[[window_rules]]
class = "Gimp"
floating = true

[[window_rules]]
class = "Firefox"
tags = [3]
monitor = 1
"#,
        )
        .expect("valid toml");
        assert_eq!(config.tag_labels(), vec!["web", "dev", "chat"]);
        assert_eq!(config.snap, Config::default().snap);
        let rules = config.rules();
        assert!(rules[0].floating);
        assert_eq!(rules[0].tags, TagSet::EMPTY);
        assert_eq!(rules[1].tags, TagSet::single(3));
        assert_eq!(rules[1].monitor, Some(1));
    }

    #[test]
    fn bindings_are_read_from_tables() {
        let config: Config = toml::from_str(
            r#"
[[keybind]]
command = "SetMFact"
value = "-0.05"
modifier = ["modkey"]
key = "h"

[[keybind]]
command = "Execute"
value = "dmenu_run"
modifier = "modkey"
key = "p"

[[mousebind]]
click = "TagBar"
command = "View"
button = "Button1"
"#,
        )
        .expect("valid toml");
        let keybinds = config.keybinds();
        assert_eq!(keybinds.len(), 2);
        assert_eq!(keybinds[0].command, Command::SetMFact(-0.05));
        assert_eq!(keybinds[0].modifier, vec!["Mod4"]);
        assert_eq!(keybinds[1].command, Command::Execute("dmenu_run".to_owned()));
        let mouse = config.mouse_bindings();
        assert_eq!(mouse[0].click, ClickTarget::TagBar);
        assert_eq!(mouse[0].command, Command::View(TagSet::EMPTY));
    }

    #[test]
    fn invalid_bindings_are_skipped() {
        let config: Config = toml::from_str(
            r#"
[[keybind]]
command = "FocusStack"
value = "next"
key = "j"

[[keybind]]
command = "Quit"
modifier = ["modkey", "Shift"]
key = "q"
"#,
        )
        .expect("valid toml");
        assert_eq!(config.keybinds().len(), 1);
        assert_eq!(config.keybinds()[0].command, Command::Quit);
    }

    #[test]
    fn mistyped_values_fail() {
        let parsed = toml::from_str::<Config>("mfact = \"wide\"");
        assert!(parsed.is_err());
    }
}
