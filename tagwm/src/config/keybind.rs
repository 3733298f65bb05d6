use super::Config;
use crate::BaseCommand;
use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tagwm_core::config::{ClickTarget, Keybind as CoreKeybind, MouseBinding};
use tagwm_core::layouts::Layout;
use tagwm_core::models::{TagSet, MAX_TAGS};
use tagwm_core::utils::modmask_lookup::into_button;
use tagwm_core::Command;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Keybind {
    pub command: BaseCommand,
    #[serde(default)]
    pub value: String,
    pub modifier: Option<Modifier>,
    pub key: String,
}

impl Keybind {
    /// # Errors
    ///
    /// Fails when the key is empty or the value does not fit the command.
    pub fn try_convert_to_core_keybind(&self, config: &Config) -> Result<CoreKeybind> {
        ensure!(!self.key.is_empty(), "key must not be empty");
        Ok(CoreKeybind {
            command: to_command(self.command, &self.value)?,
            modifier: config.expand_modifier(self.modifier.as_ref()),
            key: self.key.clone(),
        })
    }
}

/// A pointer button bound on one region of the screen.
///
/// ```toml
/// [[mousebind]]
/// click = "ClientWin"
/// command = "MoveMouse"
/// modifier = ["modkey"]
/// button = "Button1"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Mousebind {
    pub click: ClickTarget,
    pub command: BaseCommand,
    #[serde(default)]
    pub value: String,
    pub modifier: Option<Modifier>,
    pub button: String,
}

impl Mousebind {
    /// # Errors
    ///
    /// Fails when the button is unknown or the value does not fit the command.
    pub fn try_convert_to_core_binding(&self, config: &Config) -> Result<MouseBinding> {
        let button = into_button(&self.button)
            .with_context(|| format!("Button `{}` is not valid", self.button))?;
        Ok(MouseBinding {
            click: self.click,
            modifier: config.expand_modifier(self.modifier.as_ref()),
            button,
            command: to_command(self.command, &self.value)?,
        })
    }
}

/// Builds the core command for `command`, parsing `value` as its argument.
///
/// # Errors
///
/// Fails when a required value is missing or cannot be parsed.
pub fn to_command(command: BaseCommand, value: &str) -> Result<Command> {
    let value = value.trim();
    let command = match command {
        BaseCommand::Execute => {
            ensure!(!value.is_empty(), "value must not be empty");
            Command::Execute(value.to_owned())
        }
        BaseCommand::ToggleBar => Command::ToggleBar,
        BaseCommand::FocusStack => {
            Command::FocusStack(i32::from_str(value).context("invalid step for FocusStack")?)
        }
        BaseCommand::IncNMaster => {
            Command::IncNMaster(i32::from_str(value).context("invalid count for IncNMaster")?)
        }
        BaseCommand::SetMFact => {
            Command::SetMFact(f32::from_str(value).context("invalid factor for SetMFact")?)
        }
        BaseCommand::Zoom => Command::Zoom,
        BaseCommand::View => Command::View(parse_tags(value)?),
        BaseCommand::ToggleView => Command::ToggleView(parse_tags(value)?),
        BaseCommand::Tag => Command::Tag(parse_tags(value)?),
        BaseCommand::ToggleTag => Command::ToggleTag(parse_tags(value)?),
        BaseCommand::KillClient => Command::KillClient,
        BaseCommand::SetLayout if value.is_empty() => Command::SetLayout(None),
        BaseCommand::SetLayout => Command::SetLayout(Some(
            Layout::from_str(value).context("could not parse layout for command SetLayout")?,
        )),
        BaseCommand::ToggleFloating => Command::ToggleFloating,
        BaseCommand::FocusMonitor => {
            Command::FocusMonitor(i32::from_str(value).context("invalid step for FocusMonitor")?)
        }
        BaseCommand::TagMonitor => {
            Command::TagMonitor(i32::from_str(value).context("invalid step for TagMonitor")?)
        }
        BaseCommand::MoveMouse => Command::MoveMouse,
        BaseCommand::ResizeMouse => Command::ResizeMouse,
        BaseCommand::ToggleMinimize => Command::ToggleMinimize,
        BaseCommand::Reload => Command::ReloadConfig,
        BaseCommand::Quit => Command::Quit,
    };
    Ok(command)
}

/// Tag arguments are comma separated ids, `all`, or empty for "the previous
/// tags" (or "the clicked tag" on the tag bar).
fn parse_tags(value: &str) -> Result<TagSet> {
    match value {
        "" => Ok(TagSet::EMPTY),
        "all" => Ok(TagSet::ALL),
        _ => value
            .split(',')
            .map(|id| -> Result<usize> {
                let id = usize::from_str(id.trim()).with_context(|| format!("invalid tag `{id}`"))?;
                ensure!((1..=MAX_TAGS).contains(&id), "tag {id} is out of range");
                Ok(id)
            })
            .collect(),
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
#[serde(untagged)]
pub enum Modifier {
    Single(String),
    List(Vec<String>),
}

impl Modifier {
    pub fn is_empty(&self) -> bool {
        match self {
            Modifier::Single(single) => single.is_empty(),
            Modifier::List(list) => list.is_empty(),
        }
    }
}

impl std::convert::From<Modifier> for Vec<String> {
    fn from(m: Modifier) -> Self {
        match m {
            Modifier::Single(modifier) => vec![modifier],
            Modifier::List(modifiers) => modifiers,
        }
    }
}

impl IntoIterator for &Modifier {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        let ms = match self {
            Modifier::Single(m) => vec![m.clone()],
            Modifier::List(ms) => ms.clone(),
        };
        ms.into_iter()
    }
}

impl std::convert::From<Vec<String>> for Modifier {
    fn from(l: Vec<String>) -> Self {
        Self::List(l)
    }
}

impl std::convert::From<&str> for Modifier {
    fn from(m: &str) -> Self {
        Self::Single(m.to_owned())
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(modifier) => write!(f, "{modifier}"),
            Self::List(modifiers) => write!(f, "{}", modifiers.join("+")),
        }
    }
}
