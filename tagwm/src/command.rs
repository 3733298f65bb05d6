use serde::{Deserialize, Serialize};

/// Command names as written in `config.toml`.
///
/// TOML has no good way to write `tagwm_core::Command` with its argument, so
/// bindings carry one of these plus a textual `value` that is validated when
/// the binding is converted.
#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseCommand {
    Execute,
    ToggleBar,
    FocusStack,
    IncNMaster,
    SetMFact,
    Zoom,
    View,
    ToggleView,
    Tag,
    ToggleTag,
    KillClient,
    SetLayout,
    ToggleFloating,
    FocusMonitor,
    TagMonitor,
    MoveMouse,
    ResizeMouse,
    ToggleMinimize,
    Reload,
    Quit,
}
