use super::{default_terminal, Config, Keybind, Modifier, Mousebind};
use crate::BaseCommand;
use tagwm_core::config::ClickTarget;
use tagwm_core::layouts::LAYOUTS;

const TAGS_NUM: usize = 9;

fn bind(command: BaseCommand, value: &str, modifier: &[&str], key: &str) -> Keybind {
    Keybind {
        command,
        value: value.to_owned(),
        modifier: Some(modifier_list(modifier)),
        key: key.to_owned(),
    }
}

fn mouse(
    click: ClickTarget,
    command: BaseCommand,
    value: &str,
    modifier: &[&str],
    button: &str,
) -> Mousebind {
    Mousebind {
        click,
        command,
        value: value.to_owned(),
        modifier: (!modifier.is_empty()).then(|| modifier_list(modifier)),
        button: button.to_owned(),
    }
}

fn modifier_list(modifier: &[&str]) -> Modifier {
    modifier
        .iter()
        .map(|m| (*m).to_owned())
        .collect::<Vec<_>>()
        .into()
}

impl Default for Config {
    // The binding tables are long but flat, splitting them up would not make
    // them any easier to read.
    #[allow(clippy::too_many_lines)]
    fn default() -> Self {
        let terminal = default_terminal();
        let mut keybind = vec![
            bind(BaseCommand::Execute, "dmenu_run", &["modkey"], "p"),
            bind(BaseCommand::Execute, terminal, &["modkey", "Shift"], "Return"),
            bind(BaseCommand::ToggleBar, "", &["modkey"], "b"),
            bind(BaseCommand::FocusStack, "1", &["modkey"], "j"),
            bind(BaseCommand::FocusStack, "-1", &["modkey"], "k"),
            bind(BaseCommand::IncNMaster, "1", &["modkey"], "i"),
            bind(BaseCommand::IncNMaster, "-1", &["modkey"], "d"),
            bind(BaseCommand::SetMFact, "-0.05", &["modkey"], "h"),
            bind(BaseCommand::SetMFact, "0.05", &["modkey"], "l"),
            bind(BaseCommand::Zoom, "", &["modkey"], "Return"),
            bind(BaseCommand::View, "", &["modkey"], "Tab"),
            bind(BaseCommand::KillClient, "", &["modkey", "Shift"], "c"),
            bind(BaseCommand::SetLayout, "Tile", &["modkey"], "t"),
            bind(BaseCommand::SetLayout, "Floating", &["modkey"], "f"),
            bind(BaseCommand::SetLayout, "Monocle", &["modkey"], "m"),
            bind(BaseCommand::SetLayout, "", &["modkey"], "space"),
            bind(BaseCommand::ToggleFloating, "", &["modkey", "Shift"], "space"),
            bind(BaseCommand::ToggleMinimize, "", &["modkey"], "n"),
            bind(BaseCommand::View, "all", &["modkey"], "0"),
            bind(BaseCommand::Tag, "all", &["modkey", "Shift"], "0"),
            bind(BaseCommand::FocusMonitor, "-1", &["modkey"], "comma"),
            bind(BaseCommand::FocusMonitor, "1", &["modkey"], "period"),
            bind(BaseCommand::TagMonitor, "-1", &["modkey", "Shift"], "comma"),
            bind(BaseCommand::TagMonitor, "1", &["modkey", "Shift"], "period"),
            bind(BaseCommand::Reload, "", &["modkey", "Shift"], "r"),
            bind(BaseCommand::Quit, "", &["modkey", "Shift"], "q"),
        ];

        for i in 1..=TAGS_NUM {
            let (tag, key) = (i.to_string(), i.to_string());
            keybind.extend([
                bind(BaseCommand::View, &tag, &["modkey"], &key),
                bind(BaseCommand::ToggleView, &tag, &["modkey", "Control"], &key),
                bind(BaseCommand::Tag, &tag, &["modkey", "Shift"], &key),
                bind(
                    BaseCommand::ToggleTag,
                    &tag,
                    &["modkey", "Control", "Shift"],
                    &key,
                ),
            ]);
        }

        let mousebind = vec![
            mouse(ClickTarget::LtSymbol, BaseCommand::SetLayout, "", &[], "Button1"),
            mouse(ClickTarget::LtSymbol, BaseCommand::SetLayout, "Monocle", &[], "Button3"),
            mouse(ClickTarget::WinTitle, BaseCommand::Zoom, "", &[], "Button2"),
            mouse(ClickTarget::StatusText, BaseCommand::Execute, terminal, &[], "Button2"),
            mouse(ClickTarget::ClientWin, BaseCommand::MoveMouse, "", &["modkey"], "Button1"),
            mouse(ClickTarget::ClientWin, BaseCommand::ToggleFloating, "", &["modkey"], "Button2"),
            mouse(ClickTarget::ClientWin, BaseCommand::ResizeMouse, "", &["modkey"], "Button3"),
            mouse(ClickTarget::TagBar, BaseCommand::View, "", &[], "Button1"),
            mouse(ClickTarget::TagBar, BaseCommand::ToggleView, "", &[], "Button3"),
            mouse(ClickTarget::TagBar, BaseCommand::Tag, "", &["modkey"], "Button1"),
            mouse(ClickTarget::TagBar, BaseCommand::ToggleTag, "", &["modkey"], "Button3"),
        ];

        Self {
            modkey: "Mod4".to_owned(), // win key
            tags: (1..=TAGS_NUM).map(|i| i.to_string()).collect(),
            layouts: LAYOUTS.to_vec(),
            mfact: 0.55,
            nmaster: 1,
            snap: 32,
            show_bar: true,
            top_bar: true,
            bar_height: 20,
            border_width: 1,
            resize_hints: true,
            lock_fullscreen: true,
            default_border_color: "#444444".to_owned(),
            focused_border_color: "#005577".to_owned(),
            clock_format: "%d/%m/%Y %H-%M-%S".to_owned(),
            log_level: "info".to_owned(),
            window_rules: vec![],
            keybind,
            mousebind,
            path: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Config;
    use tagwm_core::Config as _;

    #[test]
    fn serialize_default_config() {
        let config = Config::default();
        let toml = toml::to_string(&config).expect("default config serializes");
        let parsed: Config = toml::from_str(&toml).expect("serialized config parses");
        assert_eq!(parsed, config);
    }

    #[test]
    fn every_default_binding_converts() {
        let config = Config::default();
        assert_eq!(config.keybinds().len(), config.keybind.len());
        assert_eq!(config.mouse_bindings().len(), config.mousebind.len());
    }
}
