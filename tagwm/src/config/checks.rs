use super::{Config, Modifier};
use anyhow::{ensure, Context, Result};
use std::collections::HashMap;
use tagwm_core::models::MAX_TAGS;
use tagwm_core::utils::modmask_lookup::{into_mod, into_modmask, ModMask};
use tracing_subscriber::EnvFilter;

impl Config {
    /// # Errors
    ///
    /// Fails when there are no tags or more than fit in a tag mask.
    pub fn check_tags(&self) -> Result<()> {
        ensure!(
            (1..=MAX_TAGS).contains(&self.tags.len()),
            "{} tags configured, between 1 and {MAX_TAGS} are supported",
            self.tags.len()
        );
        Ok(())
    }

    /// # Errors
    ///
    /// Fails when the master fraction is outside `[0.05, 0.95]`.
    pub fn check_mfact(&self) -> Result<()> {
        ensure!(
            (0.05..=0.95).contains(&self.mfact),
            "mfact {} is outside of [0.05, 0.95]",
            self.mfact
        );
        Ok(())
    }

    /// # Errors
    ///
    /// Fails when `log_level` is not a valid filter directive.
    pub fn check_log_level(&self) -> Result<()> {
        EnvFilter::builder()
            .parse(&self.log_level)
            .map(|_| ())
            .context("Log level is invalid")
    }

    /// Every problem found in the key bindings: values that do not convert,
    /// unknown modifiers and chords bound more than once.
    pub fn check_keybinds(&self) -> Vec<String> {
        let mut returns = Vec::new();
        let mut bindings: HashMap<(ModMask, &str), &super::Keybind> = HashMap::new();
        for keybind in &self.keybind {
            if let Err(err) = keybind.try_convert_to_core_keybind(self) {
                returns.push(format!("{err} for keybind {keybind:?}"));
            }
            returns.extend(self.check_modifier(keybind.modifier.as_ref()));

            let modmask = into_modmask(&self.expand_modifier(keybind.modifier.as_ref()));
            if let Some(conflict) = bindings.insert((modmask, keybind.key.as_str()), keybind) {
                let modifier = keybind
                    .modifier
                    .as_ref()
                    .map_or_else(String::new, ToString::to_string);
                returns.push(format!(
                    "Multiple commands bound to key combination {modifier} + {}:\
                    \n    -> {:?}\
                    \n    -> {:?}",
                    keybind.key, conflict.command, keybind.command,
                ));
            }
        }
        returns
    }

    /// Every problem found in the mouse bindings.
    pub fn check_mousebinds(&self) -> Vec<String> {
        let mut returns = Vec::new();
        for bind in &self.mousebind {
            if let Err(err) = bind.try_convert_to_core_binding(self) {
                returns.push(format!("{err} for mousebind {bind:?}"));
            }
            returns.extend(self.check_modifier(bind.modifier.as_ref()));
        }
        returns
    }

    fn check_modifier(&self, modifier: Option<&Modifier>) -> Vec<String> {
        self.expand_modifier(modifier)
            .into_iter()
            .filter(|m| into_mod(m) == ModMask::Zero)
            .map(|m| format!("Modifier `{m}` is not valid"))
            .collect()
    }
}
