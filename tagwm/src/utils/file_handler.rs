use crate::Config;
use anyhow::Result;
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use xdg::BaseDirectories;

const COMMENT_HEADER: &str = r"# tagwm configuration
#
# Modifiers named `modkey` are replaced by the `modkey` setting.
# Tag values are comma separated tag numbers, `all`, or empty.

";

/// Where `config.toml` lives, creating the directory when needed.
///
/// # Errors
///
/// Fails when the XDG base directories cannot be determined or created.
pub fn config_file_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix("tagwm")?;
    Ok(path.place_config_file("config.toml")?)
}

/// Reads the configuration from `fspath`, or from the default location.
///
/// When the default file does not exist yet it is written with the default
/// configuration.
///
/// # Errors
///
/// Errors if the file cannot be read or parsed, or if the default file
/// cannot be written.
pub fn load_config_file(fspath: Option<&Path>) -> Result<Config> {
    let config_filename = if let Some(fspath) = fspath {
        fspath.to_owned()
    } else {
        let path = config_file_path()?;
        if !path.exists() {
            tracing::debug!("Config file not found. Writing defaults to {:?}.", path);
            let config = Config::default();
            write_to_file(&path, &config)?;
            return Ok(Config {
                path: Some(path),
                ..config
            });
        }
        path
    };

    tracing::debug!("Loading config file {:?}", config_filename);
    let contents = fs::read_to_string(&config_filename)?;
    let mut config: Config = toml::from_str(&contents)?;
    config.path = Some(config_filename);
    Ok(config)
}

/// # Errors
/// This function errors when:
/// - serialization of the config fails
/// - writing to file fails
pub fn write_to_file(toml_file: &Path, config: &Config) -> Result<()> {
    let toml = toml::to_string_pretty(config)?;
    let toml_with_header = String::from(COMMENT_HEADER) + &toml;
    let mut file = File::create(toml_file)?;
    file.write_all(toml_with_header.as_bytes())?;
    Ok(())
}
