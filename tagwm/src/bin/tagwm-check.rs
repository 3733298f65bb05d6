use anyhow::{bail, Result};
use clap::{arg, command};
use std::path::Path;
use tagwm::utils::file_handler::load_config_file;
use tagwm::utils::log::parse_log_level;
use tagwm::Config;

fn main() -> Result<()> {
    let matches = command!("tagwm-check")
        .about("Checks syntax of the configuration file")
        .help_template(tagwm::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the default location otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(Path::new);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m tagwm version: {}",
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "\x1b[0;94m::\x1b[0m tagwm git hash: {}",
        git_version::git_version!(fallback = option_env!("GIT_HASH").unwrap_or("NONE"))
    );

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    let config = match load_config_file(config_file) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            config
        }
        Err(e) => bail!("Configuration failed. Reason: {e:?}"),
    };
    if verbose {
        dbg!(&config);
    }

    let (subscriber, parse_err) = parse_log_level(&config.log_level);
    tracing::subscriber::set_global_default(subscriber)?;
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log level `{}`, using debug: {}", config.log_level, err);
    }

    let mut problems = 0;
    problems += report("settings", &check_settings(&config));
    problems += report("keybinds", &config.check_keybinds());
    problems += report("mousebinds", &config.check_mousebinds());

    if problems > 0 {
        bail!("{problems} problem(s) found in the configuration");
    }
    Ok(())
}

fn check_settings(config: &Config) -> Vec<String> {
    [
        config.check_tags(),
        config.check_mfact(),
        config.check_log_level(),
    ]
    .into_iter()
    .filter_map(|check| check.err().map(|err| format!("{err:#}")))
    .collect()
}

fn report(section: &str, errors: &[String]) -> usize {
    println!("\x1b[0;94m::\x1b[0m Checking {section} . . .");
    if errors.is_empty() {
        println!("\x1b[0;92m    -> All {section} OK\x1b[0m");
    }
    for error in errors {
        println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m {error} \x1b[0m");
    }
    errors.len()
}
