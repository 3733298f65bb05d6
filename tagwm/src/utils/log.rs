use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, fmt, layer::SubscriberExt, EnvFilter};

/// Builds the subscriber for `level_regex`, an `EnvFilter` directive string.
///
/// An invalid string falls back to `debug`; the parse error is handed back so
/// it can be reported once the subscriber is installed.
#[must_use]
pub fn parse_log_level(level_regex: &str) -> (impl Subscriber, Option<ParseError>) {
    let mut parse_err = None;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .parse(level_regex)
        .unwrap_or_else(|err| {
            parse_err = Some(err);
            EnvFilter::new("debug")
        });
    (get_subscribers(filter), parse_err)
}

pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber {
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
}
