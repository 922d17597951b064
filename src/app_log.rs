// This file is part of the `rusty-logger` project.
use env_logger::fmt::Formatter;
use log::Record;
use std::io::Write;

/// Initialize the logger, `RUST_LOG` overrides the default `info` level
pub fn log_env_init() {
    env_logger::builder()
        .format(log_formatter)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .init();
}

/// Bare messages, only errors and warnings get a marker
pub fn log_formatter(
    buf: &mut Formatter,
    record: &Record,
) -> std::result::Result<(), std::io::Error> {
    writeln!(buf, "{}{}", level_prefix(record.level()), record.args())
}

fn level_prefix(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "⛔ ",
        log::Level::Warn => "⚠️ ",
        _ => "",
    }
}
