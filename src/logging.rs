use std::env;

use log::{self, LevelFilter, Metadata, Record};

struct StderrLogger;

/// `LEVEL target: message`, with the crate prefix dropped from the target.
fn format_record(record: &Record) -> String {
    let target = record.target();
    let target = target.strip_prefix("battlesalvo::").unwrap_or(target);
    format!("{:<5} {}: {}", record.level(), target, record.args())
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            // stdout belongs to the interactive console
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger. The level comes from `SALVO_LOG` (`trace` to
/// `error`, or `off`) and falls back to `info`.
pub fn init_logging() {
    let level = env::var("SALVO_LOG")
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}

#[cfg(test)]
mod tests {
    use log::Level;

    use super::*;

    #[test]
    fn record_names_its_module() {
        let line = format_record(
            &Record::builder()
                .args(format_args!("placed {} ships", 4))
                .level(Level::Debug)
                .target("battlesalvo::player")
                .build(),
        );
        assert_eq!(line, "DEBUG player: placed 4 ships");
    }

    #[test]
    fn foreign_target_kept_whole() {
        let line = format_record(
            &Record::builder()
                .args(format_args!("listening"))
                .level(Level::Info)
                .target("tokio::net")
                .build(),
        );
        assert_eq!(line, "INFO  tokio::net: listening");
    }
}
