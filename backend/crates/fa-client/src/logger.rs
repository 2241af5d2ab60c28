use std::io;

use fern::Dispatch;
use log::LevelFilter;

/// Route client logs to stderr so stdout stays pure JSON
pub fn initialize(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} - {}] {}",
                humantime::format_rfc3339_seconds(std::time::SystemTime::now()),
                record.level(),
                message
            ))
        })
        .level(level)
        .chain(io::stderr())
        .apply()
}
