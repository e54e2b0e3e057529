use log::Log;

/// Logger printing records to stdout, used when output isn't JSON.
pub(crate) struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        println!(
            "{level}: {target}: {}",
            record.args(),
            level = record.level(),
            target = record.target(),
        );
    }

    fn flush(&self) {}
}
