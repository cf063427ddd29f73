//! Log output setup
//!
//! Run logs go to stdout and to an append-mode file in the log directory,
//! so scheduled runs leave a trail even when nobody watches the terminal.

use env_logger::{Builder, Env, Target};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Log file name inside the configured log directory
pub const LOG_FILE_NAME: &str = "zoomwsc.log";

/// Duplicates every log line to stdout and the log file
struct Tee {
    file: File,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        self.file.flush()
    }
}

/// Initialize the global logger, appending to [`LOG_FILE_NAME`] in `log_dir`
pub fn init(log_dir: &Path) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(LOG_FILE_NAME))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(Tee { file })))
        .init();
    Ok(())
}
