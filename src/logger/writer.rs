//! Log file writer

use crate::logger::config::FileConfig;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// Shared handle to the log file, cloned into every writer guard
///
/// Writes that fail (or hit a poisoned lock) go to stderr instead so a full
/// disk never silences the warnings a failed delivery produces.
#[derive(Clone)]
pub struct LogFileWriter {
    file: Arc<Mutex<BufWriter<File>>>,
}

impl LogFileWriter {
    pub fn new(config: &FileConfig) -> io::Result<Self> {
        if let Some(parent) = config.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = open_log_file(&config.path, config.append)?;

        Ok(Self {
            file: Arc::new(Mutex::new(file)),
        })
    }
}

impl<'a> MakeWriter<'a> for LogFileWriter {
    type Writer = LogFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        LogFileGuard {
            file: self.file.clone(),
        }
    }
}

/// Writer handed to `tracing-subscriber` for a single event
pub struct LogFileGuard {
    file: Arc<Mutex<BufWriter<File>>>,
}

impl Write for LogFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.file.lock() {
            Ok(mut file) => match file.write(buf) {
                Ok(written) => Ok(written),
                Err(_) => io::stderr().write(buf),
            },
            Err(_) => io::stderr().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.lock() {
            Ok(mut file) => file.flush(),
            Err(_) => io::stderr().flush(),
        }
    }
}

impl Drop for LogFileGuard {
    fn drop(&mut self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

fn open_log_file(path: &Path, append: bool) -> io::Result<BufWriter<File>> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)?;

    Ok(BufWriter::new(file))
}
