use crate::domains::logger::{DomainLogger, DynLogger};
use std::sync::Arc;

/// Fans every message out to all attached loggers, in order.
pub struct MultiLogger {
    sinks: Vec<DynLogger>,
}

impl MultiLogger {
    pub fn new(sinks: Vec<DynLogger>) -> Self {
        Self { sinks }
    }
}

impl DomainLogger for MultiLogger {
    fn info(&self, msg: &str) {
        self.sinks.iter().for_each(|s| s.info(msg));
    }

    fn warn(&self, msg: &str) {
        self.sinks.iter().for_each(|s| s.warn(msg));
    }

    fn error(&self, msg: &str) {
        self.sinks.iter().for_each(|s| s.error(msg));
    }
}

/// Console logging plus, when `file_path` is set and the file backend comes up, a log file.
pub fn init_combined_logger(file_path: Option<&str>) -> DynLogger {
    let console = super::init_console_logger();
    let Some(path) = file_path else {
        return console;
    };

    match super::file_logger::init_file_logger(path) {
        Ok(file) => Arc::new(MultiLogger::new(vec![file, console.clone()])),
        Err(e) => {
            console.warn(&format!("{}; falling back to console logging", e));
            console
        }
    }
}
