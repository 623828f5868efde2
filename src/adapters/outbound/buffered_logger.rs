use crate::domains::logger::DomainLogger;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy)]
enum Level {
    Info,
    Warn,
    Error,
}

/// Hands messages to a background task so slow sinks (files) never stall planning.
/// Messages are dropped, and counted, once the channel is full.
pub struct BufferedLogger {
    sender: mpsc::Sender<(Level, String)>,
    dropped: AtomicUsize,
}

impl BufferedLogger {
    /// Must be called from within a tokio runtime. The returned task finishes
    /// once every clone of the logger is dropped and the queue is drained.
    pub fn spawn(sink: Arc<dyn DomainLogger>, capacity: usize) -> (Arc<Self>, JoinHandle<()>) {
        let (sender, mut receiver) = mpsc::channel::<(Level, String)>(capacity.max(1));

        let drain = tokio::spawn(async move {
            while let Some((level, msg)) = receiver.recv().await {
                match level {
                    Level::Info => sink.info(&msg),
                    Level::Warn => sink.warn(&msg),
                    Level::Error => sink.error(&msg),
                }
            }
        });

        (Arc::new(Self { sender, dropped: AtomicUsize::new(0) }), drain)
    }

    pub fn dropped(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }

    fn enqueue(&self, level: Level, msg: &str) {
        if self.sender.try_send((level, msg.to_string())).is_err() {
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
    }
}

impl DomainLogger for BufferedLogger {
    fn info(&self, msg: &str) { self.enqueue(Level::Info, msg); }
    fn warn(&self, msg: &str) { self.enqueue(Level::Warn, msg); }
    fn error(&self, msg: &str) { self.enqueue(Level::Error, msg); }
}

pub fn init_buffered_logger(
    sink: Arc<dyn DomainLogger>,
    capacity: usize,
) -> (Arc<dyn DomainLogger>, JoinHandle<()>) {
    let (logger, drain) = BufferedLogger::spawn(sink, capacity);
    (logger, drain)
}
