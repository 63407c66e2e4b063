use std::sync::{Arc, Mutex, MutexGuard};

pub const MAX_LOG_LINES: usize = 300;

/// On-screen keyboard layout, top row first.
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKLÑ", "ZXCVBNM"];

/// Thread-safe circular log buffer with a maximum capacity.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn push(&self, msg: String) {
        let mut buf = self.lock();
        buf.push(msg);
        if buf.len() > MAX_LOG_LINES {
            let excess = buf.len() - MAX_LOG_LINES;
            buf.drain(..excess);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.lock().clone()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}
