use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Lightweight handle for checking shutdown state.
///
/// Set by SIGTERM/SIGINT/SIGHUP or by [`ShutdownHandle::signal`].
#[derive(Clone, Default)]
pub struct ShutdownHandle {
    shutdown: Arc<AtomicBool>,
}

impl ShutdownHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle flipped by termination signals.
    pub fn install() -> io::Result<Self> {
        let handle = Self::new();
        for signal in [SIGTERM, SIGINT, SIGHUP] {
            signal_hook::flag::register(signal, Arc::clone(&handle.shutdown))?;
        }
        Ok(handle)
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }

    /// Request shutdown from inside the process (the user quit).
    pub fn signal(&self) {
        if !self.shutdown.swap(true, Ordering::SeqCst) {
            tracing::info!("Graceful shutdown initiated");
        }
    }
}
