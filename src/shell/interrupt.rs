//! Ctrl+C observation for foreground children.
//!
//! Registering the flag replaces the default SIGINT action, so an interrupt
//! no longer kills us; it only sets the flag. The child shares our process
//! group, so it receives the signal itself and exits, and the launcher then
//! sees the flag and reports a user stop.

use anyhow::{anyhow, Context};
use signal_hook::consts::SIGINT;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::Result;

/// Registered flag. Held under the lock while registering so the handler
/// is installed at most once.
static FLAG: Mutex<Option<InterruptFlag>> = Mutex::new(None);

/// Shared flag set from the SIGINT handler.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag {
    inner: Arc<AtomicBool>,
}

impl InterruptFlag {
    /// Register the process-wide handler (once) and return its flag.
    pub fn install() -> Result<Self> {
        let mut slot = FLAG
            .lock()
            .map_err(|_| anyhow!("Ctrl+C handler state is poisoned"))?;
        if let Some(flag) = slot.as_ref() {
            return Ok(flag.clone());
        }

        let flag = Self::default();
        signal_hook::flag::register(SIGINT, Arc::clone(&flag.inner))
            .context("Failed to register Ctrl+C handler")?;
        *slot = Some(flag.clone());
        Ok(flag)
    }

    /// Whether an interrupt has been recorded since the last reset.
    pub fn is_set(&self) -> bool {
        self.inner.load(Ordering::SeqCst)
    }

    /// Clear any recorded interrupt.
    pub fn reset(&self) {
        self.inner.store(false, Ordering::SeqCst);
    }
}
