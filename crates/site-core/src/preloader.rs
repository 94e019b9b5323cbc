//! Splash screen lifecycle: timings and the close-once guard.

use std::cell::Cell;

/// Why the preloader was dismissed; logged for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    ReducedMotion,
    FallbackTimer,
    VideoEnded,
    VideoError,
    PlayRejected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreloaderTiming {
    /// Upper bound on how long the splash stays up, exit included.
    pub max_ms: i32,
    /// Length of the exit transition.
    pub exit_ms: i32,
}

impl Default for PreloaderTiming {
    fn default() -> Self {
        Self {
            max_ms: 5000,
            exit_ms: 700,
        }
    }
}

impl PreloaderTiming {
    /// Delay before the fallback timer forces the exit to start.
    pub fn fallback_delay_ms(&self) -> i32 {
        (self.max_ms - self.exit_ms).max(0)
    }

    /// Point in the exit transition where the overlay is hidden and the page
    /// is marked loaded.
    pub fn hide_delay_ms(&self) -> i32 {
        (f64::from(self.exit_ms) * 0.55).round() as i32
    }

    /// When the preloader node is removed from the document.
    pub fn remove_delay_ms(&self) -> i32 {
        self.exit_ms + 120
    }
}

/// Lets exactly one of several racing triggers close the preloader.
#[derive(Debug, Default)]
pub struct PreloaderGate {
    closed: Cell<bool>,
}

impl PreloaderGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` only for the first caller.
    pub fn try_close(&self, reason: CloseReason) -> bool {
        if self.closed.replace(true) {
            log::debug!("[preloader] already closed; ignoring {:?}", reason);
            return false;
        }
        log::info!("[preloader] closing ({:?})", reason);
        true
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }
}
