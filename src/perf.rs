//! Performance instrumentation for the drag hot path.
//!
//! Frame application runs once per display refresh while dragging, so it
//! is the one place worth timing. Enable the `profiling` feature to turn
//! the `profile_scope!` markers into real timers:
//! ```toml
//! [dependencies]
//! areaviz = { features = ["profiling"] }
//! ```
//!
//! `std::time::Instant` is unavailable on `wasm32-unknown-unknown`, so only
//! enable `profiling` for native builds.

use std::time::Instant;
use tracing::{trace, warn};

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
///
/// # Example
/// ```ignore
/// fn apply_frame() {
///     profile_scope!("apply_frame");
///     // ... style writes ...
/// }
/// ```
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use profile_scope;

/// RAII timer: logs how long the scope took when dropped.
///
/// Scopes slower than the threshold are reported at `warn`, everything
/// else at `trace`.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer for profiling builds (1ms threshold)
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            warn!(name = self.name, elapsed_ms, threshold_ms = self.threshold_ms, "slow scope");
        } else {
            trace!(name = self.name, elapsed_ms, "scope timing");
        }
    }
}
