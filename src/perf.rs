//! Dispatch timing utilities.
//!
//! Pointer handlers run on every mouse move, so slow listeners show up
//! directly as input lag. This module provides:
//!
//! - **Scoped timers**: RAII timing that warns when a scope exceeds its budget
//! - **Dispatch statistics**: per-channel counts and timings
//! - **Conditional compilation**: `profile_scope!` is free without the
//!   `profiling` feature
//!
//! ```ignore
//! fn handle_mouse(&self, input: &MouseInput) {
//!     profile_scope!("handle_mouse");
//!     // ...
//! }
//! ```

use std::collections::HashMap;
use std::time::Instant;
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

pub use profile_scope;

// ============================================================================
// Scoped Timer
// ============================================================================

/// Logs a warning on drop when the scope took longer than its threshold.
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

    /// Timer with a 1ms threshold, used by `profile_scope!`.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms <= self.threshold_ms {
            return;
        }

        #[cfg(feature = "profiling")]
        trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);

        #[cfg(not(feature = "profiling"))]
        warn!(
            operation = self.name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            threshold_ms = format!("{:.2}", self.threshold_ms),
            "Slow operation"
        );
    }
}

/// Run `f` and return its result with the elapsed milliseconds.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed().as_secs_f64() * 1000.0)
}

// ============================================================================
// Dispatch Statistics
// ============================================================================

/// Timing totals for one channel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelStats {
    pub count: u64,
    pub total_ms: f64,
    pub max_ms: f64,
}

impl ChannelStats {
    pub fn average_ms(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_ms / self.count as f64
        }
    }
}

/// Per-channel dispatch counts, timings and suppressed inputs.
#[derive(Debug, Default)]
pub struct DispatchStats {
    channels: HashMap<&'static str, ChannelStats>,
    suppressed: u64,
    slow_threshold_ms: f64,
}

impl DispatchStats {
    pub fn new(slow_threshold_ms: f64) -> Self {
        Self {
            slow_threshold_ms,
            ..Default::default()
        }
    }

    /// Record one dispatch on `channel`.
    pub fn record(&mut self, channel: &'static str, elapsed_ms: f64) {
        let stats = self.channels.entry(channel).or_default();
        stats.count += 1;
        stats.total_ms += elapsed_ms;
        stats.max_ms = stats.max_ms.max(elapsed_ms);

        if elapsed_ms > self.slow_threshold_ms {
            warn!(
                channel,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                "Slow pointer listeners"
            );
        }
    }

    /// Count an input that was filtered out without dispatching.
    pub fn record_suppressed(&mut self) {
        self.suppressed += 1;
    }

    pub fn channel(&self, channel: &str) -> Option<&ChannelStats> {
        self.channels.get(channel)
    }

    pub fn dispatched(&self, channel: &str) -> u64 {
        self.channel(channel).map_or(0, |s| s.count)
    }

    pub fn suppressed(&self) -> u64 {
        self.suppressed
    }

    pub fn reset(&mut self) {
        self.channels.clear();
        self.suppressed = 0;
    }
}
