//! Logger metrics for observability
//!
//! Logging never reports failures to its caller, so these counters are the
//! only place adapter trouble becomes visible.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// Shared by a logger and every child derived from it.
///
/// # Example
///
/// ```
/// use artissist_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_logged();
/// metrics.record_write_failure();
/// metrics.record_partial_delivery();
///
/// assert_eq!(metrics.total_logged(), 1);
/// assert_eq!(metrics.write_failures(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records delivered to every adapter
    total_logged: AtomicU64,

    /// Records at least one adapter failed to write
    partial_deliveries: AtomicU64,

    /// Individual adapter write errors
    write_failures: AtomicU64,

    /// Adapter panics caught during write or close
    adapter_panics: AtomicU64,

    /// Adapter close errors
    close_failures: AtomicU64,

    /// Detached calls that could not be scheduled
    detached_dropped: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            total_logged: AtomicU64::new(0),
            partial_deliveries: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            adapter_panics: AtomicU64::new(0),
            close_failures: AtomicU64::new(0),
            detached_dropped: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn total_logged(&self) -> u64 {
        self.total_logged.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn partial_deliveries(&self) -> u64 {
        self.partial_deliveries.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn adapter_panics(&self) -> u64 {
        self.adapter_panics.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn close_failures(&self) -> u64 {
        self.close_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn detached_dropped(&self) -> u64 {
        self.detached_dropped.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_logged(&self) -> u64 {
        self.total_logged.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_partial_delivery(&self) -> u64 {
        self.partial_deliveries.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_adapter_panic(&self) -> u64 {
        self.adapter_panics.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_close_failure(&self) -> u64 {
        self.close_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_detached_dropped(&self) -> u64 {
        self.detached_dropped.fetch_add(1, Ordering::Relaxed)
    }

    /// Share of records not fully delivered, as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if no records have been processed.
    pub fn failure_rate(&self) -> f64 {
        let failed = self.partial_deliveries() as f64;
        let total = self.total_logged() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.total_logged.store(0, Ordering::Relaxed);
        self.partial_deliveries.store(0, Ordering::Relaxed);
        self.write_failures.store(0, Ordering::Relaxed);
        self.adapter_panics.store(0, Ordering::Relaxed);
        self.close_failures.store(0, Ordering::Relaxed);
        self.detached_dropped.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            total_logged: AtomicU64::new(self.total_logged()),
            partial_deliveries: AtomicU64::new(self.partial_deliveries()),
            write_failures: AtomicU64::new(self.write_failures()),
            adapter_panics: AtomicU64::new(self.adapter_panics()),
            close_failures: AtomicU64::new(self.close_failures()),
            detached_dropped: AtomicU64::new(self.detached_dropped()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.total_logged(), 0);
        assert_eq!(metrics.partial_deliveries(), 0);
        assert_eq!(metrics.write_failures(), 0);
        assert_eq!(metrics.adapter_panics(), 0);
        assert_eq!(metrics.close_failures(), 0);
    }

    #[test]
    fn test_record_returns_previous_value() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_write_failure(), 0);
        assert_eq!(metrics.write_failures(), 1);
    }

    #[test]
    fn test_failure_rate() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.failure_rate(), 0.0);

        for _ in 0..90 {
            metrics.record_logged();
        }
        for _ in 0..10 {
            metrics.record_partial_delivery();
        }

        let rate = metrics.failure_rate();
        assert!((9.9..=10.1).contains(&rate), "Failure rate was {}", rate);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let metrics = LoggerMetrics::new();
        metrics.record_logged();

        let snapshot = metrics.clone();
        metrics.record_logged();

        assert_eq!(snapshot.total_logged(), 1);
        assert_eq!(metrics.total_logged(), 2);

        metrics.reset();
        assert_eq!(metrics.total_logged(), 0);
    }
}
