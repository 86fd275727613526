use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Counters for a single route.
///
/// Both fields are independent atomics. Writers bump the count before
/// publishing the duration (`Release`); readers load the total first
/// (`Acquire`), so every duration a reader sees is covered by the count it
/// loads next. The average can read low while writers are active, never high.
#[derive(Debug, Default)]
pub struct RouteStatistics {
    request_count: AtomicU64,
    total_micros: AtomicU64,
}

impl RouteStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed request.
    pub fn record_request(&self, duration: Duration) {
        let micros = u64::try_from(duration.as_micros()).unwrap_or(u64::MAX);

        self.request_count.fetch_add(1, Ordering::Relaxed);
        self.total_micros.fetch_add(micros, Ordering::Release);
    }

    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Sum of all recorded durations.
    pub fn total_response_time(&self) -> Duration {
        Duration::from_micros(self.total_micros.load(Ordering::Acquire))
    }

    /// Running mean over every recorded duration; zero when nothing was recorded.
    pub fn average_response_time(&self) -> Duration {
        // Total before count: the count then includes every summed duration.
        let total = self.total_micros.load(Ordering::Acquire);
        let count = self.request_count();
        if count == 0 {
            return Duration::ZERO;
        }
        Duration::from_micros(total / count)
    }
}
