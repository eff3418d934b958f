use std::time::Duration;

/// Upper bound on ticks released by a single `advance` call. A long stall
/// (window dragged, machine asleep) must not flood the state machine with
/// catch-up ticks; excess accumulated time is dropped instead.
const MAX_TICKS_PER_ADVANCE: u32 = 2;

/// A recurring-tick primitive for the animation loop.
///
/// The ticker is driven by the shell's event loop rather than a thread of
/// its own: the shell reports elapsed wall time through `advance` and
/// receives the number of whole periods that passed. `stop` discards any
/// accumulated fraction of a period, so no tick can fire after a reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTicker {
    period: Duration,
    accumulated: Duration,
    running: bool,
}

impl StepTicker {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            accumulated: Duration::ZERO,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
        self.accumulated = Duration::ZERO;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.accumulated = Duration::ZERO;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Credits `elapsed` wall time and returns the number of due ticks,
    /// capped per call. Returns 0 while stopped.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.running || self.period.is_zero() {
            return 0;
        }

        self.accumulated += elapsed;

        let mut ticks = 0;
        while self.accumulated >= self.period && ticks < MAX_TICKS_PER_ADVANCE {
            self.accumulated -= self.period;
            ticks += 1;
        }

        if self.accumulated >= self.period {
            // Still behind after the cap: drop the backlog.
            self.accumulated = Duration::ZERO;
        }

        ticks
    }

    /// Time remaining until the next tick is due, for `WaitUntil`-style
    /// event-loop scheduling. `None` while stopped.
    #[must_use]
    pub fn time_until_next_tick(&self) -> Option<Duration> {
        if !self.running {
            return None;
        }

        Some(self.period.saturating_sub(self.accumulated))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticker_running(period_ms: u64) -> StepTicker {
        let mut ticker = StepTicker::new(Duration::from_millis(period_ms));
        ticker.start();
        ticker
    }

    #[test]
    fn stopped_ticker_releases_no_ticks() {
        let mut ticker = StepTicker::new(Duration::from_millis(100));

        assert_eq!(ticker.advance(Duration::from_secs(10)), 0);
        assert!(!ticker.is_running());
        assert_eq!(ticker.time_until_next_tick(), None);
    }

    #[test]
    fn exact_period_yields_one_tick() {
        let mut ticker = ticker_running(100);

        assert_eq!(ticker.advance(Duration::from_millis(100)), 1);
        assert_eq!(ticker.advance(Duration::ZERO), 0);
    }

    #[test]
    fn fractional_time_rolls_over() {
        let mut ticker = ticker_running(100);

        assert_eq!(ticker.advance(Duration::from_millis(60)), 0);
        assert_eq!(ticker.advance(Duration::from_millis(60)), 1);
        assert_eq!(ticker.time_until_next_tick(), Some(Duration::from_millis(80)));
    }

    #[test]
    fn a_long_stall_is_capped_and_the_backlog_dropped() {
        let mut ticker = ticker_running(100);

        assert_eq!(ticker.advance(Duration::from_secs(5)), MAX_TICKS_PER_ADVANCE);
        // Backlog was discarded, so the next period starts from zero.
        assert_eq!(ticker.advance(Duration::from_millis(99)), 0);
        assert_eq!(ticker.advance(Duration::from_millis(1)), 1);
    }

    #[test]
    fn stop_discards_accumulated_time() {
        let mut ticker = ticker_running(100);
        ticker.advance(Duration::from_millis(90));

        ticker.stop();
        ticker.start();

        assert_eq!(ticker.advance(Duration::from_millis(90)), 0);
    }

    #[test]
    fn restart_after_stop_begins_a_fresh_period() {
        let mut ticker = ticker_running(100);
        ticker.advance(Duration::from_millis(250));
        ticker.stop();

        assert_eq!(ticker.advance(Duration::from_secs(1)), 0);

        ticker.start();
        assert_eq!(ticker.time_until_next_tick(), Some(Duration::from_millis(100)));
    }

    #[test]
    fn zero_period_never_ticks() {
        let mut ticker = StepTicker::new(Duration::ZERO);
        ticker.start();

        assert_eq!(ticker.advance(Duration::from_secs(1)), 0);
    }
}
