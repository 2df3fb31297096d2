use std::time::Duration;

use super::{Clock, MonotonicClock};

/// Fixed-period frame pacer.
///
/// `wait()` blocks until one period has passed since the previous release.
/// After a blocking wait the next release is scheduled one period after the
/// moment `wait()` was entered rather than after the sleep returned, so sleep
/// overshoot does not accumulate across frames. A frame that already took
/// longer than the period is released immediately.
#[derive(Debug, Clone)]
pub struct FrameTimer<C = MonotonicClock> {
    period: Duration,
    /// Clock reading of the last release; starts at the clock origin.
    time_last: Duration,
    clock: C,
}

impl FrameTimer<MonotonicClock> {
    pub fn new(period: Duration) -> Self {
        Self::with_clock(period, MonotonicClock::new())
    }

    /// Period in seconds. Negative or non-finite periods never block.
    pub fn from_secs_f64(secs: f64) -> Self {
        let period = Duration::try_from_secs_f64(secs).unwrap_or_else(|_| {
            log::warn!("invalid frame period {secs}s; pacing disabled");
            Duration::ZERO
        });
        Self::new(period)
    }

    /// Period of one frame at `fps` frames per second. Zero disables pacing.
    pub fn from_fps(fps: u32) -> Self {
        Self::new(Duration::from_secs(1).checked_div(fps).unwrap_or(Duration::ZERO))
    }
}

impl<C: Clock> FrameTimer<C> {
    pub fn with_clock(period: Duration, clock: C) -> Self {
        Self {
            period,
            time_last: Duration::ZERO,
            clock,
        }
    }

    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn set_period(&mut self, period: Duration) {
        self.period = period;
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Treats the current instant as the last release.
    ///
    /// Useful after a deliberate pause so the next frame does not wait a full
    /// period.
    pub fn reset(&mut self) {
        self.time_last = self.clock.now();
    }

    /// Blocks until the current period has elapsed and returns how long it slept.
    pub fn wait(&mut self) -> Duration {
        let now = self.clock.now();
        // A deadline past the end of `Duration` can never be reached.
        let Some(deadline) = self.time_last.checked_add(self.period) else {
            self.time_last = now;
            return Duration::ZERO;
        };

        if now < deadline {
            let remaining = deadline - now;
            log::trace!("frame timer sleeping {remaining:?}");
            self.clock.sleep(remaining);
            self.time_last = now.saturating_add(self.period);
            remaining
        } else {
            if !self.period.is_zero() && now - deadline > self.period {
                log::trace!("frame timer overran by {:?}", now - deadline);
            }
            self.time_last = now;
            Duration::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    /// Clock that only moves when told to, or when slept on.
    #[derive(Default)]
    struct ManualClock {
        now: Cell<Duration>,
        sleeps: RefCell<Vec<Duration>>,
    }

    impl ManualClock {
        fn at_ms(ms: u64) -> Self {
            let clock = Self::default();
            clock.now.set(Duration::from_millis(ms));
            clock
        }

        fn advance_ms(&self, ms: u64) {
            self.now.set(self.now.get() + Duration::from_millis(ms));
        }

        fn total_slept(&self) -> Duration {
            self.sleeps.borrow().iter().sum()
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Duration {
            self.now.get()
        }

        fn sleep(&self, duration: Duration) {
            self.sleeps.borrow_mut().push(duration);
            self.now.set(self.now.get() + duration);
        }
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn waits_out_the_rest_of_the_period() {
        let clock = ManualClock::at_ms(1000);
        let mut timer = FrameTimer::with_clock(ms(50), &clock);

        timer.wait();
        clock.advance_ms(20);
        assert_eq!(timer.wait(), ms(30));
        assert_eq!(clock.now(), ms(1050));
    }

    #[test]
    fn late_frame_is_released_immediately() {
        let clock = ManualClock::at_ms(1000);
        let mut timer = FrameTimer::with_clock(ms(50), &clock);

        timer.wait();
        clock.advance_ms(80);
        assert_eq!(timer.wait(), Duration::ZERO);
        assert!(clock.sleeps.borrow().is_empty());

        // released at 1080, so the next frame is due at 1130
        clock.advance_ms(10);
        assert_eq!(timer.wait(), ms(40));
    }

    #[test]
    fn first_wait_measures_from_clock_origin() {
        let clock = ManualClock::at_ms(10);
        let mut timer = FrameTimer::with_clock(ms(50), &clock);
        assert_eq!(timer.wait(), ms(40));
    }

    #[test]
    fn back_to_back_waits_block_one_period_in_total() {
        let clock = ManualClock::at_ms(1000);
        let mut timer = FrameTimer::with_clock(ms(50), &clock);

        // idle: released at once and anchored at 1000
        timer.wait();
        clock.advance_ms(10);
        timer.wait();

        assert_eq!(clock.total_slept(), ms(40));
        assert_eq!(clock.now(), ms(1050));
    }

    #[test]
    fn next_release_is_anchored_to_wait_entry() {
        let clock = ManualClock::at_ms(0);
        let mut timer = FrameTimer::with_clock(ms(50), &clock);
        timer.reset();

        clock.advance_ms(10);
        timer.wait();
        assert_eq!(clock.now(), ms(50));

        // entered at 10, so the release is anchored at 60 regardless of the
        // wake-up at 50; the next frame is due at 110
        clock.advance_ms(10);
        assert_eq!(timer.wait(), ms(50));
        assert_eq!(clock.now(), ms(110));
    }

    #[test]
    fn zero_period_never_blocks() {
        let clock = ManualClock::at_ms(0);
        let mut timer = FrameTimer::with_clock(Duration::ZERO, &clock);
        for _ in 0..3 {
            assert_eq!(timer.wait(), Duration::ZERO);
        }
        assert!(clock.sleeps.borrow().is_empty());
    }

    #[test]
    fn unreachable_deadline_does_not_block() {
        let clock = ManualClock::at_ms(1000);
        let mut timer = FrameTimer::with_clock(ms(50), &clock);
        timer.wait();

        timer.set_period(Duration::MAX);
        clock.advance_ms(10);
        assert_eq!(timer.wait(), Duration::ZERO);
        assert!(clock.sleeps.borrow().is_empty());
    }

    #[test]
    fn constructors_derive_the_period() {
        assert_eq!(FrameTimer::from_secs_f64(0.05).period(), ms(50));
        assert_eq!(FrameTimer::from_secs_f64(-1.0).period(), Duration::ZERO);
        assert_eq!(FrameTimer::from_fps(20).period(), ms(50));
        assert_eq!(FrameTimer::from_fps(0).period(), Duration::ZERO);
    }

    #[test]
    fn real_clock_paces_consecutive_waits() {
        let mut timer = FrameTimer::new(ms(20));
        timer.reset();
        let start = std::time::Instant::now();
        timer.wait();
        let elapsed = start.elapsed();
        assert!(elapsed >= ms(15), "waited only {elapsed:?}");
    }
}
