use std::time::Duration;

/// Shortest interval a scheduler will tick at.
const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Turns elapsed wall time into whole fixed-interval ticks.
///
/// The front end feeds it whatever time actually passed between frames; game
/// logic only ever sees `interval`-sized steps, so simulations stay identical
/// regardless of how often the caller wakes up. The remainder below one
/// interval is carried to the next call.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval: Duration,
    carried: Duration,
    tick: u64,
}

impl TickScheduler {
    /// Intervals shorter than one millisecond are raised to one millisecond.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(MIN_TICK_INTERVAL),
            carried: Duration::ZERO,
            tick: 0,
        }
    }

    pub fn from_millis(interval_ms: u64) -> Self {
        Self::new(Duration::from_millis(interval_ms))
    }

    /// Advances by `elapsed`, invoking `on_tick` with the running tick number
    /// once per whole interval. Returns the number of ticks run.
    pub fn advance<F>(&mut self, elapsed: Duration, mut on_tick: F) -> u32
    where
        F: FnMut(u64),
    {
        self.carried += elapsed;
        let mut ran = 0;
        while self.carried >= self.interval {
            self.carried -= self.interval;
            on_tick(self.tick);
            self.tick += 1;
            ran += 1;
        }
        ran
    }

    /// Drops carried time, e.g. after a pause, so the game does not jump ahead.
    pub fn reset(&mut self) {
        self.carried = Duration::ZERO;
    }
}
