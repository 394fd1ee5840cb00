use instant::Instant;
use std::time::Duration;

/// Timing handed to the evaluator for one rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTick {
    /// Seconds since the scene started, monotonic. Kept in `f64` so a page left
    /// open for days still advances by sub-millisecond steps.
    pub elapsed: f64,
    /// Seconds since the previous frame.
    pub delta: f32,
}

impl FrameTick {
    pub fn new(elapsed: f64, delta: f32) -> Self {
        Self { elapsed, delta }
    }
}

/// Turns render-loop callbacks into `FrameTick`s measured from scene start.
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self { start, last: start }
    }

    pub fn tick(&mut self) -> FrameTick {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> FrameTick {
        // a timestamp older than the last one yields a zero delta
        let delta = if now > self.last {
            let d = now.duration_since(self.last);
            self.last = now;
            d
        } else {
            Duration::ZERO
        };
        FrameTick {
            elapsed: self.last.duration_since(self.start).as_secs_f64(),
            delta: delta.as_secs_f32(),
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_and_delta_accumulate() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let a = clock.tick_at(start + Duration::from_millis(16));
        assert!((a.elapsed - 0.016).abs() < 1e-6);
        assert!((a.delta - 0.016).abs() < 1e-6);
        let b = clock.tick_at(start + Duration::from_millis(50));
        assert!((b.elapsed - 0.050).abs() < 1e-6);
        assert!((b.delta - 0.034).abs() < 1e-6);
    }

    #[test]
    fn stale_timestamp_does_not_rewind() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        clock.tick_at(start + Duration::from_millis(40));
        let t = clock.tick_at(start + Duration::from_millis(20));
        assert_eq!(t.delta, 0.0);
        assert!((t.elapsed - 0.040).abs() < 1e-6);
    }

    #[test]
    fn elapsed_keeps_advancing_after_days_of_uptime() {
        let start = Instant::now();
        let mut clock = FrameClock::starting_at(start);
        let base = start + Duration::from_secs(200_000);
        let mut prev = clock.tick_at(base).elapsed;
        for frame in 1..=8u64 {
            let t = clock.tick_at(base + Duration::from_millis(11 * frame));
            let step = t.elapsed - prev;
            assert!((step - 0.011).abs() < 1e-6, "frame {frame} stepped {step}");
            prev = t.elapsed;
        }
    }
}
