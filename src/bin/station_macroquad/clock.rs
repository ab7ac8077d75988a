use std::time::{Duration, Instant};

pub(crate) struct FrameClock {
    period: Duration,
    next_tick: Instant,
}

impl FrameClock {
    pub(crate) fn new(rate_hz: f64) -> Self {
        let period = Duration::from_secs_f64(1.0 / rate_hz.max(1.0));
        Self {
            period,
            next_tick: Instant::now() + period,
        }
    }

    pub(crate) fn period(&self) -> Duration {
        self.period
    }

    pub(crate) fn advance(&mut self, now: Instant) -> Duration {
        let wait = self.next_tick.saturating_duration_since(now);
        self.next_tick = if wait.is_zero() {
            now + self.period
        } else {
            self.next_tick + self.period
        };
        wait
    }

    pub(crate) fn wait_for_next_tick(&mut self) {
        let wait = self.advance(Instant::now());
        if !wait.is_zero() {
            std::thread::sleep(wait);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_hz_period() {
        let clock = FrameClock::new(60.0);
        let micros = clock.period().as_micros();
        assert!((16_666..=16_667).contains(&micros));
    }

    #[test]
    fn early_frame_waits_for_boundary() {
        let mut clock = FrameClock::new(60.0);
        let start = clock.next_tick - clock.period;
        let wait = clock.advance(start + Duration::from_millis(5));
        assert!(wait > Duration::from_millis(11) && wait < Duration::from_millis(12));
    }

    #[test]
    fn late_frame_does_not_catch_up() {
        let mut clock = FrameClock::new(60.0);
        let late = clock.next_tick + Duration::from_millis(100);
        assert_eq!(clock.advance(late), Duration::ZERO);
        assert_eq!(clock.next_tick, late + clock.period());
    }
}
