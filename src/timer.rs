/// Countdown for the active quiz phase.
///
/// The caller feeds a monotonic time in seconds (the UI passes
/// `ctx.input(|i| i.time)`, tests pass literals) and the countdown
/// decrements once per whole elapsed second, catching up across slow
/// frames. `tick` reports expiry exactly once; after that the
/// countdown has stopped and a new session must `start` it again.
#[derive(Clone, Debug, Default)]
pub struct Countdown {
    remaining: u32,
    running: bool,
    last_tick: f64,
}

impl Countdown {
    pub fn start(&mut self, seconds: u32, now: f64) {
        self.remaining = seconds;
        self.running = true;
        self.last_tick = now;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances the countdown to `now`. Returns `true` exactly once,
    /// when the countdown reaches zero while running.
    pub fn tick(&mut self, now: f64) -> bool {
        if !self.running {
            return false;
        }
        if self.remaining == 0 {
            self.running = false;
            return true;
        }

        let elapsed = ((now - self.last_tick).max(0.0)) as u32;
        if elapsed == 0 {
            return false;
        }
        self.last_tick += f64::from(elapsed);
        self.remaining = self.remaining.saturating_sub(elapsed);

        if self.remaining == 0 {
            self.running = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_one_per_second() {
        let mut countdown = Countdown::default();
        countdown.start(3, 0.0);

        assert!(!countdown.tick(0.5));
        assert_eq!(countdown.remaining(), 3);
        assert!(!countdown.tick(1.0));
        assert_eq!(countdown.remaining(), 2);
        assert!(!countdown.tick(2.2));
        assert_eq!(countdown.remaining(), 1);
    }

    #[test]
    fn expires_exactly_once_after_n_seconds() {
        let mut countdown = Countdown::default();
        countdown.start(3, 0.0);

        let mut expiries = 0;
        for i in 1..=10 {
            if countdown.tick(f64::from(i)) {
                expiries += 1;
            }
        }
        assert_eq!(expiries, 1);
        assert!(!countdown.is_running());
        assert_eq!(countdown.remaining(), 0);
    }

    #[test]
    fn catches_up_across_a_long_gap() {
        let mut countdown = Countdown::default();
        countdown.start(60, 0.0);

        assert!(countdown.tick(120.0));
        assert_eq!(countdown.remaining(), 0);
        assert!(!countdown.tick(121.0));
    }

    #[test]
    fn does_not_tick_while_stopped() {
        let mut countdown = Countdown::default();
        countdown.start(5, 0.0);
        countdown.stop();

        assert!(!countdown.tick(100.0));
        assert_eq!(countdown.remaining(), 5);
    }

    #[test]
    fn restart_discards_stale_elapsed_time() {
        let mut countdown = Countdown::default();
        countdown.start(2, 0.0);
        assert!(countdown.tick(2.0));

        // A fresh session must not inherit the old clock.
        countdown.start(10, 50.0);
        assert!(!countdown.tick(51.0));
        assert_eq!(countdown.remaining(), 9);
        assert!(countdown.is_running());
    }

    #[test]
    fn fractional_partial_seconds_accumulate() {
        let mut countdown = Countdown::default();
        countdown.start(2, 0.0);

        assert!(!countdown.tick(0.9));
        assert!(!countdown.tick(1.2));
        assert_eq!(countdown.remaining(), 1);
        // 0.2s of the last tick is still pending, so expiry lands at 2.0.
        assert!(countdown.tick(2.0));
    }
}
