use std::time::{Duration, Instant};

/// Caps a loop at one iteration per `target_delta_time`.
pub struct Sleeper {
    pub target_delta_time: Duration,
    pub last_instant: Option<Instant>,
}

impl Sleeper {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
        }
    }

    /// Sleeps out whatever is left of the interval since the previous call.
    /// Returns whether it slept at all.
    pub fn sleep(&mut self) -> bool {
        let slept = match self.remaining() {
            Some(remaining) => {
                spin_sleep::sleep(remaining);
                true
            }
            None => false,
        };

        self.last_instant = Some(Instant::now());
        slept
    }

    fn remaining(&self) -> Option<Duration> {
        // Assume we're late if we've never slept yet.
        let last_instant = self.last_instant?;

        self.target_delta_time
            .checked_sub(last_instant.elapsed())
            .filter(|remaining| !remaining.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn first_sleep_returns_immediately() {
        let mut sleeper = Sleeper::new(Duration::from_secs(10));

        assert!(sleeper.remaining().is_none());
        assert!(!sleeper.sleep());
        assert!(sleeper.last_instant.is_some());
    }

    #[test]
    fn sleeps_out_the_interval() {
        let interval = Duration::from_millis(20);
        let mut sleeper = Sleeper::new(interval);
        sleeper.sleep();

        let Some(previous) = sleeper.last_instant else {
            panic!("sleeper never recorded an instant");
        };

        assert!(sleeper.remaining().is_some());
        assert!(sleeper.sleep());
        assert!(previous.elapsed() >= interval);
    }

    #[test]
    fn late_iteration_does_not_sleep() {
        let mut sleeper = Sleeper::new(Duration::from_millis(1));
        sleeper.sleep();

        thread::sleep(Duration::from_millis(10));

        assert!(sleeper.remaining().is_none());
        assert!(!sleeper.sleep());
    }
}
