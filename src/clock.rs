use std::{thread::sleep, time::{Duration, SystemTime, UNIX_EPOCH}};

/// Wall-clock source for the game loop. Play time is tracked in whole
/// seconds, same as the status line shows it.
pub trait Clock {
    fn now_secs(&self) -> u64;

    fn sleep(&self, duration: Duration);
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> u64 {
        // A clock set before 1970 just reads as zero
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }

    fn sleep(&self, duration: Duration) {
        sleep(duration);
    }
}
