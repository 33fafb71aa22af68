use std::{thread, time::Duration};

/// Blocks the current run for a while.
pub trait Pause {
    fn pause(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Pause for ThreadSleep {
    fn pause(&self, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        log::debug!("Sleeping for {duration:?}");
        thread::sleep(duration);
    }
}
