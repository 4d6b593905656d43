//! Single queue of ticks, resizes and key actions

use crate::controller::{action_for_key, Action};
use crossterm::event::{poll, read, Event, KeyEventKind};
use std::io;
use std::time::{Duration, Instant};

/// One unit of work for the event loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireEvent {
    Tick,
    Resize(u16, u16),
    Action(Action),
}

/// Tick deadline tracking. Late ticks coalesce into a single one.
#[derive(Debug)]
pub struct Ticker {
    next: Instant,
}

impl Ticker {
    /// First tick is due immediately
    pub fn new(now: Instant) -> Self {
        Self { next: now }
    }

    /// Time left until the next tick
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// If a tick is due, consume it and schedule the next one `interval` from now
    pub fn take(&mut self, now: Instant, interval: Duration) -> bool {
        if now < self.next {
            return false;
        }
        self.next = now + interval;
        true
    }
}

/// Blocks on terminal input until something happens or the next tick is due
pub struct EventSource {
    ticker: Ticker,
}

impl EventSource {
    pub fn new() -> Self {
        Self {
            ticker: Ticker::new(Instant::now()),
        }
    }

    pub fn next(&mut self, interval: Duration) -> io::Result<FireEvent> {
        loop {
            let now = Instant::now();
            if self.ticker.take(now, interval) {
                return Ok(FireEvent::Tick);
            }

            if !poll(self.ticker.remaining(now))? {
                continue;
            }

            match read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if let Some(action) = action_for_key(key.code, key.modifiers) {
                        return Ok(FireEvent::Action(action));
                    }
                }
                Event::Resize(w, h) => return Ok(FireEvent::Resize(w, h)),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Ticker;
    use std::time::{Duration, Instant};

    #[test]
    fn first_tick_is_immediate() {
        let start = Instant::now();
        let mut ticker = Ticker::new(start);
        assert_eq!(ticker.remaining(start), Duration::ZERO);
        assert!(ticker.take(start, Duration::from_millis(50)));
    }

    #[test]
    fn waits_for_interval() {
        let start = Instant::now();
        let interval = Duration::from_millis(50);
        let mut ticker = Ticker::new(start);
        ticker.take(start, interval);

        let later = start + Duration::from_millis(20);
        assert!(!ticker.take(later, interval));
        assert_eq!(ticker.remaining(later), Duration::from_millis(30));
        assert!(ticker.take(start + interval, interval));
    }

    #[test]
    fn missed_ticks_coalesce() {
        let start = Instant::now();
        let interval = Duration::from_millis(10);
        let mut ticker = Ticker::new(start);
        ticker.take(start, interval);

        let late = start + Duration::from_millis(100);
        assert!(ticker.take(late, interval));
        assert!(!ticker.take(late, interval));
        assert_eq!(ticker.remaining(late), interval);
    }
}
