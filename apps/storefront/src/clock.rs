//! # Clock
//!
//! Supplies the local hour that decides whether the restaurant is open.

use chrono::{Local, Timelike};

/// Source of the current local hour (0-23).
pub trait Clock {
    fn hour(&self) -> u32;
}

/// Reads the machine's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// Always reports the same hour.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn hour(&self) -> u32 {
        self.0
    }
}
