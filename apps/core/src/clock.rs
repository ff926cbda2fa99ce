//! Clock collaborator.
//!
//! The engine never owns wall-clock time. It writes a user-supplied time with
//! `set` and reads it back with `read`; until the first `set` the clock is
//! undefined.

use chrono::{DateTime, Duration, Local, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 12-hour clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockTime {
    /// 1..=12
    pub hour: u8,
    /// 0..=59
    pub minute: u8,
    pub pm: bool,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8, pm: bool) -> Self {
        Self { hour, minute, pm }
    }

    pub fn meridiem(&self) -> &'static str {
        if self.pm {
            "PM"
        } else {
            "AM"
        }
    }

    /// Converts to a 24-hour `NaiveTime`.
    fn to_naive(self) -> NaiveTime {
        let hour24 = match (self.hour % 12, self.pm) {
            (h, false) => h,
            (h, true) => h + 12,
        };
        NaiveTime::from_hms_opt(u32::from(hour24), u32::from(self.minute.min(59)), 0)
            .unwrap_or(NaiveTime::MIN)
    }

    fn from_naive(time: NaiveTime) -> Self {
        let (pm, hour) = time.hour12();
        Self {
            hour: hour as u8,
            minute: time.minute() as u8,
            pm,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.hour, self.minute, self.meridiem())
    }
}

/// Externally owned time source, accessed through set/read only.
pub trait Clock {
    fn set(&mut self, time: ClockTime);

    /// Current reading, or `None` until the first `set`.
    fn read(&self) -> Option<ClockTime>;
}

/// Wall-clock backed clock: keeps running from the moment it was set.
#[derive(Debug, Default)]
pub struct SystemClock {
    anchor: Option<(NaiveTime, DateTime<Local>)>,
}

impl SystemClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SystemClock {
    fn set(&mut self, time: ClockTime) {
        self.anchor = Some((time.to_naive(), Local::now()));
    }

    fn read(&self) -> Option<ClockTime> {
        let (time, set_at) = self.anchor?;
        let elapsed = Local::now().signed_duration_since(set_at);
        let (now, _) = time.overflowing_add_signed(elapsed);
        Some(ClockTime::from_naive(now))
    }
}

/// Clock that only changes when told to. Used by tests and scripted sessions.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    time: Option<ClockTime>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(time: ClockTime) -> Self {
        Self { time: Some(time) }
    }

    /// Moves the clock forward, wrapping past midnight.
    pub fn advance(&mut self, minutes: i64) {
        if let Some(time) = self.time {
            let (next, _) = time.to_naive().overflowing_add_signed(Duration::minutes(minutes));
            self.time = Some(ClockTime::from_naive(next));
        }
    }
}

impl Clock for ManualClock {
    fn set(&mut self, time: ClockTime) {
        self.time = Some(time);
    }

    fn read(&self) -> Option<ClockTime> {
        self.time
    }
}
