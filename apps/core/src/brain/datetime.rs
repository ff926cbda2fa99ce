//! Date/Time Sub-engine.
//!
//! Understands a handful of phrasings for reading and setting the date and
//! the time:
//! - "today is Feb 7 2026", "the date is march 3": set the date
//! - "what day is it", "what's the date": read the date
//! - "the time is 7:44 pm", "time is 19:44": set the time
//! - "what time is it": read the time
//!
//! Malformed input never fails: it gets a fixed help message instead.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

use super::normalize::Message;
use super::state::{ConversationState, StoredDate};
use crate::clock::{Clock, ClockTime};

/// (abbreviation, full name), January first.
const MONTHS: [(&str, &str); 12] = [
    ("jan", "January"),
    ("feb", "February"),
    ("mar", "March"),
    ("apr", "April"),
    ("may", "May"),
    ("jun", "June"),
    ("jul", "July"),
    ("aug", "August"),
    ("sep", "September"),
    ("oct", "October"),
    ("nov", "November"),
    ("dec", "December"),
];

pub const DATE_HELP: &str = "I couldn't read that date. Try: today is Feb 7 2026";
pub const TIME_HELP: &str = "I couldn't read that time. Try: the time is 7:44 PM";
pub const DATE_UNSET: &str = "I don't know the date yet. Tell me with: today is Feb 7 2026";
pub const TIME_UNSET: &str = "I don't know the time yet. Tell me with: the time is 7:44 PM";

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("Invalid regex: digit run"));

/// What the input asks the sub-engine to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeCommand {
    ReadBoth,
    ReadDate,
    SetDate,
    ReadTime,
    SetTime,
}

/// Earliest month abbreviation in `text`: (month 1..=12, byte offset past it).
pub fn find_month(text: &str) -> Option<(u8, usize)> {
    MONTHS
        .iter()
        .enumerate()
        .filter_map(|(i, (abbr, _))| text.find(abbr).map(|pos| (i as u8 + 1, pos, pos + abbr.len())))
        .min_by_key(|(_, pos, _)| *pos)
        .map(|(month, _, end)| (month, end))
}

pub fn month_name(month: u8) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTHS.get(usize::from(i)))
        .map(|(_, name)| *name)
        .unwrap_or_default()
}

/// Decide which command, if any, the input expresses.
pub fn command(normalized: &str) -> Option<DateTimeCommand> {
    let has_month = find_month(normalized).is_some();
    let has_colon = normalized.contains(':');

    if normalized.contains("date") && normalized.contains("time") && !has_month && !has_colon {
        return Some(DateTimeCommand::ReadBoth);
    }
    if normalized.contains("today") || normalized.contains("the date") {
        return Some(if has_month {
            DateTimeCommand::SetDate
        } else {
            DateTimeCommand::ReadDate
        });
    }
    if normalized.contains("what day") {
        return Some(DateTimeCommand::ReadDate);
    }
    if normalized.contains("what time") {
        return Some(DateTimeCommand::ReadTime);
    }
    if normalized.contains("the time") || normalized.contains("time is") {
        return Some(if has_colon {
            DateTimeCommand::SetTime
        } else {
            DateTimeCommand::ReadTime
        });
    }
    None
}

/// Last two digits of a digit run, as a number.
fn last_two_digits(run: &str) -> u8 {
    let tail = &run[run.len().saturating_sub(2)..];
    tail.parse().unwrap_or(0)
}

/// Parse "<month> [day] [year]". `None` when the day is out of range.
pub fn parse_date(normalized: &str) -> Option<StoredDate> {
    let (month, after_month) = find_month(normalized)?;

    let mut runs = DIGITS.find_iter(&normalized[after_month..]);
    let day = match runs.next() {
        None => 1,
        Some(run) => match run.as_str().parse::<u8>() {
            Ok(day @ 1..=31) => day,
            _ => return None,
        },
    };
    let year = runs.next().map(|run| last_two_digits(run.as_str()));

    Some(StoredDate { month, day, year })
}

/// Parse "<h>:<mm> [am|pm]". `None` when there is no usable hour or minute.
pub fn parse_time(normalized: &str) -> Option<ClockTime> {
    let colon = normalized.find(':')?;
    let bytes = normalized.as_bytes();

    let hour_start = (colon.saturating_sub(2)..colon)
        .find(|&i| bytes[i..colon].iter().all(u8::is_ascii_digit))?;
    let hour: u8 = normalized[hour_start..colon].parse().ok()?;

    let minute_digits = normalized.get(colon + 1..colon + 3)?;
    if !minute_digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let minute: u8 = minute_digits.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }

    let meridiem = if normalized.contains("pm") {
        Some(true)
    } else if normalized.contains("am") {
        Some(false)
    } else {
        None
    };

    let (hour, pm) = match (hour, meridiem) {
        (0, None) => (12, false),
        (1..=11, None) => (hour, false),
        (12, None) => (12, true),
        (_, None) => (hour - 12, true),
        (0, Some(pm)) => (12, pm),
        (13..=23, Some(_)) => (hour - 12, true),
        (_, Some(pm)) => (hour, pm),
    };
    Some(ClockTime::new(hour, minute, pm))
}

/// "February 7, 2026", or "February 7" without a year.
pub fn format_date(date: &StoredDate) -> String {
    match date.year {
        Some(yy) => format!("{} {}, 20{:02}", month_name(date.month), date.day, yy),
        None => format!("{} {}", month_name(date.month), date.day),
    }
}

fn read_date(state: &ConversationState) -> String {
    match &state.date {
        Some(date) => format!("The date is {}!", format_date(date)),
        None => DATE_UNSET.to_string(),
    }
}

fn read_time(state: &ConversationState, clock: &dyn Clock) -> String {
    match clock.read().filter(|_| state.time_set) {
        Some(time) => format!("The time is {}!", time),
        None => TIME_UNSET.to_string(),
    }
}

/// Run the date/time directive. Declines when the input is not about dates
/// or times.
pub fn handle(
    message: &Message,
    state: &mut ConversationState,
    clock: &mut dyn Clock,
) -> Option<String> {
    let text = message.normalized.as_str();
    let command = command(text)?;
    debug!(?command, "Date/time directive");

    let response = match command {
        DateTimeCommand::ReadBoth => format!("{} {}", read_date(state), read_time(state, clock)),
        DateTimeCommand::ReadDate => read_date(state),
        DateTimeCommand::ReadTime => read_time(state, clock),
        DateTimeCommand::SetDate => match parse_date(text) {
            Some(date) => {
                state.date = Some(date);
                format!("Date set to {}!", format_date(&date))
            }
            None => DATE_HELP.to_string(),
        },
        DateTimeCommand::SetTime => match parse_time(text) {
            Some(time) => {
                clock.set(time);
                state.time_set = true;
                format!("Time set to {}!", time)
            }
            None => TIME_HELP.to_string(),
        },
    };
    Some(response)
}

/// Salutation for the current clock reading.
pub fn time_of_day_greeting(time: ClockTime) -> &'static str {
    match (time.pm, time.hour) {
        (false, 5..=11) => "Good morning! ",
        (true, 12) | (true, 1..=5) => "Good afternoon! ",
        _ => "Good evening! ",
    }
}
