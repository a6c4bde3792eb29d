//! Simulated wall clock for `date`.
//!
//! The clock starts at the host's local time and keeps ticking with it.
//! Setting it stores an offset, so the shell's notion of "now" can drift
//! from the host without touching the host.

use chrono::format::{ParseErrorKind, Parsed, StrftimeItems};
use chrono::{Local, NaiveDateTime, NaiveTime, ParseError, TimeDelta};

/// Layout used when printing the time, the classic `ctime` shape.
pub const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimClock {
    offset: TimeDelta,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated local time, pinned to the ends of the
    /// representable range once it runs past them.
    pub fn now(&self) -> NaiveDateTime {
        let host = Local::now().naive_local();
        host.checked_add_signed(self.offset).unwrap_or(if self.offset < TimeDelta::zero() {
            NaiveDateTime::MIN
        } else {
            NaiveDateTime::MAX
        })
    }

    /// Make `now()` report `at`, then keep counting from there.
    pub fn set(&mut self, at: NaiveDateTime) {
        self.offset = at - Local::now().naive_local();
        tracing::debug!(%at, "clock set");
    }

    /// `now()` in [`CTIME_FORMAT`].
    pub fn display(&self) -> String {
        self.now().format(CTIME_FORMAT).to_string()
    }

    /// Parse `text` with a strftime `format`.
    ///
    /// The format may describe a full date and time, a date alone (the time
    /// becomes midnight), or a time alone (the date is taken from this
    /// clock's current date). A narrower reading is only tried when the
    /// wider one lacked fields; an impossible or out of range date fails.
    pub fn parse(&self, format: &str, text: &str) -> Result<NaiveDateTime, ParseError> {
        let mut parsed = Parsed::default();
        chrono::format::parse(&mut parsed, text, StrftimeItems::new(format))?;

        match parsed.to_naive_datetime_with_offset(0) {
            Ok(at) => return Ok(at),
            Err(e) if e.kind() != ParseErrorKind::NotEnough => return Err(e),
            Err(_) => {}
        }
        match parsed.to_naive_date() {
            Ok(date) => return Ok(date.and_time(NaiveTime::MIN)),
            Err(e) if e.kind() != ParseErrorKind::NotEnough => return Err(e),
            Err(_) => {}
        }
        let time = parsed.to_naive_time()?;
        Ok(self.now().date().and_time(time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Timelike};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, s))
            .unwrap()
    }

    #[test]
    fn set_moves_now() {
        let mut clock = SimClock::new();
        let target = at(1999, 12, 31, 23, 59, 0);
        clock.set(target);
        let drift = clock.now() - target;
        assert!(drift >= TimeDelta::zero());
        assert!(drift < TimeDelta::seconds(5));
    }

    #[test]
    fn display_uses_ctime_layout() {
        let mut clock = SimClock::new();
        clock.set(at(2024, 1, 2, 3, 4, 5));
        let shown = clock.display();
        assert!(shown.starts_with("Tue Jan  2 03:04:"), "got {shown}");
        assert!(shown.ends_with(" 2024"));
    }

    #[test]
    fn parse_full_datetime() {
        let clock = SimClock::new();
        let parsed = clock.parse("%Y-%m-%dT%H:%M:%S", "2024-01-02T03:04:05").unwrap();
        assert_eq!(parsed, at(2024, 1, 2, 3, 4, 5));
    }

    #[test]
    fn parse_date_only_is_midnight() {
        let clock = SimClock::new();
        let parsed = clock.parse("%Y-%m-%d", "2020-02-29").unwrap();
        assert_eq!(parsed, at(2020, 2, 29, 0, 0, 0));
    }

    #[test]
    fn parse_time_only_keeps_current_date() {
        let mut clock = SimClock::new();
        clock.set(at(2010, 6, 15, 12, 0, 0));
        let parsed = clock.parse("%H:%M", "08:30").unwrap();
        assert_eq!(parsed.year(), 2010);
        assert_eq!(parsed.month(), 6);
        assert_eq!(parsed.hour(), 8);
        assert_eq!(parsed.minute(), 30);
    }

    #[test]
    fn parse_garbage_fails() {
        let clock = SimClock::new();
        assert!(clock.parse("%Y-%m-%d", "yesterday").is_err());
        assert!(clock.parse("%Y-%m-%d", "2021-13-01").is_err());
    }

    #[test]
    fn parse_rejects_impossible_day_with_time() {
        let clock = SimClock::new();
        assert!(clock.parse("%Y-%m-%dT%H:%M:%S", "2021-02-30T10:11:12").is_err());
        assert!(clock.parse("%Y-%m-%d", "2021-02-30").is_err());
    }

    #[test]
    fn parse_rejects_year_out_of_range() {
        let clock = SimClock::new();
        assert!(clock.parse("%Y-%m-%dT%H:%M:%S", "+262143-12-31T23:59:59").is_err());
    }

    #[test]
    fn now_saturates_at_latest_datetime() {
        let mut clock = SimClock::new();
        clock.set(NaiveDateTime::MAX);
        assert_eq!(clock.now(), NaiveDateTime::MAX);
        assert!(clock.display().ends_with("262142"));

        clock.set(NaiveDateTime::MIN);
        assert!(clock.now() <= NaiveDateTime::MIN + TimeDelta::seconds(5));
    }
}
