//! Live clock shown on the start page.

use chrono::{DateTime, FixedOffset, Local, Utc};

const TIME_FORMAT: &str = "%H:%M:%S";

/// Formats wall-clock time as `HH:MM:SS`.
///
/// Uses the system's local time zone unless a fixed UTC offset is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Clock {
    offset: Option<FixedOffset>,
}

impl Clock {
    /// A clock at a fixed offset from UTC, or in the local zone for `None`.
    ///
    /// Offsets of a day or more are rejected and the local zone is used.
    pub fn new(utc_offset_minutes: Option<i32>) -> Self {
        let offset = utc_offset_minutes.and_then(|minutes| {
            let offset = minutes
                .checked_mul(60)
                .and_then(FixedOffset::east_opt);
            if offset.is_none() {
                log::warn!("Ignoring invalid clock offset of {} minutes", minutes);
            }
            offset
        });
        Self { offset }
    }

    /// Current time as `HH:MM:SS`.
    pub fn now(&self) -> String {
        self.format_at(Utc::now())
    }

    /// Formats an instant as `HH:MM:SS` in this clock's zone.
    pub fn format_at(&self, instant: DateTime<Utc>) -> String {
        match self.offset {
            Some(offset) => instant.with_timezone(&offset).format(TIME_FORMAT).to_string(),
            None => instant.with_timezone(&Local).format(TIME_FORMAT).to_string(),
        }
    }
}
