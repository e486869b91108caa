//! Reporting timezone and the inclusive collection window.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use thiserror::Error;

/// Timezone used when no other is configured.
pub const DEFAULT_TIMEZONE: &str = "Asia/Tokyo";

/// Errors raised while building a [`DateRange`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DateRangeError {
    /// The timezone name is not in the IANA database.
    #[error("unknown timezone '{name}'")]
    UnknownTimezone {
        /// The rejected name.
        name: String,
    },

    /// The window ends before it starts.
    #[error("date range start {start} is after end {end}")]
    Inverted {
        /// Requested start, RFC 3339.
        start: String,
        /// Requested end, RFC 3339.
        end: String,
    },

    /// The boundary time does not exist on that date in the timezone.
    #[error("{time} on {date} does not exist in {timezone}")]
    NonexistentLocalTime {
        /// Calendar date of the boundary.
        date: NaiveDate,
        /// Wall-clock time that was requested.
        time: NaiveTime,
        /// Timezone the lookup happened in.
        timezone: Tz,
    },
}

/// IANA timezone every reported timestamp is expressed in.
///
/// # Example
///
/// ```
/// use gleaner::collection::ReportingTimezone;
///
/// let tokyo: ReportingTimezone = "Asia/Tokyo".parse().expect("known timezone");
/// assert_eq!(tokyo.to_string(), "Asia/Tokyo");
/// assert!("Mars/Olympus".parse::<ReportingTimezone>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingTimezone(Tz);

impl ReportingTimezone {
    /// Wraps an already resolved timezone.
    #[must_use]
    pub const fn new(timezone: Tz) -> Self {
        Self(timezone)
    }

    /// Underlying timezone.
    #[must_use]
    pub const fn tz(self) -> Tz {
        self.0
    }

    /// Expresses a UTC instant in this timezone.
    #[must_use]
    pub fn localise(self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.0)
    }
}

impl Default for ReportingTimezone {
    fn default() -> Self {
        Self(Tz::Asia__Tokyo)
    }
}

impl FromStr for ReportingTimezone {
    type Err = DateRangeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        name.trim()
            .parse::<Tz>()
            .map(Self)
            .map_err(|_| DateRangeError::UnknownTimezone {
                name: name.to_owned(),
            })
    }
}

impl fmt::Display for ReportingTimezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name())
    }
}

/// Closed interval of instants, inclusive at both ends.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use gleaner::collection::{DateRange, ReportingTimezone};
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
/// let range = DateRange::from_dates(day, day, ReportingTimezone::default())
///     .expect("valid range");
/// assert_eq!(range.start().to_rfc3339(), "2024-01-01T00:00:00+09:00");
/// assert_eq!(range.end().to_rfc3339(), "2024-01-01T23:59:59.999999+09:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    start: DateTime<Tz>,
    end: DateTime<Tz>,
}

impl DateRange {
    /// Builds a range from explicit instants.
    ///
    /// # Errors
    ///
    /// Returns [`DateRangeError::Inverted`] when `start` is after `end`.
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::Inverted {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }
        Ok(Self { start, end })
    }

    /// Builds the range covering whole calendar days in `timezone`, from the
    /// first instant of `from` to the last microsecond of `to`.
    ///
    /// Ambiguous local times (a repeated hour) resolve outwards: the earliest
    /// candidate for the start and the latest for the end. A boundary inside a
    /// DST gap moves inwards to the nearest wall-clock minute that exists, so
    /// a day starting at 01:00 is still covered from its first instant.
    ///
    /// # Errors
    ///
    /// Returns [`DateRangeError::Inverted`] when `from` is after `to` and
    /// [`DateRangeError::NonexistentLocalTime`] when no wall-clock time exists
    /// within a day of a boundary.
    pub fn from_dates(
        from: NaiveDate,
        to: NaiveDate,
        timezone: ReportingTimezone,
    ) -> Result<Self, DateRangeError> {
        let start = resolve_local(from, NaiveTime::MIN, timezone.tz(), Boundary::Start)?;
        let end = resolve_local(to, END_OF_DAY, timezone.tz(), Boundary::End)?;
        Self::new(start, end)
    }

    /// First instant in the range.
    #[must_use]
    pub const fn start(&self) -> &DateTime<Tz> {
        &self.start
    }

    /// Last instant in the range.
    #[must_use]
    pub const fn end(&self) -> &DateTime<Tz> {
        &self.end
    }

    /// Timezone the range was expressed in.
    #[must_use]
    pub fn timezone(&self) -> ReportingTimezone {
        ReportingTimezone(self.start.timezone())
    }

    /// Returns true when `instant` lies within the range, boundaries included.
    #[must_use]
    pub fn contains(&self, instant: &DateTime<Tz>) -> bool {
        self.start <= *instant && *instant <= self.end
    }

    /// Returns true when `instant` is strictly earlier than the range.
    #[must_use]
    pub fn is_before(&self, instant: &DateTime<Tz>) -> bool {
        *instant < self.start
    }
}

#[derive(Clone, Copy)]
enum Boundary {
    Start,
    End,
}

const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_micro_opt(23, 59, 59, 999_999) {
    Some(time) => time,
    None => panic!("23:59:59.999999 is a valid time"),
};

// Longest recorded gap is a whole skipped day (Samoa, 2011-12-30).
const GAP_SEARCH_MINUTES: i64 = 24 * 60;

fn resolve_local(
    date: NaiveDate,
    time: NaiveTime,
    timezone: Tz,
    boundary: Boundary,
) -> Result<DateTime<Tz>, DateRangeError> {
    let requested = NaiveDateTime::new(date, time);
    let step = match boundary {
        Boundary::Start => Duration::minutes(1),
        Boundary::End => Duration::minutes(-1),
    };

    let mut local = requested;
    for _ in 0..=GAP_SEARCH_MINUTES {
        let candidates = timezone.from_local_datetime(&local);
        let resolved = match boundary {
            Boundary::Start => candidates.earliest(),
            Boundary::End => candidates.latest(),
        };
        if let Some(instant) = resolved {
            if local != requested {
                tracing::debug!(
                    requested = %requested,
                    resolved = %instant,
                    %timezone,
                    "date boundary fell into a DST gap"
                );
            }
            return Ok(instant);
        }
        local += step;
    }

    Err(DateRangeError::NonexistentLocalTime {
        date,
        time,
        timezone,
    })
}
