//! Date parsing and ordering for page frontmatter.
//!
//! Accepted forms:
//!
//! ```text
//! 2024-06-15
//! 2024-06-15T14:30:45
//! 2024-06-15 14:30:45
//! 2024-06-15T14:30:45Z
//! 2024-06-15T14:30:45.250+08:00
//! ```
//!
//! Fractional seconds are dropped. An offset is folded into UTC, so times in
//! different zones compare by the instant they name.

use anyhow::{Result, bail};
use std::cmp::Ordering;

/// UTC datetime without timezone complexity.
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateTimeUtc {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl DateTimeUtc {
    pub const fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    #[cfg(test)]
    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parse one of the accepted forms. Returns `None` for anything else,
    /// including out-of-range fields.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if !s.is_ascii() || s.len() < 10 {
            return None;
        }
        let (date, rest) = s.split_at(10);

        let [year, month, day] = split_fields(date, '-', 4)?;
        let ([hour, minute, second], offset_minutes) = match rest {
            "" | "Z" | "z" => ([0; 3], 0),
            _ if matches!(rest.as_bytes()[0], b'T' | b't' | b' ') && rest.len() >= 9 => {
                let (time, zone) = rest[1..].split_at(8);
                (split_fields(time, ':', 2)?, parse_zone(skip_fraction(zone)?)?)
            }
            _ => return None,
        };

        let dt = Self::new(
            u16::try_from(year).ok()?,
            u8::try_from(month).ok()?,
            u8::try_from(day).ok()?,
            u8::try_from(hour).ok()?,
            u8::try_from(minute).ok()?,
            u8::try_from(second).ok()?,
        );
        dt.validate().ok()?;

        if offset_minutes == 0 {
            return Some(dt);
        }
        Self::from_unix(dt.to_unix() - offset_minutes * 60)
    }

    /// Seconds since 1970-01-01T00:00:00Z.
    pub fn to_unix(&self) -> i64 {
        let days = days_from_civil(i64::from(self.year), i64::from(self.month), i64::from(self.day));
        days * 86_400
            + i64::from(self.hour) * 3_600
            + i64::from(self.minute) * 60
            + i64::from(self.second)
    }

    /// Inverse of `to_unix`; `None` outside years 0..=65535.
    pub fn from_unix(secs: i64) -> Option<Self> {
        let days = secs.div_euclid(86_400);
        let rem = secs.rem_euclid(86_400);
        let (year, month, day) = civil_from_days(days);
        Some(Self::new(
            u16::try_from(year).ok()?,
            u8::try_from(month).ok()?,
            u8::try_from(day).ok()?,
            u8::try_from(rem / 3_600).ok()?,
            u8::try_from(rem % 3_600 / 60).ok()?,
            u8::try_from(rem % 60).ok()?,
        ))
    }

    /// Reject out-of-range fields, naming the first one found.
    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("month", self.month, (1..=12).contains(&self.month)),
            (
                "day",
                self.day,
                self.day >= 1 && self.day <= Self::days_in_month(self.year, self.month),
            ),
            ("hour", self.hour, self.hour <= 23),
            ("minute", self.minute, self.minute <= 59),
            ("second", self.second, self.second <= 59),
        ];

        if let Some((name, value, _)) = checks.iter().find(|(_, _, ok)| !ok) {
            bail!("{name} is out of range: {value}");
        }
        Ok(())
    }

    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            1..=12 => 31,
            _ => 0,
        }
    }
}

/// Newest-first ordering of two optional date strings.
///
/// A valid date sorts before a missing or unparsable one; two missing or
/// unparsable dates are `Equal`, so a stable sort keeps their order.
pub fn compare_dates(a: Option<&str>, b: Option<&str>) -> Ordering {
    let a = a.and_then(DateTimeUtc::parse);
    let b = b.and_then(DateTimeUtc::parse);
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Drop a `.digits` fraction at the start of `s`.
fn skip_fraction(s: &str) -> Option<&str> {
    let Some(frac) = s.strip_prefix('.') else {
        return Some(s);
    };
    let digits = frac.bytes().take_while(u8::is_ascii_digit).count();
    (digits > 0).then(|| &frac[digits..])
}

/// Offset in minutes east of UTC: empty, `Z` or `±HH:MM`.
fn parse_zone(zone: &str) -> Option<i64> {
    let sign = match zone.as_bytes().first() {
        None => return Some(0),
        Some(b'Z' | b'z') if zone.len() == 1 => return Some(0),
        Some(b'+') => 1,
        Some(b'-') => -1,
        _ => return None,
    };
    let (hours, minutes) = zone[1..].split_once(':')?;
    if hours.len() != 2 || minutes.len() != 2 {
        return None;
    }
    let hours: i64 = hours.parse().ok()?;
    let minutes: i64 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(sign * (hours * 60 + minutes))
}

/// Days since the Unix epoch for a proleptic Gregorian date.
fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = year.div_euclid(400);
    let yoe = year - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Split `s` into three all-digit fields separated by `sep`. The first field
/// has `first_width` digits, the others two.
fn split_fields(s: &str, sep: char, first_width: usize) -> Option<[u32; 3]> {
    let mut parts = s.split(sep);
    let mut fields = [0; 3];
    for (i, field) in fields.iter_mut().enumerate() {
        let part = parts.next()?;
        let width = if i == 0 { first_width } else { 2 };
        if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *field = part.parse().ok()?;
    }
    parts.next().is_none().then_some(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        let date = DateTimeUtc::from_ymd(2024, 6, 15);
        let time = DateTimeUtc::new(2024, 6, 15, 14, 30, 45);

        assert_eq!(DateTimeUtc::parse("2024-06-15"), Some(date));
        assert_eq!(DateTimeUtc::parse("2024-06-15Z"), Some(date));
        assert_eq!(DateTimeUtc::parse("2024-06-15T14:30:45"), Some(time));
        assert_eq!(DateTimeUtc::parse("2024-06-15 14:30:45"), Some(time));
        assert_eq!(DateTimeUtc::parse("2024-06-15T14:30:45Z"), Some(time));
        assert_eq!(DateTimeUtc::parse(" 2024-06-15 "), Some(date));
    }

    #[test]
    fn test_parse_rejects() {
        for input in [
            "",
            "2024-6-15",
            "2024/06/15",
            "2024-06-15T14:30",
            "2024-06-15X14:30:45",
            "2024-06-15T14:30:45+8:00",
            "2024-06-15T14:30:45.Z",
            "2024-06-15T14:30:45 UTC",
            "2024-13-01",
            "2023-02-29",
            "2024-06-15T24:00:00",
            "yesterday",
        ] {
            assert_eq!(DateTimeUtc::parse(input), None, "{input:?}");
        }
    }

    #[test]
    fn test_parse_offset_and_fraction() {
        let utc = DateTimeUtc::new(2024, 1, 1, 2, 0, 0);
        assert_eq!(DateTimeUtc::parse("2024-01-01T10:00:00+08:00"), Some(utc));
        assert_eq!(DateTimeUtc::parse("2024-01-01T02:00:00.000Z"), Some(utc));
        assert_eq!(DateTimeUtc::parse("2024-01-01T01:30:00.5-00:30"), Some(utc));

        // Offsets can move the date across a year boundary
        assert_eq!(
            DateTimeUtc::parse("2024-01-01T03:00:00+05:00"),
            Some(DateTimeUtc::new(2023, 12, 31, 22, 0, 0))
        );
    }

    #[test]
    fn test_unix_round_trip_edges() {
        assert_eq!(DateTimeUtc::from_ymd(1970, 1, 1).to_unix(), 0);
        assert_eq!(DateTimeUtc::from_ymd(2000, 3, 1).to_unix(), 951_868_800);
        let leap = DateTimeUtc::new(2024, 2, 29, 23, 59, 59);
        assert_eq!(DateTimeUtc::from_unix(leap.to_unix()), Some(leap));
    }

    #[test]
    fn test_compare_offset_dates() {
        // 10:00+08:00 is 02:00Z, earlier than 03:00Z
        assert_eq!(
            compare_dates(Some("2024-01-01T10:00:00+08:00"), Some("2024-01-01T03:00:00Z")),
            Ordering::Greater
        );
        assert_eq!(
            compare_dates(Some("2024-01-01T10:00:00+08:00"), Some("2023-12-31")),
            Ordering::Less
        );
    }

    #[test]
    fn test_ord_is_chronological() {
        let earlier = DateTimeUtc::new(2024, 1, 31, 23, 59, 59);
        let later = DateTimeUtc::from_ymd(2024, 2, 1);
        assert!(earlier < later);
    }

    #[test]
    fn test_datetime_utc_validate_invalid_day() {
        assert!(DateTimeUtc::new(2024, 6, 0, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 1, 32, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 4, 31, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(2024, 2, 30, 12, 0, 0).validate().is_err());
    }

    #[test]
    fn test_datetime_utc_validate_leap_year() {
        assert!(DateTimeUtc::new(2024, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTimeUtc::new(2000, 2, 29, 12, 0, 0).validate().is_ok());
        assert!(DateTimeUtc::new(2023, 2, 29, 12, 0, 0).validate().is_err());
        assert!(DateTimeUtc::new(1900, 2, 29, 12, 0, 0).validate().is_err());
    }

    #[test]
    fn test_compare_later_first() {
        assert_eq!(
            compare_dates(Some("2024-01-01"), Some("2023-01-01")),
            Ordering::Less
        );
        assert_eq!(
            compare_dates(Some("2023-01-01"), Some("2024-01-01")),
            Ordering::Greater
        );
        assert_eq!(
            compare_dates(Some("2024-01-01"), Some("2024-01-01T00:00:00Z")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_compare_missing_sorts_last() {
        assert_eq!(compare_dates(None, Some("2023-01-01")), Ordering::Greater);
        assert_eq!(compare_dates(Some("2023-01-01"), None), Ordering::Less);
        assert_eq!(
            compare_dates(Some("not a date"), Some("2023-01-01")),
            Ordering::Greater
        );
    }

    #[test]
    fn test_compare_both_missing() {
        assert_eq!(compare_dates(None, None), Ordering::Equal);
        assert_eq!(compare_dates(Some("bad"), None), Ordering::Equal);
        assert_eq!(compare_dates(None, Some("2024-02-30")), Ordering::Equal);
    }
}
