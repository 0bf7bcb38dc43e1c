//! Serde support for durations rendered as `[-][d.]hh:mm:ss[.fffffff]`,
//! the constant time span format stored in the monitoring indices. The
//! fractional part counts 100 ns ticks and is omitted when zero.
//!
//! Use with `#[serde(with = "timespan")]`, or `timespan::option` for
//! `Option<TimeDelta>` fields.

use chrono::TimeDelta;
use serde::{Deserialize, Deserializer, Serializer};
use std::fmt::Write;

const NANOS_PER_TICK: i64 = 100;
const TICK_DIGITS: usize = 7;
const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TimeSpanError {
    #[error("time span {0:?} is not of the form [-][d.]hh:mm:ss[.fffffff]")]
    Malformed(String),
    #[error("time span {0:?} has a component out of range")]
    OutOfRange(String),
}

pub fn format(delta: &TimeDelta) -> String {
    let abs = delta.abs();
    let total_seconds = abs.num_seconds();
    let ticks = i64::from(abs.subsec_nanos()) / NANOS_PER_TICK;

    let days = total_seconds / SECONDS_PER_DAY;
    let hours = (total_seconds % SECONDS_PER_DAY) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut out = String::new();
    if *delta < TimeDelta::zero() {
        out.push('-');
    }
    if days > 0 {
        let _ = write!(out, "{days}.");
    }
    let _ = write!(out, "{hours:02}:{minutes:02}:{seconds:02}");
    if ticks > 0 {
        let _ = write!(out, ".{ticks:0width$}", width = TICK_DIGITS);
    }
    out
}

pub fn parse(input: &str) -> Result<TimeDelta, TimeSpanError> {
    let malformed = || TimeSpanError::Malformed(input.to_string());
    let out_of_range = || TimeSpanError::OutOfRange(input.to_string());

    let (negative, rest) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let first_colon = rest.find(':').ok_or_else(malformed)?;
    let (days, clock) = match rest[..first_colon].find('.') {
        Some(dot) => (
            parse_component(&rest[..dot]).ok_or_else(malformed)?,
            &rest[dot + 1..],
        ),
        None => (0, rest),
    };

    let mut parts = clock.splitn(3, ':');
    let hours = parts.next().and_then(parse_component).ok_or_else(malformed)?;
    let minutes = parts.next().and_then(parse_component).ok_or_else(malformed)?;
    let seconds_part = parts.next().ok_or_else(malformed)?;

    let (seconds, ticks) = match seconds_part.split_once('.') {
        Some((seconds, fraction)) => {
            if fraction.is_empty()
                || fraction.len() > TICK_DIGITS
                || !fraction.bytes().all(|b| b.is_ascii_digit())
            {
                return Err(malformed());
            }
            let padded = format!("{fraction:0<width$}", width = TICK_DIGITS);
            let ticks: i64 = padded.parse().map_err(|_| malformed())?;
            (parse_component(seconds).ok_or_else(malformed)?, ticks)
        }
        None => (parse_component(seconds_part).ok_or_else(malformed)?, 0),
    };

    if hours >= 24 || minutes >= 60 || seconds >= 60 {
        return Err(out_of_range());
    }

    let total_seconds = days
        .checked_mul(SECONDS_PER_DAY)
        .and_then(|s| s.checked_add(hours * 3600 + minutes * 60 + seconds))
        .ok_or_else(out_of_range)?;
    let delta = TimeDelta::try_seconds(total_seconds)
        .and_then(|d| d.checked_add(&TimeDelta::nanoseconds(ticks * NANOS_PER_TICK)))
        .ok_or_else(out_of_range)?;

    Ok(if negative { -delta } else { delta })
}

fn parse_component(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

pub fn serialize<S>(delta: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(delta))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<TimeDelta, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).map_err(serde::de::Error::custom)
}

pub mod option {
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(delta: &Option<TimeDelta>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match delta {
            Some(delta) => super::serialize(delta, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<TimeDelta>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse(&raw).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(TimeDelta::zero(), "00:00:00")]
    #[case::seconds(TimeDelta::seconds(5), "00:00:05")]
    #[case::hours_minutes(TimeDelta::seconds(2 * 3600 + 3 * 60 + 4), "02:03:04")]
    #[case::days(TimeDelta::days(13) + TimeDelta::hours(23) + TimeDelta::minutes(59), "13.23:59:00")]
    #[case::ticks(TimeDelta::milliseconds(1_500), "00:00:01.5000000")]
    #[case::sub_tick_truncated(TimeDelta::nanoseconds(250), "00:00:00.0000002")]
    #[case::negative(-TimeDelta::seconds(90), "-00:01:30")]
    fn test_format(#[case] delta: TimeDelta, #[case] expected: &str) {
        assert_eq!(format(&delta), expected);
    }

    #[rstest]
    #[case("00:00:05", TimeDelta::seconds(5))]
    #[case("1.02:03:04", TimeDelta::days(1) + TimeDelta::seconds(2 * 3600 + 3 * 60 + 4))]
    #[case("00:00:01.5", TimeDelta::milliseconds(1_500))]
    #[case("00:00:00.0000001", TimeDelta::nanoseconds(100))]
    #[case("-1.00:00:00", -TimeDelta::days(1))]
    fn test_parse(#[case] raw: &str, #[case] expected: TimeDelta) {
        assert_eq!(parse(raw).unwrap(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::no_clock("12")]
    #[case::missing_seconds("01:02")]
    #[case::letters("aa:bb:cc")]
    #[case::long_fraction("00:00:00.12345678")]
    #[case::empty_fraction("00:00:00.")]
    fn test_parse_rejects_malformed(#[case] raw: &str) {
        assert!(matches!(parse(raw), Err(TimeSpanError::Malformed(_))));
    }

    #[test]
    fn test_parse_rejects_out_of_range_components() {
        assert!(matches!(
            parse("00:60:00"),
            Err(TimeSpanError::OutOfRange(_))
        ));
        assert!(matches!(
            parse("24:00:00"),
            Err(TimeSpanError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_tick_resolution_survives_a_round_trip() {
        let delta = TimeDelta::days(3) + TimeDelta::nanoseconds(123_456_700);
        assert_eq!(parse(&format(&delta)).unwrap(), delta);
    }
}
