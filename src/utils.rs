use crate::errors::FormatError;

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_DAY: i64 = 86_400;
const MILLIS_PER_DAY: i64 = SECONDS_PER_DAY * 1000;

// Largest instant a JavaScript Date can hold, in milliseconds.
const MAX_TIME_MILLIS: f64 = 8.64e15;

// 2^64, the first whole number of seconds a u64 cannot hold.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

fn plural(count: u64) -> &'static str {
    if count > 1 {
        "s"
    } else {
        ""
    }
}

fn format_minutes(minutes: u64) -> String {
    match minutes {
        0 => "< 1 min".to_string(),
        m => format!("{} min{}", m, plural(m)),
    }
}

fn format_hours(hours: &str, many_hours: bool, minutes: u64) -> String {
    let hours = format!("{} hour{}", hours, if many_hours { "s" } else { "" });

    match minutes {
        0 => hours,
        m => format!("{} {} min{}", hours, m, plural(m)),
    }
}

/// Renders an elapsed number of seconds as e.g. `2 hours 2 mins`, `1 min`
/// or `< 1 min`. Seconds below a full minute are dropped.
pub fn format_time(seconds: u64) -> String {
    let hours = seconds / SECONDS_PER_HOUR;
    let minutes = (seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;

    if hours == 0 {
        return format_minutes(minutes);
    }

    format_hours(&hours.to_string(), hours > 1, minutes)
}

/// Checked variant of [`format_time`] for raw numeric input.
///
/// Values past `u64` range are split into hours and minutes in `f64`.
pub fn try_format_time(seconds: f64) -> Result<String, FormatError> {
    if !seconds.is_finite() {
        return Err(FormatError::NonFinite(seconds));
    }
    if seconds < 0.0 {
        return Err(FormatError::Negative(seconds));
    }

    let seconds = seconds.floor();
    if seconds < U64_LIMIT {
        return Ok(format_time(seconds as u64));
    }

    let hours = (seconds / SECONDS_PER_HOUR as f64).floor();
    let minutes = ((seconds % SECONDS_PER_HOUR as f64) / SECONDS_PER_MINUTE as f64).floor();

    Ok(format_hours(&hours.to_string(), true, minutes as u64))
}

// `second_of_day` must be below 86 400.
fn clock(second_of_day: i64) -> String {
    format!(
        "{:02}:{:02}",
        second_of_day / SECONDS_PER_HOUR as i64,
        second_of_day % SECONDS_PER_HOUR as i64 / SECONDS_PER_MINUTE as i64
    )
}

/// Formats epoch seconds as the zero-padded UTC wall clock `HH:MM`.
///
/// The input is always seconds, never milliseconds.
pub fn utc_to_hhmm(utc: i64) -> String {
    clock(utc.rem_euclid(SECONDS_PER_DAY))
}

/// Checked variant of [`utc_to_hhmm`] accepting fractional epoch seconds.
pub fn try_utc_to_hhmm(utc: f64) -> Result<String, FormatError> {
    if !utc.is_finite() {
        return Err(FormatError::NonFinite(utc));
    }

    let millis = (utc * 1000.0).trunc();
    if millis.abs() > MAX_TIME_MILLIS {
        return Err(FormatError::OutOfRange(utc));
    }

    let millis_of_day = (millis as i64).rem_euclid(MILLIS_PER_DAY);

    Ok(clock(millis_of_day / 1000))
}
