use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

const APP_TIME_ZONE: Tz = chrono_tz::Asia::Tokyo;
const SERVER_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";
const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub fn now_in_app_tz() -> DateTime<Tz> {
    Utc::now().with_timezone(&APP_TIME_ZONE)
}

/// Accepts RFC 3339 or the server's `2006/1/2 15:04:05` local rendering.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Tz>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&APP_TIME_ZONE));
    }
    NaiveDateTime::parse_from_str(value, SERVER_TIMESTAMP_FORMAT)
        .ok()
        .and_then(|naive| naive.and_local_timezone(APP_TIME_ZONE).single())
}

/// `YYYY/MM/DD HH:MM` in the app time zone; unparseable input is shown as-is.
pub fn format_timestamp(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format("%Y/%m/%d %H:%M").to_string())
        .unwrap_or_else(|| value.to_string())
}

pub fn format_date(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format("%Y/%m/%d").to_string())
        .unwrap_or_else(|| value.get(..10).unwrap_or(value).to_string())
}

/// Value for an `<input type="datetime-local">`.
pub fn to_datetime_local(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format(INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

/// `2025-03-03T09:00` from a datetime-local input becomes `2025-03-03T09:00:00+09:00`.
pub fn datetime_local_to_rfc3339(value: &str) -> Option<String> {
    let naive = NaiveDateTime::parse_from_str(value.trim(), INPUT_FORMAT).ok()?;
    let local = naive.and_local_timezone(APP_TIME_ZONE).single()?;
    Some(local.format("%Y-%m-%dT%H:%M:%S%:z").to_string())
}

pub fn format_minutes(minutes: i64) -> String {
    format!("{}時間{:02}分", minutes / 60, minutes % 60)
}

/// Year and month of a server timestamp, used to filter daily records.
pub fn year_month_of(value: &str) -> Option<(i32, u32)> {
    use chrono::Datelike;
    parse_timestamp(value)
        .map(|dt| (dt.year(), dt.month()))
        .or_else(|| {
            let date = chrono::NaiveDate::parse_from_str(value.get(..10)?, "%Y-%m-%d").ok()?;
            Some((date.year(), date.month()))
        })
}
