//! Computes when the checklist reminder should go out.
use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, TimeZone, Weekday};
use color_eyre::eyre::{OptionExt, eyre};

use crate::result::Result;

/// Hour of the day reminders are sent at unless configured otherwise.
pub const DEFAULT_REMINDER_HOUR: u32 = 10;

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns the next business day (Monday to Friday) strictly after the date
/// of `datetime`, at `hour`:00:00 in the same timezone. The input time of day
/// is irrelevant: Tuesday 04:00 still maps to Wednesday.
pub fn next_workday_at<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
    hour: u32,
) -> Result<DateTime<Tz>> {
    let time = NaiveTime::from_hms_opt(hour, 0, 0)
        .ok_or_else(|| eyre!("invalid reminder hour: {hour}"))?;

    let mut date = datetime.date_naive();

    loop {
        date = date
            .checked_add_days(Days::new(1))
            .ok_or_eyre("date out of range")?;

        if !is_weekend(date) {
            break;
        }
    }

    datetime
        .timezone()
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .ok_or_else(|| eyre!("{date} {time} does not exist in this timezone"))
}

/// Returns the next business day at 10:00 in the timezone of `datetime`.
pub fn next_workday_at_10<Tz: TimeZone>(
    datetime: &DateTime<Tz>,
) -> Result<DateTime<Tz>> {
    next_workday_at(datetime, DEFAULT_REMINDER_HOUR)
}
