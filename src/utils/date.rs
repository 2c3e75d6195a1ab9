use chrono::{DateTime, Datelike, NaiveDateTime, NaiveTime, TimeZone, Weekday};

/// Monday 00:00:00 of `now`'s ISO week, as a naive local datetime.
/// On a Sunday this is the Monday six days prior.
pub fn week_start<Tz: TimeZone>(now: &DateTime<Tz>) -> NaiveDateTime {
    now.date_naive()
        .week(Weekday::Mon)
        .first_day()
        .and_time(NaiveTime::MIN)
}

/// True when both instants fall on the same calendar date in `now`'s timezone.
pub fn same_day<Tz: TimeZone>(a: &DateTime<Tz>, now: &DateTime<Tz>) -> bool {
    a.date_naive() == now.date_naive()
}

/// True when both instants fall in the same calendar month and year.
pub fn same_month<Tz: TimeZone>(a: &DateTime<Tz>, now: &DateTime<Tz>) -> bool {
    a.month() == now.month() && a.year() == now.year()
}
